//! Messages between the UI thread and the backend, and the `/api/chat` JSON bodies.

use serde::{Deserialize, Serialize};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Post a user message to the chat endpoint
    SendMessage(String),
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The endpoint answered
    Reply(ChatReply),
    /// The request failed (transport, status or decoding)
    Error(String),
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub focus_area: Option<String>,
}
