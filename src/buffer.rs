//! The chat transcript: rendered messages and the typing indicator.

use chrono::Local;

use crate::render::{MessageRenderer, RenderedMarkup};

/// Maximum messages to keep in the transcript before trimming
const MAX_TRANSCRIPT_MESSAGES: usize = 2000;
/// Number of oldest messages to remove when trimming
const TRANSCRIPT_TRIM_COUNT: usize = 500;

/// Shown in place of a reply while the request is in flight
pub const TYPING_TEXT: &str = "BUDDY is searching for information...";

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Buddy,
}

impl Role {
    /// CSS class of the message container
    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user-message",
            Role::Buddy => "buddy-message",
        }
    }
}

/// A message with timestamp, author and its rendered markup
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub timestamp: String,
    pub role: Role,
    pub text: String,
    pub markup: RenderedMarkup,
}

impl ChatMessage {
    pub fn new(role: Role, text: String, renderer: &MessageRenderer) -> Self {
        let markup = renderer.render(&text);
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            role,
            text,
            markup,
        }
    }

    /// The message as it sits in the chat panel
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="message {}"><div class="message-content">{}</div></div>"#,
            self.role.css_class(),
            self.markup
        )
    }
}

/// The ordered list of messages shown in the chat panel
#[derive(Default, Clone, Debug)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
    /// Whether the typing indicator is showing
    pub typing: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `text`, append it and return the stored message
    pub fn add_message(
        &mut self,
        role: Role,
        text: impl Into<String>,
        renderer: &MessageRenderer,
    ) -> &ChatMessage {
        self.messages
            .push(ChatMessage::new(role, text.into(), renderer));
        // Trim old messages if the transcript gets too large
        if self.messages.len() > MAX_TRANSCRIPT_MESSAGES {
            self.messages.drain(0..TRANSCRIPT_TRIM_COUNT);
        }
        &self.messages[self.messages.len() - 1]
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    /// Markup of the typing indicator, if it is showing
    pub fn typing_markup(&self) -> Option<String> {
        self.typing.then(|| {
            format!(
                r#"<div class="message buddy-message typing"><div class="message-content"><p>{}</p></div></div>"#,
                TYPING_TEXT
            )
        })
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.typing = false;
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// The whole chat panel, typing indicator last
    pub fn to_html(&self) -> String {
        let mut html: String = self
            .messages
            .iter()
            .map(|m| m.to_html() + "\n")
            .collect();
        if let Some(typing) = self.typing_markup() {
            html.push_str(&typing);
            html.push('\n');
        }
        html
    }
}
