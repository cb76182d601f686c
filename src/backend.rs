//! Network backend: posts chat messages to the endpoint on its own thread.
//!
//! The UI side talks to it through two crossbeam channels, so it never
//! blocks on the network.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tracing::{debug, error};

use crate::error::ChatError;
use crate::protocol::{BackendAction, ChatReply, ChatRequest, GuiEvent};

/// Idle wait between polls of the action channel
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Handles to a running backend thread
pub struct BackendHandle {
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,
    pub thread: JoinHandle<()>,
}

/// Start the backend thread for `endpoint`
pub fn spawn_backend(endpoint: String, request_timeout: Duration) -> BackendHandle {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();

    let thread = thread::spawn(move || {
        run_backend(endpoint, request_timeout, action_rx, event_tx);
    });

    BackendHandle {
        action_tx,
        event_rx,
        thread,
    }
}

pub fn run_backend(
    endpoint: String,
    request_timeout: Duration,
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    let client = match reqwest::Client::builder().timeout(request_timeout).build() {
        Ok(client) => client,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create HTTP client: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        loop {
            match action_rx.try_recv() {
                Ok(BackendAction::SendMessage(text)) => {
                    let event = match post_message(&client, &endpoint, &text).await {
                        Ok(reply) => GuiEvent::Reply(reply),
                        Err(e) => {
                            error!(error = %e, "chat request failed");
                            GuiEvent::Error(e.to_string())
                        }
                    };
                    if event_tx.send(event).is_err() {
                        // UI is gone
                        break;
                    }
                }
                Ok(BackendAction::Shutdown) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => tokio::time::sleep(POLL_INTERVAL).await,
            }
        }
        debug!("backend loop stopped");
    });
}

/// Post one message and decode the reply
pub async fn post_message(
    client: &reqwest::Client,
    endpoint: &str,
    text: &str,
) -> Result<ChatReply, ChatError> {
    debug!(%endpoint, len = text.len(), "sending chat request");

    let resp = client
        .post(endpoint)
        .json(&ChatRequest {
            message: text.to_string(),
        })
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ChatError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(resp.json::<ChatReply>().await?)
}
