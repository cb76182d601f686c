//! The chat widget's glue: input in, transcript and session info out.

use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use tracing::{debug, warn};

use crate::backend;
use crate::buffer::{ChatMessage, Role, Transcript};
use crate::commands::{self, CommandOutcome};
use crate::config::Settings;
use crate::error::ChatError;
use crate::events::{self, APOLOGY_TEXT};
use crate::input::{MessageSink, TextInputSource};
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::render::MessageRenderer;
use crate::session::SessionInfo;
use crate::validation;

/// What a call to [`ChatApp::submit`] did
#[derive(Debug, Clone)]
pub enum Submitted {
    /// Blank input, nothing happened
    Ignored,
    /// Messages added to the transcript, in order
    Messages(Vec<ChatMessage>),
    /// Text for the user that is not part of the transcript
    Notice(String),
    Cleared,
    Quit,
}

pub struct ChatApp {
    pub transcript: Transcript,
    pub session: SessionInfo,
    pub input: InputState,
    renderer: MessageRenderer,
    action_tx: Sender<BackendAction>,
    event_rx: Receiver<GuiEvent>,
    backend: Option<JoinHandle<()>>,
    /// Requests sent and not yet answered
    pending: usize,
}

impl ChatApp {
    /// Validate `settings` and start the backend thread
    pub fn new(settings: &Settings) -> Result<Self, ChatError> {
        settings.validate()?;
        let renderer = settings.renderer()?;
        let handle = backend::spawn_backend(settings.endpoint.clone(), settings.request_timeout());

        let mut app = Self::with_channels(renderer, handle.action_tx, handle.event_rx);
        app.backend = Some(handle.thread);
        Ok(app)
    }

    /// Build on existing channels; the caller owns the other ends
    pub fn with_channels(
        renderer: MessageRenderer,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
    ) -> Self {
        Self {
            transcript: Transcript::new(),
            session: SessionInfo::new(),
            input: InputState::new(),
            renderer,
            action_tx,
            event_rx,
            backend: None,
            pending: 0,
        }
    }

    pub fn renderer(&self) -> &MessageRenderer {
        &self.renderer
    }

    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }

    /// Handle one line of user input
    pub fn submit(&mut self, raw: &str) -> Submitted {
        let text = validation::sanitize_message(raw);
        if let Err(e) = validation::validate_message(&text) {
            debug!("ignoring input: {}", e);
            return Submitted::Ignored;
        }
        self.input.push_history(&text);

        match commands::handle_user_command(&text) {
            None => Submitted::Messages(self.send(text)),
            Some(CommandOutcome::Send(prompt)) => Submitted::Messages(self.send(prompt)),
            Some(CommandOutcome::Clear) => {
                self.transcript.clear();
                self.transcript.set_typing(self.is_waiting());
                Submitted::Cleared
            }
            Some(CommandOutcome::Notice(text)) => Submitted::Notice(text),
            Some(CommandOutcome::Quit) => Submitted::Quit,
        }
    }

    /// Add a user message and hand it to the backend
    fn send(&mut self, text: String) -> Vec<ChatMessage> {
        let mut added = vec![self
            .transcript
            .add_message(Role::User, text.clone(), &self.renderer)
            .clone()];

        if self.action_tx.send(BackendAction::SendMessage(text)).is_err() {
            warn!("backend is not running");
            added.push(
                self.transcript
                    .add_message(Role::Buddy, APOLOGY_TEXT, &self.renderer)
                    .clone(),
            );
        } else {
            self.pending += 1;
            self.transcript.set_typing(true);
        }
        added
    }

    /// Apply one backend event and return the message it added
    pub fn handle_event(&mut self, event: GuiEvent) -> ChatMessage {
        self.pending = self.pending.saturating_sub(1);
        self.transcript.set_typing(self.is_waiting());
        events::apply_event(event, &mut self.transcript, &mut self.session, &self.renderer)
    }

    /// Drain all pending backend events without blocking
    pub fn process_events(&mut self) -> Vec<ChatMessage> {
        let mut added = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            added.push(self.handle_event(event));
        }
        added
    }

    /// Block until the next backend event arrives or `timeout` passes
    pub fn wait_for_reply(&mut self, timeout: Duration) -> Result<Option<ChatMessage>, ChatError> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(self.handle_event(event))),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(ChatError::BackendClosed),
        }
    }

    /// Feed lines from `source` to the chat until it runs out or the user
    /// quits, showing everything on `sink`.
    ///
    /// Each message waits up to `wait` for its reply. A reply that comes in
    /// later is shown before the next line is handled.
    pub fn run(
        &mut self,
        source: &mut dyn TextInputSource,
        sink: &mut dyn MessageSink,
        wait: Duration,
    ) -> Result<(), ChatError> {
        while let Some(line) = source.next_text()? {
            self.show_events(sink)?;

            match self.submit(&line) {
                Submitted::Ignored => continue,
                Submitted::Quit => break,
                Submitted::Cleared => sink.notice("Transcript cleared")?,
                Submitted::Notice(text) => sink.notice(&text)?,
                Submitted::Messages(messages) => {
                    for message in &messages {
                        sink.deliver(message)?;
                    }
                    sink.typing(self.is_waiting())?;
                    while self.is_waiting() {
                        match self.wait_for_reply(wait)? {
                            Some(reply) => {
                                sink.deliver(&reply)?;
                                sink.session(&self.session)?;
                            }
                            None => {
                                debug!(pending = self.pending, "no reply within {:?}", wait);
                                break;
                            }
                        }
                    }
                    sink.typing(self.is_waiting())?;
                }
            }
        }
        self.show_events(sink)
    }

    /// Deliver replies that arrived since the last wait
    fn show_events(&mut self, sink: &mut dyn MessageSink) -> Result<(), ChatError> {
        let added = self.process_events();
        for message in &added {
            sink.deliver(message)?;
        }
        if !added.is_empty() {
            sink.session(&self.session)?;
        }
        Ok(())
    }

    /// Stop the backend thread and wait for it
    pub fn shutdown(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
        if let Some(handle) = self.backend.take() {
            if handle.join().is_err() {
                warn!("backend thread panicked");
            }
        }
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
    }
}
