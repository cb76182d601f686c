//! Backend event processing (replies and request failures).

use tracing::error;

use crate::buffer::{ChatMessage, Role, Transcript};
use crate::protocol::GuiEvent;
use crate::render::MessageRenderer;
use crate::session::SessionInfo;

/// Shown in place of a reply when the request failed
pub const APOLOGY_TEXT: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Apply one backend event and return the buddy message it produced.
pub fn apply_event(
    event: GuiEvent,
    transcript: &mut Transcript,
    session: &mut SessionInfo,
    renderer: &MessageRenderer,
) -> ChatMessage {
    match event {
        GuiEvent::Reply(reply) => {
            session.update(reply.platform.as_deref(), reply.focus_area.as_deref());
            transcript
                .add_message(Role::Buddy, reply.response, renderer)
                .clone()
        }
        GuiEvent::Error(msg) => {
            error!("Error sending message: {}", msg);
            transcript
                .add_message(Role::Buddy, APOLOGY_TEXT, renderer)
                .clone()
        }
    }
}
