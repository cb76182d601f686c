//! buddy-chat library.
//!
//! `render` is the message renderer; the other modules are the chat glue
//! around it and are re-exported for testing and extension.

pub mod app;
pub mod backend;
pub mod buffer;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod input_state;
pub mod logging;
pub mod protocol;
pub mod render;
pub mod session;
pub mod validation;


pub use render::{render_message, KeywordSet, MessageRenderer, RenderedMarkup};
