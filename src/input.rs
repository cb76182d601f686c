//! Where chat text comes from and where rendered messages go.
//!
//! A terminal, a speech recogniser or a test fixture can all act as a
//! `TextInputSource`; anything that can display markup can be a
//! `MessageSink`.

use std::io::{BufRead, Write};

use crate::buffer::{ChatMessage, TYPING_TEXT};
use crate::error::ChatError;
use crate::session::{SessionInfo, PLATFORMS};

/// Supplies one piece of user text at a time.
pub trait TextInputSource {
    /// Next text, or `None` once the source is exhausted.
    fn next_text(&mut self) -> Result<Option<String>, ChatError>;
}

/// Displays messages as they are added to the transcript.
pub trait MessageSink {
    fn deliver(&mut self, message: &ChatMessage) -> Result<(), ChatError>;

    /// Show or hide the typing indicator.
    fn typing(&mut self, _shown: bool) -> Result<(), ChatError> {
        Ok(())
    }

    /// Out-of-band text for the user (command help, usage).
    fn notice(&mut self, _text: &str) -> Result<(), ChatError> {
        Ok(())
    }

    /// Show the session info after it may have changed.
    fn session(&mut self, _session: &SessionInfo) -> Result<(), ChatError> {
        Ok(())
    }
}

/// Reads one line per call from any buffered reader.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> TextInputSource for LineSource<R> {
    fn next_text(&mut self) -> Result<Option<String>, ChatError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Writes each message as an HTML line; the indicator and notices go to a
/// second writer.
pub struct HtmlSink<W, E> {
    out: W,
    status: E,
}

impl<W: Write, E: Write> HtmlSink<W, E> {
    pub fn new(out: W, status: E) -> Self {
        Self { out, status }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.status)
    }
}

impl<W: Write, E: Write> MessageSink for HtmlSink<W, E> {
    fn deliver(&mut self, message: &ChatMessage) -> Result<(), ChatError> {
        writeln!(self.out, "{}", message.to_html())?;
        self.out.flush()?;
        Ok(())
    }

    fn typing(&mut self, shown: bool) -> Result<(), ChatError> {
        if shown {
            writeln!(self.status, "{}", TYPING_TEXT)?;
        }
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<(), ChatError> {
        writeln!(self.status, "{}", text)?;
        Ok(())
    }

    fn session(&mut self, session: &SessionInfo) -> Result<(), ChatError> {
        writeln!(
            self.status,
            "Platform: {} | Focus area: {}",
            session.platform_label().as_deref().unwrap_or("-"),
            session.focus_area_label().as_deref().unwrap_or("-")
        )?;
        // Active platform in brackets
        let bar: Vec<String> = PLATFORMS
            .iter()
            .map(|p| {
                if session.is_active_platform(p) {
                    format!("[{}]", p)
                } else {
                    p.to_string()
                }
            })
            .collect();
        writeln!(self.status, "{}", bar.join(" "))?;
        self.status.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Role;
    use crate::render::MessageRenderer;
    use std::io::Cursor;

    #[test]
    fn test_line_source() {
        let mut source = LineSource::new(Cursor::new("hello\r\nsecond line\n\nlast"));
        assert_eq!(source.next_text().unwrap().as_deref(), Some("hello"));
        assert_eq!(source.next_text().unwrap().as_deref(), Some("second line"));
        assert_eq!(source.next_text().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_text().unwrap().as_deref(), Some("last"));
        assert_eq!(source.next_text().unwrap(), None);
    }

    #[test]
    fn test_html_sink() {
        let renderer = MessageRenderer::default();
        let mut sink = HtmlSink::new(Vec::new(), Vec::new());
        let msg = ChatMessage::new(Role::Buddy, "- tip".into(), &renderer);

        sink.deliver(&msg).unwrap();
        sink.typing(true).unwrap();
        sink.typing(false).unwrap();
        sink.notice("Usage: /help").unwrap();

        let (out, status) = sink.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<div class=\"message buddy-message\"><div class=\"message-content\">• tip</div></div>\n"
        );
        assert_eq!(
            String::from_utf8(status).unwrap(),
            format!("{}\nUsage: /help\n", TYPING_TEXT)
        );
    }

    #[test]
    fn test_html_sink_session() {
        let mut sink = HtmlSink::new(Vec::new(), Vec::new());
        let mut session = SessionInfo::new();
        sink.session(&session).unwrap();

        session.update(Some("youtube"), Some("growth"));
        sink.session(&session).unwrap();

        let (out, status) = sink.into_inner();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(status).unwrap(),
            "Platform: - | Focus area: -\n\
             instagram youtube facebook\n\
             Platform: Youtube | Focus area: Growth\n\
             instagram [youtube] facebook\n"
        );
    }
}
