//! Chat command handling (/platform, /clear, /help, /quit).

use crate::validation;

/// What the caller should do with a command line
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Send this text as if the user had typed it
    Send(String),
    /// Clear the transcript
    Clear,
    /// Show a notice to the user (help, usage, errors)
    Notice(String),
    /// End the chat
    Quit,
}

/// The prompt behind a platform quick button
pub fn platform_prompt(platform: &str) -> String {
    format!("Tell me everything about {} social media strategy", platform)
}

/// Handle user commands starting with '/'.
/// Returns None if the input is not a command.
pub fn handle_user_command(input: &str) -> Option<CommandOutcome> {
    let s = input.trim();
    let cmdline = s.strip_prefix('/')?.trim();

    let mut parts = cmdline.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();

    let outcome = match cmd.as_str() {
        "platform" | "p" => match parts.next() {
            Some(name) => match validation::validate_platform(name) {
                Ok(platform) => CommandOutcome::Send(platform_prompt(&platform)),
                Err(e) => CommandOutcome::Notice(e),
            },
            None => CommandOutcome::Notice("Usage: /platform <instagram|youtube|facebook>".into()),
        },
        "clear" => CommandOutcome::Clear,
        "quit" | "exit" => CommandOutcome::Quit,
        "help" => CommandOutcome::Notice(
            "Supported commands: /platform <name>, /clear, /help, /quit".into(),
        ),
        unknown => CommandOutcome::Notice(format!("Unknown command: /{}", unknown)),
    };
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_command() {
        assert_eq!(handle_user_command("hello"), None);
        assert_eq!(handle_user_command("a /b"), None);
    }

    #[test]
    fn test_platform_prompt() {
        assert_eq!(
            handle_user_command("/platform Instagram"),
            Some(CommandOutcome::Send(
                "Tell me everything about instagram social media strategy".into()
            ))
        );
        assert_eq!(
            handle_user_command("  /p youtube"),
            Some(CommandOutcome::Send(platform_prompt("youtube")))
        );
    }

    #[test]
    fn test_platform_errors() {
        assert!(matches!(
            handle_user_command("/platform"),
            Some(CommandOutcome::Notice(n)) if n.starts_with("Usage")
        ));
        assert!(matches!(
            handle_user_command("/platform myspace"),
            Some(CommandOutcome::Notice(n)) if n.contains("myspace")
        ));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(handle_user_command("/clear"), Some(CommandOutcome::Clear));
        assert_eq!(handle_user_command("/QUIT"), Some(CommandOutcome::Quit));
        assert_eq!(handle_user_command("/exit now"), Some(CommandOutcome::Quit));
        assert_eq!(
            handle_user_command("/dance"),
            Some(CommandOutcome::Notice("Unknown command: /dance".into()))
        );
        assert_eq!(
            handle_user_command("/"),
            Some(CommandOutcome::Notice("Unknown command: /".into()))
        );
    }
}
