//! Slash command parsing for the chat loop.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    /// Reprint the conversation so far.
    History,
    Exit,
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/history" => Some(ChatCommand::History),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Help text listing all available commands.
pub fn help_text() -> String {
    [
        format!("  {}", style("Available commands:").bold()),
        String::new(),
        format!("  {}     {}", style("/help").cyan(), "Show this help message"),
        format!("  {}  {}", style("/history").cyan(), "Show the conversation so far"),
        format!("  {}     {}", style("/quit").cyan(), "End the chat session"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("  /Q  "), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_history() {
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/remember x"), Some(ChatCommand::Unknown("/remember".to_string())));
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse("what is your email?"), None);
        assert_eq!(parse(""), None);
    }
}
