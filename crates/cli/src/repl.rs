//! Line parsing for the interactive `chat` command.

use faqchat::Language;

pub const HELP: &str = "Commands: /lang <ja|en>, /clear, /help, /quit. Anything else is sent as a question.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Ask(String),
    SetLanguage(Language),
    Clear,
    Help,
    Quit,
    /// A blank line.
    Nothing,
    /// A slash command that could not be understood, with the reason.
    Invalid(String),
}

pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Nothing;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ReplCommand::Ask(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "exit"), None) => ReplCommand::Quit,
        (Some("clear"), None) => ReplCommand::Clear,
        (Some("help"), None) => ReplCommand::Help,
        (Some("lang"), Some(code)) => match code.parse::<Language>() {
            Ok(language) => ReplCommand::SetLanguage(language),
            Err(e) => ReplCommand::Invalid(e),
        },
        (Some("lang"), None) => ReplCommand::Invalid("Usage: /lang <ja|en>".to_string()),
        _ => ReplCommand::Invalid(format!("Unknown command '/{command}'. {HELP}")),
    }
}
