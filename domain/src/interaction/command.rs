//! Session command parsing and the `/tool` argument grammar.

use crate::tool::entities::{CallDescriptor, CallParameter};
use thiserror::Error;

/// A malformed command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: /tool <ToolName> key=\"value\" ...")]
    MissingToolName,

    #[error("Expected key=value, found '{0}'")]
    ExpectedKeyValue(String),

    #[error("Unterminated quoted value for '{0}'")]
    UnterminatedQuote(String),
}

/// Locally handled session commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Help,
    Tools,
    Clear,
    /// `/model` reports the active model; `/model <name>` switches it
    Model(Option<String>),
    /// Explicit invocation that bypasses the model
    Tool(CallDescriptor),
    Exit,
    Unknown(String),
}

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    Blank,
    Command(SessionCommand),
    Invalid(CommandError),
    Prompt(String),
}

/// Classify a raw input line.
pub fn classify_input(line: &str) -> InputKind {
    let line = line.trim();

    if line.is_empty() {
        return InputKind::Blank;
    }

    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        return InputKind::Command(SessionCommand::Exit);
    }

    if !line.starts_with('/') {
        return InputKind::Prompt(line.to_string());
    }

    let (command, args) = match line.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (line, ""),
    };

    let command = match command {
        "/help" | "/h" | "/?" => SessionCommand::Help,
        "/tools" => SessionCommand::Tools,
        "/clear" => SessionCommand::Clear,
        "/quit" | "/exit" | "/q" => SessionCommand::Exit,
        "/model" => SessionCommand::Model(args.split_whitespace().next().map(str::to_string)),
        "/tool" => match parse_tool_command(args) {
            Ok(call) => SessionCommand::Tool(call),
            Err(e) => return InputKind::Invalid(e),
        },
        other => SessionCommand::Unknown(other.to_string()),
    };

    InputKind::Command(command)
}

fn parse_tool_command(args: &str) -> Result<CallDescriptor, CommandError> {
    let (name, rest) = match args.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (args, ""),
    };

    if name.is_empty() {
        return Err(CommandError::MissingToolName);
    }

    Ok(CallDescriptor {
        function_name: name.to_string(),
        parameters: parse_tool_arguments(rest)?,
    })
}

/// Parse `key=value` tokens.
///
/// A value is either a double-quoted string (may contain spaces; `\"` and `\\`
/// are unescaped) or an unquoted run of non-whitespace characters.
pub fn parse_tool_arguments(input: &str) -> Result<Vec<CallParameter>, CommandError> {
    let mut params = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        while let Some(c) = chars.next_if(|c| *c != '=' && !c.is_whitespace()) {
            key.push(c);
        }

        if key.is_empty() || chars.next_if_eq(&'=').is_none() {
            let mut token = key;
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                token.push(c);
            }
            return Err(CommandError::ExpectedKeyValue(token));
        }

        let mut value = String::new();
        if chars.next_if_eq(&'"').is_some() {
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '"' => {
                        closed = true;
                        break;
                    }
                    '\\' => match chars.next_if(|c| *c == '"' || *c == '\\') {
                        Some(escaped) => value.push(escaped),
                        None => value.push('\\'),
                    },
                    _ => value.push(c),
                }
            }
            if !closed {
                return Err(CommandError::UnterminatedQuote(key));
            }
        } else {
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                value.push(c);
            }
        }

        params.push(CallParameter::new(key, value));
    }

    Ok(params)
}
