//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use toolcall_application::{ChatSession, SessionError, SessionStep};

/// Errors that stop the REPL
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Line editor error: {0}")]
    Editor(#[from] ReadlineError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    config: ReplConfig,
    host: Option<String>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            config: ReplConfig::default(),
            host: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Model runtime address shown in the banner
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Run the interactive REPL until exit, EOF, or a fatal error
    pub async fn run(&mut self) -> Result<(), ReplError> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let result = self.read_loop(&mut rl).await;

        if let Some(path) = &self.config.history_file
            && let Err(e) = rl.save_history(path)
        {
            tracing::warn!("Could not save history to {}: {}", path.display(), e);
        }

        result
    }

    async fn read_loop(&mut self, rl: &mut DefaultEditor) -> Result<(), ReplError> {
        loop {
            let prompt = format!("{} ", format!("{}>", self.session.model()).green());
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.trim());
                    }

                    if self.session.handle_line(&line).await? == SessionStep::Ended {
                        println!("Bye!");
                        return Ok(());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Ollama Toolcall - Chat Mode        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{} {}", "Model:".cyan().bold(), self.session.model());
        if let Some(host) = &self.host {
            println!("{} {}", "Host:".cyan().bold(), host);
        }
        println!(
            "{} {}",
            "Tools:".cyan().bold(),
            self.session.tool_names().join(", ")
        );
        println!();
        println!("Type /help for commands, exit to quit.");
        println!();
    }
}
