//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for ollama-toolcall
#[derive(Parser, Debug)]
#[command(name = "ollama-toolcall")]
#[command(author, version, about = "Tool calling for local Ollama models")]
#[command(long_about = r#"
Ollama Toolcall lets a local model call tools (weather, reverse geocoding,
web search) by emitting a JSON call descriptor.

Two modes:
1. One-shot: the prompt is answered with exactly one tool call
2. Chat (--chat): streamed conversation; the model may embed a call
   between <<<FUNCTION_CALL>>> and <<<END_FUNCTION_CALL>>>

Configuration files are loaded from (in priority order):
1. TOOLCALL_* environment variables
2. --config <path>     Explicit config file
3. ./toolcall.toml     Project-level config
4. ~/.config/ollama-toolcall/config.toml   Global config

Example:
  ollama-toolcall "What is the weather in London?"
  ollama-toolcall -m qwen2.5 --mock "What city is at 48.85, 2.35?"
  ollama-toolcall --chat
"#)]
pub struct Cli {
    /// The prompt to answer with a single tool call (not required in chat mode)
    pub prompt: Option<String>,

    /// Model to use (overrides the configured model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// List the available tools and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Use canned API responses instead of live services
    #[arg(long)]
    pub mock: bool,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_prompt() {
        let cli = Cli::parse_from([
            "ollama-toolcall",
            "-m",
            "qwen2.5",
            "-vv",
            "--mock",
            "What is the weather in London?",
        ]);

        assert_eq!(cli.prompt.as_deref(), Some("What is the weather in London?"));
        assert_eq!(cli.model.as_deref(), Some("qwen2.5"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.mock);
        assert!(!cli.chat);
    }

    #[test]
    fn test_chat_without_prompt() {
        let cli = Cli::parse_from(["ollama-toolcall", "--chat", "--no-config"]);
        assert!(cli.chat);
        assert!(cli.no_config);
        assert!(cli.prompt.is_none());
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::parse_from([
            "ollama-toolcall",
            "--config",
            "custom.toml",
            "--show-config",
            "--list-tools",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.show_config);
        assert!(cli.list_tools);
    }
}
