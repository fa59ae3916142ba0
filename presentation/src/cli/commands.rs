//! CLI command definitions

use battle_domain::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for search-battle
#[derive(Parser, Debug)]
#[command(name = "search-battle")]
#[command(author, version, about = "Ask OpenAI and Perplexity the same question, side by side")]
#[command(long_about = r#"
search-battle sends one question to two chat APIs at the same time and shows
both answers next to each other. Each provider keeps its own conversation, so
follow-up questions build on that provider's earlier replies.

API keys are read from (highest priority first):
1. OPENAI_API_KEY / PERPLEXITY_API_KEY environment variables
2. The key file written by --set-keys (see --show-config for its location)

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./search-battle.toml       Project-level config
3. ~/.config/search-battle/config.toml   Global config

Example:
  search-battle "What changed in the latest Rust release?"
  search-battle -o stacked "Best hiking trails near Kyoto"
  search-battle --chat
"#)]
pub struct Cli {
    /// The question to ask both providers (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Enter and save both API keys, then exit
    #[arg(long)]
    pub set_keys: bool,

    /// Output format: columns, stacked or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_question() {
        let cli = Cli::try_parse_from(["search-battle", "What is 2+2?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("What is 2+2?"));
        assert!(!cli.chat);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_output_format_and_verbosity() {
        let cli = Cli::try_parse_from(["search-battle", "-o", "stacked", "-vv", "q"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Stacked));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["search-battle", "-o", "table", "q"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "search-battle",
            "--chat",
            "--quiet",
            "--log-conversation",
            "battle.jsonl",
        ])
        .unwrap();
        assert!(cli.chat);
        assert!(cli.quiet);
        assert_eq!(cli.log_conversation, Some(PathBuf::from("battle.jsonl")));
    }
}
