use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "bfi",
    about = "Score Big Five personality inventories and build LLM prompts from the results",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/bfi/logs/bfi.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to bfi.yaml config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a submission's answers come from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct AnswerSource {
    /// Answers in item order, separated by commas or spaces (e.g. "7,1,4,...")
    #[arg(long, short = 'a')]
    pub answers: Option<String>,

    /// YAML or JSON file holding the answers as a list
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available inventories
    List {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show an inventory's scale, thresholds, and items
    Show {
        /// Inventory id (defaults to config default_inventory)
        inventory: Option<String>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Score a set of answers
    Score {
        /// Inventory id (defaults to config default_inventory)
        inventory: Option<String>,

        #[command(flatten)]
        source: AnswerSource,

        /// Also produce the LLM prompt
        #[arg(long)]
        prompt: bool,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Answer an inventory interactively, then score it
    Take {
        /// Inventory id (defaults to config default_inventory)
        inventory: Option<String>,

        /// Also produce the LLM prompt
        #[arg(long)]
        prompt: bool,

        /// Output format for the results (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print only the LLM prompt for a set of answers
    Prompt {
        /// Inventory id (defaults to config default_inventory)
        inventory: Option<String>,

        #[command(flatten)]
        source: AnswerSource,
    },

    /// Check inventory definitions for completeness
    Validate {
        /// Inventory id, or "all"
        #[arg(default_value = "all")]
        inventory: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// New value
        value: String,
    },
}
