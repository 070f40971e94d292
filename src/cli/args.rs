use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtranslate")]
#[command(about = "Translate text with the Google Translate API")]
#[command(version)]
pub struct Args {
    /// Texts to translate as one batch (reads --file or stdin if omitted)
    pub texts: Vec<String>,

    /// Read the text to translate from a file
    #[arg(long, value_name = "PATH", conflicts_with = "texts")]
    pub file: Option<String>,

    /// Target language code (e.g. pt, en, zh-tw)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Source language code (detected by the API when omitted)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Prefix each translation with its detected source language
    #[arg(short = 'd', long)]
    pub show_detected: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// API access overrides shared by every command that talks to the API.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// API key (overrides environment and config file)
    #[arg(short = 'k', long, global = true)]
    pub key: Option<String>,

    /// API base URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List languages supported by the API
    Languages {
        /// Show language names in this language (e.g. pt-br)
        #[arg(short = 't', long)]
        target: Option<String>,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
