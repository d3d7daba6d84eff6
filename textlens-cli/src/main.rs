//! textlens CLI
//!
//! Word counts, character counts, top words, and VADER sentiment for a text
//! file or pasted text.
//!
//! # Commands
//!
//! - (none) / `interactive`: guided menu, file or pasted text
//! - `file <PATH>`: analyze a file
//! - `text <TEXT|->`: analyze literal text or standard input
//! - `config`: print the resolved configuration
//!
//! Exit codes: 0 success, 1 input error, 2 config error, 3 lexicon error
//! (only with `--require-sentiment`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use textlens_analysis::Decoding;
use textlens_cli::commands::{self, analyze, Context};
use textlens_cli::error::CliExitCode;
use textlens_core::config::{CliOverrides, OutputFormat};
use textlens_core::errors::TextlensErrorCode;
use textlens_core::tracing::init_tracing;
use textlens_core::TextlensConfig;

/// Text analyzer: counts, top words, and sentiment
#[derive(Parser)]
#[command(name = "textlens")]
#[command(version)]
#[command(about = "Word counts, top words, and VADER sentiment for any text")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format: panels, window, or json
    #[arg(long, global = true, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Never download the lexicon; use the explicit path or the cache only
    #[arg(long, global = true)]
    offline: bool,

    /// Path to a local vader_lexicon.txt
    #[arg(long, global = true, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Directory containing textlens.toml (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Replace invalid UTF-8 instead of rejecting the file
    #[arg(long, global = true)]
    lossy: bool,

    /// Fail with exit code 3 when the lexicon cannot be obtained
    #[arg(long, global = true)]
    require_sentiment: bool,

    /// Characters shown in the text preview
    #[arg(long, global = true, value_name = "N")]
    preview_chars: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guided session: choose a file or paste text (default)
    Interactive,
    /// Analyze a UTF-8 text file
    File(analyze::FileArgs),
    /// Analyze text given on the command line, or `-` for standard input
    Text(analyze::TextArgs),
    /// Print the resolved configuration as TOML
    Config,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let root = cli
        .config
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let overrides = CliOverrides {
        lexicon_path: cli.lexicon.clone(),
        offline: cli.offline.then_some(true),
        format: cli.format,
        preview_chars: cli.preview_chars,
    };

    let config = match TextlensConfig::load(&root, Some(&overrides)) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(code = err.error_code(), "{err}");
            eprintln!("{}", err.coded_string());
            return CliExitCode::Config.code();
        }
    };

    let ctx = Context {
        config,
        decoding: if cli.lossy {
            Decoding::Lossy
        } else {
            Decoding::Strict
        },
        require_sentiment: cli.require_sentiment,
    };

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => commands::interactive::handle_interactive(&ctx),
        Commands::File(args) => analyze::handle_file(args, &ctx),
        Commands::Text(args) => analyze::handle_text(args, &ctx),
        Commands::Config => commands::config::handle_config(&ctx),
    }
}
