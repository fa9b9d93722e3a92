use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use linequill::config::Config;
use linequill::editor::buffer::Buffer;
use linequill::editor::state::{DisplayFlags, EditorState};
use linequill::input::InputHandler;

/// LineQuill - A line-oriented modal text editor
#[derive(Parser)]
#[command(name = "linequill")]
#[command(version)]
#[command(about = "A line-oriented modal text editor driven by vim-style commands", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/linequill/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with the row cursor highlighted
    #[arg(long)]
    row_cursor: bool,

    /// Start with the line cursor marker shown
    #[arg(long)]
    line_cursor: bool,

    /// Prompt printed before each command
    #[arg(long)]
    prompt: Option<String>,

    /// Maximum number of undo entries to keep (0 = unlimited)
    #[arg(long)]
    undo_limit: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs a stderr subscriber so logs never mix with rendered output.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    // CLI flags override config settings
    let prompt = cli.prompt.unwrap_or(config.prompt);
    let undo_limit = cli.undo_limit.unwrap_or(config.undo_limit);
    let flags = DisplayFlags {
        row_cursor: cli.row_cursor || config.show_row_cursor,
        line_cursor: cli.line_cursor || config.show_line_cursor,
    };

    let mut state = EditorState::with_undo_limit(Buffer::new(), undo_limit);
    state.set_display_flags(flags);

    let mut input_handler = InputHandler::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    input_handler.run(&mut state, &mut out, &prompt)
}
