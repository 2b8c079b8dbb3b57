//! grok-cache CLI application entry point
//!
//! Stores short named text statements under a section and a key, and copies
//! them to the clipboard on demand.
//!
//! # Usage
//!
//! ```bash
//! # Add a statement (the text is prompted for, or read from a pipe)
//! grok-cache add greeting casual
//! echo "hey there" | grok-cache add greeting casual
//!
//! # Copy it to the clipboard
//! grok-cache copy greeting casual
//!
//! # List sections and keys, or everything with -l
//! grok-cache list
//! grok-cache list -l
//!
//! # Delete it again
//! grok-cache delete greeting casual
//! ```
//!
//! # Configuration
//!
//! Statements are stored in `~/.local/share/grok-cache/cache.toml` and aliases
//! are read from the `[aliases]` table of `~/.config/grok-cache/aliases.ini`
//! (Linux locations). `--cache-file` and `--alias-file` override both.

use colored::Colorize;
use grok_cache::{
    CacheError,
    alias::AliasTable,
    cli::{Cli, Invocation},
    commands::{Outcome, Session},
    config::Settings,
    dispatch::Dispatcher,
    store::Store,
    ui::{DialoguerInput, PipedInput, SystemClipboard, TextSource},
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Result<T> = std::result::Result<T, CacheError>;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("grok_cache=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grok_cache=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    tracing::debug!("grok-cache starting with args: {:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CacheError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(Invocation::External(argv)) = cli.command else {
        Cli::print_help()?;
        return Ok(());
    };
    let Some((invoked, args)) = argv.split_first() else {
        Cli::print_help()?;
        return Ok(());
    };

    let settings = Settings::resolve(cli.cache_file, cli.alias_file)?;
    let aliases = AliasTable::load(&settings.alias_path)?;
    let store = Store::new(settings.store_path);

    let mut clipboard = SystemClipboard::new();
    let mut input: Box<dyn TextSource> = if io::stdin().is_terminal() {
        Box::new(DialoguerInput::new())
    } else {
        Box::new(PipedInput::stdin())
    };
    let mut stdout = io::stdout().lock();

    let mut session = Session {
        store: &store,
        clipboard: &mut clipboard,
        input: input.as_mut(),
        out: &mut stdout,
    };

    // Misses and cancellations were already reported; they still exit 0
    let outcome = Dispatcher::new(&aliases).dispatch(invoked, args, &mut session)?;
    if outcome != Outcome::Done {
        tracing::debug!(?outcome, "command finished without changes");
    }

    Ok(())
}
