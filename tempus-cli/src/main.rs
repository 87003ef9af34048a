mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tempus_core::Options;

use crate::config::{OptionOverrides, env_bool_var, load_options};

#[derive(Parser)]
#[command(name = "tempus")]
#[command(about = "Convert between human duration text and seconds")]
#[command(version, disable_help_subcommand = true)]
struct Cli {
    /// Path to a JSON options file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    overrides: OptionOverrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert duration text to seconds
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Render a second count as text
    Format { seconds: String },
    /// Re-render duration text in the configured style
    Convert {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List unit spellings
    Units { unit: Option<String> },
    /// List available commands
    Help { category: Option<String> },
    /// Show usage for one command
    Usage { command: Option<String> },
    /// Read commands from stdin, one per line
    Shell,
}

impl Command {
    /// Command name and argument text as understood by `tempus_commands`.
    fn invocation(&self) -> Option<(&'static str, String)> {
        let invocation = match self {
            Command::Parse { text } => ("parse", text.join(" ")),
            Command::Format { seconds } => ("format", seconds.clone()),
            Command::Convert { text } => ("convert", text.join(" ")),
            Command::Units { unit } => ("units", unit.clone().unwrap_or_default()),
            Command::Help { category } => ("help", category.clone().unwrap_or_default()),
            Command::Usage { command } => ("usage", command.clone().unwrap_or_default()),
            Command::Shell => return None,
        };
        Some(invocation)
    }
}

fn main() -> anyhow::Result<()> {
    // Load the .env file before reading any TEMPUS_* variable.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose || env_bool_var("TEMPUS_VERBOSE", false));

    let options = load_options(cli.config.as_deref(), &cli.overrides)?;

    match cli.command.invocation() {
        Some((name, args)) => run_once(name, &args, &options),
        None => run_shell(&options),
    }
}

fn init_tracing(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::WARN };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter_fn(move |metadata| {
            *metadata.level() <= max_level && metadata.target().starts_with("tempus")
        }));

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn run_once(name: &str, args: &str, options: &Options) -> anyhow::Result<()> {
    let handler = tempus_commands::handler(name)
        .with_context(|| format!("no handler registered for `{}`", name))?;
    let reply = handler(args, options)?;
    println!("{}", reply);
    Ok(())
}

fn run_shell(options: &Options) -> anyhow::Result<()> {
    info!("Reading commands from stdin.");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match tempus_commands::dispatch(&line, options) {
            Ok(reply) => writeln!(stdout, "{}", reply)?,
            Err(error) => {
                error!(?error, "command error");
                writeln!(stdout, "error: {:#}", error)?;
            }
        }
    }

    debug!("stdin closed");
    Ok(())
}
