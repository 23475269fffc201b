//! # cardfloor CLI Library
//!
//! Command-line front end for the cardfloor tournament engine.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cardfloor", "run", "--hands", "100", "--seed", "7"];
//! let code = cardfloor_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `run`: Run a tournament and print standings (or JSON with `--json`)
//! - `deal`: Deal a single hand for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{CardfloorCli, Commands};
use commands::{handle_cfg_command, handle_deal_command, handle_run_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["run", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses `args` and dispatches to the matching command handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cardfloor", "deal", "--seed", "42"];
/// let code = cardfloor_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardfloorCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Run {
            participants,
            group_size,
            hands,
            seed,
            strategy,
            json,
        } => {
            let overrides = config::Overrides {
                participants,
                group_size,
                hands_per_group: hands,
                seed,
                strategy,
            };
            handle_run_command(&overrides, json, out, err)
        }
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, e: &clap::Error) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "cardfloor tournament simulator")?;
    writeln!(err, "Usage: cardfloor <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: cardfloor --help")
}
