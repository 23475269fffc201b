//! Command handler modules for the cardfloor CLI.
//!
//! Each command lives in its own file and follows one pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod deal;
pub mod run;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use run::handle_run_command;
