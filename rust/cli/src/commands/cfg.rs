//! Configuration command handler.
//!
//! Prints every resolved setting together with where it came from
//! (default, file or environment) as pretty JSON:
//!
//! ```json
//! {
//!   "group_size": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "participants": {
            "value": config.participants,
            "source": sources.participants,
        },
        "group_size": {
            "value": config.group_size,
            "source": sources.group_size,
        },
        "hands_per_group": {
            "value": config.hands_per_group,
            "source": sources.hands_per_group,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
