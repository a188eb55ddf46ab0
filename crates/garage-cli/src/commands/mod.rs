//! Command implementations for garage-cli

pub mod capabilities;
pub mod check;
pub mod info;
pub mod known;

pub use capabilities::{capabilities, AvailabilityFilter};
pub use check::check;
pub use info::info;
pub use known::known;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use garage_core::Snapshot;

/// Load a snapshot from a file, or from stdin when the path is `-`
pub fn load(path: &Path) -> Result<Snapshot> {
    let snapshot = if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read snapshot from stdin")?;
        garage_core::decode_vehicle_info(&bytes).context("Failed to decode snapshot from stdin")?
    } else {
        garage_core::load_snapshot(path)
            .with_context(|| format!("Failed to load snapshot: {}", path.display()))?
    };

    tracing::info_span!("snapshot", vin = %snapshot.info.vin)
        .in_scope(|| garage_core::log_dropped(&snapshot.dropped));

    Ok(snapshot)
}
