//! Capabilities command - list capabilities and their availability

use anyhow::Result;
use garage_core::{Capability, Snapshot};

use crate::output::{CapabilityRow, OutputContext};

/// Which capabilities to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityFilter {
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    fn accepts(self, capability: &Capability) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => capability.is_available(),
            AvailabilityFilter::Unavailable => !capability.is_available(),
        }
    }
}

/// List the capabilities reported for the vehicle
pub fn capabilities(
    snapshot: &Snapshot,
    filter: AvailabilityFilter,
    ctx: &OutputContext,
) -> Result<()> {
    let rows: Vec<CapabilityRow> = snapshot
        .info
        .capabilities
        .iter()
        .filter(|c| filter.accepts(c))
        .map(|c| CapabilityRow {
            id: c.id.to_string(),
            available: c.is_available(),
            statuses: c
                .statuses
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    ctx.print(&rows);
    Ok(())
}
