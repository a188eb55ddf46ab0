//! Check command - can the vehicle use a capability right now

use anyhow::Result;
use garage_core::{CapabilityId, Snapshot};

use crate::output::OutputContext;

/// Answer for a single capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Available,
    Unavailable,
    Missing,
}

impl CheckOutcome {
    pub fn evaluate(snapshot: &Snapshot, id: CapabilityId) -> Self {
        if snapshot.info.is_capability_available(id) {
            CheckOutcome::Available
        } else if snapshot.info.has_capability(id) {
            CheckOutcome::Unavailable
        } else {
            CheckOutcome::Missing
        }
    }

    /// Process exit code for scripting: 0 available, 1 unavailable, 3 missing.
    ///
    /// 2 is left to usage and load failures.
    pub fn exit_code(self) -> u8 {
        match self {
            CheckOutcome::Available => 0,
            CheckOutcome::Unavailable => 1,
            CheckOutcome::Missing => 3,
        }
    }
}

/// Check a single capability
pub fn check(snapshot: &Snapshot, id: CapabilityId, ctx: &OutputContext) -> Result<CheckOutcome> {
    let outcome = CheckOutcome::evaluate(snapshot, id);

    let statuses: Vec<&str> = snapshot
        .info
        .capability(id)
        .flat_map(|c| c.statuses.iter().map(|s| s.as_str()))
        .collect();

    let pairs = vec![
        ("Capability", id.to_string()),
        ("Present", snapshot.info.has_capability(id).to_string()),
        (
            "Available",
            snapshot.info.is_capability_available(id).to_string(),
        ),
        ("Statuses", statuses.join(", ")),
    ];
    ctx.print_kv(&pairs);

    match outcome {
        CheckOutcome::Available => ctx.success(&format!("{} is available", id)),
        CheckOutcome::Unavailable => ctx.warn(&format!("{} is currently unavailable", id)),
        CheckOutcome::Missing => ctx.error(&format!("{} is not present on this vehicle", id)),
    }

    Ok(outcome)
}
