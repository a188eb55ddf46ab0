//! Known command - list the capability registry

use anyhow::Result;
use garage_core::{CapabilityId, CapabilityStatus};

use crate::output::{OutputContext, RegistryRow};

/// List every capability id and status this build understands
pub fn known(ctx: &OutputContext) -> Result<()> {
    let ids = CapabilityId::ALL.iter().map(|id| RegistryRow {
        kind: "capability".to_string(),
        code: id.to_string(),
    });
    let statuses = CapabilityStatus::ALL.iter().map(|status| RegistryRow {
        kind: "status".to_string(),
        code: status.to_string(),
    });

    let rows: Vec<RegistryRow> = ids.chain(statuses).collect();
    ctx.print(&rows);
    Ok(())
}
