//! Info command - show vehicle identity and specification

use anyhow::Result;
use garage_core::Snapshot;

use crate::output::OutputContext;

/// Show identity, model and build data of a vehicle
pub fn info(snapshot: &Snapshot, ctx: &OutputContext) -> Result<()> {
    let vehicle = &snapshot.info;
    let spec = &vehicle.specification;

    let pairs = vec![
        ("VIN", vehicle.vin.clone()),
        ("Name", vehicle.name.clone()),
        ("Model", vehicle.model_name()),
        ("Title", spec.title.clone()),
        ("Body", spec.body.to_string()),
        ("Manufactured", spec.manufacturing_date.to_string()),
        (
            "Battery",
            spec.battery
                .map(|b| format!("{} kWh", b.capacity_kwh))
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Max charging power",
            spec.max_charging_power_kw
                .map(|kw| format!("{} kW", kw))
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Trim level",
            spec.trim_level.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("State", vehicle.state.to_string()),
        ("Device platform", vehicle.device_platform.clone()),
        ("Service partner", vehicle.service_partner.id.clone()),
        ("Workshop mode", vehicle.workshop_mode_enabled.to_string()),
        (
            "Software version",
            vehicle
                .software_version
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "License plate",
            vehicle
                .license_plate
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Capabilities",
            format!(
                "{} ({} available)",
                vehicle.capabilities.len(),
                vehicle.available_capabilities().count()
            ),
        ),
        ("Dropped capabilities", snapshot.dropped.len().to_string()),
    ];

    ctx.print_kv(&pairs);

    if let Some(errors) = &vehicle.errors {
        for error in errors {
            ctx.warn(&format!("{}: {}", error.error_type, error.description));
        }
    }

    Ok(())
}
