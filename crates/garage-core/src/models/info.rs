//! Vehicle info aggregate

use serde::{Deserialize, Serialize};

use super::capability::{Capabilities, Capability, CapabilityId};
use super::vehicle::{ServicePartner, Specification, VehicleError, VehicleState};
use crate::error::CoreResult;

/// One decoded snapshot of a vehicle's state, specification and capabilities.
///
/// Read-only: refreshing means decoding a new snapshot and replacing this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub state: VehicleState,
    pub specification: Specification,
    pub vin: String,
    pub name: String,
    pub capabilities: Capabilities,
    pub device_platform: String,
    pub service_partner: ServicePartner,
    pub workshop_mode_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<VehicleError>>,
}

impl VehicleInfo {
    /// Decode a vehicle info document.
    ///
    /// Unknown capability ids are dropped and logged. Use
    /// [`crate::decode_vehicle_info`] to receive them as values instead.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode back to the wire format
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether the vehicle is equipped with a capability at all, regardless
    /// of whether it can be used right now
    pub fn has_capability(&self, id: CapabilityId) -> bool {
        self.capabilities.contains(id)
    }

    /// Whether the vehicle has the capability and it is currently usable.
    ///
    /// A capability can be present but unavailable, for example when it was
    /// deactivated by the active vehicle user.
    pub fn is_capability_available(&self, id: CapabilityId) -> bool {
        self.capabilities.is_available(id)
    }

    /// Entries for a capability (normally zero or one)
    pub fn capability(&self, id: CapabilityId) -> impl Iterator<Item = &Capability> {
        self.capabilities.matching(id)
    }

    pub fn available_capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter().filter(|c| c.is_available())
    }

    pub fn unavailable_capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter().filter(|c| !c.is_available())
    }

    /// Human readable model label, e.g. `Enyaq EV 150 kW 2023 (ABC123)`
    pub fn model_name(&self) -> String {
        let spec = &self.specification;
        format!(
            "{} {} {} ({})",
            spec.model, spec.engine, spec.model_year, spec.system_model_id
        )
    }

    /// Whether the API reported any problems with this entry
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}
