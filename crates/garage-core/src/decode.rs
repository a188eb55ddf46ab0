//! Capability collection decoder and snapshot decoding
//!
//! The vehicles API adds capability codes faster than clients are released.
//! Records with an unknown top-level id are set aside and reported, the rest
//! are decoded strictly: an unknown status inside a known capability, or any
//! other malformed field, fails the whole snapshot.

use std::path::Path;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::models::{is_known_capability_id, Capabilities, Capability, VehicleInfo};

/// JSON pointer to the raw capability list inside a vehicle info document
const CAPABILITY_LIST_POINTER: &str = "/capabilities/capabilities";

/// Raw capability records split by whether their id is known
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub known: Vec<Value>,
    pub unknown: Vec<Value>,
}

/// A capability record dropped because its id is not in the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedCapability {
    /// The unrecognized id
    pub id: String,
    /// The record exactly as received
    pub raw: Value,
}

impl DroppedCapability {
    fn from_raw(raw: Value) -> Self {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { id, raw }
    }
}

/// Result of decoding a raw capability list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedCapabilities {
    pub capabilities: Capabilities,
    pub dropped: Vec<DroppedCapability>,
}

/// Emit one log event carrying the dropped records as received.
///
/// Does nothing when `dropped` is empty.
pub fn log_dropped(dropped: &[DroppedCapability]) {
    if dropped.is_empty() {
        return;
    }
    let raw: Vec<Value> = dropped.iter().map(|d| d.raw.clone()).collect();
    let raw = Value::Array(raw);
    info!(
        count = dropped.len(),
        dropped = %raw,
        "Dropping unknown capabilities"
    );
}

/// A decoded vehicle info response plus the capability records it dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub info: VehicleInfo,
    pub dropped: Vec<DroppedCapability>,
}

/// Split raw capability records into known and unknown ids, keeping order.
///
/// Every record must carry a string `id`.
pub fn partition_capabilities(raw: Vec<Value>) -> CoreResult<Partition> {
    let mut partition = Partition::default();

    for (index, record) in raw.into_iter().enumerate() {
        let known = match record.get("id").and_then(Value::as_str) {
            Some(id) => is_known_capability_id(id),
            None => {
                return Err(CoreError::malformed(
                    format!("capabilities[{index}].id"),
                    format!("expected a capability id string, got {record}"),
                ))
            }
        };

        if known {
            partition.known.push(record);
        } else {
            partition.unknown.push(record);
        }
    }

    Ok(partition)
}

/// Decode a raw capability list.
///
/// Unknown ids are returned in `dropped`; nothing is logged here.
pub fn decode_capabilities(raw: Vec<Value>) -> CoreResult<DecodedCapabilities> {
    let Partition { known, unknown } = partition_capabilities(raw)?;

    let capabilities = known
        .into_iter()
        .map(decode_capability)
        .collect::<CoreResult<Capabilities>>()?;
    let dropped = unknown
        .into_iter()
        .map(DroppedCapability::from_raw)
        .collect();

    Ok(DecodedCapabilities {
        capabilities,
        dropped,
    })
}

fn decode_capability(record: Value) -> CoreResult<Capability> {
    let field = format!(
        "capabilities[{}]",
        record.get("id").and_then(Value::as_str).unwrap_or_default()
    );
    serde_json::from_value(record).map_err(|e| CoreError::malformed(field, e.to_string()))
}

impl<'de> Deserialize<'de> for Capabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawCapabilities {
            capabilities: Vec<Value>,
        }

        let raw = RawCapabilities::deserialize(deserializer)?;
        let decoded = decode_capabilities(raw.capabilities).map_err(de::Error::custom)?;
        log_dropped(&decoded.dropped);
        Ok(decoded.capabilities)
    }
}

/// Decode one vehicle info response.
///
/// Either the whole document decodes or an error is returned. Dropped
/// capability records come back in the snapshot instead of being logged.
pub fn decode_vehicle_info(bytes: &[u8]) -> CoreResult<Snapshot> {
    let mut document: Value = serde_json::from_slice(bytes)?;

    let mut dropped = Vec::new();
    if let Some(Value::Array(list)) = document.pointer_mut(CAPABILITY_LIST_POINTER) {
        let Partition { known, unknown } = partition_capabilities(std::mem::take(list))?;
        *list = known;
        dropped = unknown.into_iter().map(DroppedCapability::from_raw).collect();
    }

    let info: VehicleInfo = serde_json::from_value(document)?;
    debug!(
        vin = %info.vin,
        capabilities = info.capabilities.len(),
        dropped = dropped.len(),
        "Decoded vehicle info"
    );

    Ok(Snapshot { info, dropped })
}

/// Read and decode a vehicle info response saved to disk
pub fn load_snapshot(path: impl AsRef<Path>) -> CoreResult<Snapshot> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_vehicle_info(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CapabilityId, CapabilityStatus};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_partition_preserves_order() {
        let partition = partition_capabilities(vec![
            json!({"id": "NEW_A", "statuses": []}),
            json!({"id": "STATE", "statuses": []}),
            json!({"id": "NEW_B", "statuses": []}),
            json!({"id": "ACCESS", "statuses": []}),
        ])
        .unwrap();

        assert_eq!(
            partition.known,
            vec![
                json!({"id": "STATE", "statuses": []}),
                json!({"id": "ACCESS", "statuses": []}),
            ]
        );
        assert_eq!(
            partition.unknown,
            vec![
                json!({"id": "NEW_A", "statuses": []}),
                json!({"id": "NEW_B", "statuses": []}),
            ]
        );
    }

    #[test]
    fn test_partition_requires_string_id() {
        let err = partition_capabilities(vec![
            json!({"id": "ACCESS", "statuses": []}),
            json!({"statuses": []}),
        ])
        .unwrap_err();

        match err {
            CoreError::MalformedField { field, .. } => assert_eq!(field, "capabilities[1].id"),
            other => panic!("unexpected error: {other}"),
        }

        assert!(partition_capabilities(vec![json!({"id": 7, "statuses": []})]).is_err());
    }

    #[test]
    fn test_unknown_id_dropped_with_one_diagnostic() {
        let decoded = decode_capabilities(vec![
            json!({"id": "TOTALLY_NEW_FEATURE", "statuses": []}),
            json!({"id": "CHARGING", "statuses": []}),
        ])
        .unwrap();

        assert_eq!(
            decoded.capabilities,
            Capabilities::new(vec![Capability::new(CapabilityId::Charging)])
        );
        assert_eq!(decoded.dropped.len(), 1);
        assert_eq!(decoded.dropped[0].id, "TOTALLY_NEW_FEATURE");
        assert_eq!(
            decoded.dropped[0].raw,
            json!({"id": "TOTALLY_NEW_FEATURE", "statuses": []})
        );
    }

    #[test]
    fn test_only_unknown_ids_decode_to_empty() {
        let decoded = decode_capabilities(vec![
            json!({"id": "NEW_A", "statuses": ["NOT_A_STATUS"]}),
            json!({"id": "NEW_B"}),
        ])
        .unwrap();

        assert!(decoded.capabilities.is_empty());
        assert_eq!(decoded.dropped.len(), 2);
    }

    #[test]
    fn test_unknown_status_in_known_capability_fails() {
        let err = decode_capabilities(vec![json!({
            "id": "ACCESS",
            "statuses": ["SOLAR_FLARE"]
        })])
        .unwrap_err();

        match err {
            CoreError::MalformedField { field, reason } => {
                assert_eq!(field, "capabilities[ACCESS]");
                assert!(reason.contains("SOLAR_FLARE"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_statuses_decode() {
        let decoded = decode_capabilities(vec![
            json!({"id": "ACCESS", "statuses": ["LICENSE_EXPIRED"]}),
            json!({"id": "ACCESS", "statuses": []}),
        ])
        .unwrap();

        let entries: Vec<_> = decoded.capabilities.iter().collect();
        assert!(!entries[0].is_available());
        assert_eq!(entries[0].statuses, vec![CapabilityStatus::LicenseExpired]);
        assert!(entries[1].is_available());
    }

    #[test]
    fn test_serde_adapter_filters_unknown() {
        let capabilities: Capabilities = serde_json::from_value(json!({
            "capabilities": [
                {"id": "WEB_RADIO", "statuses": []},
                {"id": "HOVER_MODE", "statuses": []}
            ]
        }))
        .unwrap();

        assert_eq!(capabilities.len(), 1);
        assert!(capabilities.contains(CapabilityId::WebRadio));
    }

    #[test]
    fn test_serde_adapter_reports_malformed() {
        let err = serde_json::from_value::<Capabilities>(json!({
            "capabilities": [{"id": "WEB_RADIO", "statuses": ["LOUD"]}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("capabilities[WEB_RADIO]"));
    }
}
