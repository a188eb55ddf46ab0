//! garage-core - Vehicle info and capability model
//!
//! Typed records for the `garage/vehicles/{vin}` response of the vehicles API,
//! and the two capability questions callers ask of them:
//!
//! - [`VehicleInfo::has_capability`]: is the vehicle equipped with a feature
//! - [`VehicleInfo::is_capability_available`]: can the feature be used right now
//!
//! ```rust
//! use garage_core::{decode_vehicle_info, CapabilityId};
//!
//! # fn main() -> garage_core::CoreResult<()> {
//! # let json = br#"{
//! #   "state": "ACTIVATED",
//! #   "specification": {
//! #     "body": "SUV", "engine": {"type": "EV", "powerInKW": 150},
//! #     "model": "Enyaq", "title": "Enyaq iV 80", "manufacturingDate": "2023-01-09",
//! #     "modelYear": "2023", "systemCode": "ENYAQ", "systemModelId": "ABC123"
//! #   },
//! #   "vin": "TMBJM0000N0000001", "name": "Enyaq",
//! #   "capabilities": {"capabilities": [
//! #     {"id": "CHARGING", "statuses": []},
//! #     {"id": "TOTALLY_NEW_FEATURE", "statuses": []}
//! #   ]},
//! #   "devicePlatform": "MBB_ODP", "servicePartner": {"servicePartnerId": "DEU11111"},
//! #   "workshopModeEnabled": false
//! # }"#;
//! let snapshot = decode_vehicle_info(json)?;
//!
//! assert!(snapshot.info.is_capability_available(CapabilityId::Charging));
//! assert_eq!(snapshot.dropped.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod error;
pub mod models;

pub use decode::{
    decode_capabilities, decode_vehicle_info, load_snapshot, log_dropped, partition_capabilities,
    DecodedCapabilities, DroppedCapability, Partition, Snapshot,
};
pub use error::{CoreError, CoreResult};
pub use models::*;
