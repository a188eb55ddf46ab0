//! Availability rules and unknown capability handling
//!
//! Run with: cargo test -p garage-tests --test capability_test

use std::io;
use std::sync::{Arc, Mutex};

use garage_core::{
    decode_capabilities, decode_vehicle_info, log_dropped, CapabilityId, CapabilityStatus,
    VehicleInfo,
};
use garage_tests::{fixture_bytes, fixture_json, with_capabilities};
use rstest::rstest;
use serde_json::{json, Value};
use tracing_subscriber::fmt::MakeWriter;

// =============================================================================
// Log capture
// =============================================================================

/// In-memory log sink for a scoped subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a subscriber that records INFO and above into a string
fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

fn document(capabilities: Value) -> String {
    with_capabilities(fixture_json("enyaq.json"), capabilities).to_string()
}

// =============================================================================
// Unknown capability ids
// =============================================================================

#[test]
fn test_unknown_id_dropped_with_single_diagnostic() {
    let json = document(json!([
        {"id": "TOTALLY_NEW_FEATURE", "statuses": []},
        {"id": "CHARGING", "statuses": []}
    ]));

    let (info, logs) = with_captured_logs(|| VehicleInfo::from_json(&json));
    let info = info.unwrap();

    assert_eq!(info.capabilities.len(), 1);
    assert!(info.has_capability(CapabilityId::Charging));
    assert_eq!(logs.matches("Dropping unknown capabilities").count(), 1);
    assert!(logs.contains(r#"{"id":"TOTALLY_NEW_FEATURE","statuses":[]}"#), "{logs}");
}

#[test]
fn test_pipeline_returns_diagnostics_without_logging() {
    let json = document(json!([
        {"id": "TOTALLY_NEW_FEATURE", "statuses": []},
        {"id": "CHARGING", "statuses": []}
    ]));

    let (snapshot, logs) = with_captured_logs(|| decode_vehicle_info(json.as_bytes()));
    let snapshot = snapshot.unwrap();

    assert_eq!(snapshot.info.capabilities.len(), 1);
    assert_eq!(snapshot.dropped.len(), 1);
    assert_eq!(snapshot.dropped[0].id, "TOTALLY_NEW_FEATURE");
    assert!(!logs.contains("Dropping unknown capabilities"), "{logs}");
}

#[test]
fn test_pipeline_diagnostics_log_raw_records() {
    let snapshot = decode_vehicle_info(&fixture_bytes("enyaq.json")).unwrap();

    let ((), logs) = with_captured_logs(|| log_dropped(&snapshot.dropped));

    assert_eq!(logs.matches("Dropping unknown capabilities").count(), 1);
    assert!(
        logs.contains(
            r#"{"id":"TOTALLY_NEW_FEATURE","statuses":["SOMETHING_WE_HAVE_NEVER_SEEN"]}"#
        ),
        "{logs}"
    );

    let ((), logs) = with_captured_logs(|| log_dropped(&[]));
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn test_no_diagnostic_when_all_known() {
    let (info, logs) = with_captured_logs(|| {
        VehicleInfo::from_json(&String::from_utf8(fixture_bytes("octavia.json")).unwrap())
    });

    assert!(info.is_ok());
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn test_only_unknown_ids_yield_empty_collection() {
    let json = document(json!([
        {"id": "HOVER_MODE", "statuses": []},
        {"id": "TIME_TRAVEL", "statuses": ["FLUX_CAPACITOR_MISSING"]}
    ]));

    let snapshot = decode_vehicle_info(json.as_bytes()).unwrap();
    assert!(snapshot.info.capabilities.is_empty());
    assert_eq!(snapshot.dropped.len(), 2);

    for id in CapabilityId::ALL {
        assert!(!snapshot.info.has_capability(*id));
    }
}

#[test]
fn test_empty_capability_list() {
    let snapshot = decode_vehicle_info(document(json!([])).as_bytes()).unwrap();
    assert!(snapshot.info.capabilities.is_empty());
    assert!(snapshot.dropped.is_empty());
}

#[test]
fn test_capability_record_without_id_fails() {
    let json = document(json!([{"statuses": []}]));

    let err = decode_vehicle_info(json.as_bytes()).unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("capabilities[0].id"), "{err}");
}

// =============================================================================
// Availability
// =============================================================================

#[rstest]
#[case(json!([]), true)]
#[case(json!(["LICENSE_EXPIRED"]), false)]
#[case(json!(["INSUFFICIENT_BATTERY_LEVEL", "DISABLED_BY_USER"]), false)]
fn test_access_availability(#[case] statuses: Value, #[case] available: bool) {
    let decoded = decode_capabilities(vec![json!({"id": "ACCESS", "statuses": statuses})]).unwrap();

    let access = decoded.capabilities.iter().next().unwrap();
    assert_eq!(access.id, CapabilityId::Access);
    assert_eq!(access.is_available(), available);
}

#[test]
fn test_every_status_disables() {
    for status in CapabilityStatus::ALL {
        let json = document(json!([{"id": "HONK_AND_FLASH", "statuses": [status.as_str()]}]));
        let info = decode_vehicle_info(json.as_bytes()).unwrap().info;

        assert!(info.has_capability(CapabilityId::HonkAndFlash));
        assert!(
            !info.is_capability_available(CapabilityId::HonkAndFlash),
            "{status} should disable HONK_AND_FLASH"
        );
    }
}

#[rstest]
#[case("enyaq.json")]
#[case("octavia.json")]
fn test_availability_properties(#[case] fixture: &str) {
    let info = decode_vehicle_info(&fixture_bytes(fixture)).unwrap().info;

    for capability in &info.capabilities {
        assert_eq!(capability.is_available(), capability.statuses.is_empty());
    }

    for id in CapabilityId::ALL {
        let listed = info.capabilities.iter().any(|c| c.id == *id);
        assert_eq!(info.has_capability(*id), listed, "{id}");

        if info.is_capability_available(*id) {
            assert!(info.has_capability(*id), "{id} available but not present");
        }
    }
}
