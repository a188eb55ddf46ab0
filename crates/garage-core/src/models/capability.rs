//! Capability registry and capability records

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

wire_enum! {
    /// Feature codes the vehicles API is known to report.
    ///
    /// The API adds new codes over time. Records carrying a code outside this
    /// list are dropped by the capability decoder instead of failing the
    /// whole snapshot.
    pub enum CapabilityId {
        Access => "ACCESS",
        AirConditioning => "AIR_CONDITIONING",
        AirConditioningHeatingSourceAuxiliary => "AIR_CONDITIONING_HEATING_SOURCE_AUXILIARY",
        AirConditioningHeatingSourceElectric => "AIR_CONDITIONING_HEATING_SOURCE_ELECTRIC",
        AirConditioningSaveAndActivate => "AIR_CONDITIONING_SAVE_AND_ACTIVATE",
        AirConditioningSmartSettings => "AIR_CONDITIONING_SMART_SETTINGS",
        AirConditioningTimers => "AIR_CONDITIONING_TIMERS",
        Automation => "AUTOMATION",
        BatteryChargingCare => "BATTERY_CHARGING_CARE",
        BatterySupport => "BATTERY_SUPPORT",
        CareAndInsurance => "CARE_AND_INSURANCE",
        ChargeModeSelection => "CHARGE_MODE_SELECTION",
        Charging => "CHARGING",
        ChargingMeb => "CHARGING_MEB",
        ChargingMqb => "CHARGING_MQB",
        ChargingProfiles => "CHARGING_PROFILES",
        ChargingStations => "CHARGING_STATIONS",
        Cubic => "CUBIC",
        DealerAppointment => "DEALER_APPOINTMENT",
        DepartureTimers => "DEPARTURE_TIMERS",
        Destinations => "DESTINATIONS",
        DestinationImport => "DESTINATION_IMPORT",
        DestinationImportUpgradable => "DESTINATION_IMPORT_UPGRADABLE",
        Digicert => "DIGICERT",
        EmergencyCalling => "EMERGENCY_CALLING",
        EvRoutePlanning => "EV_ROUTE_PLANNING",
        ExtendedChargingSettings => "EXTENDED_CHARGING_SETTINGS",
        FuelStatus => "FUEL_STATUS",
        GeoFence => "GEO_FENCE",
        GuestUserManagement => "GUEST_USER_MANAGEMENT",
        HonkAndFlash => "HONK_AND_FLASH",
        IceVehicleRts => "ICE_VEHICLE_RTS",
        LoyaltyProgram => "LOYALTY_PROGRAM",
        MapUpdate => "MAP_UPDATE",
        Measurements => "MEASUREMENTS",
        MisuseProtection => "MISUSE_PROTECTION",
        News => "NEWS",
        OnlineSpeechGps => "ONLINE_SPEECH_GPS",
        ParkingInformation => "PARKING_INFORMATION",
        ParkingPosition => "PARKING_POSITION",
        PayToFuel => "PAY_TO_FUEL",
        PayToPark => "PAY_TO_PARK",
        PlugAndCharge => "PLUG_AND_CHARGE",
        PoiSearch => "POI_SEARCH",
        PowerpassTariffs => "POWERPASS_TARIFFS",
        RoadsideAssistant => "ROADSIDE_ASSISTANT",
        RouteImport => "ROUTE_IMPORT",
        RoutePlanning5Chargers => "ROUTE_PLANNING_5_CHARGERS",
        Routing => "ROUTING",
        ServicePartner => "SERVICE_PARTNER",
        SpeedAlert => "SPEED_ALERT",
        State => "STATE",
        Subscriptions => "SUBSCRIPTIONS",
        TrafficInformation => "TRAFFIC_INFORMATION",
        TripStatistics => "TRIP_STATISTICS",
        VehicleHealthInspection => "VEHICLE_HEALTH_INSPECTION",
        VehicleHealthWarnings => "VEHICLE_HEALTH_WARNINGS",
        VehicleHealthWarningsWithWakeUp => "VEHICLE_HEALTH_WARNINGS_WITH_WAKE_UP",
        VehicleServicesBackups => "VEHICLE_SERVICES_BACKUPS",
        VehicleWakeUp => "VEHICLE_WAKE_UP",
        VehicleWakeUpTrigger => "VEHICLE_WAKE_UP_TRIGGER",
        WarningLights => "WARNING_LIGHTS",
        WebRadio => "WEB_RADIO",
        WindowHeating => "WINDOW_HEATING",
    }
}

wire_enum! {
    /// Reason a capability is currently disabled
    pub enum CapabilityStatus {
        DeactivatedByActiveVehicleUser => "DEACTIVATED_BY_ACTIVE_VEHICLE_USER",
        DisabledByUser => "DISABLED_BY_USER",
        FrontendSwitchedOff => "FRONTEND_SWITCHED_OFF",
        InitiallyDisabled => "INITIALLY_DISABLED",
        InsufficientBatteryLevel => "INSUFFICIENT_BATTERY_LEVEL",
        LicenseExpired => "LICENSE_EXPIRED",
        LicenseMissing => "LICENSE_MISSING",
        LocationDataDisabled => "LOCATION_DATA_DISABLED",
    }
}

impl FromStr for CapabilityId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| CoreError::UnknownCapabilityId(s.to_string()))
    }
}

/// Whether `raw` is a capability id this registry knows about
pub fn is_known_capability_id(raw: &str) -> bool {
    CapabilityId::from_wire(raw).is_some()
}

/// A single capability entry reported for a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub id: CapabilityId,
    /// Reasons the capability is disabled right now (empty when usable)
    pub statuses: Vec<CapabilityStatus>,
}

impl Capability {
    /// Create a capability with no disabling statuses
    pub fn new(id: CapabilityId) -> Self {
        Self {
            id,
            statuses: Vec::new(),
        }
    }

    /// Add a disabling status
    pub fn with_status(mut self, status: CapabilityStatus) -> Self {
        self.statuses.push(status);
        self
    }

    /// Whether the capability can currently be used.
    ///
    /// Every status observed from the API disables the capability, so any
    /// status at all means unavailable. The API does not document this.
    pub fn is_available(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Whether `status` is among the reasons this capability is disabled
    pub fn is_unavailable_because(&self, status: CapabilityStatus) -> bool {
        self.statuses.contains(&status)
    }
}

/// Ordered capability collection of one vehicle.
///
/// Duplicate ids are kept as reported; lookups match any entry.
/// Deserialization goes through the capability decoder (see `crate::decode`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub capabilities: Vec<Capability>,
}

impl Capabilities {
    pub fn new(capabilities: Vec<Capability>) -> Self {
        Self { capabilities }
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Capability> {
        self.capabilities.iter()
    }

    /// All entries with the given id
    pub fn matching(&self, id: CapabilityId) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter().filter(move |c| c.id == id)
    }

    /// Whether any entry has the given id
    pub fn contains(&self, id: CapabilityId) -> bool {
        self.matching(id).next().is_some()
    }

    /// Whether any entry with the given id is available
    pub fn is_available(&self, id: CapabilityId) -> bool {
        self.matching(id).any(Capability::is_available)
    }
}

impl<'a> IntoIterator for &'a Capabilities {
    type Item = &'a Capability;
    type IntoIter = std::slice::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.capabilities.iter()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
