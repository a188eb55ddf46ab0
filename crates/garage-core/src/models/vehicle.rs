//! Static vehicle build data

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Body style
    pub enum BodyType {
        Suv => "SUV",
        SuvCoupe => "SUV Coupe",
        Combi => "Combi",
        Liftback => "Liftback",
    }
}

wire_enum! {
    /// Lifecycle state of the vehicle in the owner's garage
    pub enum VehicleState {
        Activated => "ACTIVATED",
    }
}

wire_enum! {
    /// Kind of problem the API reports about a vehicle entry
    pub enum ErrorType {
        MissingRender => "MISSING_RENDER",
    }
}

/// Traction battery (electrified drivetrains only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
    #[serde(rename = "capacityInKWh")]
    pub capacity_kwh: u32,
}

/// Engine data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Engine type code, e.g. "EV" or "TSI"
    #[serde(rename = "type")]
    pub engine_type: String,
    #[serde(rename = "powerInKW")]
    pub power_kw: u32,
    /// Displacement, absent for electric motors
    #[serde(
        rename = "capacityInLiters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity_liters: Option<f64>,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} kW", self.engine_type, self.power_kw)?;
        if let Some(liters) = self.capacity_liters {
            write!(f, " {:.1} l", liters)?;
        }
        Ok(())
    }
}

/// Vehicle build specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub body: BodyType,
    pub engine: Engine,
    pub model: String,
    pub title: String,
    pub manufacturing_date: NaiveDate,
    pub model_year: String,
    pub system_code: String,
    pub system_model_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<Battery>,
    #[serde(
        rename = "maxChargingPowerInKW",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_charging_power_kw: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim_level: Option<String>,
}

impl Specification {
    /// Whether the vehicle carries a traction battery
    pub fn is_electrified(&self) -> bool {
        self.battery.is_some()
    }
}

/// Dealer responsible for servicing the vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePartner {
    #[serde(rename = "servicePartnerId")]
    pub id: String,
}

/// Problem reported alongside the vehicle info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleError {
    pub description: String,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
}
