//! Report use cases backing the CLI commands

use motorpool_domain::service::{ancestry, direct_specializations};
use motorpool_domain::{Vehicle, VehicleKind, Wheeled};
use serde::Serialize;

/// Summary of a single vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    pub kind: VehicleKind,
    pub make: String,
    pub model: String,
    pub fuel: String,
    pub number_of_wheels: u8,
    /// Kind first, root last
    pub ancestry: Vec<VehicleKind>,
}

impl From<&Vehicle> for VehicleReport {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            kind: vehicle.kind(),
            make: vehicle.make().to_string(),
            model: vehicle.model().to_string(),
            fuel: vehicle.fuel().to_string(),
            number_of_wheels: vehicle.number_of_wheels(),
            ancestry: ancestry(vehicle.kind()),
        }
    }
}

/// Per-kind defaults and position in the hierarchy
#[derive(Debug, Clone, Serialize)]
pub struct KindReport {
    pub kind: VehicleKind,
    pub parent: Option<VehicleKind>,
    pub number_of_wheels: u8,
    pub default_fuel: &'static str,
    pub specializations: Vec<VehicleKind>,
}

/// Answer to a yes/no hierarchy question
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub question: String,
    pub answer: bool,
}

/// Build a vehicle and describe it. `fuel` overrides the kind default.
pub fn describe(kind: VehicleKind, make: &str, model: &str, fuel: Option<&str>) -> VehicleReport {
    let vehicle = match fuel {
        Some(fuel) => Vehicle::with_fuel(kind, make, model, fuel),
        None => Vehicle::new(kind, make, model),
    };
    VehicleReport::from(&vehicle)
}

/// Every kind in declaration order
pub fn hierarchy() -> Vec<KindReport> {
    VehicleKind::ALL
        .into_iter()
        .map(|kind| KindReport {
            kind,
            parent: kind.parent(),
            number_of_wheels: kind.number_of_wheels(),
            default_fuel: kind.default_fuel(),
            specializations: direct_specializations(kind),
        })
        .collect()
}

/// Whether a vehicle of `kind` is a `target`
pub fn is_a(kind: VehicleKind, make: &str, model: &str, target: VehicleKind) -> QueryReport {
    let vehicle = Vehicle::new(kind, make, model);
    QueryReport {
        question: format!("{} {} ({}) is a {}", make, model, kind, target),
        answer: vehicle.is_a(target),
    }
}

/// Whether `kind` specializes `parent`
pub fn specializes(kind: VehicleKind, parent: VehicleKind) -> QueryReport {
    QueryReport {
        question: format!("{} is a specialization of {}", kind, parent),
        answer: kind.is_specialization_of(parent),
    }
}
