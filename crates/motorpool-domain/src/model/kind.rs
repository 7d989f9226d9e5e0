//! Vehicle kinds and their per-kind defaults

use std::fmt;
use std::str::FromStr;

use motorpool_types::Error;
use serde::{Deserialize, Serialize};

/// Capability of reporting a wheel count
pub trait Wheeled {
    fn number_of_wheels(&self) -> u8;
}

/// Closed set of vehicle kinds.
///
/// `Vehicle` is the root; every other kind specializes it directly and the
/// specializations are unrelated to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Vehicle,
    Car,
    Truck,
    Motorcycle,
}

impl VehicleKind {
    /// All kinds in declaration order
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Vehicle,
        VehicleKind::Car,
        VehicleKind::Truck,
        VehicleKind::Motorcycle,
    ];

    /// Display name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Vehicle => "Vehicle",
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
            VehicleKind::Motorcycle => "Motorcycle",
        }
    }

    /// Fuel used when none is given at construction
    pub fn default_fuel(&self) -> &'static str {
        match self {
            VehicleKind::Truck => "diesel",
            VehicleKind::Vehicle | VehicleKind::Car | VehicleKind::Motorcycle => "gas",
        }
    }

    /// Direct parent in the declared hierarchy
    pub fn parent(&self) -> Option<VehicleKind> {
        match self {
            VehicleKind::Vehicle => None,
            VehicleKind::Car | VehicleKind::Truck | VehicleKind::Motorcycle => {
                Some(VehicleKind::Vehicle)
            }
        }
    }

    /// Whether `self` is `other` or declared below it.
    ///
    /// Reflexive: every kind specializes itself.
    pub fn is_specialization_of(&self, other: VehicleKind) -> bool {
        let mut current = Some(*self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}

impl Wheeled for VehicleKind {
    fn number_of_wheels(&self) -> u8 {
        match self {
            VehicleKind::Vehicle | VehicleKind::Car => 4,
            VehicleKind::Truck => 6,
            VehicleKind::Motorcycle => 2,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VehicleKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
