//! Domain model types

pub mod kind;
pub mod vehicle;

pub use kind::{VehicleKind, Wheeled};
pub use vehicle::Vehicle;
