//! Vehicle instances

use serde::Serialize;

use super::kind::{VehicleKind, Wheeled};

/// A vehicle of a given kind.
///
/// Fields are fixed at construction. `make` and `model` are not validated;
/// empty text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    kind: VehicleKind,
    make: String,
    model: String,
    fuel: String,
}

impl Vehicle {
    /// Create a vehicle using the kind's default fuel
    pub fn new(kind: VehicleKind, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_fuel(kind, make, model, kind.default_fuel())
    }

    pub fn with_fuel(
        kind: VehicleKind,
        make: impl Into<String>,
        model: impl Into<String>,
        fuel: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            make: make.into(),
            model: model.into(),
            fuel: fuel.into(),
        }
    }

    pub fn car(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(VehicleKind::Car, make, model)
    }

    pub fn truck(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(VehicleKind::Truck, make, model)
    }

    pub fn motorcycle(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(VehicleKind::Motorcycle, make, model)
    }

    /// Exact kind of this vehicle
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn fuel(&self) -> &str {
        &self.fuel
    }

    /// Whether this vehicle belongs to `kind` or one of its specializations
    pub fn is_a(&self, kind: VehicleKind) -> bool {
        self.kind.is_specialization_of(kind)
    }
}

impl Wheeled for Vehicle {
    fn number_of_wheels(&self) -> u8 {
        self.kind.number_of_wheels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_defaults_to_gas() {
        let car = Vehicle::car("Ford", "Thunderbird");
        assert_eq!(car.kind(), VehicleKind::Car);
        assert_eq!(car.make(), "Ford");
        assert_eq!(car.model(), "Thunderbird");
        assert_eq!(car.fuel(), "gas");
        assert_eq!(car.number_of_wheels(), 4);
    }

    #[test]
    fn test_truck_defaults_to_diesel() {
        let truck = Vehicle::truck("Ford", "F350");
        assert_eq!(truck.fuel(), "diesel");
        assert_eq!(truck.number_of_wheels(), 6);
    }

    #[test]
    fn test_motorcycle_inherits_gas() {
        let bike = Vehicle::motorcycle("Honda", "CB500");
        assert_eq!(bike.fuel(), "gas");
        assert_eq!(bike.number_of_wheels(), 2);
    }

    #[test]
    fn test_explicit_fuel_overrides_default() {
        let truck = Vehicle::with_fuel(VehicleKind::Truck, "Ford", "F350", "electric");
        assert_eq!(truck.fuel(), "electric");

        let car = Vehicle::with_fuel(VehicleKind::Car, "Ford", "Thunderbird", "diesel");
        assert_eq!(car.fuel(), "diesel");
    }

    #[test]
    fn test_empty_fields_accepted() {
        let vehicle = Vehicle::new(VehicleKind::Vehicle, "", "");
        assert_eq!(vehicle.make(), "");
        assert_eq!(vehicle.model(), "");
        assert_eq!(vehicle.fuel(), "gas");
    }

    #[test]
    fn test_is_a() {
        let car = Vehicle::car("Ford", "Thunderbird");
        assert!(car.is_a(VehicleKind::Car));
        assert!(car.is_a(VehicleKind::Vehicle));
        assert!(!car.is_a(VehicleKind::Truck));
        assert!(!car.is_a(VehicleKind::Motorcycle));

        let base = Vehicle::new(VehicleKind::Vehicle, "Generic", "Base");
        assert!(base.is_a(VehicleKind::Vehicle));
        assert!(!base.is_a(VehicleKind::Car));
    }

    #[test]
    fn test_serialize() {
        let truck = Vehicle::truck("Ford", "F350");
        let json = serde_json::to_value(&truck).unwrap();
        assert_eq!(json["kind"], "Truck");
        assert_eq!(json["make"], "Ford");
        assert_eq!(json["model"], "F350");
        assert_eq!(json["fuel"], "diesel");
    }
}
