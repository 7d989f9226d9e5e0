//! Demonstration of the vehicle hierarchy
//!
//! Builds a Ford Thunderbird car and a Ford F350 truck and reports their
//! kinds, fuel, wheel counts and is-a relationships.

use std::io::Write;

use motorpool_domain::{Vehicle, VehicleKind, Wheeled};
use motorpool_types::Result;

/// Write the demonstration report to `out`
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let my_car = Vehicle::car("Ford", "Thunderbird");
    writeln!(out, "my_car is type {}", my_car.kind())?;
    writeln!(out, "my_car uses {}", my_car.fuel())?;
    writeln!(out, "my_car is a Car: {}", my_car.is_a(VehicleKind::Car))?;
    writeln!(out, "my_car is a Vehicle: {}", my_car.is_a(VehicleKind::Vehicle))?;
    writeln!(
        out,
        "Car is a specialization of Vehicle: {}",
        VehicleKind::Car.is_specialization_of(VehicleKind::Vehicle)
    )?;

    let my_truck = Vehicle::truck("Ford", "F350");
    writeln!(out, "my_truck is type {}", my_truck.kind())?;
    writeln!(out, "my_truck uses {}", my_truck.fuel())?;
    writeln!(out, "my_truck has {} wheels", my_truck.number_of_wheels())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut buf = Vec::new();
        run_demo(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "my_car is type Car",
                "my_car uses gas",
                "my_car is a Car: true",
                "my_car is a Vehicle: true",
                "Car is a specialization of Vehicle: true",
                "my_truck is type Truck",
                "my_truck uses diesel",
                "my_truck has 6 wheels",
            ]
        );
    }
}
