//! Output formatting module

use motorpool_app::report::{KindReport, QueryReport, VehicleReport};
use motorpool_types::{OutputFormat, Result};

pub fn output_vehicle(output_format: OutputFormat, vehicle: &VehicleReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicle)?);
        return Ok(());
    }

    let ancestry: Vec<&str> = vehicle.ancestry.iter().map(|k| k.name()).collect();

    println!("\nVehicle");
    println!("=======");
    println!("Kind:            {}", vehicle.kind);
    println!("Make:            {}", vehicle.make);
    println!("Model:           {}", vehicle.model);
    println!("Fuel:            {}", vehicle.fuel);
    println!("Wheels:          {}", vehicle.number_of_wheels);
    println!("Ancestry:        {}", ancestry.join(" -> "));

    Ok(())
}

pub fn output_kinds(output_format: OutputFormat, kinds: &[KindReport]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(kinds)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<10} {:>6}  {:<8} {}",
        "Kind", "Parent", "Wheels", "Fuel", "Specializations"
    );
    println!("{}", "-".repeat(60));
    for kind in kinds {
        let parent = kind.parent.map(|p| p.name()).unwrap_or("-");
        let specializations: Vec<&str> = kind.specializations.iter().map(|k| k.name()).collect();
        println!(
            "{:<12} {:<10} {:>6}  {:<8} {}",
            kind.kind.name(),
            parent,
            kind.number_of_wheels,
            kind.default_fuel,
            if specializations.is_empty() {
                "-".to_string()
            } else {
                specializations.join(", ")
            }
        );
    }

    Ok(())
}

pub fn output_query(output_format: OutputFormat, query: &QueryReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(query)?);
    } else {
        println!("{}: {}", query.question, query.answer);
    }

    Ok(())
}
