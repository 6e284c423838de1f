//! Output formatting module

use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use fuhrpark_app::TripDisplay;
use fuhrpark_domain::model::{User, Vehicle, VehicleKind};
use fuhrpark_types::{OutputFormat, Result};

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

pub fn print_brands(format: OutputFormat, brands: &[(String, Vec<String>)]) -> Result<()> {
    if format == OutputFormat::Json {
        let records: Vec<_> = brands
            .iter()
            .map(|(name, models)| json!({ "name": name, "models": models }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if brands.is_empty() {
        println!("No brands registered.");
        return Ok(());
    }
    for (name, models) in brands {
        println!("{:<15} | {}", name, models.join(", "));
    }
    Ok(())
}

pub fn print_models(format: OutputFormat, brand: &str, models: &[String]) -> Result<()> {
    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "brand": brand, "models": models }))?
        );
        return Ok(());
    }

    if models.is_empty() {
        println!("No models registered for '{}'.", brand.trim());
        return Ok(());
    }
    for model in models {
        println!("{model}");
    }
    Ok(())
}

fn vehicle_json(vehicle: &Vehicle) -> serde_json::Value {
    let mut record = json!({
        "id": vehicle.id(),
        "type": vehicle.kind().label(),
        "licensePlate": vehicle.license_plate(),
        "brand": vehicle.brand(),
        "model": vehicle.model(),
        "year": vehicle.year(),
        "purchaseValue": vehicle.purchase_value(),
        "residualValue": vehicle.residual_value(),
    });
    match vehicle.kind() {
        VehicleKind::Car { seats } => record["seats"] = json!(seats),
        VehicleKind::Truck { max_payload_kg } => record["maxPayloadKg"] = json!(max_payload_kg),
    }
    record
}

pub fn print_vehicles(format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        let records: Vec<_> = vehicles.iter().map(vehicle_json).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles in the fleet.");
        return Ok(());
    }
    for v in vehicles {
        println!(
            "{:<3} | {} {:<20} | {:<12} | {} | residual {:>12} | id {}",
            v.kind().label(),
            v.brand(),
            v.model(),
            v.license_plate(),
            v.year(),
            v.residual_value(),
            short_id(v.id())
        );
    }
    Ok(())
}

pub fn print_vehicle_details(format: OutputFormat, vehicle: &Vehicle) -> Result<()> {
    if format == OutputFormat::Json {
        let mut record = vehicle_json(vehicle);
        record["depreciations"] = vehicle
            .depreciations()
            .iter()
            .map(|d| json!({ "date": d.date, "amount": d.amount, "reason": d.reason }))
            .collect();
        record["repairs"] = vehicle
            .repairs()
            .iter()
            .map(|r| {
                json!({
                    "id": r.id,
                    "date": r.date,
                    "description": r.description,
                    "kind": r.kind,
                    "cost": r.cost,
                    "workshop": r.workshop,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{} {} {}", vehicle.kind().label(), vehicle.brand(), vehicle.model());
    println!("License plate:  {}", vehicle.license_plate());
    println!("Year:           {}", vehicle.year());
    match vehicle.kind() {
        VehicleKind::Car { seats } => println!("Seats:          {seats}"),
        VehicleKind::Truck { max_payload_kg } => println!("Max payload:    {max_payload_kg} kg"),
    }
    println!("Purchase value: {}", vehicle.purchase_value());
    println!("Residual value: {}", vehicle.residual_value());
    println!("Id:             {}", vehicle.id());

    if !vehicle.depreciations().is_empty() {
        println!("\nDepreciations:");
        for d in vehicle.depreciations() {
            println!("  {} | -{:>10} | {}", d.date, d.amount, d.reason);
        }
    }

    if !vehicle.repairs().is_empty() {
        println!("\nRepairs (total {}):", vehicle.total_repair_cost());
        for r in vehicle.repairs() {
            println!(
                "  {} | {:<9} | {:>10} | {:<30} | {} | id {}",
                r.date,
                r.kind.label(),
                r.cost,
                r.description,
                r.workshop,
                short_id(r.id)
            );
        }
    }
    Ok(())
}

pub fn print_users(format: OutputFormat, users: &[User]) -> Result<()> {
    if format == OutputFormat::Json {
        let records: Vec<_> = users
            .iter()
            .map(|u| {
                json!({
                    "id": u.id(),
                    "type": u.kind_label(),
                    "displayName": u.display_name(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if users.is_empty() {
        println!("No users registered.");
        return Ok(());
    }
    for u in users {
        println!(
            "{:<7} | {:<25} | id {}",
            u.kind_label(),
            u.display_name(),
            short_id(u.id())
        );
    }
    Ok(())
}

pub fn print_trips(format: OutputFormat, trips: &[TripDisplay]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(trips)?);
        return Ok(());
    }

    if trips.is_empty() {
        println!("No trips recorded.");
        return Ok(());
    }
    for t in trips {
        println!(
            "{} | {:<25} | {:<28} | {:>8} km | {:<25} | id {}",
            t.date,
            t.user,
            t.vehicle,
            t.kilometers,
            t.reason,
            short_id(t.id)
        );
    }
    Ok(())
}

pub fn print_fleet_summary(
    format: OutputFormat,
    fleet_value: Decimal,
    repair_cost: Decimal,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "fleetValue": fleet_value,
                "fleetRepairCost": repair_cost,
            }))?
        );
        return Ok(());
    }

    println!("Fleet residual value: {fleet_value}");
    println!("Fleet repair cost:    {repair_cost}");
    Ok(())
}
