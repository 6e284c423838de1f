//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use uuid::Uuid;

use fuhrpark_types::{OutputFormat, RepairKind};

#[derive(Parser)]
#[command(name = "fuhrpark")]
#[command(version)]
#[command(about = "Vehicle fleet management with JSON file storage")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the JSON files. Uses config value or ./data if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage brand/model master data
    #[command(subcommand)]
    Brand(BrandCommands),

    /// Manage fleet vehicles
    #[command(subcommand)]
    Vehicle(VehicleCommands),

    /// Manage users (persons and companies)
    #[command(subcommand)]
    User(UserCommands),

    /// Manage the trip log
    #[command(subcommand)]
    Trip(TripCommands),

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,
    },
}

#[derive(Subcommand)]
pub enum BrandCommands {
    /// Register a brand
    Add {
        /// Brand name
        name: String,
    },

    /// Register a model, creating the brand if needed
    AddModel {
        /// Brand name
        brand: String,
        /// Model name
        model: String,
    },

    /// List brands, or the models of one brand
    List {
        /// Show models of this brand only
        #[arg(long)]
        brand: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Register a car
    AddCar {
        /// License plate (e.g. "M-AB 123")
        #[arg(long, short = 'p')]
        plate: String,

        /// Brand, must be registered in the master data
        #[arg(long)]
        brand: String,

        /// Model, must be registered in the master data
        #[arg(long)]
        model: String,

        /// Build year
        #[arg(long)]
        year: i32,

        /// Number of seats (1-9)
        #[arg(long)]
        seats: u32,

        /// Purchase value
        #[arg(long)]
        value: Decimal,
    },

    /// Register a truck
    AddTruck {
        /// License plate (e.g. "M-TR 500")
        #[arg(long, short = 'p')]
        plate: String,

        /// Brand, must be registered in the master data
        #[arg(long)]
        brand: String,

        /// Model, must be registered in the master data
        #[arg(long)]
        model: String,

        /// Build year
        #[arg(long)]
        year: i32,

        /// Maximum payload in kg
        #[arg(long)]
        payload: Decimal,

        /// Purchase value
        #[arg(long)]
        value: Decimal,
    },

    /// List all vehicles
    List,

    /// Remove a vehicle
    Remove {
        /// Vehicle id
        id: Uuid,
    },

    /// Book a depreciation against a vehicle
    Depreciate {
        /// Vehicle id
        id: Uuid,

        /// Amount to depreciate
        #[arg(long)]
        amount: Decimal,

        /// Booking reason
        #[arg(long)]
        reason: String,

        /// Booking date (yyyy-mm-dd), today if not specified
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Book a repair against a vehicle
    AddRepair {
        /// Vehicle id
        id: Uuid,

        /// Repair date (yyyy-mm-dd)
        #[arg(long)]
        date: NaiveDate,

        /// What was repaired
        #[arg(long)]
        description: String,

        /// Repair category
        #[arg(long, value_enum)]
        kind: RepairKind,

        /// Repair cost
        #[arg(long)]
        cost: Decimal,

        /// Workshop that did the work
        #[arg(long)]
        workshop: String,
    },

    /// Remove a repair record from a vehicle
    RemoveRepair {
        /// Vehicle id
        id: Uuid,
        /// Repair id
        repair_id: Uuid,
    },

    /// Show a vehicle with its depreciation and repair history
    Show {
        /// Vehicle id
        id: Uuid,
    },

    /// Show fleet-wide residual value and repair cost
    FleetValue,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a person
    AddPerson {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
    },

    /// Register a company
    AddCompany {
        /// Company name
        name: String,
    },

    /// List all users
    List,

    /// Remove a user
    Remove {
        /// User id
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Record a trip
    Add {
        /// Trip date (yyyy-mm-dd)
        #[arg(long)]
        date: NaiveDate,

        /// Id of the user who took the trip
        #[arg(long)]
        user: Uuid,

        /// Id of the vehicle used
        #[arg(long)]
        vehicle: Uuid,

        /// Trip reason
        #[arg(long)]
        reason: String,

        /// Distance in kilometers
        #[arg(long)]
        km: Decimal,
    },

    /// List trips, optionally filtered
    List {
        /// Only trips of this user
        #[arg(long)]
        user: Option<Uuid>,

        /// Only trips with this vehicle
        #[arg(long)]
        vehicle: Option<Uuid>,

        /// Only trips on or after this date (yyyy-mm-dd)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only trips on or before this date (yyyy-mm-dd)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Remove a trip entry
    Remove {
        /// Trip id
        id: Uuid,
    },
}
