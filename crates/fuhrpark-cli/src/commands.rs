//! Command handlers

use std::rc::Rc;

use fuhrpark_app::config::Config;
use fuhrpark_app::{BrandCatalogService, TripLogService, UserService, VehicleService};
use fuhrpark_domain::repository::{TripLogRepository, UserRepository, VehicleRepository};
use fuhrpark_infra::{
    FileBrandCatalogRepository, FileTripLogRepository, FileUserRepository, FileVehicleRepository,
};
use fuhrpark_types::{OutputFormat, Result};

use crate::cli::{BrandCommands, Cli, Commands, TripCommands, UserCommands, VehicleCommands};
use crate::output;

struct Services {
    catalog: Rc<BrandCatalogService>,
    vehicles: VehicleService,
    users: UserService,
    trips: TripLogService,
}

impl Services {
    fn wire(config: &Config, cli: &Cli) -> Self {
        let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());

        let brand_repo = Box::new(FileBrandCatalogRepository::new(data_dir.join("brands.json")));
        let vehicle_repo: Rc<dyn VehicleRepository> =
            Rc::new(FileVehicleRepository::open(data_dir.join("vehicles.json")));
        let user_repo: Rc<dyn UserRepository> =
            Rc::new(FileUserRepository::open(data_dir.join("users.json")));
        let trip_repo: Rc<dyn TripLogRepository> =
            Rc::new(FileTripLogRepository::open(data_dir.join("trips.json")));

        let catalog = Rc::new(BrandCatalogService::new(brand_repo));
        let vehicles = VehicleService::new(Rc::clone(&vehicle_repo), Rc::clone(&catalog));
        let users = UserService::new(Rc::clone(&user_repo));
        let trips = TripLogService::new(trip_repo, user_repo, vehicle_repo);

        Self {
            catalog,
            vehicles,
            users,
            trips,
        }
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Config {
            show,
            set_data_dir,
            set_format,
        } => run_config(config, *show, set_data_dir.clone(), *set_format),
        _ => {
            let services = Services::wire(&config, &cli);
            match cli.command {
                Commands::Brand(cmd) => run_brand(cmd, &services, format),
                Commands::Vehicle(cmd) => run_vehicle(cmd, &services, format),
                Commands::User(cmd) => run_user(cmd, &services, format),
                Commands::Trip(cmd) => run_trip(cmd, &services, format),
                Commands::Config { .. } => unreachable!("handled above"),
            }
        }
    }
}

fn run_config(
    mut config: Config,
    show: bool,
    set_data_dir: Option<std::path::PathBuf>,
    set_format: Option<OutputFormat>,
) -> Result<()> {
    let mut changed = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved to {}", Config::config_path()?.display());
    }

    if show || !changed {
        println!("data_dir:      {}", config.data_dir().display());
        println!("output_format: {}", config.output_format);
    }

    Ok(())
}

fn run_brand(cmd: BrandCommands, services: &Services, format: OutputFormat) -> Result<()> {
    match cmd {
        BrandCommands::Add { name } => {
            services.catalog.add_brand(&name)?;
            println!("Registered brand '{}'", name.trim());
        }
        BrandCommands::AddModel { brand, model } => {
            services.catalog.add_model(&brand, &model)?;
            println!("Registered model '{}' for brand '{}'", model.trim(), brand.trim());
        }
        BrandCommands::List { brand } => match brand {
            Some(brand) => {
                output::print_models(format, &brand, &services.catalog.models(&brand))?;
            }
            None => {
                let brands: Vec<(String, Vec<String>)> = services
                    .catalog
                    .brands()
                    .into_iter()
                    .map(|name| {
                        let models = services.catalog.models(&name);
                        (name, models)
                    })
                    .collect();
                output::print_brands(format, &brands)?;
            }
        },
    }
    Ok(())
}

fn run_vehicle(cmd: VehicleCommands, services: &Services, format: OutputFormat) -> Result<()> {
    match cmd {
        VehicleCommands::AddCar {
            plate,
            brand,
            model,
            year,
            seats,
            value,
        } => {
            let id = services
                .vehicles
                .add_car(&plate, &brand, &model, year, seats, value)?;
            println!("Added car {} (id {})", plate.trim().to_uppercase(), id);
        }
        VehicleCommands::AddTruck {
            plate,
            brand,
            model,
            year,
            payload,
            value,
        } => {
            let id = services
                .vehicles
                .add_truck(&plate, &brand, &model, year, payload, value)?;
            println!("Added truck {} (id {})", plate.trim().to_uppercase(), id);
        }
        VehicleCommands::List => {
            output::print_vehicles(format, &services.vehicles.all())?;
        }
        VehicleCommands::Remove { id } => {
            if services.vehicles.remove(id)? {
                println!("Removed vehicle {id}");
            } else {
                println!("No vehicle with id {id}");
            }
        }
        VehicleCommands::Depreciate {
            id,
            amount,
            reason,
            date,
        } => {
            services.vehicles.add_depreciation(id, amount, &reason, date)?;
            let vehicle = services.vehicles.get_required(id)?;
            println!(
                "Booked depreciation of {} against {}; residual value now {}",
                amount,
                vehicle.license_plate(),
                vehicle.residual_value()
            );
        }
        VehicleCommands::AddRepair {
            id,
            date,
            description,
            kind,
            cost,
            workshop,
        } => {
            let repair_id = services
                .vehicles
                .add_repair(id, date, &description, kind, cost, &workshop)?;
            println!("Booked repair (id {repair_id})");
        }
        VehicleCommands::RemoveRepair { id, repair_id } => {
            if services.vehicles.remove_repair(id, repair_id)? {
                println!("Removed repair {repair_id}");
            } else {
                println!("No repair with id {repair_id}");
            }
        }
        VehicleCommands::Show { id } => {
            let vehicle = services.vehicles.get_required(id)?;
            output::print_vehicle_details(format, &vehicle)?;
        }
        VehicleCommands::FleetValue => {
            output::print_fleet_summary(
                format,
                services.vehicles.fleet_value(),
                services.vehicles.fleet_repair_cost(),
            )?;
        }
    }
    Ok(())
}

fn run_user(cmd: UserCommands, services: &Services, format: OutputFormat) -> Result<()> {
    match cmd {
        UserCommands::AddPerson {
            first_name,
            last_name,
        } => {
            let id = services.users.add_person(&first_name, &last_name)?;
            println!("Added person {} {} (id {})", first_name.trim(), last_name.trim(), id);
        }
        UserCommands::AddCompany { name } => {
            let id = services.users.add_company(&name)?;
            println!("Added company {} (id {})", name.trim(), id);
        }
        UserCommands::List => {
            output::print_users(format, &services.users.all())?;
        }
        UserCommands::Remove { id } => {
            if services.users.remove(id)? {
                println!("Removed user {id}");
            } else {
                println!("No user with id {id}");
            }
        }
    }
    Ok(())
}

fn run_trip(cmd: TripCommands, services: &Services, format: OutputFormat) -> Result<()> {
    match cmd {
        TripCommands::Add {
            date,
            user,
            vehicle,
            reason,
            km,
        } => {
            let id = services.trips.add_trip(date, user, vehicle, &reason, km)?;
            println!("Recorded trip (id {id})");
        }
        TripCommands::List {
            user,
            vehicle,
            from,
            to,
        } => {
            let mut entries = services.trips.all();
            if let Some(user) = user {
                entries.retain(|t| t.user_id == user);
            }
            if let Some(vehicle) = vehicle {
                entries.retain(|t| t.vehicle_id == vehicle);
            }
            if let Some(from) = from {
                entries.retain(|t| t.date >= from);
            }
            if let Some(to) = to {
                entries.retain(|t| t.date <= to);
            }

            let rows: Vec<_> = entries
                .iter()
                .map(|e| services.trips.to_display(e))
                .collect();
            output::print_trips(format, &rows)?;
        }
        TripCommands::Remove { id } => {
            if services.trips.remove(id)? {
                println!("Removed trip {id}");
            } else {
                println!("No trip with id {id}");
            }
        }
    }
    Ok(())
}
