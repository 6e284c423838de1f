//! Integration tests for the application services, backed by real file
//! repositories in a temp directory.

use std::path::Path;
use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;
use uuid::Uuid;

use fuhrpark_app::{BrandCatalogService, TripLogService, UserService, VehicleService};
use fuhrpark_domain::repository::{TripLogRepository, UserRepository, VehicleRepository};
use fuhrpark_infra::{
    FileBrandCatalogRepository, FileTripLogRepository, FileUserRepository, FileVehicleRepository,
};
use fuhrpark_types::{Error, RepairKind};

struct Services {
    catalog: Rc<BrandCatalogService>,
    vehicles: VehicleService,
    users: UserService,
    trips: TripLogService,
}

fn wire(data_dir: &Path) -> Services {
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

    Services {
        catalog,
        vehicles,
        users,
        trips,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn car_requires_registered_brand_model() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());

    let err = s
        .vehicles
        .add_car("M-AB 123", "VW", "Golf", 2020, 5, Decimal::from(30_000));
    assert!(matches!(err, Err(Error::UnknownReference(_))));
    assert!(s.vehicles.all().is_empty());

    s.catalog.add_model("VW", "Golf").unwrap();
    s.vehicles
        .add_car("M-AB 123", "VW", "Golf", 2020, 5, Decimal::from(30_000))
        .unwrap();
    assert_eq!(s.vehicles.all().len(), 1);
}

#[test]
fn duplicate_license_plate_is_rejected_in_any_casing() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());
    s.catalog.add_model("VW", "Golf").unwrap();

    s.vehicles
        .add_car("AB-123", "VW", "Golf", 2020, 5, Decimal::from(30_000))
        .unwrap();

    let err = s
        .vehicles
        .add_car("  ab-123 ", "VW", "Golf", 2021, 4, Decimal::from(28_000));
    assert!(matches!(err, Err(Error::Duplicate(_))));
    assert_eq!(s.vehicles.all().len(), 1);
}

#[test]
fn display_name_uniqueness_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());

    s.users.add_person("Max", "Mustermann").unwrap();
    let err = s.users.add_person("max", "mustermann");
    assert!(matches!(err, Err(Error::Duplicate(_))));

    // a company may not shadow a person's name either
    let err = s.users.add_company("MAX MUSTERMANN");
    assert!(matches!(err, Err(Error::Duplicate(_))));

    assert_eq!(s.users.all().len(), 1);
}

#[test]
fn fleet_value_tracks_depreciation() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());
    s.catalog.add_model("VW", "Golf").unwrap();
    s.catalog.add_model("MAN", "TGX").unwrap();

    let car_id = s
        .vehicles
        .add_car("M-AB 1", "VW", "Golf", 2020, 5, Decimal::from(30_000))
        .unwrap();
    s.vehicles
        .add_truck("M-TR 2", "MAN", "TGX", 2018, Decimal::from(12_000), Decimal::from(80_000))
        .unwrap();

    assert_eq!(s.vehicles.fleet_value(), Decimal::from(110_000));

    s.vehicles
        .add_depreciation(car_id, Decimal::from(5_000), "first year", None)
        .unwrap();
    assert_eq!(s.vehicles.fleet_value(), Decimal::from(105_000));
    assert_eq!(
        s.vehicles.get_required(car_id).unwrap().residual_value(),
        Decimal::from(25_000)
    );
}

#[test]
fn depreciation_underflow_leaves_vehicle_unchanged() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());
    s.catalog.add_model("VW", "Golf").unwrap();

    let id = s
        .vehicles
        .add_car("M-AB 1", "VW", "Golf", 2020, 5, Decimal::from(10_000))
        .unwrap();

    let err = s
        .vehicles
        .add_depreciation(id, Decimal::from(10_001), "too much", None);
    assert!(matches!(err, Err(Error::ValueUnderflow { .. })));

    let vehicle = s.vehicles.get_required(id).unwrap();
    assert_eq!(vehicle.residual_value(), Decimal::from(10_000));
    assert!(vehicle.depreciations().is_empty());
}

#[test]
fn depreciation_on_unknown_vehicle_fails() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());

    let err = s
        .vehicles
        .add_depreciation(Uuid::new_v4(), Decimal::from(100), "wear", None);
    assert!(matches!(err, Err(Error::NotFound(_))));
}

#[test]
fn repairs_are_booked_and_removed_through_the_service() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());
    s.catalog.add_model("VW", "Golf").unwrap();

    let id = s
        .vehicles
        .add_car("M-AB 1", "VW", "Golf", 2020, 5, Decimal::from(30_000))
        .unwrap();

    let repair_id = s
        .vehicles
        .add_repair(
            id,
            date(2024, 6, 1),
            "windshield",
            RepairKind::Damage,
            Decimal::from(400),
            "Carglass",
        )
        .unwrap();
    s.vehicles
        .add_repair(
            id,
            date(2024, 7, 1),
            "tires",
            RepairKind::WearPart,
            Decimal::from(600),
            "ATU",
        )
        .unwrap();

    assert_eq!(s.vehicles.fleet_repair_cost(), Decimal::from(1_000));

    assert!(s.vehicles.remove_repair(id, repair_id).unwrap());
    assert!(!s.vehicles.remove_repair(id, repair_id).unwrap());
    assert_eq!(s.vehicles.fleet_repair_cost(), Decimal::from(600));
}

#[test]
fn trip_requires_existing_user_and_vehicle() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());
    s.catalog.add_model("VW", "Golf").unwrap();

    let user_id = s.users.add_person("Max", "Mustermann").unwrap();
    let vehicle_id = s
        .vehicles
        .add_car("M-AB 1", "VW", "Golf", 2020, 5, Decimal::from(30_000))
        .unwrap();

    let err = s.trips.add_trip(
        date(2024, 5, 1),
        Uuid::new_v4(),
        vehicle_id,
        "errand",
        Decimal::from(10),
    );
    assert!(matches!(err, Err(Error::UnknownReference(_))));

    let err = s.trips.add_trip(
        date(2024, 5, 1),
        user_id,
        Uuid::new_v4(),
        "errand",
        Decimal::from(10),
    );
    assert!(matches!(err, Err(Error::UnknownReference(_))));

    // nothing was persisted by the failed attempts
    assert!(s.trips.all().is_empty());
    assert!(!dir.path().join("trips.json").exists());

    s.trips
        .add_trip(date(2024, 5, 1), user_id, vehicle_id, "errand", Decimal::from(10))
        .unwrap();
    assert_eq!(s.trips.all().len(), 1);
}

#[test]
fn trip_views_sort_and_filter() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());
    s.catalog.add_model("VW", "Golf").unwrap();

    let max = s.users.add_person("Max", "Mustermann").unwrap();
    let erika = s.users.add_person("Erika", "Musterfrau").unwrap();
    let golf = s
        .vehicles
        .add_car("M-AB 1", "VW", "Golf", 2020, 5, Decimal::from(30_000))
        .unwrap();

    s.trips
        .add_trip(date(2024, 5, 1), max, golf, "delivery", Decimal::from(12))
        .unwrap();
    s.trips
        .add_trip(date(2024, 5, 3), erika, golf, "customer visit", Decimal::from(80))
        .unwrap();
    s.trips
        .add_trip(date(2024, 4, 20), max, golf, "airport", Decimal::from(35))
        .unwrap();

    let all = s.trips.all();
    let dates: Vec<NaiveDate> = all.iter().map(|t| t.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 5, 3), date(2024, 5, 1), date(2024, 4, 20)]
    );

    assert_eq!(s.trips.by_user(max).len(), 2);
    assert_eq!(s.trips.by_vehicle(golf).len(), 3);

    let range = s.trips.by_date_range(date(2024, 5, 1), date(2024, 5, 3));
    assert_eq!(range.len(), 2);
}

#[test]
fn trip_display_degrades_to_placeholders() {
    let dir = tempdir().unwrap();
    let s = wire(dir.path());
    s.catalog.add_model("VW", "Golf").unwrap();

    let user_id = s.users.add_person("Max", "Mustermann").unwrap();
    let vehicle_id = s
        .vehicles
        .add_car("M-AB 1", "VW", "Golf", 2020, 5, Decimal::from(30_000))
        .unwrap();
    s.trips
        .add_trip(date(2024, 5, 1), user_id, vehicle_id, "errand", Decimal::from(10))
        .unwrap();

    let display = s.trips.to_display(&s.trips.all()[0]);
    assert_eq!(display.user, "Max Mustermann");
    assert_eq!(display.vehicle, "M-AB 1 (VW Golf)");

    // deleting the user does not cascade; the display substitutes a placeholder
    assert!(s.users.remove(user_id).unwrap());
    assert_eq!(s.trips.all().len(), 1);

    let display = s.trips.to_display(&s.trips.all()[0]);
    assert!(display.user.starts_with("[user "));
    assert_eq!(display.vehicle, "M-AB 1 (VW Golf)");
}

#[test]
fn catalog_changes_survive_rewiring() {
    let dir = tempdir().unwrap();
    {
        let s = wire(dir.path());
        s.catalog.add_model("BMW", "X5").unwrap();
        s.catalog.add_model("BMW", "X3").unwrap();
    }

    let s = wire(dir.path());
    assert_eq!(s.catalog.brands(), vec!["BMW".to_string()]);
    assert_eq!(
        s.catalog.models("bmw"),
        vec!["X3".to_string(), "X5".to_string()]
    );
    assert!(s.catalog.is_known_model("bmw", "x5"));
}
