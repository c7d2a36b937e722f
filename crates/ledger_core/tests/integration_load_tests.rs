mod support;

use std::rc::Rc;

use ledger_core::test_helpers::{driver_rows, passenger_rows, trip_rows};
use ledger_core::{DriverStatus, LedgerError, RecordKind, TripDispatcher};
use support::fixture_dispatcher;

#[test]
fn loads_every_row() {
    let dispatcher = fixture_dispatcher();
    assert_eq!(dispatcher.passengers().len(), passenger_rows().len());
    assert_eq!(dispatcher.drivers().len(), driver_rows().len());
    assert_eq!(dispatcher.trips().len(), trip_rows().len());
}

#[test]
fn collections_keep_load_order() {
    let dispatcher = fixture_dispatcher();

    let first_passenger = dispatcher.passengers().first().expect("passengers");
    let last_passenger = dispatcher.passengers().last().expect("passengers");
    assert_eq!(first_passenger.name, "User1");
    assert_eq!(first_passenger.id.get(), 1);
    assert_eq!(last_passenger.name, "Driver8");
    assert_eq!(last_passenger.id.get(), 8);

    let first_driver = dispatcher.drivers().first().expect("drivers");
    let last_driver = dispatcher.drivers().last().expect("drivers");
    assert_eq!(first_driver.name, "Driver2");
    assert_eq!(first_driver.id.get(), 2);
    assert_eq!(first_driver.status(), DriverStatus::Unavailable);
    assert_eq!(last_driver.name, "Driver8");
    assert_eq!(last_driver.id.get(), 8);
    assert_eq!(last_driver.status(), DriverStatus::Available);
}

#[test]
fn driver_identity_is_copied_from_passenger() {
    let dispatcher = fixture_dispatcher();
    for driver in dispatcher.drivers() {
        let person = dispatcher
            .find_passenger(driver.id.get().into())
            .expect("valid id")
            .expect("driver is a passenger");
        assert_eq!(driver.name, person.name);
        assert_eq!(driver.phone_number, person.phone_number);
    }
}

#[test]
fn every_trip_is_registered_on_both_sides() {
    let dispatcher = fixture_dispatcher();
    for trip in dispatcher.trips() {
        let driver = dispatcher.driver_of(trip).expect("trip has a driver");
        let passenger = dispatcher.passenger_of(trip).expect("trip has a passenger");
        assert!(driver.driven_trips().iter().any(|t| Rc::ptr_eq(t, trip)));
        assert!(passenger.trips().iter().any(|t| Rc::ptr_eq(t, trip)));
    }
}

#[test]
fn back_references_point_home() {
    let dispatcher = fixture_dispatcher();
    for passenger in dispatcher.passengers() {
        assert!(passenger.trips().iter().all(|t| t.passenger_id == passenger.id));
    }
    for driver in dispatcher.drivers() {
        assert!(driver.driven_trips().iter().all(|t| t.driver_id == Some(driver.id)));
    }
}

#[test]
fn loaded_aggregates_match_rows() {
    let dispatcher = fixture_dispatcher();
    let user1 = dispatcher.find_passenger(1).unwrap().unwrap();
    assert_eq!(user1.trips().len(), 2);
    assert_eq!(user1.net_expenditure(), 10.5 + 8.75);
    assert_eq!(user1.total_time_spent(), 30 * 60 + 27 * 60);

    let driver2 = dispatcher.find_driver(2).unwrap().unwrap();
    assert_eq!(driver2.driven_trips().len(), 2);
    assert_eq!(driver2.total_revenue(), 30.5);
    assert_eq!(driver2.average_rating(), Some(4.0));
}

#[test]
fn drivers_before_passengers_fails_lookup() {
    let mut dispatcher = TripDispatcher::new();
    let err = dispatcher.load_drivers(driver_rows()).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::RecordNotFound {
            kind: RecordKind::Passenger,
            id: 2
        }
    ));
    assert!(dispatcher.drivers().is_empty());
}

#[test]
fn trips_before_drivers_fails_lookup() {
    let mut dispatcher = TripDispatcher::new();
    dispatcher.load_passengers(passenger_rows()).unwrap();
    let err = dispatcher.load_trips(trip_rows()).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::RecordNotFound {
            kind: RecordKind::Driver,
            ..
        }
    ));
    assert!(dispatcher.trips().is_empty());
}

#[test]
fn trip_with_unknown_passenger_aborts_load() {
    let mut trips = trip_rows();
    trips[0].passenger_id = Some(42);
    let err = TripDispatcher::from_records(passenger_rows(), driver_rows(), trips).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::RecordNotFound {
            kind: RecordKind::Passenger,
            id: 42
        }
    ));
}

#[test]
fn bad_status_symbol_aborts_load() {
    let mut drivers = driver_rows();
    drivers[1].status = "available".to_string();
    let err = TripDispatcher::from_records(passenger_rows(), drivers, trip_rows()).unwrap_err();
    assert!(matches!(err, LedgerError::Parse { field: "status", .. }));
}

#[test]
fn bad_trip_cell_aborts_load() {
    let mut trips = trip_rows();
    trips[2].rating = Some("great".to_string());
    let err = TripDispatcher::from_records(passenger_rows(), driver_rows(), trips).unwrap_err();
    assert!(matches!(err, LedgerError::Parse { field: "rating", .. }));
}

#[test]
fn zero_id_row_is_rejected() {
    let mut passengers = passenger_rows();
    passengers[0].id = Some(0);
    let err = TripDispatcher::from_records(passengers, driver_rows(), trip_rows()).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidId { id: Some(0) }));
}
