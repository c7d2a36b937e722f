mod support;

use ledger_core::LedgerError;
use support::fixture_dispatcher;

#[test]
fn find_passenger_rejects_non_positive_ids() {
    let dispatcher = fixture_dispatcher();
    for id in [0, -1, -99] {
        let err = dispatcher.find_passenger(id).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidId { id: Some(got) } if got == id));
    }
}

#[test]
fn find_driver_rejects_non_positive_ids() {
    let dispatcher = fixture_dispatcher();
    for id in [0, -1, -99] {
        assert!(matches!(
            dispatcher.find_driver(id),
            Err(LedgerError::InvalidId { .. })
        ));
    }
}

#[test]
fn finds_loaded_records() {
    let dispatcher = fixture_dispatcher();
    let passenger = dispatcher.find_passenger(2).unwrap().expect("passenger 2");
    assert_eq!(passenger.name, "Driver2");
    let driver = dispatcher.find_driver(3).unwrap().expect("driver 3");
    assert_eq!(driver.vehicle_id, "1C9EVBRM0YBC564D3");
}

#[test]
fn unknown_positive_id_is_absent_not_an_error() {
    let dispatcher = fixture_dispatcher();
    assert!(dispatcher.find_passenger(999).unwrap().is_none());
    // Passenger 1 never drives.
    assert!(dispatcher.find_driver(1).unwrap().is_none());
}
