#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use ledger_core::clock::FixedClock;
use ledger_core::test_helpers::{driver_rows, passenger_rows, trip_rows};
use ledger_core::{LedgerConfig, TripDispatcher};

/// Directory holding the CSV fixtures that mirror `test_helpers`.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

pub fn fixture_config() -> LedgerConfig {
    LedgerConfig::in_dir(data_dir())
}

/// The instant every dispatched trip starts at in these tests.
pub fn dispatch_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 10, 1, 17, 45, 0)
        .single()
        .expect("valid dispatch time")
}

/// Fixture ledger with a frozen clock.
pub fn fixture_dispatcher() -> TripDispatcher {
    let mut dispatcher = TripDispatcher::new().with_clock(FixedClock(dispatch_time()));
    dispatcher
        .load_all(passenger_rows(), driver_rows(), trip_rows())
        .expect("fixture rows load");
    dispatcher
}
