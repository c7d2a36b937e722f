//! Test helpers for common test setup and utilities.
//!
//! The fixture rows describe a small ledger used across unit tests,
//! integration tests and benches:
//!
//! - passengers 1 to 8, where 2, 3, 5, 7 and 8 also drive;
//! - drivers in stored order `2, 3, 5, 7, 8`, of which only 5 and 8 are
//!   available;
//! - five finished trips whose ids are not in ascending order (the highest is 7).

use crate::records::{DriverRecord, PassengerRecord, TripRecord};

/// Highest trip id in [`trip_rows`].
pub const FIXTURE_MAX_TRIP_ID: i64 = 7;

pub fn passenger_rows() -> Vec<PassengerRecord> {
    [
        (1, "User1"),
        (2, "Driver2"),
        (3, "Driver3"),
        (4, "User4"),
        (5, "Driver5"),
        (6, "User6"),
        (7, "Driver7"),
        (8, "Driver8"),
    ]
    .into_iter()
    .map(|(id, name)| PassengerRecord {
        id: Some(id),
        name: name.to_string(),
        phone: format!("555-010{id}"),
    })
    .collect()
}

pub fn driver_rows() -> Vec<DriverRecord> {
    [
        (2, "UNAVAILABLE"),
        (3, "UNAVAILABLE"),
        (5, "AVAILABLE"),
        (7, "UNAVAILABLE"),
        (8, "AVAILABLE"),
    ]
    .into_iter()
    .map(|(id, status)| DriverRecord {
        id: Some(id),
        vin: format!("1C9EVBRM0YBC564D{id}"),
        status: status.to_string(),
    })
    .collect()
}

pub fn trip_rows() -> Vec<TripRecord> {
    [
        (1, 2, 1, "2018-05-25T04:30:00+00:00", "2018-05-25T05:00:00+00:00", "10.5", "5"),
        (2, 3, 4, "2018-06-11 22:22:00", "2018-06-11 22:45:00", "15.25", "4"),
        (3, 2, 6, "2018-07-01", "2018-07-02", "20", "3"),
        (7, 8, 1, "2018-08-12T15:04:00+00:00", "2018-08-12T15:31:00+00:00", "8.75", "5"),
        (5, 7, 2, "2018-09-03T07:30:00+00:00", "2018-09-03T08:00:00+00:00", "12", "4"),
    ]
    .into_iter()
    .map(|(id, driver_id, passenger_id, start, end, cost, rating)| TripRecord {
        id: Some(id),
        driver_id: Some(driver_id),
        passenger_id: Some(passenger_id),
        start_time: start.to_string(),
        end_time: Some(end.to_string()),
        cost: Some(cost.to_string()),
        rating: Some(rating.to_string()),
    })
    .collect()
}

/// A generated ledger: `size` people who all drive, every one available
/// except the first, plus one finished trip per adjacent pair.
pub fn fleet_rows(size: i64) -> (Vec<PassengerRecord>, Vec<DriverRecord>, Vec<TripRecord>) {
    let passengers = (1..=size)
        .map(|id| PassengerRecord {
            id: Some(id),
            name: format!("Person{id}"),
            phone: format!("555-{id:04}"),
        })
        .collect();
    let drivers = (1..=size)
        .map(|id| DriverRecord {
            id: Some(id),
            vin: format!("VIN{id:014}"),
            status: if id == 1 { "UNAVAILABLE" } else { "AVAILABLE" }.to_string(),
        })
        .collect();
    let trips = (1..size)
        .map(|id| TripRecord {
            id: Some(id),
            driver_id: Some(id + 1),
            passenger_id: Some(id),
            start_time: "2018-01-01T08:00:00+00:00".to_string(),
            end_time: Some("2018-01-01T08:20:00+00:00".to_string()),
            cost: Some("9.5".to_string()),
            rating: Some("5".to_string()),
        })
        .collect();
    (passengers, drivers, trips)
}
