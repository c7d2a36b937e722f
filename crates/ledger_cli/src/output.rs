//! Text and JSON renderings of ledger records.

use std::error::Error;
use std::fmt;

use ledger_core::{Driver, DriverStatus, Passenger, Trip};
use serde::Serialize;

pub fn print<T: Serialize + fmt::Display>(view: &T, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        println!("{view}");
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TripView<'a> {
    #[serde(flatten)]
    trip: &'a Trip,
    driver_name: Option<&'a str>,
    vehicle_id: Option<&'a str>,
}

impl<'a> TripView<'a> {
    pub fn new(trip: &'a Trip, driver: Option<&'a Driver>) -> Self {
        Self {
            trip,
            driver_name: driver.map(|d| d.name.as_str()),
            vehicle_id: driver.map(|d| d.vehicle_id.as_str()),
        }
    }
}

impl fmt::Display for TripView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trip {} for passenger {} started {}",
            self.trip.id,
            self.trip.passenger_id,
            self.trip.start_time.to_rfc3339()
        )?;
        if let (Some(driver_id), Some(name)) = (self.trip.driver_id, self.driver_name) {
            write!(f, ", driver {driver_id} ({name})")?;
        }
        if let Some(vehicle) = self.vehicle_id {
            write!(f, ", vehicle {vehicle}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct PassengerView<'a> {
    id: u32,
    name: &'a str,
    phone_number: &'a str,
    trips: usize,
    net_expenditure: f64,
    total_time_spent_secs: i64,
}

impl<'a> From<&'a Passenger> for PassengerView<'a> {
    fn from(passenger: &'a Passenger) -> Self {
        Self {
            id: passenger.id.get(),
            name: &passenger.name,
            phone_number: &passenger.phone_number,
            trips: passenger.trips().len(),
            net_expenditure: passenger.net_expenditure(),
            total_time_spent_secs: passenger.total_time_spent(),
        }
    }
}

impl fmt::Display for PassengerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passenger {} {} ({}): {} trips, spent {:.2}, {} s riding",
            self.id,
            self.name,
            self.phone_number,
            self.trips,
            self.net_expenditure,
            self.total_time_spent_secs
        )
    }
}

#[derive(Debug, Serialize)]
pub struct DriverView<'a> {
    id: u32,
    name: &'a str,
    vehicle_id: &'a str,
    status: DriverStatus,
    driven_trips: usize,
    total_revenue: f64,
    average_rating: Option<f64>,
}

impl<'a> From<&'a Driver> for DriverView<'a> {
    fn from(driver: &'a Driver) -> Self {
        Self {
            id: driver.id.get(),
            name: &driver.name,
            vehicle_id: &driver.vehicle_id,
            status: driver.status(),
            driven_trips: driver.driven_trips().len(),
            total_revenue: driver.total_revenue(),
            average_rating: driver.average_rating(),
        }
    }
}

impl fmt::Display for DriverView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "driver {} {} [{}] {}: {} trips, revenue {:.2}",
            self.id, self.name, self.vehicle_id, self.status, self.driven_trips, self.total_revenue
        )?;
        match self.average_rating {
            Some(rating) => write!(f, ", rating {rating:.1}"),
            None => write!(f, ", unrated"),
        }
    }
}
