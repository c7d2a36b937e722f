use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::ids::{DriverId, PassengerId, TripId};
use crate::stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    Available,
    Unavailable,
}

impl FromStr for DriverStatus {
    type Err = LedgerError;

    /// Case-sensitive: only `AVAILABLE` and `UNAVAILABLE` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(DriverStatus::Available),
            "UNAVAILABLE" => Ok(DriverStatus::Unavailable),
            other => Err(LedgerError::parse("status", other)),
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverStatus::Available => write!(f, "AVAILABLE"),
            DriverStatus::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

/// A single ride. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub id: TripId,
    /// `None` only for trips built outside a dispatcher.
    pub driver_id: Option<DriverId>,
    pub passenger_id: PassengerId,
    pub start_time: DateTime<Utc>,
    /// `None` while the trip is in progress.
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
    pub rating: Option<u8>,
}

impl Trip {
    /// A freshly dispatched trip: started at `start_time`, nothing else known yet.
    pub fn in_progress(
        id: TripId,
        driver_id: DriverId,
        passenger_id: PassengerId,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            driver_id: Some(driver_id),
            passenger_id,
            start_time,
            end_time: None,
            cost: None,
            rating: None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }
}

/// A rider and the trips they have taken.
#[derive(Debug, Clone)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub phone_number: String,
    trips: Vec<Rc<Trip>>,
}

impl Passenger {
    pub fn new(id: PassengerId, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
            trips: Vec::new(),
        }
    }

    pub fn trips(&self) -> &[Rc<Trip>] {
        &self.trips
    }

    /// Appends a trip taken by this passenger.
    pub fn add_trip(&mut self, trip: Rc<Trip>) -> LedgerResult<()> {
        if trip.passenger_id != self.id {
            return Err(LedgerError::TripOwnership {
                trip_id: trip.id,
                owner: format!("passenger {}", self.id),
            });
        }
        self.trips.push(trip);
        Ok(())
    }

    /// Total cost of every trip with a known cost.
    pub fn net_expenditure(&self) -> f64 {
        stats::net_expenditure(&self.trips)
    }

    /// Seconds spent on trips with both timestamps known.
    pub fn total_time_spent(&self) -> i64 {
        stats::total_time_spent(&self.trips)
    }
}

/// A driver. Identity fields are copied from the passenger record of the same person.
#[derive(Debug, Clone)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub phone_number: String,
    pub vehicle_id: String,
    status: DriverStatus,
    driven_trips: Vec<Rc<Trip>>,
}

impl Driver {
    pub fn new(
        id: DriverId,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        vehicle_id: impl Into<String>,
        status: DriverStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
            vehicle_id: vehicle_id.into(),
            status,
            driven_trips: Vec::new(),
        }
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available
    }

    pub fn driven_trips(&self) -> &[Rc<Trip>] {
        &self.driven_trips
    }

    pub fn add_driven_trip(&mut self, trip: Rc<Trip>) -> LedgerResult<()> {
        if trip.driver_id != Some(self.id) {
            return Err(LedgerError::TripOwnership {
                trip_id: trip.id,
                owner: format!("driver {}", self.id),
            });
        }
        self.driven_trips.push(trip);
        Ok(())
    }

    /// Takes the driver off the available pool. There is no way back.
    pub fn mark_on_trip(&mut self) {
        self.status = DriverStatus::Unavailable;
    }

    pub fn total_revenue(&self) -> f64 {
        stats::net_expenditure(&self.driven_trips)
    }

    pub fn total_time_driven(&self) -> i64 {
        stats::total_time_spent(&self.driven_trips)
    }

    /// Mean rating over rated trips; `None` if no driven trip is rated.
    pub fn average_rating(&self) -> Option<f64> {
        stats::average_rating(&self.driven_trips)
    }
}
