//! The trip dispatcher: owns passengers, drivers and trips, joins them at load
//! time and hands out new trips.
//!
//! Loading has to happen in dependency order: passengers, then drivers (a
//! driver takes its name and phone from the passenger record of the same
//! person), then trips (each trip names an existing passenger and driver).
//! Each load stage is all-or-nothing: rows are resolved before anything is
//! appended, so a failing row leaves the collections as they were.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult, RecordKind};
use crate::ids::{DriverId, PassengerId, TripId};
use crate::matching::algorithm::is_eligible;
use crate::matching::{FirstAvailable, MatchingAlgorithm};
use crate::model::{Driver, Passenger, Trip};
use crate::records::{read_records_from_path, DriverRecord, PassengerRecord, TripRecord};

pub struct TripDispatcher {
    passengers: Vec<Passenger>,
    drivers: Vec<Driver>,
    trips: Vec<Rc<Trip>>,
    matching: Box<dyn MatchingAlgorithm>,
    clock: Box<dyn Clock>,
}

impl Default for TripDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TripDispatcher {
    /// An empty ledger with first-available matching and wall-clock trip times.
    pub fn new() -> Self {
        Self {
            passengers: Vec::new(),
            drivers: Vec::new(),
            trips: Vec::new(),
            matching: Box::new(FirstAvailable),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_matching(mut self, matching: impl MatchingAlgorithm + 'static) -> Self {
        self.matching = Box::new(matching);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builds a ledger from already-read rows, in load order.
    pub fn from_records(
        passengers: impl IntoIterator<Item = PassengerRecord>,
        drivers: impl IntoIterator<Item = DriverRecord>,
        trips: impl IntoIterator<Item = TripRecord>,
    ) -> LedgerResult<Self> {
        let mut dispatcher = Self::new();
        dispatcher.load_all(passengers, drivers, trips)?;
        Ok(dispatcher)
    }

    /// Reads the three CSV files named by `config` and builds a ledger.
    pub fn from_config(config: &LedgerConfig) -> LedgerResult<Self> {
        let passengers: Vec<PassengerRecord> = read_records_from_path(&config.passengers)?;
        let drivers: Vec<DriverRecord> = read_records_from_path(&config.drivers)?;
        let trips: Vec<TripRecord> = read_records_from_path(&config.trips)?;
        Self::from_records(passengers, drivers, trips)
    }

    /// Runs all three load stages on this dispatcher.
    pub fn load_all(
        &mut self,
        passengers: impl IntoIterator<Item = PassengerRecord>,
        drivers: impl IntoIterator<Item = DriverRecord>,
        trips: impl IntoIterator<Item = TripRecord>,
    ) -> LedgerResult<()> {
        self.load_passengers(passengers)?;
        self.load_drivers(drivers)?;
        self.load_trips(trips)?;
        info!(
            passengers = self.passengers.len(),
            drivers = self.drivers.len(),
            trips = self.trips.len(),
            "ledger loaded"
        );
        Ok(())
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn trips(&self) -> &[Rc<Trip>] {
        &self.trips
    }

    /// Adds passengers with empty trip lists. Returns the newly added ones.
    pub fn load_passengers(
        &mut self,
        rows: impl IntoIterator<Item = PassengerRecord>,
    ) -> LedgerResult<&[Passenger]> {
        let loaded = rows
            .into_iter()
            .map(|row| -> LedgerResult<Passenger> {
                Ok(Passenger::new(PassengerId::from_cell(row.id)?, row.name, row.phone))
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let start = self.passengers.len();
        self.passengers.extend(loaded);
        info!(count = self.passengers.len() - start, "loaded passengers");
        Ok(&self.passengers[start..])
    }

    /// Adds drivers, copying name and phone from the matching passenger.
    ///
    /// The driver starts with its own empty trip list; it does not share the
    /// passenger's.
    pub fn load_drivers(
        &mut self,
        rows: impl IntoIterator<Item = DriverRecord>,
    ) -> LedgerResult<&[Driver]> {
        let loaded = rows
            .into_iter()
            .map(|row| -> LedgerResult<Driver> {
                let id = DriverId::from_cell(row.id)?;
                let status = row.status()?;
                let person = self
                    .passenger(id.rider_id())
                    .ok_or_else(|| LedgerError::not_found(RecordKind::Passenger, id.rider_id()))?;
                Ok(Driver::new(
                    id,
                    person.name.clone(),
                    person.phone_number.clone(),
                    row.vin,
                    status,
                ))
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let start = self.drivers.len();
        self.drivers.extend(loaded);
        info!(count = self.drivers.len() - start, "loaded drivers");
        Ok(&self.drivers[start..])
    }

    /// Adds historical trips and registers each on its driver and passenger.
    pub fn load_trips(
        &mut self,
        rows: impl IntoIterator<Item = TripRecord>,
    ) -> LedgerResult<&[Rc<Trip>]> {
        let mut resolved = Vec::new();
        for row in rows {
            let passenger_id = PassengerId::from_cell(row.passenger_id)?;
            let driver_id = DriverId::from_cell(row.driver_id)?;
            let passenger_idx = self
                .passenger_index(passenger_id)
                .ok_or_else(|| LedgerError::not_found(RecordKind::Passenger, passenger_id))?;
            let driver_idx = self
                .driver_index(driver_id)
                .ok_or_else(|| LedgerError::not_found(RecordKind::Driver, driver_id))?;

            let trip = Trip {
                id: TripId::from_cell(row.id)?,
                driver_id: Some(driver_id),
                passenger_id,
                start_time: row.start_time()?,
                end_time: row.end_time()?,
                cost: row.cost()?,
                rating: row.rating()?,
            };
            resolved.push((Rc::new(trip), driver_idx, passenger_idx));
        }

        let start = self.trips.len();
        for (trip, driver_idx, passenger_idx) in resolved {
            self.drivers[driver_idx].add_driven_trip(Rc::clone(&trip))?;
            self.passengers[passenger_idx].add_trip(Rc::clone(&trip))?;
            self.trips.push(trip);
        }
        info!(count = self.trips.len() - start, "loaded trips");
        Ok(&self.trips[start..])
    }

    /// Looks up a passenger by id. `Ok(None)` when the id is valid but unknown.
    pub fn find_passenger(&self, id: i64) -> LedgerResult<Option<&Passenger>> {
        let id = PassengerId::new(id)?;
        Ok(self.passenger(id))
    }

    /// Looks up a driver by id. `Ok(None)` when the id is valid but unknown.
    pub fn find_driver(&self, id: i64) -> LedgerResult<Option<&Driver>> {
        let id = DriverId::new(id)?;
        Ok(self.driver_index(id).map(|idx| &self.drivers[idx]))
    }

    pub fn passenger_of(&self, trip: &Trip) -> Option<&Passenger> {
        self.passenger(trip.passenger_id)
    }

    pub fn driver_of(&self, trip: &Trip) -> Option<&Driver> {
        let idx = self.driver_index(trip.driver_id?)?;
        Some(&self.drivers[idx])
    }

    /// Dispatches a new trip for `passenger_id`.
    ///
    /// The matching algorithm picks the driver; the driver becomes unavailable
    /// and the trip is recorded on the ledger, the driver and the passenger.
    pub fn request_trip(&mut self, passenger_id: i64) -> LedgerResult<Rc<Trip>> {
        let passenger_id = PassengerId::new(passenger_id)?;
        let passenger_idx = self
            .passenger_index(passenger_id)
            .ok_or_else(|| LedgerError::not_found(RecordKind::Passenger, passenger_id))?;

        let driver_idx = self
            .matching
            .find_match(passenger_id, &self.drivers)
            .and_then(|driver_id| self.driver_index(driver_id))
            .filter(|&idx| is_eligible(&self.drivers[idx], passenger_id));
        let Some(driver_idx) = driver_idx else {
            warn!(%passenger_id, "no driver available");
            return Err(LedgerError::NoDriverAvailable {
                passenger_id: passenger_id.into(),
            });
        };

        let driver_id = self.drivers[driver_idx].id;
        let trip = Rc::new(Trip::in_progress(
            self.next_trip_id()?,
            driver_id,
            passenger_id,
            self.clock.now(),
        ));

        self.drivers[driver_idx].add_driven_trip(Rc::clone(&trip))?;
        self.passengers[passenger_idx].add_trip(Rc::clone(&trip))?;
        self.trips.push(Rc::clone(&trip));
        self.drivers[driver_idx].mark_on_trip();

        debug!(trip_id = %trip.id, %driver_id, %passenger_id, "trip dispatched");
        Ok(trip)
    }

    /// One past the highest trip id on the ledger; the first trip gets id 1.
    fn next_trip_id(&self) -> LedgerResult<TripId> {
        match self.trips.iter().map(|trip| trip.id).max() {
            Some(highest) => highest.next(),
            None => Ok(TripId::default()),
        }
    }

    fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passenger_index(id).map(|idx| &self.passengers[idx])
    }

    fn passenger_index(&self, id: PassengerId) -> Option<usize> {
        self.passengers.iter().position(|passenger| passenger.id == id)
    }

    fn driver_index(&self, id: DriverId) -> Option<usize> {
        self.drivers.iter().position(|driver| driver.id == id)
    }
}

impl fmt::Display for TripDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TripDispatcher: {} trips, {} drivers, {} passengers",
            self.trips.len(),
            self.drivers.len(),
            self.passengers.len()
        )
    }
}

impl fmt::Debug for TripDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripDispatcher")
            .field("passengers", &self.passengers.len())
            .field("drivers", &self.drivers.len())
            .field("trips", &self.trips.len())
            .finish_non_exhaustive()
    }
}
