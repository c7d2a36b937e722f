//! In-memory ride-share ledger.
//!
//! Loads passengers, drivers and trips from tabular records, links them into
//! one consistent ledger and dispatches new trips by matching a requesting
//! passenger to an available driver.
//!
//! # Quick Start
//!
//! ```no_run
//! use ledger_core::{LedgerConfig, TripDispatcher};
//!
//! let mut dispatcher = TripDispatcher::from_config(&LedgerConfig::in_dir("support"))?;
//! let trip = dispatcher.request_trip(5)?;
//! println!("trip {} assigned to driver {:?}", trip.id, trip.driver_id);
//! # Ok::<(), ledger_core::LedgerError>(())
//! ```
//!
//! # Architecture
//!
//! - [`records`]: typed rows and CSV readers for the three record sources
//! - [`model`]: passengers, drivers and trips
//! - [`dispatcher`]: load-time joining, lookups and trip requests
//! - [`matching`]: driver selection
//! - [`stats`]: aggregates over trip lists

pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod ids;
pub mod matching;
pub mod model;
pub mod records;
pub mod stats;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use config::{load_config, LedgerConfig};
pub use dispatcher::TripDispatcher;
pub use error::{LedgerError, LedgerResult, RecordKind};
pub use ids::{DriverId, PassengerId, TripId};
pub use model::{Driver, DriverStatus, Passenger, Trip};
