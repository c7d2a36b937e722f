use crate::ids::{DriverId, PassengerId};
use crate::model::Driver;

/// Picks the driver for a passenger's trip request.
///
/// Implementations see the dispatcher's drivers in stored order and must only
/// return a driver that is available and is not the requesting passenger.
///
/// # Examples
///
/// ```rust
/// use ledger_core::ids::{DriverId, PassengerId};
/// use ledger_core::matching::{FirstAvailable, MatchingAlgorithm};
/// use ledger_core::model::{Driver, DriverStatus};
///
/// let drivers = vec![
///     Driver::new(DriverId::new(2).unwrap(), "Driver2", "", "VIN2", DriverStatus::Unavailable),
///     Driver::new(DriverId::new(8).unwrap(), "Driver8", "", "VIN8", DriverStatus::Available),
/// ];
/// let picked = FirstAvailable.find_match(PassengerId::new(5).unwrap(), &drivers);
/// assert_eq!(picked, Some(DriverId::new(8).unwrap()));
/// ```
pub trait MatchingAlgorithm {
    /// Returns the chosen driver, or `None` when nobody is eligible.
    fn find_match(&self, passenger_id: PassengerId, drivers: &[Driver]) -> Option<DriverId>;
}

/// Whether `driver` may be dispatched to `passenger_id` at all.
pub fn is_eligible(driver: &Driver, passenger_id: PassengerId) -> bool {
    driver.is_available() && driver.id.rider_id() != passenger_id
}
