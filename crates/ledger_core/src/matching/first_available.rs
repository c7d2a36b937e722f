use crate::ids::{DriverId, PassengerId};
use crate::model::Driver;

use super::algorithm::{is_eligible, MatchingAlgorithm};

/// First eligible driver in stored order.
///
/// No scoring: the result depends only on driver order and status, which
/// makes dispatch deterministic for a given load.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl MatchingAlgorithm for FirstAvailable {
    fn find_match(&self, passenger_id: PassengerId, drivers: &[Driver]) -> Option<DriverId> {
        drivers
            .iter()
            .find(|driver| is_eligible(driver, passenger_id))
            .map(|driver| driver.id)
    }
}
