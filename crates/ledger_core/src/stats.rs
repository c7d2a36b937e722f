//! Aggregates over a list of trips.
//!
//! Trips still in progress (no end time, cost or rating yet) are skipped by
//! whichever aggregate needs the missing field.

use std::rc::Rc;

use crate::model::Trip;

pub fn net_expenditure(trips: &[Rc<Trip>]) -> f64 {
    trips.iter().filter_map(|trip| trip.cost).sum()
}

/// Whole seconds between start and end, summed over finished trips.
pub fn total_time_spent(trips: &[Rc<Trip>]) -> i64 {
    trips
        .iter()
        .filter_map(|trip| trip.duration())
        .map(|duration| duration.num_seconds())
        .sum()
}

pub fn average_rating(trips: &[Rc<Trip>]) -> Option<f64> {
    let ratings: Vec<f64> = trips
        .iter()
        .filter_map(|trip| trip.rating)
        .map(f64::from)
        .collect();
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{PassengerId, TripId};
    use chrono::{TimeZone, Utc};

    fn trip(start_day: u32, end_day: Option<u32>, cost: Option<f64>) -> Rc<Trip> {
        let at = |d| Utc.with_ymd_and_hms(2018, 6, d, 12, 0, 0).unwrap();
        Rc::new(Trip {
            id: TripId::new(1).unwrap(),
            driver_id: None,
            passenger_id: PassengerId::new(1).unwrap(),
            start_time: at(start_day),
            end_time: end_day.map(at),
            cost,
            rating: None,
        })
    }

    #[test]
    fn skips_unknown_costs_and_open_trips() {
        let trips = vec![
            trip(1, Some(2), Some(10.0)),
            trip(3, None, None),
            trip(4, Some(4), Some(2.5)),
        ];
        assert_eq!(net_expenditure(&trips), 12.5);
        assert_eq!(total_time_spent(&trips), 86_400);
        assert_eq!(average_rating(&trips), None);
    }

    #[test]
    fn empty_list_sums_to_zero() {
        assert_eq!(net_expenditure(&[]), 0.0);
        assert_eq!(total_time_spent(&[]), 0);
    }
}
