//! Identity domains for the three record kinds.
//!
//! Passengers and drivers share one numeric space in the source data (every
//! driver is also a rider), but they are kept apart here so a driver id can
//! never be used to look up a passenger by accident. The one sanctioned
//! crossing is [`DriverId::rider_id`].

use std::fmt;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult, RecordKind};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Validates a raw id; zero and negative values are rejected.
            pub fn new(raw: i64) -> LedgerResult<Self> {
                check_id(raw).map(Self)
            }

            /// Validates an id cell from a record source; an empty cell is invalid.
            pub fn from_cell(raw: Option<i64>) -> LedgerResult<Self> {
                require_id(raw).map(Self)
            }

            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                i64::from(id.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Id of a passenger (rider) record.
    PassengerId
);
record_id!(
    /// Id of a driver record. Numerically equal to the driver's passenger id.
    DriverId
);
record_id!(
    /// Id of a trip, unique across the ledger.
    TripId
);

impl DriverId {
    /// The passenger record of the same person.
    pub fn rider_id(self) -> PassengerId {
        PassengerId(self.0)
    }
}

impl TripId {
    /// The id after this one, or an error once the id space is used up.
    pub fn next(self) -> LedgerResult<TripId> {
        self.0
            .checked_add(1)
            .map(TripId)
            .ok_or(LedgerError::IdsExhausted {
                kind: RecordKind::Trip,
            })
    }
}

impl Default for TripId {
    fn default() -> Self {
        TripId(1)
    }
}

/// Rejects ids that are zero, negative or too large for the id space.
pub fn check_id(raw: i64) -> LedgerResult<u32> {
    if raw <= 0 {
        return Err(LedgerError::InvalidId { id: Some(raw) });
    }
    u32::try_from(raw).map_err(|_| LedgerError::InvalidId { id: Some(raw) })
}

/// Checks an id cell as it arrives from a record source.
///
/// A missing cell is an [`LedgerError::InvalidId`], not a parse error, so
/// callers see the same failure for "no id" and "id 0".
pub fn require_id(raw: Option<i64>) -> LedgerResult<u32> {
    check_id(raw.ok_or(LedgerError::InvalidId { id: None })?)
}
