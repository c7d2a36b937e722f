use std::fmt;

use thiserror::Error;

use crate::ids::TripId;

/// Which collection a failed lookup or id allocation was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Passenger,
    Driver,
    Trip,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Passenger => write!(f, "passenger"),
            RecordKind::Driver => write!(f, "driver"),
            RecordKind::Trip => write!(f, "trip"),
        }
    }
}

/// Errors raised by the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An id-based lookup received a missing, zero or negative id.
    #[error("id cannot be blank or less than one (got {id:?})")]
    InvalidId { id: Option<i64> },

    /// A row referenced a record that is not loaded.
    #[error("no {kind} with id {id}")]
    RecordNotFound { kind: RecordKind, id: i64 },

    /// Every id the record kind can hold is taken.
    #[error("no {kind} ids left to allocate")]
    IdsExhausted { kind: RecordKind },

    #[error("no driver available for passenger {passenger_id}")]
    NoDriverAvailable { passenger_id: i64 },

    /// A trip was registered on a passenger or driver it does not belong to.
    #[error("trip {trip_id} does not belong to {owner}")]
    TripOwnership { trip_id: TripId, owner: String },

    #[error("invalid value {value:?} for field `{field}`")]
    Parse { field: &'static str, value: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl LedgerError {
    pub(crate) fn parse(field: &'static str, value: impl Into<String>) -> Self {
        LedgerError::Parse {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn not_found(kind: RecordKind, id: impl Into<i64>) -> Self {
        LedgerError::RecordNotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
