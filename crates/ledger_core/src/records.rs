//! Typed rows for the three record sources and the CSV readers that produce them.
//!
//! Rows keep ids as raw integers (`None` for an empty cell) and the trip's
//! time/cost/rating cells as text; the dispatcher validates and converts them
//! while joining.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};
use crate::model::DriverStatus;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PassengerRecord {
    pub id: Option<i64>,
    pub name: String,
    #[serde(alias = "phone_num")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverRecord {
    pub id: Option<i64>,
    pub vin: String,
    pub status: String,
}

impl DriverRecord {
    pub fn status(&self) -> LedgerResult<DriverStatus> {
        self.status.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripRecord {
    pub id: Option<i64>,
    pub driver_id: Option<i64>,
    pub passenger_id: Option<i64>,
    pub start_time: String,
    pub end_time: Option<String>,
    pub cost: Option<String>,
    pub rating: Option<String>,
}

impl TripRecord {
    pub fn start_time(&self) -> LedgerResult<DateTime<Utc>> {
        parse_timestamp("start_time", &self.start_time)
    }

    pub fn end_time(&self) -> LedgerResult<Option<DateTime<Utc>>> {
        non_blank(&self.end_time)
            .map(|raw| parse_timestamp("end_time", raw))
            .transpose()
    }

    pub fn cost(&self) -> LedgerResult<Option<f64>> {
        non_blank(&self.cost)
            .map(|raw| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|cost| cost.is_finite())
                    .ok_or_else(|| LedgerError::parse("cost", raw))
            })
            .transpose()
    }

    pub fn rating(&self) -> LedgerResult<Option<u8>> {
        non_blank(&self.rating)
            .map(|raw| raw.parse::<u8>().map_err(|_| LedgerError::parse("rating", raw)))
            .transpose()
    }
}

fn non_blank(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().map(str::trim).filter(|raw| !raw.is_empty())
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC) or a bare date (midnight UTC).
pub fn parse_timestamp(field: &'static str, raw: &str) -> LedgerResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| LedgerError::parse(field, raw))
}

/// Reads every row of a headed CSV stream.
pub fn read_records<T, R>(reader: R) -> LedgerResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn read_records_from_path<T, P>(path: P) -> LedgerResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    read_records(file)
}
