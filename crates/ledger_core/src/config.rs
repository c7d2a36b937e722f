//! Where the ledger's record files live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LedgerResult;

const DEFAULT_PASSENGERS_PATH: &str = "support/users.csv";
const DEFAULT_DRIVERS_PATH: &str = "support/drivers.csv";
const DEFAULT_TRIPS_PATH: &str = "support/trips.csv";

/// Paths of the three CSV record sources.
///
/// Any key missing from a TOML file falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub passengers: PathBuf,
    pub drivers: PathBuf,
    pub trips: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            passengers: PathBuf::from(DEFAULT_PASSENGERS_PATH),
            drivers: PathBuf::from(DEFAULT_DRIVERS_PATH),
            trips: PathBuf::from(DEFAULT_TRIPS_PATH),
        }
    }
}

impl LedgerConfig {
    /// All three files under one directory, using the default file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            passengers: dir.join("users.csv"),
            drivers: dir.join("drivers.csv"),
            trips: dir.join("trips.csv"),
        }
    }

    pub fn with_passengers(mut self, path: impl Into<PathBuf>) -> Self {
        self.passengers = path.into();
        self
    }

    pub fn with_drivers(mut self, path: impl Into<PathBuf>) -> Self {
        self.drivers = path.into();
        self
    }

    pub fn with_trips(mut self, path: impl Into<PathBuf>) -> Self {
        self.trips = path.into();
        self
    }
}

/// Load a [`LedgerConfig`] from a TOML file.
pub fn load_config(path: &Path) -> LedgerResult<LedgerConfig> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_point_at_support_dir() {
        let config = LedgerConfig::default();
        assert_eq!(config, LedgerConfig::in_dir("support"));
    }

    #[test]
    fn builder_overrides_single_paths() {
        let config = LedgerConfig::default().with_trips("other/trips.csv");
        assert_eq!(config.trips, PathBuf::from("other/trips.csv"));
        assert_eq!(config.drivers, PathBuf::from(DEFAULT_DRIVERS_PATH));
    }

    #[test]
    fn loads_partial_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "drivers = \"data/fleet.csv\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.drivers, PathBuf::from("data/fleet.csv"));
        assert_eq!(config.passengers, PathBuf::from(DEFAULT_PASSENGERS_PATH));
    }

    #[test]
    fn rejects_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "drivers = [").unwrap();
        assert!(matches!(load_config(file.path()), Err(LedgerError::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_config(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(LedgerError::Io(_))));
    }
}
