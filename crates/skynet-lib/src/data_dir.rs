use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SKYNET_DATA_DIR";

const AIRPORTS_FILE: &str = "airports.txt";
const AIRCRAFT_FILE: &str = "aircraft.txt";
const ROUTES_FILE: &str = "routes.txt";
const FLIGHTS_FILE: &str = "flights.txt";

/// Locations of the four entity files inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub dir: PathBuf,
    pub airports: PathBuf,
    pub aircraft: PathBuf,
    pub routes: PathBuf,
    pub flights: PathBuf,
}

impl DataFiles {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            airports: dir.join(AIRPORTS_FILE),
            aircraft: dir.join(AIRCRAFT_FILE),
            routes: dir.join(ROUTES_FILE),
            flights: dir.join(FLIGHTS_FILE),
            dir,
        }
    }

    /// Create the data directory (and parents) if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            debug!(path = %self.dir.display(), "creating data directory");
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "skynet", "skynet").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the data directory: explicit override, then `SKYNET_DATA_DIR`,
/// then the platform default.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = target {
        return Ok(path.to_path_buf());
    }

    if let Ok(value) = env::var(DATA_DIR_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }

    default_data_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_target_wins() {
        let resolved = resolve_data_dir(Some(Path::new("/tmp/skynet-explicit"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/skynet-explicit"));
    }

    #[test]
    fn data_files_live_in_the_directory() {
        let files = DataFiles::in_dir("data_files");
        assert_eq!(files.airports, Path::new("data_files").join("airports.txt"));
        assert_eq!(files.flights, Path::new("data_files").join("flights.txt"));
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let files = DataFiles::in_dir(temp.path().join("a").join("b"));
        files.ensure_dir().unwrap();
        assert!(files.dir.is_dir());
    }
}
