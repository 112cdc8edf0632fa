use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Restaurant;

/// On-disk schema version. A mismatch on read is treated as an empty
/// store; the upgrade step is discard-and-refetch.
const SCHEMA_VERSION: u32 = 1;

/// Store file name inside the cache directory
const STORE_FILE: &str = "restaurants.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    saved_at: DateTime<Utc>,
    restaurants: BTreeMap<u32, Restaurant>,
}

impl StoreFile {
    fn new(restaurants: BTreeMap<u32, Restaurant>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            restaurants,
        }
    }
}

/// Persistent local store of the last known full restaurant list,
/// keyed by restaurant id.
///
/// Every operation is best effort: a store that cannot be opened is
/// reported as absent rather than an error, reads degrade to an empty
/// list, and write failures are swallowed. Callers treat all of these
/// as "no cached data" and fall through to the network.
#[derive(Clone)]
pub struct RestaurantStore {
    path: PathBuf,
}

impl RestaurantStore {
    /// Open (creating if needed) the store under the given directory.
    ///
    /// Returns `None` when the directory cannot be established - the
    /// environment lacks persistent-storage capability and caching is
    /// disabled, which is not a failure.
    pub fn open(dir: PathBuf) -> Option<Self> {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            debug!(dir = %dir.display(), error = %e, "Cache directory unavailable, caching disabled");
            return None;
        }
        Some(Self {
            path: dir.join(STORE_FILE),
        })
    }

    /// Upsert every record by id, last-write-wins.
    ///
    /// Failures are logged and swallowed; a failed write must never
    /// surface to the caller or block the read path that triggered it.
    pub fn write_all(&self, records: &[Restaurant]) {
        if let Err(e) = self.try_write(records) {
            debug!(error = %e, "Failed to write restaurant cache");
        }
    }

    /// Every currently stored record, in id order.
    ///
    /// Returns an empty list (never an error) when the file is missing,
    /// unreadable, unparseable, or carries an unknown schema version.
    pub fn read_all(&self) -> Vec<Restaurant> {
        match self.try_read() {
            Ok(Some(file)) => file.restaurants.into_values().collect(),
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!(error = %e, "Failed to read restaurant cache, treating as empty");
                Vec::new()
            }
        }
    }

    /// When the store was last written, if it holds readable data.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.try_read().ok().flatten().map(|file| file.saved_at)
    }

    fn try_read(&self) -> Result<Option<StoreFile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cache file: {}", self.path.display()))?;

        let file: StoreFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", self.path.display()))?;

        if file.version != SCHEMA_VERSION {
            debug!(
                found = file.version,
                expected = SCHEMA_VERSION,
                "Cache schema version mismatch, treating as empty"
            );
            return Ok(None);
        }

        Ok(Some(file))
    }

    fn try_write(&self, records: &[Restaurant]) -> Result<()> {
        // Upsert into whatever is already stored; unreadable state is
        // discarded rather than propagated.
        let mut restaurants = match self.try_read() {
            Ok(Some(file)) => file.restaurants,
            Ok(None) | Err(_) => BTreeMap::new(),
        };

        for record in records {
            restaurants.insert(record.id, record.clone());
        }

        let contents = serde_json::to_string_pretty(&StoreFile::new(restaurants))?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write cache file: {}", self.path.display()))?;
        Ok(())
    }
}
