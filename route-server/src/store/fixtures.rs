//! Seeding a store from a JSON file.
//!
//! Useful for development and demos without having to POST every record.
//! The file holds a JSON array of departures in the same shape the HTTP API
//! accepts.

use std::path::Path;

use crate::domain::{DepartureInput, NewDeparture};

use super::error::StoreError;
use super::memory::DepartureStore;

impl DepartureStore {
    /// Create a store holding every departure listed in `path`.
    ///
    /// Fails on the first record that does not validate; nothing is
    /// partially loaded.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let inputs: Vec<DepartureInput> =
            serde_json::from_str(&json).map_err(|e| StoreError::Json {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let departures = inputs
            .into_iter()
            .map(NewDeparture::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let store = DepartureStore::new();
        for departure in departures {
            store.create(departure).await;
        }

        Ok(store)
    }
}
