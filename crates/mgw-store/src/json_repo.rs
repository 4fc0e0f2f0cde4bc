//! JSON array snapshots on disk

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;

use mgw_core::errors::MgwError;
use mgw_core::{log_op_end, log_op_error, log_op_start, Item, Order, Repository};

use crate::atomic::atomic_write;
use crate::errors::{corrupt_snapshot, io_error, Result};

pub const MENU_FILE: &str = "menu.json";
pub const LEDGER_FILE: &str = "transactions.json";

/// Repository storing one collection as a pretty-printed JSON array
///
/// A missing or blank file loads as an empty collection. Every save
/// rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> JsonFileRepository<T> {
    fn load_impl(&self) -> Result<Vec<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(io_error("read snapshot", &self.path, err)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| corrupt_snapshot(&self.path, e))
    }

    fn save_impl(&self, records: &[T]) -> Result<()> {
        let mut json = serde_json::to_vec_pretty(records)?;
        json.push(b'\n');
        atomic_write(&self.path, &json)
    }
}

impl<T: Serialize + DeserializeOwned> Repository<T> for JsonFileRepository<T> {
    fn load(&self) -> Result<Vec<T>> {
        let path = self.path.display().to_string();
        log_op_start!("snapshot_load", path = %path);
        let start = Instant::now();

        let records = self.load_impl().map_err(|e: MgwError| {
            log_op_error!(
                "snapshot_load",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path
            );
            e
        })?;

        log_op_end!(
            "snapshot_load",
            duration_ms = start.elapsed().as_millis() as u64,
            path = %path,
            records = records.len()
        );
        Ok(records)
    }

    fn save(&self, records: &[T]) -> Result<()> {
        let path = self.path.display().to_string();
        log_op_start!("snapshot_save", path = %path, records = records.len());
        let start = Instant::now();

        self.save_impl(records).map_err(|e| {
            log_op_error!(
                "snapshot_save",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path
            );
            e
        })?;

        log_op_end!(
            "snapshot_save",
            duration_ms = start.elapsed().as_millis() as u64,
            path = %path
        );
        Ok(())
    }
}

/// Repositories for the menu and ledger snapshots inside `dir`
pub fn open_data_dir(
    dir: impl AsRef<Path>,
) -> (JsonFileRepository<Item>, JsonFileRepository<Order>) {
    let dir = dir.as_ref();
    (
        JsonFileRepository::new(dir.join(MENU_FILE)),
        JsonFileRepository::new(dir.join(LEDGER_FILE)),
    )
}
