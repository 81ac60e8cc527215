//! Cart snapshot stores.
//!
//! The persistence collaborator behind the cart session. Stores are
//! deliberately dumb: load gives back the raw snapshot (or nothing), save
//! writes one out. What to do about failures is the session's call.

use std::{
    cell::RefCell,
    fs, io,
    path::PathBuf,
};

use thiserror::Error;

use crate::snapshot::CartSnapshot;

/// Errors reading or writing a cart snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem error.
    #[error("failed to read or write cart snapshot: {0}")]
    Io(#[from] io::Error),

    /// The stored payload could not be encoded or decoded as JSON.
    #[error("failed to encode or decode cart snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence port for cart snapshots.
pub trait CartStore {
    /// Load the persisted snapshot, if one exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot exists but cannot be read
    /// or decoded. A missing snapshot is `Ok(None)`, not an error.
    fn load(&self) -> Result<Option<CartSnapshot>, StorageError>;

    /// Persist a snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be encoded or
    /// written.
    fn save(&self, snapshot: &CartSnapshot) -> Result<(), StorageError>;
}

impl<T: CartStore + ?Sized> CartStore for &T {
    fn load(&self) -> Result<Option<CartSnapshot>, StorageError> {
        (**self).load()
    }

    fn save(&self, snapshot: &CartSnapshot) -> Result<(), StorageError> {
        (**self).save(snapshot)
    }
}

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, snapshot: &CartSnapshot) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(snapshot)?;
        fs::write(&self.path, encoded)?;

        Ok(())
    }
}

/// In-memory snapshot store for tests and demos.
///
/// Holds the serialized JSON rather than the snapshot value, so the encode
/// and decode paths are exercised just like the file-backed store. The cart
/// runs on a single logical thread, so interior mutability via `RefCell` is
/// enough here.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StorageError> {
        self.slot
            .borrow()
            .as_deref()
            .map(|contents| serde_json::from_str(contents).map_err(StorageError::from))
            .transpose()
    }

    fn save(&self, snapshot: &CartSnapshot) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(snapshot)?;
        *self.slot.borrow_mut() = Some(encoded);

        Ok(())
    }
}
