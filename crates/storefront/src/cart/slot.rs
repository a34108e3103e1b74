//! Cart persistence slots.
//!
//! A slot is a single named location holding the serialized cart as one
//! JSON array, surviving page reloads within the same session. Reads and
//! writes always cover the whole array; last write wins. There is no
//! merge logic and no concurrent-session reconciliation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use super::CartLineItem;

/// Errors reading or writing a cart slot.
///
/// The cart store swallows these (logging them) rather than surfacing
/// them to the user; they are public so slot implementations outside
/// this crate can produce them.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Slot I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Slot contents are not a valid cart: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A single named storage location for the serialized cart.
pub trait CartSlot {
    /// Read the serialized cart. `Ok(None)` means the slot has never
    /// been written.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` when the slot cannot be read or its contents
    /// do not parse as a cart.
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, SlotError>;

    /// Replace the slot contents with the given items.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` when the new contents cannot be written.
    fn save(&self, items: &[CartLineItem]) -> Result<(), SlotError>;
}

/// File-backed slot holding one JSON array under a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Create a slot at the given path. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's location on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartSlot for JsonFileSlot {
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, SlotError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), SlotError> {
        let json = serde_json::to_string(items)?;
        // Write a sibling temp file and rename it over the slot, so a
        // failed write leaves the previous contents intact.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    items: Mutex<Option<Vec<CartLineItem>>>,
}

impl MemorySlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartSlot for MemorySlot {
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, SlotError> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), SlotError> {
        *self.items.lock().unwrap_or_else(PoisonError::into_inner) = Some(items.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use vapemart_core::ProductId;

    use super::*;

    fn line(id: &str, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ProductId::from(id),
            name: format!("Product {id}"),
            price: dec!(19.99),
            image: String::new(),
            category: "Vape".to_owned(),
            quantity,
        }
    }

    #[test]
    fn test_file_slot_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let slot = JsonFileSlot::new(dir.path().join("cart.json"));
        assert!(slot.load().expect("load").is_none());
    }

    #[test]
    fn test_file_slot_round_trips_items() {
        let dir = tempfile::tempdir().expect("tempdir");
        let slot = JsonFileSlot::new(dir.path().join("cart.json"));

        let items = vec![line("p-1", 2), line("p-2", 1)];
        slot.save(&items).expect("save");

        let loaded = slot.load().expect("load").expect("some");
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_file_slot_corrupt_contents_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").expect("write");

        let slot = JsonFileSlot::new(path);
        assert!(matches!(slot.load(), Err(SlotError::Malformed(_))));
    }

    #[test]
    fn test_memory_slot_round_trips_items() {
        let slot = MemorySlot::new();
        assert!(slot.load().expect("load").is_none());

        let items = vec![line("p-1", 3)];
        slot.save(&items).expect("save");
        assert_eq!(slot.load().expect("load"), Some(items));
    }
}
