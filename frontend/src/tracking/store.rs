
use thiserror::Error;
use web_sys::Storage;

use super::event::TrackedEvent;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read events: {0}")]
    Read(String),
    #[error("failed to write events: {0}")]
    Write(String),
    #[error("failed to encode events: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Raw string storage behind the event log.
pub trait EventStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError>;
    fn write_raw(&self, value: &str) -> Result<(), StoreError>;

    /// A missing or unparseable list reads as empty.
    fn load(&self) -> Result<Vec<TrackedEvent>, StoreError> {
        let events = match self.read_raw()? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Discarding unreadable event log: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(events)
    }

    /// Read-modify-write; concurrent writers may drop each other's events.
    fn append(&self, event: TrackedEvent) -> Result<(), StoreError> {
        let mut events = self.load()?;
        events.push(event);
        let raw = serde_json::to_string(&events)?;
        self.write_raw(&raw)
    }
}

pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl EventStore for LocalStorageStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn write_raw(&self, value: &str) -> Result<(), StoreError> {
        // QuotaExceededError surfaces here
        self.storage()?
            .set_item(self.key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    raw: std::cell::RefCell<Option<String>>,
    reject_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: std::cell::RefCell::new(Some(raw.to_string())),
            reject_writes: false,
        }
    }

    /// Every write fails, as if the storage quota were exhausted.
    pub fn full() -> Self {
        Self {
            raw: std::cell::RefCell::new(None),
            reject_writes: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

#[cfg(test)]
impl EventStore for MemoryStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        Ok(self.raw.borrow().clone())
    }

    fn write_raw(&self, value: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::Write("QuotaExceededError".to_string()));
        }
        *self.raw.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::event::PAGE_VIEW;
    use chrono::Utc;

    #[test]
    fn append_keeps_existing_events() {
        let store = MemoryStore::new();
        store.append(TrackedEvent::new(PAGE_VIEW, "/", Utc::now())).unwrap();
        store.append(TrackedEvent::new(PAGE_VIEW, "/about", Utc::now())).unwrap();

        let events = store.load().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].path, "/about");
    }

    #[test]
    fn corrupt_log_is_replaced() {
        let store = MemoryStore::with_raw("{not json");
        assert!(store.load().unwrap().is_empty());
        store.append(TrackedEvent::new(PAGE_VIEW, "/", Utc::now())).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn full_store_reports_write_error() {
        let store = MemoryStore::full();
        let err = store.append(TrackedEvent::new(PAGE_VIEW, "/", Utc::now())).unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        assert!(store.raw().is_none());
    }
}
