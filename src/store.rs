//! The in-memory record collection.

use crate::config::{DuplicateKeys, StoreConfig};
use crate::error::Result;
use crate::keys::KeyGenerator;
use crate::types::{key_is_present, keys_equal, Record, Value};
use tracing::{debug, trace, warn};

/// An ordered, in-memory collection of keyed records.
///
/// Records keep their insertion order. Lookups scan from the front and act
/// on the first record whose primary-key field equals the requested key.
/// Reads hand out copies, so callers can never mutate stored records except
/// through `update`, `remove` and `remove_field`.
///
/// Not synchronized; callers sharing a collection serialize access
/// themselves.
#[derive(Debug)]
pub struct RecordStore {
    /// Field that identifies a record.
    primary_key: String,

    /// What to do with incoming records whose key is already stored.
    duplicate_keys: DuplicateKeys,

    /// Key source for records inserted without one.
    keys: KeyGenerator,

    /// Stored records, in insertion order.
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a collection, inserting the configured initial records.
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: StoreConfig) -> Self {
        let StoreConfig {
            primary_key,
            initial_records,
            key_strategy,
            duplicate_keys,
        } = config;

        let mut store = Self {
            primary_key,
            duplicate_keys,
            keys: KeyGenerator::new(key_strategy),
            records: Vec::new(),
        };

        if !initial_records.is_empty() {
            store.insert(initial_records);
        }

        debug!(
            primary_key = %store.primary_key,
            records = store.records.len(),
            "created record store"
        );

        store
    }

    /// Name of the primary-key field.
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // --- Insertion ---

    /// Insert records in order, assigning keys to those without one.
    ///
    /// Returns the records as stored, with any generated keys filled in.
    /// Records dropped under [`DuplicateKeys::Skip`] are not returned.
    pub fn insert(&mut self, records: impl IntoIterator<Item = Record>) -> Vec<Record> {
        records
            .into_iter()
            .filter_map(|record| self.insert_one(record))
            .collect()
    }

    /// Insert a single record. Returns `None` if it was skipped as a
    /// duplicate.
    pub fn insert_one(&mut self, mut record: Record) -> Option<Record> {
        match record.get(&self.primary_key).cloned() {
            Some(key) if key_is_present(Some(&key)) => {
                self.keys.observe(&key);

                if let Some(index) = self.position(&key) {
                    match self.duplicate_keys {
                        DuplicateKeys::Allow => {}
                        DuplicateKeys::Skip => {
                            warn!(%key, "skipping record with duplicate key");
                            return None;
                        }
                        DuplicateKeys::Replace => {
                            debug!(%key, index, "replacing record with duplicate key");
                            self.records[index] = record.clone();
                            return Some(record);
                        }
                    }
                }
            }
            _ => {
                let key = self.generate_key();
                trace!(%key, "assigned generated key");
                record.set(self.primary_key.clone(), key);
            }
        }

        self.records.push(record.clone());
        Some(record)
    }

    // --- Reads ---

    /// Copies of every stored record, in insertion order.
    pub fn all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Borrowing iterator over stored records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Copy of the first record whose key equals `key`.
    pub fn find(&self, key: impl Into<Value>) -> Option<Record> {
        let key = key.into();
        self.position(&key).map(|index| self.records[index].clone())
    }

    pub fn contains_key(&self, key: impl Into<Value>) -> bool {
        self.position(&key.into()).is_some()
    }

    // --- Mutation ---

    /// Merge `patch` into the first record whose key equals `key`.
    ///
    /// Returns `false`, leaving the collection untouched, when no record
    /// matches. A patch may overwrite the primary key itself, including with
    /// `null` or `""`; this is the one route by which a stored record can
    /// lose a usable key.
    pub fn update(&mut self, key: impl Into<Value>, patch: Record) -> bool {
        let key = key.into();
        let Some(index) = self.position(&key) else {
            debug!(%key, "update found no matching record");
            return false;
        };

        if let Some(new_key) = patch.get(&self.primary_key) {
            self.keys.observe(new_key);
        }

        self.records[index].merge(patch);
        trace!(%key, index, "updated record");
        true
    }

    /// Remove the first record whose key equals `key`.
    ///
    /// A missing key is a no-op and returns `None`.
    pub fn remove(&mut self, key: impl Into<Value>) -> Option<Record> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => {
                trace!(%key, index, "removed record");
                Some(self.records.remove(index))
            }
            None => {
                debug!(%key, "remove found no matching record");
                None
            }
        }
    }

    /// Remove one field from the first record whose key equals `key`.
    ///
    /// Returns the removed value, or `None` when the record or field is
    /// missing. The primary-key field itself cannot be removed this way; only
    /// `update` can change or blank a stored key.
    pub fn remove_field(&mut self, key: impl Into<Value>, field: &str) -> Option<Value> {
        let key = key.into();
        if field == self.primary_key {
            warn!(%key, field, "refusing to remove primary key field");
            return None;
        }

        let Some(index) = self.position(&key) else {
            debug!(%key, field, "remove_field found no matching record");
            return None;
        };

        self.records[index].remove(field)
    }

    /// Remove every record. Generated keys keep counting from where they
    /// left off.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    // --- Internals ---

    fn position(&self, key: &Value) -> Option<usize> {
        self.records.iter().position(|record| {
            record
                .get(&self.primary_key)
                .is_some_and(|stored| keys_equal(stored, key))
        })
    }

    fn generate_key(&mut self) -> Value {
        loop {
            let key = self.keys.generate();
            if self.position(&key).is_none() {
                return key;
            }
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        // The default configuration always validates
        Self::from_config(StoreConfig::default())
    }
}
