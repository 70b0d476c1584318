//! Collection configuration.

use crate::error::{Result, StoreError};
use crate::keys::KeyStrategy;
use crate::types::Record;
use serde::{Deserialize, Serialize};

/// What `insert` does when an incoming record carries a key that is
/// already stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKeys {
    /// Store it anyway; lookups return the first match.
    #[default]
    Allow,

    /// Drop the incoming record.
    Skip,

    /// Overwrite the stored record, keeping its position.
    Replace,
}

/// Collection configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Field whose value identifies a record.
    pub primary_key: String,

    /// Records inserted while the collection is constructed.
    pub initial_records: Vec<Record>,

    /// How missing keys are generated.
    pub key_strategy: KeyStrategy,

    /// Handling of incoming records whose key is already stored.
    pub duplicate_keys: DuplicateKeys,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            primary_key: "id".to_string(),
            initial_records: Vec::new(),
            key_strategy: KeyStrategy::default(),
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON document. Missing options take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_primary_key(mut self, field: impl Into<String>) -> Self {
        self.primary_key = field.into();
        self
    }

    pub fn with_records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.initial_records = records.into_iter().collect();
        self
    }

    pub fn with_key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.key_strategy = strategy;
        self
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.primary_key.is_empty() {
            return Err(StoreError::InvalidConfig(
                "primary key field name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
