//! # Record Collection
//!
//! A small in-memory collection of keyed records with copy-safe reads.
//!
//! ## Core Concepts
//!
//! - **Records**: Ordered field maps of JSON values; fields vary per record
//! - **Primary key**: A configurable field (default `"id"`) that identifies a record
//! - **Key generation**: Records inserted without a key get one that does not collide
//! - **Copy-safe reads**: `all` and `find` hand out copies, never references into the store
//!
//! ## Example
//!
//! ```
//! use record_collection::{Record, RecordStore, StoreConfig};
//! use serde_json::json;
//!
//! let mut store = RecordStore::new(StoreConfig::default())?;
//!
//! let inserted = store.insert(vec![
//!     Record::new().with("id", 1).with("name", "Batman"),
//!     Record::new().with("name", "Black Panther"),
//! ]);
//! assert_eq!(inserted[1].get("id"), Some(&json!(2)));
//!
//! assert!(store.update(1, Record::new().with("name", "Joker")));
//! assert_eq!(store.find(1).unwrap().get("name"), Some(&json!("Joker")));
//!
//! store.remove(1);
//! assert!(store.find(1).is_none());
//! # Ok::<(), record_collection::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod store;
pub mod types;

// Re-exports
pub use config::{DuplicateKeys, StoreConfig};
pub use error::{Result, StoreError};
pub use keys::{KeyGenerator, KeyStrategy};
pub use store::RecordStore;
pub use types::*;
