//! Primary-key generation for records inserted without a key.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// How keys are generated for records that arrive without one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStrategy {
    /// Monotonic integers, always kept past the largest integer key seen.
    #[default]
    Counter,

    /// Random v4 UUID strings.
    Uuid,
}

/// Generates primary keys without colliding with keys already stored.
#[derive(Clone, Debug)]
pub struct KeyGenerator {
    strategy: KeyStrategy,
    /// Next counter value; `None` once the integer range is used up.
    next: Option<u64>,
}

impl KeyGenerator {
    pub fn new(strategy: KeyStrategy) -> Self {
        Self {
            strategy,
            next: Some(1),
        }
    }

    pub fn strategy(&self) -> KeyStrategy {
        self.strategy
    }

    /// Record a key that entered the collection by another route.
    ///
    /// Non-negative integer keys push the counter past them. Observing
    /// `u64::MAX` exhausts the counter.
    pub fn observe(&mut self, key: &Value) {
        if let (Some(n), Some(next)) = (key.as_u64(), self.next) {
            if n >= next {
                self.next = n.checked_add(1);
            }
        }
    }

    /// Produce the next key.
    ///
    /// An exhausted counter falls back to UUID strings, so every call yields
    /// a fresh key.
    pub fn generate(&mut self) -> Value {
        match (self.strategy, self.next) {
            (KeyStrategy::Counter, Some(key)) => {
                self.next = key.checked_add(1);
                Value::from(key)
            }
            (KeyStrategy::Counter, None) => {
                warn!("integer key range exhausted, generating uuid key");
                uuid_key()
            }
            (KeyStrategy::Uuid, _) => uuid_key(),
        }
    }
}

fn uuid_key() -> Value {
    Value::from(Uuid::new_v4().to_string())
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(KeyStrategy::default())
    }
}
