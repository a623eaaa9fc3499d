use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Opaque identifier handed out for a processed receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// In-memory mapping from receipt id to computed points
///
/// Scores live for the lifetime of the process. Every id maps to exactly one
/// insert and nothing is ever overwritten or removed.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    scores: RwLock<HashMap<ReceiptId, u64>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `points` under a freshly generated id and return that id
    pub async fn insert(&self, points: u64) -> ReceiptId {
        let mut scores = self.scores.write().await;
        loop {
            // Existing keys are never replaced
            if let Entry::Vacant(slot) = scores.entry(ReceiptId::new_random()) {
                let id = *slot.key();
                slot.insert(points);
                return id;
            }
        }
    }

    pub async fn lookup(&self, id: &ReceiptId) -> Option<u64> {
        self.scores.read().await.get(id).copied()
    }

    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}
