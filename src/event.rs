//! Structured events recorded by the store on every mutation.
//!
//! Views subscribe to the event stream to refresh themselves instead of
//! polling the list. Events carry a monotonic sequence number so a consumer
//! that fell behind can detect gaps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ItemId;

/// A structured event recorded by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Monotonic sequence number. Survives event-log eviction.
    pub seq: u64,
    /// When this event occurred.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    pub kind: EventKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    ItemAdded {
        id: ItemId,
        title: String,
    },
    ItemRemoved {
        id: ItemId,
    },
    ListCleared {
        removed: usize,
    },
    CurrentSet {
        id: ItemId,
    },
    CurrentCleared {
        /// Id of the item that was selected, if any.
        id: Option<ItemId>,
    },
}
