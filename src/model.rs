//! Core data model.
//!
//! A work item is one user-facing thing to do. It has identity (a store-minted
//! id), a title for display, and an opaque details payload the store never
//! interprets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Work Item
// ---------------------------------------------------------------------------

/// A single entry in the shared list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier, minted by the store at add time.
    /// Removal and selection match on this field only.
    pub id: ItemId,

    /// Display title. Not unique — two items may share one.
    pub title: String,

    /// Arbitrary payload for the views. Opaque to the store.
    pub details: serde_json::Value,

    pub created_at: DateTime<Utc>,
}

/// Newtype for work item IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short display: first 8 chars of UUID
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for submitting new work items. The store assigns the id and
/// timestamp when the item is added.
#[derive(Debug)]
pub struct NewWorkItem {
    pub(crate) title: String,
    pub(crate) details: serde_json::Value,
}

impl NewWorkItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: serde_json::Value::Null,
        }
    }

    pub fn details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }
}
