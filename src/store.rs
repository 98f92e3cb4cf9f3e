//! The store. The public API for mutating and reading shared state.
//!
//! One instance is created at application startup and handed out to every
//! view. All mutations go through here and each one records an event.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::event::{Event, EventKind};
use crate::model::{ItemId, NewWorkItem, WorkItem};

/// Single-threaded shared handle. The UI wiring clones this into every view
/// controller; last caller wins, no locking (see crate docs).
pub type SharedStore = Rc<RefCell<WorkItemStore>>;

/// The shared state: an ordered item list plus one optional selection.
#[derive(Debug, Default)]
pub struct WorkItemStore {
    items: Vec<WorkItem>,
    current: Option<WorkItem>,
    events: Vec<Event>,
    next_seq: u64,
    /// Max events retained. None = unbounded.
    event_cap: Option<usize>,
}

impl WorkItemStore {
    /// Create an empty store with an unbounded event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that retains at most `cap` events.
    pub fn with_event_cap(cap: usize) -> Self {
        Self {
            event_cap: Some(cap),
            ..Self::default()
        }
    }

    /// Wrap a store in the shared handle views are given.
    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    // -----------------------------------------------------------------------
    // List mutations
    // -----------------------------------------------------------------------

    /// Submit a new work item: mint an id and timestamp, append to the end
    /// of the list. Returns the stored item so the caller can remove or
    /// select it later by id.
    pub fn add(&mut self, new: NewWorkItem) -> WorkItem {
        let item = WorkItem {
            id: ItemId::new(),
            title: new.title,
            details: new.details,
            created_at: Utc::now(),
        };

        debug!(id = %item.id, title = %item.title, "item added");
        self.record_event(EventKind::ItemAdded {
            id: item.id,
            title: item.title.clone(),
        });

        self.items.push(item.clone());
        item
    }

    /// Append a fully-formed item as-is. No validation, no uniqueness check;
    /// duplicates are permitted.
    pub fn insert(&mut self, item: WorkItem) {
        debug!(id = %item.id, title = %item.title, "item inserted");
        self.record_event(EventKind::ItemAdded {
            id: item.id,
            title: item.title.clone(),
        });

        self.items.push(item);
    }

    /// Remove the first item matching `id`, preserving the order of the
    /// rest. Returns the removed item, or `None` when no item matches —
    /// absence is a silent no-op, not an error, and records no event.
    pub fn remove(&mut self, id: ItemId) -> Option<WorkItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(index);

        debug!(id = %item.id, "item removed");
        self.record_event(EventKind::ItemRemoved { id: item.id });

        Some(item)
    }

    /// Empty the list. The current selection is untouched.
    pub fn clear(&mut self) {
        let removed = self.items.len();
        self.items.clear();

        debug!(removed, "list cleared");
        self.record_event(EventKind::ListCleared { removed });
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Make `item` the current selection. The item is stored as given and
    /// need not be in the list.
    pub fn set_current(&mut self, item: WorkItem) {
        debug!(id = %item.id, "current set");
        self.record_event(EventKind::CurrentSet { id: item.id });

        self.current = Some(item);
    }

    /// Select a listed item by id, cloning it into the current selection.
    /// Returns the selected item.
    pub fn select(&mut self, id: ItemId) -> Result<WorkItem> {
        let item = self
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        self.set_current(item.clone());
        Ok(item)
    }

    /// Reset the selection to none, returning what was selected.
    pub fn clear_current(&mut self) -> Option<WorkItem> {
        let previous = self.current.take();

        debug!(id = ?previous.as_ref().map(|i| i.id), "current cleared");
        self.record_event(EventKind::CurrentCleared {
            id: previous.as_ref().map(|i| i.id),
        });

        previous
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The list, in insertion order.
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    /// The current selection, if any.
    pub fn current(&self) -> Option<&WorkItem> {
        self.current.as_ref()
    }

    /// Find the first listed item matching `id`.
    pub fn get(&self, id: ItemId) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Events with `seq > since`, in order. A consumer that observes a gap
    /// after eviction should re-read the list.
    pub fn events_since(&self, since: u64) -> &[Event] {
        let start = self.events.partition_point(|e| e.seq <= since);
        &self.events[start..]
    }

    /// Sequence number of the most recent event, or 0 if none yet.
    pub fn last_seq(&self) -> u64 {
        self.next_seq
    }

    fn record_event(&mut self, kind: EventKind) {
        self.next_seq += 1;
        self.events.push(Event {
            seq: self.next_seq,
            timestamp: Utc::now(),
            kind,
        });

        // Evict oldest past the cap; seq stays monotonic.
        if let Some(cap) = self.event_cap {
            if self.events.len() > cap {
                let excess = self.events.len() - cap;
                self.events.drain(..excess);
            }
        }
    }
}
