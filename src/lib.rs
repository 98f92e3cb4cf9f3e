//! # workitems
//!
//! In-memory state store for a front-end application: an ordered list of
//! work items plus a single optional "current item" selection, constructed
//! once at startup and handed by reference to every view that needs it.
//!
//! All mutations go through [`store::WorkItemStore`], which records a
//! structured event for each change so views can react to the stream
//! instead of re-reading state.

pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod seed;
pub mod store;
