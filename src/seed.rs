//! Seed file loading.
//!
//! The CLI can preload the store from a TOML file of `[[item]]` tables:
//!
//! ```toml
//! [[item]]
//! title = "water the garden"
//!
//! [[item]]
//! title = "sharpen shears"
//! details = { urgency = "low" }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::NewWorkItem;

/// Top-level TOML wrapper.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default, rename = "item")]
    items: Vec<SeedItem>,
}

#[derive(Debug, Deserialize)]
struct SeedItem {
    title: String,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

/// Load a seed file into submittable work items, in file order.
pub fn load(path: &Path) -> Result<Vec<NewWorkItem>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read seed file {}: {e}", path.display())))?;
    let seed: SeedFile = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("bad seed file {}: {e}", path.display())))?;

    Ok(seed
        .items
        .into_iter()
        .map(|item| {
            let mut new = NewWorkItem::new(item.title);
            if let Some(details) = item.details {
                new = new.details(details);
            }
            new
        })
        .collect())
}
