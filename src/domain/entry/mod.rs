//! Entry domain — opaque content items and the queries that fetch them.

mod convert;
pub mod query;
pub mod wire;

pub use query::EntryQuery;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Entry ───────────────────────────────────────────────────────────────────

/// One content item as returned by the service.
///
/// `fields` is passed through untouched; its shape belongs to the remote
/// content model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub content_type: Option<String>,
    pub locale: Option<String>,
    pub revision: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub fields: Map<String, Value>,
}

impl Entry {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A field's value if it is a JSON string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn is_content_type(&self, content_type: &str) -> bool {
        self.content_type.as_deref() == Some(content_type)
    }
}

// ─── Asset ───────────────────────────────────────────────────────────────────

/// A media file (image, document) referenced by entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub locale: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub fields: Map<String, Value>,
}

impl Asset {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// `fields.file.url`, protocol-relative as served (`//images.ctfassets.net/...`).
    pub fn file_url(&self) -> Option<&str> {
        self.fields
            .get("file")
            .and_then(|file| file.get("url"))
            .and_then(Value::as_str)
    }
}

// ─── Includes / links ────────────────────────────────────────────────────────

/// Entries and assets linked from a query's items, sent alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Includes {
    pub entries: Vec<Entry>,
    pub assets: Vec<Asset>,
}

impl Includes {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.assets.is_empty()
    }
}

/// Target of a resolved link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Linked<'a> {
    Entry(&'a Entry),
    Asset(&'a Asset),
}

/// `(linkType, id)` of a `{ "sys": { "type": "Link", ... } }` value.
fn link_target(value: &Value) -> Option<(&str, &str)> {
    let sys = value.get("sys")?;
    if sys.get("type").and_then(Value::as_str) != Some("Link") {
        return None;
    }
    let link_type = sys.get("linkType").and_then(Value::as_str)?;
    let id = sys.get("id").and_then(Value::as_str)?;
    Some((link_type, id))
}

// ─── EntryCollection ─────────────────────────────────────────────────────────

/// Entries from one query, in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryCollection {
    pub items: Vec<Entry>,
    /// Total matches on the service side (may exceed `items.len()`).
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    #[serde(default)]
    pub includes: Includes,
}

impl EntryCollection {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&Entry> {
        self.items.first()
    }

    /// True when the service holds more matches past this page.
    pub fn has_more(&self) -> bool {
        self.skip.saturating_add(self.items.len() as u64) < self.total
    }

    /// Resolve a link field value (e.g. `entry.field("heroImage")`) against
    /// this response's items and includes.
    ///
    /// Returns `None` for values that are not links and for links whose
    /// target the service did not send.
    pub fn resolve_link(&self, value: &Value) -> Option<Linked<'_>> {
        match link_target(value)? {
            ("Entry", id) => self
                .items
                .iter()
                .chain(self.includes.entries.iter())
                .find(|e| e.id == id)
                .map(Linked::Entry),
            ("Asset", id) => self
                .includes
                .assets
                .iter()
                .find(|a| a.id == id)
                .map(Linked::Asset),
            _ => None,
        }
    }

    /// Resolve `entry.fields[field]` when it is a single link.
    pub fn resolve_field<'a>(&'a self, entry: &Entry, field: &str) -> Option<Linked<'a>> {
        self.resolve_link(entry.field(field)?)
    }
}

impl IntoIterator for EntryCollection {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
