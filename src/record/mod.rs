//! Records - the row abstraction collections and tables work over.
//!
//! A record publishes a static field-descriptor table instead of being probed
//! by string key at runtime. The table is usually derived:
//!
//! ```ignore
//! use hrdesk::Record;
//!
//! #[derive(Serialize, Deserialize, Clone, Record)]
//! #[record(collection = "roles")]
//! struct Role {
//!     #[record(id)]
//!     pub id: String,
//!     pub name: String,
//! }
//!
//! assert_eq!(Role::descriptor("name").unwrap().kind, FieldKind::Text);
//! ```

mod role;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

pub use hrdesk_macros::Record;
pub use role::Role;

/// The type tag of a published field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
}

/// One entry of a record type's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A borrowed, typed field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Wide enough for every integer field type, `u64` and `usize` included.
    Integer(i128),
    Boolean(bool),
}

impl<'a> FieldValue<'a> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Boolean(_) => FieldKind::Boolean,
        }
    }

    /// The string slice, if this is a text value.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Filter match against a needle.
    ///
    /// Text: case-insensitive substring. Everything else: exact equality
    /// with the value's canonical text form.
    pub fn matches(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(value) => value.to_lowercase().contains(&needle.to_lowercase()),
            other => other.to_string() == needle,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Trait for types that can be stored in a collection and queried.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "roles", "candidates").
    const COLLECTION: &'static str;

    /// Every field that filters and sorts may address.
    const FIELDS: &'static [FieldDescriptor];

    /// Returns the unique identifier for this record.
    fn id(&self) -> &str;

    /// Look up a published field by name. `None` for names not in `FIELDS`.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Find the descriptor for a field name.
    fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|d| d.name == name)
    }
}
