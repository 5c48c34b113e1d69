use serde::{Deserialize, Serialize};

use super::Record;

/// A role as served by `GET /api/roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "roles")]
pub struct Role {
    #[record(id)]
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}
