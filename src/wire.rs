//! JSON bodies shared by the HTTP adapter and the client.

use serde::{Deserialize, Serialize};

pub const AUTH_STATUS_SUCCESS: &str = "SUCCESS";

/// `GET /api/auth/info` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub status: String,
    pub data: AuthInfoData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfoData {
    pub scopes: Vec<String>,
}

impl AuthInfo {
    pub fn success(scopes: Vec<String>) -> Self {
        Self {
            status: AUTH_STATUS_SUCCESS.to_string(),
            data: AuthInfoData { scopes },
        }
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.data.scopes.iter().any(|s| s == scope)
    }
}

/// `GET /api/health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
    pub collection: String,
    pub records: usize,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
