//! Mock data - deterministic synthetic collections standing in for a backend.
//!
//! Roles are generated by pairing every role type with every resource. The
//! first `ROLE_TYPES.len() * RESOURCES.len()` records cover each pair once;
//! beyond that a numeric suffix is appended, so names may repeat across
//! generation sizes.

mod ids;
mod roles;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use roles::{generate, generate_with, MOCK_ROLE_COUNT, RESOURCES, ROLE_TYPES};
