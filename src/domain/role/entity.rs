//! Role entity

use serde::{Deserialize, Serialize};

/// A named permission tag, e.g. `ROLE_USER`.
///
/// Equality, hashing and ordering cover every field. Roles hold no
/// reference back to the users that carry them.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Role {
    /// Create a role with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a role with both fields set
    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    // Getters

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // Mutators

    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn clear_name(&mut self) {
        self.name = None;
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.name, self.id) {
            (Some(name), _) => write!(f, "{}", name),
            (None, Some(id)) => write!(f, "role#{}", id),
            (None, None) => write!(f, "<unnamed role>"),
        }
    }
}
