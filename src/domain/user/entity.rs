//! User entity

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::role::Role;

/// User record
///
/// A passive value holder: setters accept any value and nothing is checked
/// on assignment. Format and length rules live in
/// [`UserValidator`](super::UserValidator).
///
/// Equality and hashing cover every field, the role set and both
/// timestamps included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Externally assigned identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    /// Accepted on input, never serialized
    #[serde(skip_serializing)]
    password: Option<String>,
    #[serde(skip_serializing)]
    confirm_password: Option<String>,
    roles: HashSet<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_on: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified_on: Option<NaiveDateTime>,
}

impl User {
    /// Create a user with every field unset and no roles
    pub fn new() -> Self {
        Self::default()
    }

    // Getters

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn confirm_password(&self) -> Option<&str> {
        self.confirm_password.as_deref()
    }

    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }

    pub fn created_on(&self) -> Option<NaiveDateTime> {
        self.created_on
    }

    pub fn last_modified_on(&self) -> Option<NaiveDateTime> {
        self.last_modified_on
    }

    // Mutators

    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = Some(first_name.into());
    }

    pub fn clear_first_name(&mut self) {
        self.first_name = None;
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = Some(last_name.into());
    }

    pub fn clear_last_name(&mut self) {
        self.last_name = None;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn clear_email(&mut self) {
        self.email = None;
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    pub fn clear_username(&mut self) {
        self.username = None;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    pub fn clear_password(&mut self) {
        self.password = None;
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = Some(confirm_password.into());
    }

    pub fn clear_confirm_password(&mut self) {
        self.confirm_password = None;
    }

    /// Replace the whole role set
    pub fn set_roles(&mut self, roles: HashSet<Role>) {
        self.roles = roles;
    }

    /// Add a role, returning `false` when an equal role is already present
    pub fn add_role(&mut self, role: Role) -> bool {
        self.roles.insert(role)
    }

    /// Remove a role, returning whether it was present
    pub fn remove_role(&mut self, role: &Role) -> bool {
        self.roles.remove(role)
    }

    /// Check whether any held role carries the given name
    pub fn has_role_named(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name() == Some(name))
    }

    pub fn set_created_on(&mut self, created_on: NaiveDateTime) {
        self.created_on = Some(created_on);
    }

    pub fn set_last_modified_on(&mut self, last_modified_on: NaiveDateTime) {
        self.last_modified_on = Some(last_modified_on);
    }
}

// Roles are hashed in sorted order so equal sets hash identically.
impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.email.hash(state);
        self.username.hash(state);
        self.password.hash(state);
        self.confirm_password.hash(state);

        let mut roles: Vec<&Role> = self.roles.iter().collect();
        roles.sort();
        roles.hash(state);

        self.created_on.hash(state);
        self.last_modified_on.hash(state);
    }
}
