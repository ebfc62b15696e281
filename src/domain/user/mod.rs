//! User domain
//!
//! This module provides the user record, the validation policy applied to
//! it at service boundaries, and pure helpers deriving values from it.

mod entity;
mod profile;
mod validation;

pub use entity::User;
pub use profile::{full_name, has_valid_email_shape, modified_after_creation, passwords_match};
pub use validation::{
    validate_email, validate_username, UserValidationError, UserValidator, ValidationPolicy,
};
