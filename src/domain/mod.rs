//! Domain layer - User and role records and their validation

pub mod error;
pub mod role;
pub mod user;

pub use error::DomainError;
pub use role::Role;
pub use user::{
    full_name, passwords_match, User, UserValidationError, UserValidator, ValidationPolicy,
};
