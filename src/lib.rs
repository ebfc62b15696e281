//! User management
//!
//! Identity records for a basic user-management application:
//! - `User` and `Role` value types with all-field equality
//! - A configurable validation policy applied at service boundaries
//! - Profile helpers (full name, password confirmation, timestamp ordering)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, Role, User, UserValidator};
