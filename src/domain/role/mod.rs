//! Role domain
//!
//! Roles are named permission tags shared between users.

mod entity;

pub use entity::Role;
