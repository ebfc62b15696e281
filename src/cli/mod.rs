//! CLI module for user-management
//!
//! Provides subcommands for working with user records:
//! - `validate`: check users stored as JSON against the validation policy

pub mod validate;

use clap::{Parser, Subcommand};

/// user-management - User and role records with boundary validation
#[derive(Parser, Debug)]
#[command(name = "user-management")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate user records stored in a JSON file
    Validate(validate::ValidateArgs),
}
