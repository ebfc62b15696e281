//! Validate command - checks user records stored as JSON

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::user::{User, UserValidator};
use crate::domain::DomainError;
use crate::infrastructure::logging;

/// Arguments for the validate command
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// JSON file holding one user object or an array of users
    pub file: PathBuf,

    /// Configuration file layered over config/default and config/local
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Outcome for one user in the input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub valid: bool,
    pub violations: Vec<&'static str>,
    pub messages: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserInput {
    Many(Vec<User>),
    One(User),
}

/// Run the validate command
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (config, load_error) = load_config(args.config.as_deref())?;
    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let users = parse_users(&raw)
        .with_context(|| format!("Failed to parse users from {}", args.file.display()))?;

    info!(
        file = %args.file.display(),
        users = users.len(),
        "Validating users"
    );

    let validator = UserValidator::new(config.validation);
    info!(
        min_name_length = validator.policy().min_name_length,
        min_password_length = validator.policy().min_password_length,
        "Validation policy"
    );

    let reports = build_reports(&validator, &users);

    println!("{}", serde_json::to_string_pretty(&reports)?);

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        warn!(invalid, total = reports.len(), "Validation failed");
        anyhow::bail!("{} of {} users failed validation", invalid, reports.len());
    }

    info!(total = reports.len(), "All users valid");
    Ok(())
}

/// Load configuration for a run
///
/// An explicit file must load. Without one, a failing load falls back to
/// defaults and hands the error back so it can be logged.
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<(AppConfig, Option<DomainError>), DomainError> {
    match explicit {
        Some(path) => Ok((AppConfig::load_with(Some(path))?, None)),
        None => Ok(or_default_config(AppConfig::load())),
    }
}

fn or_default_config(
    loaded: Result<AppConfig, DomainError>,
) -> (AppConfig, Option<DomainError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Parse either a single user object or an array of users
pub fn parse_users(raw: &str) -> Result<Vec<User>, serde_json::Error> {
    Ok(match serde_json::from_str(raw)? {
        UserInput::Many(users) => users,
        UserInput::One(user) => vec![user],
    })
}

/// Validate each user, keeping input order
pub fn build_reports(validator: &UserValidator, users: &[User]) -> Vec<UserReport> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| {
            let violations = validator.violations(user);

            UserReport {
                index,
                username: user.username().map(str::to_string),
                valid: violations.is_empty(),
                violations: violations.iter().map(|v| v.code()).collect(),
                messages: violations.iter().map(ToString::to_string).collect(),
            }
        })
        .collect()
}
