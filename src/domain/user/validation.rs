//! User validation utilities
//!
//! Records never check themselves; callers run a [`UserValidator`] at the
//! boundary where a user is accepted.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::entity::User;
use super::profile::has_valid_email_shape;
use crate::domain::DomainError;

/// A violated user rule
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("First name is required")]
    MissingFirstName,

    #[error("First name is too short. Minimum length is {0} characters")]
    FirstNameTooShort(usize),

    #[error("Last name is required")]
    MissingLastName,

    #[error("Last name is too short. Minimum length is {0} characters")]
    LastNameTooShort(usize),

    #[error("Email is required")]
    MissingEmail,

    #[error("Email must contain '@' followed by a domain with a '.'")]
    InvalidEmail,

    #[error("Username cannot be blank")]
    BlankUsername,

    #[error("Password cannot be blank")]
    BlankPassword,

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),
}

impl UserValidationError {
    /// Stable identifier of the violated rule
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFirstName => "first_name.required",
            Self::FirstNameTooShort(_) => "first_name.too_short",
            Self::MissingLastName => "last_name.required",
            Self::LastNameTooShort(_) => "last_name.too_short",
            Self::MissingEmail => "email.required",
            Self::InvalidEmail => "email.format",
            Self::BlankUsername => "username.blank",
            Self::BlankPassword => "password.blank",
            Self::PasswordTooShort(_) => "password.too_short",
        }
    }
}

const DEFAULT_MIN_NAME_LENGTH: usize = 2;
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Thresholds applied by [`UserValidator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Minimum length, in characters, of first and last names
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
    /// Minimum length, in characters, of passwords
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_min_name_length() -> usize {
    DEFAULT_MIN_NAME_LENGTH
}

fn default_min_password_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Checks users against a [`ValidationPolicy`]
///
/// Rules:
/// - First and last name are required and at least `min_name_length` chars
/// - Email is required and contains '@' followed later by '.'
/// - Username is required and not blank
/// - Password is required, not blank and at least `min_password_length` chars
///
/// Password confirmation is not checked; see
/// [`passwords_match`](super::passwords_match).
#[derive(Debug, Clone, Default)]
pub struct UserValidator {
    policy: ValidationPolicy,
}

impl UserValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Collect every violated rule, in field order
    pub fn violations(&self, user: &User) -> Vec<UserValidationError> {
        let mut violations = Vec::new();

        if let Err(e) = self.check_name(
            user.first_name(),
            UserValidationError::MissingFirstName,
            UserValidationError::FirstNameTooShort,
        ) {
            violations.push(e);
        }

        if let Err(e) = self.check_name(
            user.last_name(),
            UserValidationError::MissingLastName,
            UserValidationError::LastNameTooShort,
        ) {
            violations.push(e);
        }

        if let Err(e) = validate_email(user.email()) {
            violations.push(e);
        }

        if let Err(e) = validate_username(user.username()) {
            violations.push(e);
        }

        if let Err(e) = self.check_password(user.password()) {
            violations.push(e);
        }

        debug!(
            username = user.username().unwrap_or_default(),
            violations = violations.len(),
            "Validated user"
        );

        violations
    }

    /// Validate a user, failing with every violated rule
    pub fn validate(&self, user: &User) -> Result<(), DomainError> {
        let violations = self.violations(user);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation_failed(violations))
        }
    }

    fn check_name(
        &self,
        name: Option<&str>,
        missing: UserValidationError,
        too_short: fn(usize) -> UserValidationError,
    ) -> Result<(), UserValidationError> {
        let name = name.ok_or(missing)?;

        if name.chars().count() < self.policy.min_name_length {
            return Err(too_short(self.policy.min_name_length));
        }

        Ok(())
    }

    fn check_password(&self, password: Option<&str>) -> Result<(), UserValidationError> {
        let password = password.ok_or(UserValidationError::BlankPassword)?;

        if password.trim().is_empty() {
            return Err(UserValidationError::BlankPassword);
        }

        if password.chars().count() < self.policy.min_password_length {
            return Err(UserValidationError::PasswordTooShort(
                self.policy.min_password_length,
            ));
        }

        Ok(())
    }
}

/// Validate an email address
pub fn validate_email(email: Option<&str>) -> Result<(), UserValidationError> {
    let email = email.ok_or(UserValidationError::MissingEmail)?;

    if !has_valid_email_shape(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a username
pub fn validate_username(username: Option<&str>) -> Result<(), UserValidationError> {
    match username {
        Some(u) if !u.trim().is_empty() => Ok(()),
        _ => Err(UserValidationError::BlankUsername),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_valid_user() -> User {
        let mut user = User::new();
        user.set_id(1);
        user.set_first_name("John");
        user.set_last_name("Doe");
        user.set_email("john.doe@example.com");
        user.set_username("johndoe");
        user.set_password("securePassword123");
        user.set_confirm_password("securePassword123");
        user
    }

    fn codes(violations: &[UserValidationError]) -> Vec<&'static str> {
        violations.iter().map(UserValidationError::code).collect()
    }

    #[test]
    fn test_default_policy() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.min_name_length, 2);
        assert_eq!(policy.min_password_length, 8);
    }

    #[test]
    fn test_validator_exposes_policy() {
        let policy = ValidationPolicy {
            min_name_length: 3,
            min_password_length: 12,
        };

        assert_eq!(UserValidator::new(policy).policy(), &policy);
        assert_eq!(UserValidator::default().policy(), &ValidationPolicy::default());
    }

    #[test]
    fn test_valid_user() {
        let validator = UserValidator::default();
        let user = create_valid_user();

        assert!(validator.violations(&user).is_empty());
        assert!(validator.validate(&user).is_ok());
    }

    #[test]
    fn test_empty_user_reports_required_fields() {
        let validator = UserValidator::default();
        let violations = validator.violations(&User::new());

        assert_eq!(
            codes(&violations),
            vec![
                "first_name.required",
                "last_name.required",
                "email.required",
                "username.blank",
                "password.blank",
            ]
        );
    }

    #[test]
    fn test_first_name_too_short() {
        let validator = UserValidator::default();
        let mut user = create_valid_user();
        user.set_first_name("J");

        assert_eq!(
            validator.violations(&user),
            vec![UserValidationError::FirstNameTooShort(2)]
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        let validator = UserValidator::default();
        let mut user = create_valid_user();
        user.set_first_name("Éa");
        user.set_last_name("É");

        assert_eq!(
            validator.violations(&user),
            vec![UserValidationError::LastNameTooShort(2)]
        );
    }

    #[test]
    fn test_cleared_first_name_is_reported() {
        let validator = UserValidator::default();
        let mut user = create_valid_user();
        user.clear_first_name();

        assert_eq!(
            validator.violations(&user),
            vec![UserValidationError::MissingFirstName]
        );
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(None), Err(UserValidationError::MissingEmail));
        assert_eq!(
            validate_email(Some("john.doe")),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email(Some("john.doe@example")),
            Err(UserValidationError::InvalidEmail)
        );
        assert!(validate_email(Some("valid@email.com")).is_ok());
    }

    #[test]
    fn test_blank_username() {
        assert_eq!(
            validate_username(Some("   ")),
            Err(UserValidationError::BlankUsername)
        );
        assert_eq!(validate_username(None), Err(UserValidationError::BlankUsername));
        assert!(validate_username(Some("johndoe")).is_ok());
    }

    #[test]
    fn test_password_rules() {
        let validator = UserValidator::default();
        let mut user = create_valid_user();

        user.set_password("        ");
        assert_eq!(
            validator.violations(&user),
            vec![UserValidationError::BlankPassword]
        );

        user.set_password("short");
        assert_eq!(
            validator.violations(&user),
            vec![UserValidationError::PasswordTooShort(8)]
        );
    }

    #[test]
    fn test_password_confirmation_is_not_a_rule() {
        let validator = UserValidator::default();
        let mut user = create_valid_user();
        user.set_confirm_password("somethingElse");

        assert!(validator.violations(&user).is_empty());
    }

    #[test]
    fn test_custom_policy() {
        let validator = UserValidator::new(ValidationPolicy {
            min_name_length: 5,
            min_password_length: 20,
        });
        let user = create_valid_user();

        assert_eq!(
            codes(&validator.violations(&user)),
            vec!["first_name.too_short", "last_name.too_short", "password.too_short"]
        );
    }

    #[test]
    fn test_validate_wraps_violations() {
        let validator = UserValidator::default();
        let mut user = create_valid_user();
        user.set_email("not-an-email");

        match validator.validate(&user) {
            Err(DomainError::Validation { violations, .. }) => {
                assert_eq!(violations, vec![UserValidationError::InvalidEmail]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UserValidationError::FirstNameTooShort(2).to_string(),
            "First name is too short. Minimum length is 2 characters"
        );
        assert_eq!(UserValidationError::BlankUsername.to_string(), "Username cannot be blank");
    }
}
