//! Derived views over a [`User`]
//!
//! None of these are enforced by the record itself.

use super::entity::User;

/// "First Last", when both names are set
pub fn full_name(user: &User) -> Option<String> {
    match (user.first_name(), user.last_name()) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        _ => None,
    }
}

/// Check that password and confirmation are both set and identical
pub fn passwords_match(user: &User) -> bool {
    match (user.password(), user.confirm_password()) {
        (Some(password), Some(confirm)) => password == confirm,
        _ => false,
    }
}

/// Check that an email contains '@' with a '.' somewhere after it
pub fn has_valid_email_shape(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

/// Check that the last modification is strictly after creation
pub fn modified_after_creation(user: &User) -> bool {
    match (user.created_on(), user.last_modified_on()) {
        (Some(created), Some(modified)) => modified > created,
        _ => false,
    }
}
