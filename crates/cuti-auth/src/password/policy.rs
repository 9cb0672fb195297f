//! Password policy enforcement for new passwords.

use cuti_core::error::AppError;

/// Special characters a password may, and must, contain.
pub const SPECIAL_CHARACTERS: &str = "@$!%*?&";

const MIN_LENGTH: usize = 6;
const MAX_LENGTH: usize = 100;

const TOO_SHORT: &str = "Panjang password minimal 6 karakter";
const TOO_LONG: &str = "Panjang password maksimal 100 karakter";
const WEAK: &str = "Password harus mengandung huruf besar, huruf kecil, angka dan spesial karakter";

/// Validates password strength.
///
/// A password needs 6 to 100 characters with at least one lowercase letter,
/// one uppercase letter, one digit and one of [`SPECIAL_CHARACTERS`]. Any
/// other character is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Returns the message for the first violated rule, if any.
    pub fn violation(&self, password: &str) -> Option<&'static str> {
        let length = password.chars().count();
        if length < MIN_LENGTH {
            return Some(TOO_SHORT);
        }
        if length > MAX_LENGTH {
            return Some(TOO_LONG);
        }

        let allowed = password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIAL_CHARACTERS.contains(c));
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

        if allowed && has_lower && has_upper && has_digit && has_special {
            None
        } else {
            Some(WEAK)
        }
    }

    /// Validates a password, failing with the violated rule's message.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        match self.violation(password) {
            Some(message) => Err(AppError::validation(message)),
            None => Ok(()),
        }
    }
}
