//! Password strength policy.
//!
//! A password must be at least 8 characters and contain at least one
//! uppercase letter, one lowercase letter, one digit, and one symbol from
//! [`PASSWORD_SYMBOLS`].

/// Symbols accepted by the strength policy
pub const PASSWORD_SYMBOLS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a candidate password against the strength policy.
///
/// Returns the human-readable policy description on failure; the caller wraps
/// it into the domain error taxonomy.
pub fn check_strength(password: &str) -> Result<(), String> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if long_enough && has_upper && has_lower && has_digit && has_symbol {
        Ok(())
    } else {
        Err(
            "Password must be at least 8 characters long, include 1 uppercase letter, \
             1 lowercase letter, 1 number, and 1 special character."
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_conforming_password() {
        assert!(check_strength("Abcdef1!").is_ok());
        assert!(check_strength("Sup3r-Secret").is_ok());
    }

    #[test]
    fn test_rejects_missing_uppercase() {
        assert!(check_strength("abcdefgh").is_err());
    }

    #[test]
    fn test_rejects_missing_lowercase_and_symbol() {
        assert!(check_strength("ABCDEFG1").is_err());
    }

    #[test]
    fn test_rejects_missing_symbol() {
        assert!(check_strength("Abcdefg1").is_err());
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(check_strength("Ab1!").is_err());
    }

    #[test]
    fn test_every_policy_symbol_counts() {
        for symbol in PASSWORD_SYMBOLS.chars() {
            let candidate = format!("Abcdefg1{}", symbol);
            assert!(check_strength(&candidate).is_ok(), "symbol {:?} rejected", symbol);
        }
    }
}
