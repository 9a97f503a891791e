//! Short token generation.
//!
//! Tokens are 8 characters drawn uniformly at random from the 62-character
//! alphanumeric alphabet, sampled from the operating system CSPRNG. With
//! 62^8 (~2.18e14) possible tokens, collisions are effectively theoretical; the
//! service layer still handles them with a bounded retry against the store's
//! unique constraint.

use crate::error::AppError;
use serde_json::json;

/// Number of characters in a generated short token.
pub const TOKEN_LENGTH: usize = 8;

/// The 62-character alphanumeric token alphabet.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest multiple of 62 that fits in a byte; bytes at or above it are rejected
/// so every alphabet character stays equally likely.
const REJECTION_THRESHOLD: u8 = 248;

/// Generates an 8-character alphanumeric short token.
///
/// The generator does not guarantee global uniqueness; uniqueness is enforced by
/// the store's constraint plus the service-level collision retry.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system randomness source is unavailable.
///
/// # Examples
///
/// ```ignore
/// let token = generate_token()?;
/// assert_eq!(token.len(), 8);
/// assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_token() -> Result<String, AppError> {
    let mut token = String::with_capacity(TOKEN_LENGTH);
    let mut buffer = [0u8; 16];

    while token.len() < TOKEN_LENGTH {
        getrandom::fill(&mut buffer).map_err(|e| {
            AppError::internal(
                "Randomness source unavailable",
                json!({ "reason": e.to_string() }),
            )
        })?;

        for &byte in &buffer {
            if byte >= REJECTION_THRESHOLD {
                continue;
            }
            token.push(ALPHABET[(byte % 62) as usize] as char);
            if token.len() == TOKEN_LENGTH {
                break;
            }
        }
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_has_correct_length() {
        let token = generate_token().unwrap();
        assert_eq!(token.len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_generate_token_alphanumeric_only() {
        for _ in 0..100 {
            let token = generate_token().unwrap();
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()), "{token}");
        }
    }

    #[test]
    fn test_generate_token_produces_unique_tokens() {
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            let token = generate_token().unwrap();
            tokens.insert(token);
        }

        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_generate_token_covers_alphabet_classes() {
        // Over enough samples all three character classes should show up.
        let mut has_upper = false;
        let mut has_lower = false;
        let mut has_digit = false;

        for _ in 0..200 {
            for c in generate_token().unwrap().chars() {
                has_upper |= c.is_ascii_uppercase();
                has_lower |= c.is_ascii_lowercase();
                has_digit |= c.is_ascii_digit();
            }
        }

        assert!(has_upper && has_lower && has_digit);
    }
}
