// src/utils/validation.rs
//! Username validation rules for SSI name registration and lookup.

use once_cell::sync::Lazy;
use regex::Regex;

/// Usernames are ASCII letters, digits and underscores only. The class is
/// spelled out rather than `\w` because `\w` here is Unicode-aware, while
/// registered names are ASCII; this also makes the byte-length rule below
/// an exact character count.
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern is valid"));

/// Reserved usernames owned by the protocol operators. These bypass the
/// length rule and are the only admin names.
const RESERVED_USERNAMES: [&str; 3] = ["init", "tyron", "wfp"];

/// Whether a string is acceptable as a username: ASCII word characters only
/// and longer than 5 characters, or exactly one of the reserved literals.
///
/// Pure and total; performs no I/O.
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_PATTERN.is_match(username) && username.len() > 5)
        || RESERVED_USERNAMES.contains(&username)
}

/// Whether a string is one of the reserved admin usernames. Case-sensitive
/// exact match only.
pub fn is_admin_username(username: &str) -> bool {
    RESERVED_USERNAMES.contains(&username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_word_characters_are_valid() {
        assert!(is_valid_username("abcdef"));
        assert!(is_valid_username("user_123"));
    }

    #[test]
    fn short_names_are_invalid_unless_reserved() {
        assert!(!is_valid_username("ab1"));
        assert!(!is_valid_username("abcde"));
        assert!(is_valid_username("init"));
        assert!(is_valid_username("tyron"));
        assert!(is_valid_username("wfp"));
    }

    #[test]
    fn non_word_characters_are_invalid() {
        assert!(!is_valid_username("tyron!"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("dot.name"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn non_ascii_letters_are_invalid() {
        assert!(!is_valid_username("héllo1"));
        assert!(!is_valid_username("пример"));
        assert!(!is_valid_username("名前なまえ"));
    }

    #[test]
    fn admin_names_are_exact_and_case_sensitive() {
        assert!(is_admin_username("wfp"));
        assert!(is_admin_username("init"));
        assert!(is_admin_username("tyron"));
        assert!(!is_admin_username("WFP"));
        assert!(!is_admin_username("Init"));
        assert!(!is_admin_username("tyron "));
    }
}
