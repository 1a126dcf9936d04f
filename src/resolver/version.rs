// src/resolver/version.rs
//! Parser and compatibility gate for the contract version string.
//!
//! Deployed SSI contracts report their version as a fixed-position-encoded
//! string, e.g. `"xwalletv5.4.1"`: bytes [0,4) name the special `"init"`
//! deployment, bytes [0,3) the `"dao"` deployment, byte [8,9) is the numeric
//! major-version digit and bytes [8,11) a human-readable fragment. All the
//! offset magic lives in [`VersionTag::parse`]; the gate itself is
//! offset-free.

/// Structured view of a raw contract version string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionTag {
    /// Major-version digit at byte [8,9), `None` when the string is too
    /// short or the byte is not a digit.
    pub major_digit: Option<u8>,
    /// Human-readable fragment at bytes [8,11), empty when too short.
    pub fragment: String,
    prefix3: String,
    prefix4: String,
}

impl VersionTag {
    /// Parses a raw version string. Total: short or malformed input yields
    /// empty prefixes and an absent major digit, never a panic.
    pub fn parse(raw: &str) -> Self {
        let slice = |from: usize, to: usize| raw.get(from..to).unwrap_or("").to_string();
        VersionTag {
            major_digit: raw.get(8..9).and_then(|digit| digit.parse().ok()),
            fragment: slice(8, 11),
            prefix3: slice(0, 3),
            prefix4: slice(0, 4),
        }
    }

    /// Whether this crate can resolve documents from a contract reporting
    /// this version: major digit at least 4, or one of the special
    /// `"init"` / `"dao"` deployments.
    pub fn is_supported(&self) -> bool {
        self.major_digit.map_or(false, |digit| digit >= 4)
            || self.prefix4 == "init"
            || self.prefix3 == "dao"
    }
}
