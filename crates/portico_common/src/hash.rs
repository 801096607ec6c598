//! Content hashing for cache invalidation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 128-bit content hash computed using XXH3.
///
/// Two files with the same `ContentHash` are assumed to have identical
/// content. Portico uses it to detect whether a foreign source unit has
/// changed since its native artifact was last built. The hash is
/// persisted in textual hex form inside the cache directory, so it can
/// be parsed back with [`FromStr`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }
}

/// Error returned when a persisted hash record cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("malformed content hash: {reason}")]
pub struct ParseContentHashError {
    /// Description of what made the text unparseable.
    pub reason: String,
}

impl FromStr for ContentHash {
    type Err = ParseContentHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || s.len() != 32 {
            return Err(ParseContentHashError {
                reason: format!("expected 32 hex characters, got {}", s.len()),
            });
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &s[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseContentHashError {
                reason: format!("invalid hex pair '{pair}'"),
            })?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = ContentHash::from_bytes(b"hello world");
        let b = ContentHash::from_bytes(b"hello world");
        assert_eq!(a, b);
    }

    #[test]
    fn different_inputs_differ() {
        let a = ContentHash::from_bytes(b"hello");
        let b = ContentHash::from_bytes(b"world");
        assert_ne!(a, b);
    }

    #[test]
    fn display_format() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h}");
        assert_eq!(s.len(), 32, "Display should be 32 hex chars");
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn display_parse_roundtrip() {
        let h = ContentHash::from_bytes(b"roundtrip me");
        let parsed: ContentHash = format!("{h}").parse().unwrap();
        assert_eq!(h, parsed);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let h = ContentHash::from_bytes(b"ws");
        let parsed: ContentHash = format!("  {h}\n").parse().unwrap();
        assert_eq!(h, parsed);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "abcd".parse::<ContentHash>().unwrap_err();
        assert!(err.to_string().contains("32 hex characters"));
    }

    #[test]
    fn parse_rejects_non_hex() {
        let err = "zz".repeat(16).parse::<ContentHash>().unwrap_err();
        assert!(err.to_string().contains("invalid hex pair"));
    }

    #[test]
    fn debug_abbreviated() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h:?}");
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with(")"));
    }

    #[test]
    fn serde_roundtrip() {
        let h = ContentHash::from_bytes(b"serde test");
        let json = serde_json::to_string(&h).unwrap();
        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
