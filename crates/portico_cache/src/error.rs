//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur while reading or writing cache state.
///
/// `NotHashed` and `Corrupt` are signal conditions, not crashes: both
/// mean "rebuild" to the resolution chain. `Io` is reported to the
/// caller unchanged so that "definitely stale" and "cannot determine"
/// remain distinguishable for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while touching cache or source files.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// No fingerprint record exists for the unit. Means "never built
    /// under this cache", not corrupt state.
    #[error("no hash record for {path}")]
    NotHashed {
        /// The source file that has no record.
        path: PathBuf,
    },

    /// The hash record exists but is unreadable or cannot be parsed
    /// back as a digest. Treated as staleness by callers, surfaced as
    /// a warning since it masks a potential underlying filesystem
    /// issue.
    #[error("corrupt hash record at {path}: {reason}")]
    Corrupt {
        /// The hash file that failed to parse.
        path: PathBuf,
        /// Description of the corruption.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = CacheError::Io {
            path: PathBuf::from("/tmp/.portico-cache/mod.nim.hash"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("cache I/O error"));
        assert!(msg.contains("mod.nim.hash"));
    }

    #[test]
    fn not_hashed_display() {
        let err = CacheError::NotHashed {
            path: PathBuf::from("lib4.nim"),
        };
        assert_eq!(err.to_string(), "no hash record for lib4.nim");
    }

    #[test]
    fn corrupt_display() {
        let err = CacheError::Corrupt {
            path: PathBuf::from("mod.nim.hash"),
            reason: "invalid hex pair 'zz'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("corrupt hash record"));
        assert!(msg.contains("invalid hex pair"));
    }
}
