//! Newtype IDs for type-safe identifiers.
//!
//! Keeps catalog item ids and session ids from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifies a sellable item within one catalog snapshot.
    ItemId
);
define_id!(
    /// Identifies one storefront session.
    SessionId
);

impl SessionId {
    /// Generate a new session ID.
    pub fn generate() -> Self {
        Self(format!("sess_{}", generate_suffix()))
    }
}

/// Timestamp combined with a process-wide counter, unique within a process.
fn generate_suffix() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0) as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}{:04x}", nanos, counter & 0xffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ItemId::new("1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_session_id_generation() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("sess_"));
    }

    #[test]
    fn test_id_from_str() {
        let id: ItemId = "kenya-aa".into();
        assert_eq!(format!("{}", id), "kenya-aa");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ItemId::new("4");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"4\"");
    }
}
