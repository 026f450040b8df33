//! Value objects.
//!
//! Text value objects reject empty input at construction, so an entity built
//! from them is always valid. Defaults for optional fields live here too.

use serde::{Deserialize, Serialize};

use super::error::ValueObjectError;

/// Name assigned to a worker that registers without one.
pub const ANONYMOUS_WORKER_NAME: &str = "Anonymous Worker";

/// Attribution recorded on a comment submitted without a worker id.
pub const UNKNOWN_WORKER_REF: &str = "unknown";

macro_rules! non_empty_string {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: String) -> Result<Self, ValueObjectError> {
                if value.is_empty() {
                    return Err(ValueObjectError::Empty($field));
                }
                Ok(Self(value))
            }

            /// Wrap a value the domain produced itself and knows is non-empty.
            #[allow(dead_code)]
            pub(super) fn generated(value: String) -> Self {
                debug_assert!(!value.is_empty());
                Self(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValueObjectError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

non_empty_string!(
    /// Ephemeral identity of one WebSocket connection
    ConnectionId,
    "connectionId"
);
non_empty_string!(
    /// Comment identifier (time-based with a random suffix)
    CommentId,
    "id"
);
non_empty_string!(
    /// Job identifier (time-based with a random suffix)
    JobId,
    "id"
);
non_empty_string!(
    /// Display name of a chat author
    UserName,
    "userName"
);
non_empty_string!(
    /// Chat message body
    CommentText,
    "text"
);
non_empty_string!(
    /// Target stream URL of a scrape job
    JobUrl,
    "url"
);
non_empty_string!(
    /// Self-reported worker label
    WorkerName,
    "name"
);
non_empty_string!(
    /// Worker attribution carried by a comment
    WorkerRef,
    "workerId"
);

impl WorkerName {
    /// Missing or empty names fall back to [`ANONYMOUS_WORKER_NAME`].
    pub fn or_anonymous(value: Option<String>) -> Self {
        value
            .and_then(|v| Self::new(v).ok())
            .unwrap_or_else(|| Self(ANONYMOUS_WORKER_NAME.to_string()))
    }
}

impl WorkerRef {
    /// Missing or empty references fall back to [`UNKNOWN_WORKER_REF`].
    pub fn or_unknown(value: Option<String>) -> Self {
        value
            .and_then(|v| Self::new(v).ok())
            .unwrap_or_else(|| Self(UNKNOWN_WORKER_REF.to_string()))
    }
}

/// Unix timestamp in milliseconds (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
