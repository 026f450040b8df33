//! Identifier generation.

use uuid::Uuid;

use super::value_object::{CommentId, ConnectionId, JobId, Timestamp};

/// Length of the random suffix appended to time-based ids
const SUFFIX_LEN: usize = 5;

/// Generates server-side identifiers. Clients never supply these.
pub struct IdFactory;

impl IdFactory {
    /// Comment ids: creation millis followed by a random suffix, so two
    /// comments created in the same millisecond still differ.
    pub fn comment_id(created_at: Timestamp) -> CommentId {
        CommentId::generated(Self::time_based(created_at))
    }

    /// Job ids use the same scheme as comment ids.
    pub fn job_id(created_at: Timestamp) -> JobId {
        JobId::generated(Self::time_based(created_at))
    }

    /// A fresh identity for one WebSocket connection.
    pub fn connection_id() -> ConnectionId {
        ConnectionId::generated(Uuid::new_v4().simple().to_string())
    }

    fn time_based(at: Timestamp) -> String {
        format!("{}{}", at.value(), random_suffix())
    }
}

/// Lowercase base-36 characters drawn from a v4 UUID.
fn random_suffix() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut bits = Uuid::new_v4().as_u128();
    (0..SUFFIX_LEN)
        .map(|_| {
            let c = ALPHABET[(bits % 36) as usize] as char;
            bits /= 36;
            c
        })
        .collect()
}
