//! Unique identifiers for generated events.

use chrono::{DateTime, Utc};
use uuid::Uuid;

const RANDOM_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `{unix-millis}-{9 random lowercase alphanumerics}@{domain}`.
///
/// Uniqueness is best-effort: two files generated in the same millisecond
/// only collide if the random parts match too.
pub fn generate_uid(now: DateTime<Utc>, domain: &str) -> String {
    // base-36 digits drawn from the v4 UUID's random bits
    let mut bits = Uuid::new_v4().as_u128();
    let random: String = (0..RANDOM_LEN)
        .map(|_| {
            let digit = ALPHABET[(bits % 36) as usize] as char;
            bits /= 36;
            digit
        })
        .collect();

    format!("{}-{}@{}", now.timestamp_millis(), random, domain)
}
