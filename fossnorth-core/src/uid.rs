//! Deterministic event identifiers.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, FixedOffset};
use md5::{Digest, Md5};

/// MD5 over the summary and both instants (epoch milliseconds), base64url
/// encoded without padding.
///
/// Re-running the generator on unchanged input gives the same identifiers,
/// so calendar clients update events in place instead of duplicating them.
pub fn content_hash(
    summary: &str,
    start: &DateTime<FixedOffset>,
    end: &DateTime<FixedOffset>,
) -> String {
    let mut hasher = Md5::new();
    hasher.update(summary.as_bytes());
    hasher.update(start.timestamp_millis().to_string().as_bytes());
    hasher.update(end.timestamp_millis().to_string().as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Globally unique UID: `<prefix>.<content hash>`.
pub fn event_uid(prefix: &str, hash: &str) -> String {
    format!("{prefix}.{hash}")
}
