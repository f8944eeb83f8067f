//! Trace identifiers linking a generic user-facing error to its log entry.

use std::fmt;

use chrono::Utc;
use rand::Rng;

/// Correlation token of the form `TR-<epoch millis>-<4 digits>`.
///
/// Uniqueness is best-effort: a millisecond timestamp plus a draw from
/// `0..=9999`. Good enough to find a log line, not an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a fresh trace id from the current time.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
        Self(format!("TR-{}-{:04}", millis, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TraceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TraceId> for String {
    fn from(id: TraceId) -> Self {
        id.0
    }
}

/// Check that `value` looks like `TR-<digits>-<4 digits>`.
#[cfg(test)]
pub(crate) fn is_trace_id(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("TR-") else {
        return false;
    };
    let Some((millis, suffix)) = rest.split_once('-') else {
        return false;
    };
    !millis.is_empty()
        && millis.chars().all(|c| c.is_ascii_digit())
        && suffix.len() == 4
        && suffix.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_format() {
        for _ in 0..200 {
            let id = TraceId::generate();
            assert!(is_trace_id(id.as_str()), "bad trace id: {}", id);
        }
    }

    #[test]
    fn test_timestamp_is_current() {
        let before = Utc::now().timestamp_millis();
        let id = TraceId::generate();
        let after = Utc::now().timestamp_millis();

        let millis: i64 = id.as_str()[3..]
            .split('-')
            .next()
            .and_then(|m| m.parse().ok())
            .unwrap();
        assert!(millis >= before && millis <= after);
    }

    #[test]
    fn test_display_and_conversions_agree() {
        let id = TraceId::generate();
        assert_eq!(id.to_string(), id.as_str());
        assert_eq!(AsRef::<str>::as_ref(&id), id.as_str());
        let owned: String = id.clone().into();
        assert_eq!(owned, id.as_str());
    }

    #[test]
    fn test_is_trace_id_rejects_malformed() {
        assert!(is_trace_id("TR-1700000000000-0042"));
        assert!(!is_trace_id("TR-1700000000000-42"));
        assert!(!is_trace_id("TR--0042"));
        assert!(!is_trace_id("XX-1700000000000-0042"));
        assert!(!is_trace_id("TR-17000x0000000-0042"));
    }
}
