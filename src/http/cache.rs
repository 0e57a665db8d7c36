//! Conditional request handling.
//!
//! Served files carry an `ETag` (length + mtime) and `Last-Modified`.
//! A request presenting either validator back gets a 304 instead of the
//! body. `If-None-Match` takes precedence over `If-Modified-Since`.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// `ETag` derived from file length and mtime, quoted.
pub fn file_etag(len: usize, modified: Option<SystemTime>) -> String {
    let mtime = modified
        .and_then(|m| m.duration_since(SystemTime::UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_secs());
    format!("\"{len:x}-{mtime:x}\"")
}

/// True when the client's validators show its copy is current.
pub fn not_modified(
    if_none_match: Option<&str>,
    if_modified_since: Option<&str>,
    etag: &str,
    modified: Option<SystemTime>,
) -> bool {
    if let Some(client_etag) = if_none_match {
        return etag_matches(client_etag, etag);
    }

    match (if_modified_since.and_then(parse_http_date), modified) {
        (Some(since), Some(mtime)) => {
            let mtime: DateTime<Utc> = mtime.into();
            // HTTP dates carry second precision.
            mtime.timestamp() <= since.timestamp()
        }
        _ => false,
    }
}

/// Match an `If-None-Match` value (single, comma list, or `*`).
fn etag_matches(client_etag: &str, etag: &str) -> bool {
    client_etag
        .split(',')
        .any(|e| e.trim() == etag || e.trim() == "*")
}

/// Format a timestamp as an IMF-fixdate for `Last-Modified`.
pub fn http_date(time: SystemTime) -> String {
    let time: DateTime<Utc> = time.into();
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an `If-Modified-Since` value; malformed dates are ignored.
fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn etag_is_quoted_and_stable() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let a = file_etag(1024, Some(mtime));
        let b = file_etag(1024, Some(mtime));
        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
    }

    #[test]
    fn etag_changes_with_content() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_ne!(file_etag(1024, Some(mtime)), file_etag(1025, Some(mtime)));
        assert_ne!(
            file_etag(1024, Some(mtime)),
            file_etag(1024, Some(mtime + Duration::from_secs(1)))
        );
    }

    #[test]
    fn if_none_match_forms() {
        let etag = "\"400-6553f100\"";
        assert!(not_modified(Some(etag), None, etag, None));
        assert!(not_modified(Some("\"other\", \"400-6553f100\""), None, etag, None));
        assert!(not_modified(Some("*"), None, etag, None));
        assert!(!not_modified(Some("\"stale\""), None, etag, None));
    }

    #[test]
    fn if_modified_since_round_trips() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let date = http_date(mtime);

        // A client echoing Last-Modified back gets a 304.
        assert!(not_modified(None, Some(&date), "\"x\"", Some(mtime)));

        // A file newer than the client's copy does not.
        let newer = mtime + Duration::from_secs(60);
        assert!(!not_modified(None, Some(&date), "\"x\"", Some(newer)));
    }

    #[test]
    fn malformed_date_is_ignored() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert!(!not_modified(None, Some("yesterday"), "\"x\"", Some(mtime)));
        assert!(!not_modified(None, None, "\"x\"", Some(mtime)));
    }

    #[test]
    fn if_none_match_takes_precedence() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let date = http_date(mtime);
        // Stale ETag wins over a matching date.
        assert!(!not_modified(Some("\"stale\""), Some(&date), "\"x\"", Some(mtime)));
    }
}
