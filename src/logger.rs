//! Server logging.
//!
//! The startup line is the only thing written to stdout. Access lines (one
//! per request, common log format) and errors go to stderr.

use chrono::{DateTime, Local};

/// Announce the listening address on stdout.
pub fn log_startup(port: u16) {
    println!("Serving on http://localhost:{port}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// One handled request.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    pub http_version: hyper::Version,
    pub status: u16,
    /// Body size in bytes; `None` logs as `-` per the common log format.
    pub body_bytes: Option<usize>,
}

impl AccessLogEntry {
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: hyper::Version::HTTP_11,
            status: 200,
            body_bytes: None,
        }
    }

    /// Common Log Format:
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        let size = self
            .body_bytes
            .map_or_else(|| "-".to_string(), |b| b.to_string());
        format!(
            "{} - - [{}] \"{} {} {:?}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            size,
        )
    }
}

/// Write an access log line to stderr.
pub fn log_access(entry: &AccessLogEntry) {
    eprintln!("{}", entry.format_common());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "GET".to_string(),
            "/ui/app.js".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = Some(512);
        entry
    }

    #[test]
    fn common_format_contains_request_line() {
        let log = entry().format_common();
        assert!(log.starts_with("127.0.0.1 - - ["));
        assert!(log.contains("\"GET /ui/app.js HTTP/1.1\""));
        assert!(log.ends_with("200 512"));
    }

    #[test]
    fn unknown_size_logs_dash() {
        let mut e = entry();
        e.status = 302;
        e.body_bytes = None;
        let log = e.format_common();
        assert!(log.ends_with("302 -"));
    }
}
