// Compiled-in server settings.
// There is no config file, environment, or CLI surface; everything the
// handler needs is injected here at construction time.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server settings, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory the URL space is rooted at.
    pub root: PathBuf,
    /// Where `GET /` redirects to.
    pub root_redirect: String,
    /// Files tried, in order, when a request resolves to a directory.
    pub index_files: Vec<String>,
    /// Extension entries that win over the builtin content-type table.
    pub content_types: ContentTypeOverrides,
    pub access_log: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5500,
            root: PathBuf::from("."),
            root_redirect: "/ui/index.html".to_string(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            content_types: ContentTypeOverrides::default(),
            access_log: true,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Extension -> content-type entries consulted before the builtin table.
///
/// Handlers only see the entries they were constructed with; nothing is
/// registered process-wide.
#[derive(Debug, Clone)]
pub struct ContentTypeOverrides {
    entries: HashMap<String, &'static str>,
}

impl Default for ContentTypeOverrides {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert("js".to_string(), "application/javascript");
        Self { entries }
    }
}

impl ContentTypeOverrides {
    pub fn lookup(&self, extension: &str) -> Option<&'static str> {
        self.entries.get(extension).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_parses() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 5500);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn default_overrides_pin_js() {
        let overrides = ContentTypeOverrides::default();
        assert_eq!(overrides.lookup("js"), Some("application/javascript"));
        assert_eq!(overrides.lookup("css"), None);
    }

    #[test]
    fn invalid_host_is_an_error() {
        let cfg = ServerConfig {
            host: "not an address".to_string(),
            ..ServerConfig::default()
        };
        assert!(cfg.socket_addr().is_err());
    }
}
