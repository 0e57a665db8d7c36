//! Content-Type resolution.
//!
//! The override table from the config is consulted first, then the builtin
//! extension table. `.js` is pinned to `application/javascript` in both, so
//! scripts are served identically on hosts whose MIME databases disagree.

use std::path::Path;

use crate::config::ContentTypeOverrides;

/// Resolve the Content-Type for a served path.
pub fn content_type_for(path: &Path, overrides: &ContentTypeOverrides) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str());

    if let Some(content_type) = extension.and_then(|ext| overrides.lookup(ext)) {
        return content_type;
    }

    builtin_content_type(extension)
}

/// Builtin extension table, covering the usual web asset set.
pub fn builtin_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",

        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_builtin() {
        let overrides = ContentTypeOverrides::default();
        assert_eq!(
            content_type_for(Path::new("ui/renderer.js"), &overrides),
            "application/javascript"
        );
    }

    #[test]
    fn builtin_used_when_no_override() {
        let overrides = ContentTypeOverrides::default();
        assert_eq!(
            content_type_for(Path::new("ui/index.html"), &overrides),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("style.css"), &overrides),
            "text/css"
        );
    }

    #[test]
    fn js_is_pinned_in_both_tables() {
        // Even without the override entry the served type would not change.
        assert_eq!(
            builtin_content_type(Some("js")),
            "application/javascript"
        );
    }

    #[test]
    fn unknown_extension_falls_back() {
        let overrides = ContentTypeOverrides::default();
        assert_eq!(
            content_type_for(Path::new("data.xyz"), &overrides),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("Makefile"), &overrides),
            "application/octet-stream"
        );
    }
}
