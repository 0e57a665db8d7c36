//! Generic static file serving.
//!
//! Maps a URL path onto the serving root, guards against traversal, and
//! builds the response with content type and cache validators.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::ServerConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, response};
use crate::logger;

/// Serve `ctx.path` from the configured root.
pub async fn serve(ctx: &RequestContext<'_>, config: &ServerConfig) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_path(&config.root, ctx.path, &config.index_files) else {
        return http::build_404_response();
    };

    let modified = fs::metadata(&file_path)
        .await
        .ok()
        .and_then(|m| m.modified().ok());

    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return http::build_404_response(),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => return http::build_403_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", file_path.display()));
            return http::build_404_response();
        }
    };

    let content_type = mime::content_type_for(&file_path, &config.content_types);
    let etag = cache::file_etag(content.len(), modified);

    if cache::not_modified(
        ctx.if_none_match.as_deref(),
        ctx.if_modified_since.as_deref(),
        &etag,
        modified,
    ) {
        return http::build_304_response(&etag);
    }

    response::build_file_response(
        Bytes::from(content),
        content_type,
        &etag,
        modified,
        ctx.is_head,
    )
}

/// Map a URL path onto a file under `root`.
///
/// `..` segments are stripped before joining, and the canonicalized result
/// must stay inside the canonicalized root. Directories resolve through the
/// index file list; a directory without one is not served.
fn resolve_path(root: &Path, url_path: &str, index_files: &[String]) -> Option<PathBuf> {
    let stripped = url_path.trim_start_matches('/').replace("..", "");
    let relative = stripped.trim_start_matches('/');

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Serving root inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    let mut file_path = root.join(relative);

    if file_path.is_dir() || relative.is_empty() || relative.ends_with('/') {
        file_path = index_files
            .iter()
            .map(|name| file_path.join(name))
            .find(|candidate| candidate.is_file())?;
    }

    // Missing files fail canonicalization, which covers the common 404.
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!("Path traversal attempt blocked: {url_path}"));
        return None;
    }

    Some(file_path)
}
