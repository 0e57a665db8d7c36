//! Request routing.
//!
//! Entry point for request processing: method gate, the root redirect
//! special case, then delegation to static file serving.

use std::convert::Infallible;
use std::net::SocketAddr;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::http;
use crate::logger;

/// Request data the static file capability needs.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
}

/// Handle one request. Never fails; every outcome is an HTTP response.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    config: &ServerConfig,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let mut entry = logger::AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.http_version = req.version();

    let response = route_request(&req, config).await;

    if config.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|&n| n > 0);
        logger::log_access(&entry);
    }

    Ok(response)
}

async fn route_request<B>(req: &Request<B>, config: &ServerConfig) -> Response<Full<Bytes>> {
    let method = req.method();
    let is_head = *method == Method::HEAD;

    // GET is the customized method; HEAD rides along as GET minus the body.
    // Everything else gets the serving layer's default answer.
    if !matches!(*method, Method::GET | Method::HEAD) {
        logger::log_warning(&format!("Unsupported method: {method}"));
        return http::build_501_response();
    }

    // uri.path() carries no query or fragment, so `/?x=1` is still the root.
    let path = req.uri().path();
    if path == "/" {
        return http::build_redirect_response(&config.root_redirect);
    }

    let ctx = RequestContext {
        path,
        is_head,
        if_none_match: header_value(req, "if-none-match"),
        if_modified_since: header_value(req, "if-modified-since"),
    };

    static_files::serve(&ctx, config).await
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
