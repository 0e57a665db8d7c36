//! HTTP protocol layer.
//!
//! Content-type resolution, conditional request handling, and response
//! builders, decoupled from the routing logic that uses them.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_403_response, build_404_response, build_501_response,
    build_redirect_response,
};
