//! Request handling.
//!
//! `router` decides what a request maps to (the root redirect or a file on
//! disk); `static_files` is the generic serve-from-disk capability it
//! delegates to.

pub mod router;
pub mod static_files;

pub use router::handle_request;
