//! Request handler module
//!
//! Responsible for request routing dispatch. The café lookup itself lives in
//! `crate::cafe`; this layer maps its outcome onto HTTP.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
