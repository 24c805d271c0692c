//! HTTP protocol layer module
//!
//! Provides HTTP response building, decoupled from café lookup logic.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_health_response,
    build_options_response, build_text_response, ResponseHeaders,
};
