//! HTTP protocol layer module
//!
//! Protocol-level helpers decoupled from the page-serving business
//! logic: query-string parsing, response builders, MIME detection and
//! conditional-request handling.

pub mod cache;
pub mod mime;
pub mod query;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_413_response, build_500_response,
    build_options_response,
};
