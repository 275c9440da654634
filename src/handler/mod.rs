//! Request handler module
//!
//! Routing dispatch and the business logic behind each route: the
//! header/footer-wrapped page pipeline, the favicon, and raw assets.

pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
