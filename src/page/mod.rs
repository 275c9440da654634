//! Page serving module
//!
//! A "page" is a static HTML fragment stored as `{root}/pages/{name}.html`.
//! Requests name a page through the `page` query parameter; the resolver
//! picks between the requested file and the site's default page, and the
//! assembler wraps the chosen file with the shared header/footer documents.

mod assemble;
mod name;
mod resolver;

pub use assemble::wrap_page;
pub use resolver::PageResolver;
