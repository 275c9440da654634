//! Page pipeline module
//!
//! Handles the site's main entry point: pick a page from the `page`
//! query parameter, resolve it against the pages directory, and serve
//! it wrapped in the shared header and footer.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, query, response};
use crate::logger;
use crate::page::wrap_page;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

/// Serve the header/footer-wrapped page selected by the request
pub async fn serve_page(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let raw_name = query::get_param(ctx.query, "page");
    let resolution = state.resolver.resolve(raw_name.as_deref());

    let site = &state.config.site;
    match wrap_page(site, resolution.path()).await {
        Ok(body) => response::build_page_response(body, &state.config.http, ctx.is_head),
        Err(e) if !resolution.is_fallback() => {
            // The candidate passed the existence check but vanished
            // before the read; degrade to the default page once.
            logger::log_warning(&format!(
                "Resolved page unreadable '{}': {e}",
                resolution.path().display()
            ));
            match wrap_page(site, state.resolver.default_path()).await {
                Ok(body) => response::build_page_response(body, &state.config.http, ctx.is_head),
                Err(e) => default_page_failure(state, &e),
            }
        }
        Err(e) => default_page_failure(state, &e),
    }
}

/// The default page was verified at startup, so failing to read it now
/// means the site tree changed underneath us.
fn default_page_failure(state: &Arc<AppState>, err: &std::io::Error) -> Response<Full<Bytes>> {
    logger::log_error(&format!(
        "Failed to read default page '{}': {err}",
        state.resolver.default_path().display()
    ));
    http::build_500_response()
}
