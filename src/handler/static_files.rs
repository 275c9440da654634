//! Static asset serving module
//!
//! Serves the favicon and raw files under the asset directory. Asset
//! paths come from the URL, so containment in the asset directory is
//! enforced by canonicalizing both sides before the read.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Serve the configured favicon file
pub async fn serve_favicon(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let path = state.config.site.favicon_path();
    match fs::read(&path).await {
        Ok(data) => build_asset_response(&data, &path, ctx),
        Err(_) => http::build_404_response(),
    }
}

/// Serve a file from the asset directory
pub async fn serve_asset(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let site = &state.config.site;
    let Some(file_path) = resolve_asset_path(&site.assets_path(), ctx.path, &site.assets_prefix)
    else {
        return http::build_404_response();
    };

    match fs::read(&file_path).await {
        Ok(data) => build_asset_response(&data, &file_path, ctx),
        Err(_) => http::build_404_response(),
    }
}

/// Map a request path to a file inside the asset directory
///
/// Returns `None` for anything that does not land on an existing file
/// inside the canonicalized asset directory.
fn resolve_asset_path(assets_dir: &Path, request_path: &str, prefix: &str) -> Option<PathBuf> {
    let relative = request_path
        .strip_prefix(prefix)?
        .trim_start_matches('/');
    if relative.is_empty() || relative.contains('\0') {
        return None;
    }

    let candidate = assets_dir.join(relative);

    let assets_canonical = match assets_dir.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset directory not found or inaccessible '{}': {e}",
                assets_dir.display()
            ));
            return None;
        }
    };

    // File not found is an ordinary 404, no logging needed
    let candidate_canonical = candidate.canonicalize().ok()?;
    if !candidate_canonical.starts_with(&assets_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            candidate_canonical.display()
        ));
        return None;
    }

    candidate_canonical.is_file().then_some(candidate_canonical)
}

/// Build an asset response with `ETag` handling
fn build_asset_response(
    data: &[u8],
    path: &Path,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return response::build_304_response(&etag);
    }

    let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
    response::build_cached_response(data, content_type, &etag, ctx.is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn asset_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        std_fs::create_dir_all(dir.path().join("assets/css")).unwrap();
        std_fs::write(dir.path().join("assets/css/site.css"), "body{}").unwrap();
        std_fs::write(dir.path().join("secret.txt"), "no").unwrap();
        dir
    }

    #[test]
    fn test_resolves_existing_asset() {
        let dir = asset_tree();
        let assets = dir.path().join("assets");
        let resolved = resolve_asset_path(&assets, "/assets/css/site.css", "/assets").unwrap();
        assert!(resolved.ends_with("css/site.css"));
    }

    #[test]
    fn test_missing_asset_is_none() {
        let dir = asset_tree();
        let assets = dir.path().join("assets");
        assert!(resolve_asset_path(&assets, "/assets/nope.css", "/assets").is_none());
    }

    #[test]
    fn test_traversal_is_blocked() {
        let dir = asset_tree();
        let assets = dir.path().join("assets");
        assert!(resolve_asset_path(&assets, "/assets/../secret.txt", "/assets").is_none());
        assert!(resolve_asset_path(&assets, "/assets/css/../../secret.txt", "/assets").is_none());
    }

    #[test]
    fn test_bare_prefix_is_none() {
        let dir = asset_tree();
        let assets = dir.path().join("assets");
        assert!(resolve_asset_path(&assets, "/assets", "/assets").is_none());
        assert!(resolve_asset_path(&assets, "/assets/", "/assets").is_none());
    }

    #[test]
    fn test_other_prefix_is_none() {
        let dir = asset_tree();
        let assets = dir.path().join("assets");
        assert!(resolve_asset_path(&assets, "/other/site.css", "/assets").is_none());
    }
}
