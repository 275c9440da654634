//! Page assembly module
//!
//! Builds the response body: header bytes, then the resolved page's
//! bytes, then footer bytes. Header and footer are read from disk per
//! request so edits show up without a restart, matching how the site
//! tree is meant to be maintained in place.

use std::path::Path;

use tokio::fs;

use crate::config::SiteConfig;
use crate::logger;

/// Read the page at `page_path` and wrap it with the site's header and
/// footer documents.
///
/// A missing header or footer contributes nothing to the body beyond a
/// logged warning; a failure to read the page itself is the caller's
/// problem and propagates.
pub async fn wrap_page(site: &SiteConfig, page_path: &Path) -> std::io::Result<Vec<u8>> {
    let mut body = read_collaborator(&site.header_path()).await;
    body.extend_from_slice(&fs::read(page_path).await?);
    body.extend_from_slice(&read_collaborator(&site.footer_path()).await);
    Ok(body)
}

/// Read a header/footer document, degrading to empty bytes if unreadable
async fn read_collaborator(path: &Path) -> Vec<u8> {
    match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to read include '{}': {e}",
                path.display()
            ));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn test_site(root: &Path) -> SiteConfig {
        SiteConfig {
            root: root.to_string_lossy().into_owned(),
            default_page: "introduction".to_string(),
            header_file: "header.html".to_string(),
            footer_file: "footer.html".to_string(),
            favicon_paths: vec![],
            favicon_file: "favicon.ico".to_string(),
            assets_prefix: "/assets".to_string(),
            assets_dir: "assets".to_string(),
        }
    }

    #[tokio::test]
    async fn test_body_is_header_page_footer() {
        let dir = TempDir::new().unwrap();
        std_fs::create_dir_all(dir.path().join("pages")).unwrap();
        std_fs::write(dir.path().join("header.html"), "<header>").unwrap();
        std_fs::write(dir.path().join("footer.html"), "<footer>").unwrap();
        let page = dir.path().join("pages/introduction.html");
        std_fs::write(&page, "<p>intro</p>").unwrap();

        let site = test_site(dir.path());
        let body = wrap_page(&site, &page).await.unwrap();
        assert_eq!(body, b"<header><p>intro</p><footer>");
    }

    #[tokio::test]
    async fn test_missing_header_footer_degrade_to_empty() {
        let dir = TempDir::new().unwrap();
        std_fs::create_dir_all(dir.path().join("pages")).unwrap();
        let page = dir.path().join("pages/introduction.html");
        std_fs::write(&page, "bare").unwrap();

        let site = test_site(dir.path());
        let body = wrap_page(&site, &page).await.unwrap();
        assert_eq!(body, b"bare");
    }

    #[tokio::test]
    async fn test_missing_page_propagates_error() {
        let dir = TempDir::new().unwrap();
        let site = test_site(dir.path());
        let missing = dir.path().join("pages/gone.html");

        let err = wrap_page(&site, &missing).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
