//! Page resolution module
//!
//! Maps an optional page name to the file that will be served. The two
//! outcomes are kept distinct so callers and tests can tell a direct hit
//! from the silent fallback to the default page.

use std::io;
use std::path::{Path, PathBuf};

use super::name::PageName;
use crate::config::SiteConfig;
use crate::logger;

/// Outcome of a page resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The requested page exists and will be served
    Found(PathBuf),
    /// The request named no usable page; the default page will be served
    Fallback(PathBuf),
}

impl Resolution {
    /// Path of the file to serve, regardless of outcome
    pub fn path(&self) -> &Path {
        match self {
            Self::Found(p) | Self::Fallback(p) => p,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolves page names to files under the configured pages directory
///
/// Holds the immutable site layout for the lifetime of the process.
#[derive(Debug)]
pub struct PageResolver {
    pages_dir: PathBuf,
    default_path: PathBuf,
}

impl PageResolver {
    /// Create a resolver for the given site layout
    ///
    /// The default page is the fallback target for every unresolvable
    /// request, so its absence is a startup error rather than a latent
    /// per-request failure.
    pub fn new(site: &SiteConfig) -> io::Result<Self> {
        let pages_dir = site.pages_dir();
        let default_name = PageName::parse(&site.default_page).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid default page name: '{}'", site.default_page),
            )
        })?;
        let default_path = pages_dir.join(default_name.file_name());

        if !default_path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("default page not found: {}", default_path.display()),
            ));
        }

        Ok(Self {
            pages_dir,
            default_path,
        })
    }

    /// Resolve an optional raw page name to a file
    ///
    /// An absent name, a name failing validation, or a name whose file
    /// does not exist all resolve to `Fallback`; none of them is an
    /// error. Only a validation rejection is logged, since it usually
    /// means a probing client.
    pub fn resolve(&self, raw_name: Option<&str>) -> Resolution {
        let Some(raw) = raw_name else {
            return Resolution::Fallback(self.default_path.clone());
        };

        let Some(name) = PageName::parse(raw) else {
            logger::log_warning(&format!("Rejected page name: {raw:?}"));
            return Resolution::Fallback(self.default_path.clone());
        };

        let candidate = self.pages_dir.join(name.file_name());
        if candidate.is_file() {
            Resolution::Found(candidate)
        } else {
            Resolution::Fallback(self.default_path.clone())
        }
    }

    /// Path of the default page
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }
}
