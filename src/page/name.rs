//! Page name validation module
//!
//! Page names come straight from the query string and end up in a
//! filesystem path, so they are validated against a strict allow-list
//! before any path is built. Anything containing a separator, a dot, or
//! other characters outside the allow-list is rejected outright; the
//! caller treats a rejected name like an absent one.

/// Maximum accepted page name length in bytes
const MAX_LEN: usize = 64;

/// A validated page name, safe to embed in a filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageName(String);

impl PageName {
    /// Validate a raw page name
    ///
    /// Accepts non-empty names of at most 64 bytes consisting only of
    /// ASCII alphanumerics, `-` and `_`. Returns `None` for everything
    /// else, including traversal sequences, separators, dots, spaces and
    /// null bytes.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.len() > MAX_LEN {
            return None;
        }
        if !raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    /// File name of the page on disk: `{name}.html`
    pub fn file_name(&self) -> String {
        format!("{}.html", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_names() {
        assert!(PageName::parse("introduction").is_some());
        assert!(PageName::parse("about-us").is_some());
        assert!(PageName::parse("page_2").is_some());
        assert!(PageName::parse("A1").is_some());
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(PageName::parse("").is_none());
        assert!(PageName::parse(&"a".repeat(64)).is_some());
        assert!(PageName::parse(&"a".repeat(65)).is_none());
    }

    #[test]
    fn test_rejects_traversal() {
        assert!(PageName::parse("../../etc/passwd").is_none());
        assert!(PageName::parse("..").is_none());
        assert!(PageName::parse("..%2Fetc").is_none());
        assert!(PageName::parse("pages/../secret").is_none());
    }

    #[test]
    fn test_rejects_separators_and_dots() {
        assert!(PageName::parse("a/b").is_none());
        assert!(PageName::parse("a\\b").is_none());
        assert!(PageName::parse("index.html").is_none());
        assert!(PageName::parse(".hidden").is_none());
    }

    #[test]
    fn test_rejects_control_and_unicode() {
        assert!(PageName::parse("a\0b").is_none());
        assert!(PageName::parse("a b").is_none());
        assert!(PageName::parse("über").is_none());
        assert!(PageName::parse("page\n").is_none());
    }

    #[test]
    fn test_file_name() {
        let name = PageName::parse("contact").unwrap();
        assert_eq!(name.file_name(), "contact.html");
    }
}
