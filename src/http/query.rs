//! Query string parsing module
//!
//! Extracts parameters from the raw query string of a request URI.
//! Values are percent-decoded (and `+` treated as space) before they
//! reach validation, so an encoded traversal sequence is seen for what
//! it is instead of slipping through as opaque bytes.

/// Extract the value of a parameter from a query string
///
/// When a key repeats, the last occurrence wins, as in PHP's `$_GET`.
/// Returns `None` when the parameter is absent; a parameter without
/// `=` yields an empty value.
pub fn get_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    let mut found = None;
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if percent_decode(key) == name {
            found = Some(percent_decode(value));
        }
    }
    found
}

/// Decode percent-escapes and `+` in a query component
///
/// Malformed escapes are kept literally, mirroring the lenient decoding
/// of common web runtimes. Decoded bytes that are not valid UTF-8 are
/// replaced, which validation downstream rejects anyway.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_val(bytes.get(i + 1)), hex_val(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push(hi * 16 + lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: Option<&u8>) -> Option<u8> {
    match b? {
        c @ b'0'..=b'9' => Some(c - b'0'),
        c @ b'a'..=b'f' => Some(c - b'a' + 10),
        c @ b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_param() {
        assert_eq!(
            get_param(Some("page=about"), "page"),
            Some("about".to_string())
        );
    }

    #[test]
    fn test_absent_param() {
        assert_eq!(get_param(Some("other=1"), "page"), None);
        assert_eq!(get_param(None, "page"), None);
        assert_eq!(get_param(Some(""), "page"), None);
    }

    #[test]
    fn test_multiple_params() {
        assert_eq!(
            get_param(Some("a=1&page=news&b=2"), "page"),
            Some("news".to_string())
        );
    }

    #[test]
    fn test_last_occurrence_wins() {
        assert_eq!(
            get_param(Some("page=first&page=second"), "page"),
            Some("second".to_string())
        );
        assert_eq!(
            get_param(Some("page=first&other=x"), "page"),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(get_param(Some("page="), "page"), Some(String::new()));
        assert_eq!(get_param(Some("page"), "page"), Some(String::new()));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            get_param(Some("page=%61bout"), "page"),
            Some("about".to_string())
        );
        // Encoded traversal decodes to the literal sequence so the
        // validator can reject it.
        assert_eq!(
            get_param(Some("page=..%2F..%2Fetc%2Fpasswd"), "page"),
            Some("../../etc/passwd".to_string())
        );
    }

    #[test]
    fn test_plus_is_space() {
        assert_eq!(
            get_param(Some("page=a+b"), "page"),
            Some("a b".to_string())
        );
    }

    #[test]
    fn test_malformed_escape_kept_literally() {
        assert_eq!(
            get_param(Some("page=50%25"), "page"),
            Some("50%".to_string())
        );
        assert_eq!(
            get_param(Some("page=100%"), "page"),
            Some("100%".to_string())
        );
        assert_eq!(
            get_param(Some("page=%zz"), "page"),
            Some("%zz".to_string())
        );
    }
}
