//! Building absolute links under the pages base.
//!
//! The pages base is used as a plain string prefix. It is never parsed or
//! validated, so a relative base such as `/app` produces relative links.

/// Whether a value already starts with `http://` or `https://` (any case).
pub fn is_absolute(value: &str) -> bool {
    starts_with_ignore_case(value, "http://") || starts_with_ignore_case(value, "https://")
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// Join a base and a path with exactly one slash between them.
///
/// ```
/// use recipe_index::urls::join;
/// assert_eq!(join("https://host/app/", "/foo.jpg"), "https://host/app/foo.jpg");
/// ```
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Make a link absolute against the pages base.
///
/// Empty stays empty, `http(s)://` links are kept as they are, everything
/// else is joined onto the base.
pub fn absolutize(pages_base: &str, value: &str) -> String {
    if value.is_empty() || is_absolute(value) {
        value.to_string()
    } else {
        join(pages_base, value)
    }
}
