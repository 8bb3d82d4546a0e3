use url::Url;

/// Checks if a URL is valid and processable
///
/// A URL qualifies when it parses, uses the `http` or `https` scheme, and
/// carries a host.
///
/// # Examples
///
/// ```
/// use webaudit::url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("ftp://example.com/file"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            (parsed.scheme() == "http" || parsed.scheme() == "https") && parsed.has_host()
        }
        Err(_) => false,
    }
}

/// Extracts the authority (lowercase host plus explicit port) from a URL
///
/// Two URLs with the same authority are considered to belong to the same
/// site. The port only participates when it appears explicitly in the URL,
/// which keeps `http://example.com/` and `http://example.com:8080/` distinct.
pub fn authority_of(url: &str) -> Option<(String, Option<u16>)> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    Some((host, parsed.port()))
}

/// Checks if a URL is internal relative to a reference URL
///
/// Internal means sharing the reference URL's authority. The reference is
/// the page the URL was discovered on, not necessarily the run's seed.
///
/// # Examples
///
/// ```
/// use webaudit::url::is_internal_url;
///
/// assert!(is_internal_url(
///     "https://example.com/about",
///     "https://example.com/"
/// ));
/// assert!(!is_internal_url(
///     "https://cdn.example.org/logo.png",
///     "https://example.com/"
/// ));
/// ```
pub fn is_internal_url(url: &str, reference: &str) -> bool {
    match (authority_of(url), authority_of(reference)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
