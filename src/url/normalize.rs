use crate::UrlError;
use url::Url;

/// Normalizes a URL into a comparable, schema-complete form
///
/// # Normalization Steps
///
/// 1. If no scheme is present, default to `https`
/// 2. Reject the URL if it has no host component
/// 3. Strip the fragment (`#...`)
/// 4. Strip the query string entirely
///
/// Two URLs differing only in query or fragment therefore normalize to the
/// same string. The function is idempotent: normalizing an already
/// normalized URL returns it unchanged.
///
/// # Examples
///
/// ```
/// use pagesift::normalize_url;
///
/// let url = normalize_url("example.edu/programs?tab=2#fees").unwrap();
/// assert_eq!(url.as_str(), "https://example.edu/programs");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, UrlError> {
    let trimmed = raw.trim();

    // Step 1: Parse, defaulting to https when no scheme is present.
    // A bare "example.edu/page" parses as a relative URL, so retry with
    // the scheme prepended. Scheme-relative "//example.edu" gets the same
    // treatment.
    let mut url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let prefixed = if let Some(rest) = trimmed.strip_prefix("//") {
                format!("https://{}", rest)
            } else {
                format!("https://{}", trimmed)
            };
            Url::parse(&prefixed).map_err(parse_error)?
        }
        Err(e) => return Err(parse_error(e)),
    };

    // Step 2: Require a host
    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    // Steps 3 & 4: Drop fragment and query
    url.set_fragment(None);
    url.set_query(None);

    Ok(url)
}

/// A host that parses to empty is the missing-host case, not a syntax error
fn parse_error(e: url::ParseError) -> UrlError {
    match e {
        url::ParseError::EmptyHost => UrlError::MissingHost,
        other => UrlError::Parse(other.to_string()),
    }
}
