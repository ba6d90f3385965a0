//! Parsing of raw setting values

use url::Url;

const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
const FALSEY: [&str; 4] = ["0", "false", "no", "off"];

/// Loose, shell-style boolean parsing.
///
/// `0`, `false`, `no` and `off` (any case) are false; every other non-blank
/// value is true, so a free-form value such as a trace file path counts as
/// enabled. Blank values carry no information and yield `None`.
pub fn parse_boolean(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(!FALSEY.iter().any(|f| value.eq_ignore_ascii_case(f)))
}

/// Whether `value` is one of the explicit truthy words, as opposed to a
/// free-form value that merely counts as true.
pub fn is_truthy_word(value: &str) -> bool {
    let value = value.trim();
    TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t))
}

/// Interpret a proxy setting as a URL.
///
/// A value without a scheme is taken as an `http://` proxy, as curl does.
/// Values that still do not parse, or that name no host, are malformed.
pub fn parse_proxy_url(value: &str) -> Option<Url> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let url = if value.contains("://") {
        Url::parse(value)
    } else {
        Url::parse(&format!("http://{value}"))
    }
    .ok()?;

    url.host_str().is_some_and(|host| !host.is_empty()).then_some(url)
}
