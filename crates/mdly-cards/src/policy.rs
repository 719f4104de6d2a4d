//! URL admission policy.

use url::Url;

/// Decide whether a URL is eligible for card conversion.
///
/// The URL must parse as absolute with a non-empty host; anything else is
/// rejected without error. With an empty allow-list every such URL is
/// admitted. Otherwise the authority (host, plus `:port` when one is
/// explicit) must end with at least one configured suffix, compared
/// case-insensitively.
///
/// Suffix matching admits subdomains: `example.com` admits
/// `sub.example.com`, and also any other authority that merely ends with
/// the suffix.
#[must_use]
pub fn admit(url: &str, allowed_domains: &[String]) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    if host.is_empty() {
        return false;
    }

    if allowed_domains.is_empty() {
        return true;
    }

    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    };
    let authority = authority.to_lowercase();

    allowed_domains
        .iter()
        .any(|domain| authority.ends_with(&domain.to_lowercase()))
}
