//! URL template substitution.

use crate::registry::PLACEHOLDER;

/// Percent-encode a search term for use inside a URL.
///
/// `%2F` is turned back into `/` so path-like terms such as `owner/repo`
/// stay navigable.
pub fn encode_search_term(term: &str) -> String {
    urlencoding::encode(term).replace("%2F", "/")
}

/// Substitute the encoded term into the first placeholder.
///
/// Returns `None` when the template has no placeholder.
pub fn fill_template(template: &str, term: &str) -> Option<String> {
    if !template.contains(PLACEHOLDER) {
        return None;
    }
    Some(template.replacen(PLACEHOLDER, &encode_search_term(term), 1))
}

/// Turn a home target into an absolute URL.
///
/// Bare domains get an `https://` prefix; targets that already carry a
/// scheme are returned unchanged.
pub fn home_url(target: &str) -> Option<String> {
    let target = target.trim();
    if target.is_empty() {
        return None;
    }
    if has_scheme(target) {
        Some(target.to_string())
    } else {
        Some(format!("https://{}", target))
    }
}

fn has_scheme(target: &str) -> bool {
    let Some(idx) = target.find("://") else {
        return false;
    };
    let scheme = &target[..idx];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
