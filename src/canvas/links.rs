// SPDX-License-Identifier: MPL-2.0
//! URL construction for the platform's web surfaces.

use url::Url;

/// Normalizes a user-supplied domain into a base URL string.
///
/// Accepts "school.instructure.com" or "https://school.instructure.com/"
/// and yields "https://school.instructure.com". Returns an empty string for
/// blank input.
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Parses a normalized domain into a base [`Url`].
pub fn parse_base(raw: &str) -> Option<Url> {
    let normalized = normalize_domain(raw);
    if normalized.is_empty() {
        return None;
    }
    Url::parse(&normalized).ok()
}

/// The web view used for quiz submissions: a read-only history page pinned
/// to one attempt, with site chrome stripped.
pub fn quiz_history_url(domain: &str, course_id: i64, quiz_id: i64, attempt: i64) -> String {
    format!(
        "{}/courses/{}/quizzes/{}/history?version={}&headless=1",
        normalize_domain(domain),
        course_id,
        quiz_id,
        attempt
    )
}

/// Resolves a possibly host-relative preview path against the domain.
///
/// The API sometimes hands back paths like `/courses/1/preview` instead of
/// full URLs. Absolute URLs pass through unchanged; blank input yields
/// `None`.
pub fn resolve_preview_url(domain: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("://") {
        return Some(trimmed.to_string());
    }
    parse_base(domain)
        .and_then(|base| base.join(trimmed).ok())
        .map(|resolved| resolved.to_string())
}
