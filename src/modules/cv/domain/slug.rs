use chrono::Utc;

/// Derive a URL-safe slug from a human-readable title: lowercase, runs
/// of non-alphanumeric characters collapse to a single hyphen, no
/// leading or trailing hyphen. May return an empty string; callers fall
/// back to [`fallback_slug`].
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Time-based slug for titles that normalize to nothing and for the
/// pathological case where every uniqueness probe collides.
pub fn fallback_slug(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_millis())
}

/// Candidate for the n-th uniqueness probe: the base slug itself first,
/// then `base-2`, `base-3`, ...
pub fn probe_candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
