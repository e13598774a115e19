use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Stored user-agent and referrer strings are capped at this length.
pub const MAX_CAPTURED_LEN: usize = 500;

// Tablets must match before the mobile patterns: most tablet agents
// also contain "Mobile" or "Android".
static TABLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ipad|tablet|kindle|silk|playbook").unwrap()
});

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)mobile|iphone|ipod|android|blackberry|opera mini|windows phone").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Desktop => "desktop",
        }
    }
}

pub fn classify_device(user_agent: &str) -> DeviceType {
    if TABLET_RE.is_match(user_agent) {
        DeviceType::Tablet
    } else if MOBILE_RE.is_match(user_agent) {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}

/// Truncates on a char boundary so multi-byte agents never split.
pub fn truncate_captured(value: &str) -> String {
    value.chars().take(MAX_CAPTURED_LEN).collect()
}

/// FNV-1a over the client network address, rendered as hex. This is
/// obfuscation for grouping repeat visitors, not a security measure.
pub fn visitor_hash(address: &str) -> String {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    if address.is_empty() {
        return String::new();
    }

    let mut hash = FNV_OFFSET;
    for byte in address.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    format!("{:016x}", hash)
}

/// Host part of a stored referrer URL; malformed referrers yield None
/// and are excluded from breakdowns.
pub fn referrer_domain(referrer: &str) -> Option<String> {
    if referrer.is_empty() {
        return None;
    }
    let parsed = Url::parse(referrer).ok()?;
    parsed.host_str().map(str::to_string)
}
