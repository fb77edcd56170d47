//! Input validation and sanitization for visitor-supplied data

use regex::Regex;
use std::net::IpAddr;
use std::sync::OnceLock;


const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const PHONE_PATTERN: &str = r"^[\d\s\-\(\)\+]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().count() > crate::constants::limits::EMAIL {
        return false;
    }
    email_regex().is_match(email)
}

/// Phone numbers are optional; an absent or empty value is accepted
pub fn validate_phone(phone: Option<&str>) -> bool {
    let phone = match phone {
        Some(p) if !p.is_empty() => p,
        _ => return true,
    };
    if phone.chars().count() > crate::constants::limits::PHONE {
        return false;
    }
    phone_regex().is_match(phone)
}

/// Zero the host part of an address before it is stored or logged
///
/// IPv4 keeps the first three octets and IPv6 the first four groups, written
/// out in full. IPv4-mapped IPv6 addresses are treated as IPv4. Anything that
/// does not parse collapses to `"anonymized"`.
pub fn anonymize_ip(ip: &str) -> String {
    let addr = match ip.trim().parse::<IpAddr>() {
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(IpAddr::V6(v6)),
        Ok(addr) => addr,
        Err(_) => return "anonymized".to_string(),
    };

    match addr {
        IpAddr::V4(v4) => {
            let [a, b, c, _] = v4.octets();
            format!("{}.{}.{}.0", a, b, c)
        }
        IpAddr::V6(v6) => {
            let network: Vec<String> = v6.segments()[..4]
                .iter()
                .map(|group| format!("{:04x}", group))
                .collect();
            format!("{}:0000:0000:0000:0000", network.join(":"))
        }
    }
}

/// Truncate to at most `max` characters without splitting a code point
pub fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Trim, then truncate
pub fn sanitize(value: &str, max: usize) -> String {
    truncate(value.trim(), max)
}
