use crate::utils::error::{LookupError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LookupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

static REALM_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Realm names are lowercase alphanumerics separated by single hyphens; a
/// leading `+` sigil is tolerated and ignored.
pub fn validate_realm_name(field_name: &str, name: &str) -> Result<()> {
    let re = REALM_NAME_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("realm name pattern is valid")
    });
    let candidate = name.strip_prefix('+').unwrap_or(name);
    if re.is_match(candidate) {
        Ok(())
    } else {
        Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Realm names use lowercase letters, digits and hyphens".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("gateway_url", "https://example.com").is_ok());
        assert!(validate_url("gateway_url", "http://example.com").is_ok());
        assert!(validate_url("gateway_url", "").is_err());
        assert!(validate_url("gateway_url", "invalid-url").is_err());
        assert!(validate_url("gateway_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("settle_delay_ms", 200u64, 0, 10_000).is_ok());
        assert!(validate_range("settle_delay_ms", 20_000u64, 0, 10_000).is_err());
    }

    #[test]
    fn test_validate_realm_name() {
        assert!(validate_realm_name("name", "alice").is_ok());
        assert!(validate_realm_name("name", "alice-01").is_ok());
        assert!(validate_realm_name("name", "+alice").is_ok());
        assert!(validate_realm_name("name", "Alice").is_err());
        assert!(validate_realm_name("name", "alice!").is_err());
        assert!(validate_realm_name("name", "-alice").is_err());
        assert!(validate_realm_name("name", "").is_err());
    }
}
