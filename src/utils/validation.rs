use crate::core::normalize::normalize;
use crate::utils::error::{CockpitError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CockpitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CockpitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CockpitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_section(section: &str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(CockpitError::TaxonomyValidationError {
            section: section.to_string(),
            message: "section is missing or empty".to_string(),
        });
    }
    Ok(())
}

/// Keys that are not already canonical can never be reached through a lookup.
pub fn validate_canonical_keys<'a, I>(section: &str, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    for key in keys {
        let canonical = normalize(key);
        if &canonical != key {
            return Err(CockpitError::TaxonomyValidationError {
                section: section.to_string(),
                message: format!("key '{}' is not canonical (expected '{}')", key, canonical),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("taxonomy.path", "data/instruments.toml").is_ok());
        assert!(validate_path("taxonomy.path", "").is_err());
        assert!(validate_path("taxonomy.path", "   ").is_err());
        assert!(validate_path("taxonomy.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }

    #[test]
    fn test_validate_canonical_keys() {
        let good = vec!["glass_cockpit".to_string(), "analog_mechanical".to_string()];
        assert!(validate_canonical_keys("eras", &good).is_ok());

        let bad = vec!["Glass-Cockpit".to_string()];
        let err = validate_canonical_keys("eras", &bad).unwrap_err();
        assert!(err.to_string().contains("glass_cockpit"));
    }
}
