use crate::utils::error::{OptimiserError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a text field as a finite `f64`, ignoring surrounding whitespace.
pub fn parse_number(field_name: &str, raw: &str) -> Result<f64> {
    let parse_error = || OptimiserError::ParseError {
        field: field_name.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| parse_error())?;
    if !value.is_finite() {
        return Err(parse_error());
    }
    Ok(value)
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if value <= 0.0 || value.is_nan() {
        return Err(OptimiserError::RangeError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn parse_positive(field_name: &str, raw: &str) -> Result<f64> {
    let value = parse_number(field_name, raw)?;
    validate_positive(field_name, value)?;
    Ok(value)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OptimiserError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(OptimiserError::ConfigError {
                message: format!("{} contains duplicate name '{}'", field_name, name),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("area", "1000").unwrap(), 1000.0);
        assert_eq!(parse_number("area", " 2.5\n").unwrap(), 2.5);
        assert_eq!(parse_number("area", "1e3").unwrap(), 1000.0);
        assert!(parse_number("area", "").is_err());
        assert!(parse_number("area", "ten").is_err());
        assert!(parse_number("area", "12m").is_err());
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        for raw in ["NaN", "inf", "-infinity"] {
            assert!(matches!(
                parse_number("area", raw),
                Err(OptimiserError::ParseError { .. })
            ));
        }
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("aisle_width", 0.1).is_ok());
        assert!(validate_positive("aisle_width", 0.0).is_err());
        assert!(validate_positive("aisle_width", -0.0).is_err());
        assert!(validate_positive("aisle_width", -3.0).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("lots", ["a", "b"]).is_ok());
        assert!(validate_unique_names("lots", ["a", "b", "a"]).is_err());
    }
}
