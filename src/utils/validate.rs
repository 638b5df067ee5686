use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::appraisals::entities::{RATING_SCALE_MAX, RATING_SCALE_MIN};

static PERSONNEL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9./-]{0,31}$").expect("Invalid personnel number regex")
});

pub const MAX_NAME_LENGTH: usize = 100;

pub fn validate_personnel_number(number: &str) -> Result<(), &'static str> {
    if !PERSONNEL_NUMBER_RE.is_match(number) {
        return Err(
            "Personnel number must be 1-32 characters of letters, digits, '.', '/' or '-'",
        );
    }
    Ok(())
}

/// Non-empty after trimming, at most 100 characters
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be empty");
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), &'static str> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err("Weight must be a positive number");
    }
    Ok(())
}

/// Whole number on the 1-5 rating scale
pub fn validate_score_value(value: f64) -> Result<(), &'static str> {
    if !value.is_finite()
        || value.fract() != 0.0
        || !(RATING_SCALE_MIN..=RATING_SCALE_MAX).contains(&value)
    {
        return Err("Score values must be whole numbers from 1 to 5");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personnel_number() {
        assert!(validate_personnel_number("K-001").is_ok());
        assert!(validate_personnel_number("2024/HL.07").is_ok());
        assert!(validate_personnel_number("").is_err());
        assert!(validate_personnel_number("-lead").is_err());
        assert!(validate_personnel_number("has space").is_err());
    }

    #[test]
    fn test_name() {
        assert!(validate_name("Sari Wulandari").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_weight_and_score() {
        assert!(validate_weight(0.5).is_ok());
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());

        assert!(validate_score_value(1.0).is_ok());
        assert!(validate_score_value(5.0).is_ok());
        assert!(validate_score_value(0.0).is_err());
        assert!(validate_score_value(6.0).is_err());
        assert!(validate_score_value(3.5).is_err());
    }
}
