//! Stock validators for text prompts.
//!
//! Validators return `Err(message)` with the text to show the user.

/// Accepts anything that parses as a 64-bit integer.
pub fn validate_int(input: &str) -> Result<(), String> {
    input
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| "please enter a valid number".to_string())
}

/// Accepts anything that parses as a 64-bit float.
pub fn validate_float(input: &str) -> Result<(), String> {
    input
        .parse::<f64>()
        .map(|_| ())
        .map_err(|_| "please enter a valid number".to_string())
}

/// Accepts any non-empty string.
pub fn validate_string(input: &str) -> Result<(), String> {
    if input.is_empty() {
        Err("please enter a valid string".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_validation() {
        assert!(validate_int("42").is_ok());
        assert!(validate_int("-7").is_ok());
        assert_eq!(
            validate_int("4.2").unwrap_err(),
            "please enter a valid number"
        );
        assert!(validate_int("").is_err());
    }

    #[test]
    fn float_validation() {
        assert!(validate_float("4.2").is_ok());
        assert!(validate_float("10").is_ok());
        assert!(validate_float("ten").is_err());
    }

    #[test]
    fn string_validation() {
        assert!(validate_string("a").is_ok());
        assert_eq!(
            validate_string("").unwrap_err(),
            "please enter a valid string"
        );
    }
}
