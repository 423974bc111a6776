//! # Validation Module
//!
//! Input validation for the two free-text inputs the command surface
//! supplies: product name and quantity text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  add / save (name, quantity_text)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product_name(name)  ── empty? ──► Required { "name" }        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_quantity(text)         ── empty? ──► Required { "quantity" }    │
//! │       │                       ── "abc"? ──► InvalidFormat              │
//! │       │                       ── "-3"?  ──► OutOfRange                 │
//! │       ▼                                                                 │
//! │  (name, quantity) ─────────────────────────► catalog mutation          │
//! │                                                                         │
//! │  Validation runs BEFORE any mutation: a rejected input never           │
//! │  changes the collection.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::validate_product_input;
//!
//! let (name, quantity) = validate_product_input("Apple", " 5 ").unwrap();
//! assert_eq!(name, "Apple");
//! assert_eq!(quantity, 5);
//!
//! assert!(validate_product_input("", "5").is_err());
//! assert!(validate_product_input("Apple", "five").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a product name is present.
///
/// The name is stored exactly as typed: surrounding spaces are kept and
/// there is no length limit.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(" Milk ").unwrap(), " Milk ");
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses quantity text into a non-negative count.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be a whole number (an optional leading `+` is accepted)
/// - Must be between 0 and `u32::MAX`
pub fn parse_quantity(text: &str) -> ValidationResult<u32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let value: i64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

// =============================================================================
// Combined Validators
// =============================================================================

/// Validates both add/edit inputs, name first.
///
/// ## Returns
/// The name as typed and the parsed quantity.
pub fn validate_product_input(name: &str, quantity_text: &str) -> ValidationResult<(String, u32)> {
    let name = validate_product_name(name)?;
    let quantity = parse_quantity(quantity_text)?;
    Ok((name, quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Coca-Cola 330ml").unwrap(), "Coca-Cola 330ml");

        assert!(matches!(
            validate_product_name(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_name_is_kept_as_typed() {
        assert_eq!(validate_product_name("  Açúcar  ").unwrap(), "  Açúcar  ");
        assert_eq!(validate_product_name("   ").unwrap(), "   ");

        let long = "A".repeat(201);
        assert_eq!(validate_product_name(&long).unwrap(), long);

        assert_eq!(
            validate_product_input("  Apple ", "1").unwrap(),
            ("  Apple ".to_string(), 1)
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);
        assert_eq!(parse_quantity("+7").unwrap(), 7);
        assert_eq!(parse_quantity("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn test_parse_quantity_rejects_bad_input() {
        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("5abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("-1"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_quantity("4294967296"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_product_input_checks_name_first() {
        let err = validate_product_input("", "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }
}
