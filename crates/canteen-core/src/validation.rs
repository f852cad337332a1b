//! # Validation Module
//!
//! Input validation for menu and roster setup, and for snapshot fields
//! restored from storage.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command layer (apps/cli)                                     │
//! │  └── Argument parsing, `parse_price` on user text                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Snapshot setup (types.rs)                                    │
//! │  └── THIS MODULE: names, prices                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Restore (canteen-store)                                      │
//! │  └── THIS MODULE: validate_menu / validate_roster per field            │
//! │                                                                         │
//! │  The allocation engine itself never validates: it clamps.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{MenuItem, Person};
use crate::{MAX_NAME_LENGTH, MINOR_UNITS_PER_MAJOR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a menu item name.
///
/// ```rust
/// use canteen_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Kadala Curry").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("item name", name)
}

/// Validates a person's name.
pub fn validate_person_name(name: &str) -> ValidationResult<()> {
    validate_name("person name", name)
}

// =============================================================================
// Price Validators
// =============================================================================

/// Validates a unit price. Zero and negative prices are rejected.
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Parses a price typed by a user into [`Money`] without floating point.
///
/// ## Rules
/// - Digits with an optional `.` and at most two fractional digits
/// - An optional leading `₹` is ignored
/// - Result must be positive
///
/// ## Example
/// ```rust
/// use canteen_core::validation::parse_price;
/// use canteen_core::Money;
///
/// assert_eq!(parse_price("8").unwrap(), Money::from_major(8));
/// assert_eq!(parse_price("₹8.5").unwrap(), Money::from_minor(850));
/// assert!(parse_price("0").is_err());
/// assert!(parse_price("8.999").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let text = input.trim();
    let text = text.strip_prefix('₹').unwrap_or(text).trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    };

    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("must contain digits"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid("must be a plain decimal number"));
    }
    if frac.len() > 2 {
        return Err(invalid("at most two decimal places"));
    }

    let major: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid("too large"))?
    };
    let minor: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid("bad decimals"))? * 10,
        _ => frac.parse().map_err(|_| invalid("bad decimals"))?,
    };

    let price = major
        .checked_mul(MINOR_UNITS_PER_MAJOR)
        .and_then(|m| m.checked_add(minor))
        .map(Money::from_minor)
        .ok_or_else(|| invalid("too large"))?;

    validate_unit_price(price)?;
    Ok(price)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a whole menu, as restored from storage.
///
/// ## Rules
/// - Every id non-empty and unique
/// - Every name valid, every price positive
pub fn validate_menu(items: &[MenuItem]) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "menu item id".to_string(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "menu item id".to_string(),
                value: item.id.clone(),
            });
        }
        validate_item_name(&item.name)?;
        validate_unit_price(item.unit_price)?;
    }
    Ok(())
}

/// Validates a whole roster, as restored from storage.
pub fn validate_roster(people: &[Person]) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for person in people {
        if person.id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "person id".to_string(),
            });
        }
        if !seen.insert(person.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "person id".to_string(),
                value: person.id.clone(),
            });
        }
        validate_person_name(&person.name)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
