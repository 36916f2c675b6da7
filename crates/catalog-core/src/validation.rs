//! # Validation Module
//!
//! Field-level validation for product drafts before they are sent to the
//! backend.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  ProductDraft (user input, possibly invalid)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate() ── one validator per field, independent of each other      │
//! │  ├── name            1..=50 chars                                      │
//! │  ├── description     0..=200 chars                                     │
//! │  ├── price           number, > 0, <= 999999                            │
//! │  ├── stock           integer, >= 0, <= 10000                           │
//! │  └── featuredImage   absolute URL, <= 500 chars                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  FieldErrors { field → first violated rule }                           │
//! │           │                                                             │
//! │           ├── empty     → ProductPayload → POST/PUT                    │
//! │           └── non-empty → shown next to each field, nothing is sent    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lengths are counted in UTF-16 code units, which is how the backend's
//! JavaScript runtime measures strings. Input is not trimmed.
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate, validate_price, Field};
//! use catalog_core::ProductDraft;
//!
//! assert!(validate_price(9.99).is_ok());
//!
//! let errors = validate(&ProductDraft::default());
//! assert_eq!(errors.message(Field::Name), Some("Name is required".to_string()));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::ProductDraft;
use crate::{MAX_DESCRIPTION_LEN, MAX_IMAGE_URL_LEN, MAX_NAME_LEN, MAX_PRICE, MAX_STOCK};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field
// =============================================================================

/// A validated field of a product record.
///
/// Serializes as the backend's JSON key; displays as the form label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    Name,
    Description,
    Price,
    Stock,
    FeaturedImage,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Description,
        Field::Price,
        Field::Stock,
        Field::FeaturedImage,
    ];

    /// The JSON key used by the backend.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Stock => "stock",
            Field::FeaturedImage => "featuredImage",
        }
    }

    /// The label used at the start of error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Price => "Price",
            Field::Stock => "Stock",
            Field::FeaturedImage => "URL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Field-scoped validation failures for one draft.
///
/// At most one error per field: the first rule that field violated.
/// An empty map means the draft is valid.
///
/// ## JSON Shape
/// ```json
/// { "name": "Name is required", "price": "Price must be positive" }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `result` under its field if it is an error.
    pub fn record(&mut self, result: ValidationResult<()>) {
        if let Err(err) = result {
            self.0.insert(err.field(), err);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Returns the display message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterates failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, err) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.key(), err)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, err) in self.iter() {
            map.serialize_entry(field.key(), &err.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Validates every field of `draft` independently.
///
/// There are no cross-field rules. Returns an empty [`FieldErrors`] when the
/// draft may be submitted.
pub fn validate(draft: &ProductDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.record(validate_name(&draft.name));
    errors.record(validate_description(&draft.description));
    errors.record(validate_price(draft.price));
    errors.record(validate_stock(draft.stock));
    errors.record(validate_featured_image(&draft.featured_image));
    errors
}

/// Length as the backend counts it (UTF-16 code units).
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_name;
///
/// assert!(validate_name("Widget").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required { field: Field::Name });
    }

    if text_len(name) > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: Field::Name,
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product description. Empty is allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if text_len(description) > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: Field::Description,
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates the featured image URL.
///
/// ## Rules
/// - Must parse as an absolute URL (`https://...`, `data:...`, etc.)
/// - At most 500 characters
///
/// Only syntax is checked; the URL is never fetched.
pub fn validate_featured_image(image: &str) -> ValidationResult<()> {
    if url::Url::parse(image).is_err() {
        return Err(ValidationError::InvalidUrl {
            field: Field::FeaturedImage,
        });
    }

    if text_len(image) > MAX_IMAGE_URL_LEN {
        return Err(ValidationError::TooLong {
            field: Field::FeaturedImage,
            max: MAX_IMAGE_URL_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be a number (NaN is what unparseable form input becomes)
/// - Must be positive (> 0)
/// - Must not exceed 999999
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
///
/// assert!(validate_price(9.99).is_ok());
/// assert!(validate_price(999_999.0).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price.is_nan() {
        return Err(ValidationError::NotANumber { field: Field::Price });
    }

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive { field: Field::Price });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: Field::Price,
            max: MAX_PRICE as u32,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be a number
/// - Must be a whole number (infinities are not)
/// - Must be non-negative (>= 0)
/// - Must not exceed 10000
pub fn validate_stock(stock: f64) -> ValidationResult<()> {
    if stock.is_nan() {
        return Err(ValidationError::NotANumber { field: Field::Stock });
    }

    if !stock.is_finite() || stock.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger { field: Field::Stock });
    }

    if stock < 0.0 {
        return Err(ValidationError::MustBeNonNegative { field: Field::Stock });
    }

    if stock > MAX_STOCK {
        return Err(ValidationError::TooLarge {
            field: Field::Stock,
            max: MAX_STOCK as u32,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProductDraft {
        ProductDraft {
            name: "Widget".to_string(),
            description: String::new(),
            price: 9.99,
            stock: 5.0,
            featured_image: "https://example.com/x.png".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&widget()).is_empty());
    }

    #[test]
    fn test_every_field_invalid() {
        let draft = ProductDraft {
            name: String::new(),
            description: String::new(),
            price: -1.0,
            stock: -1.0,
            featured_image: "not-a-url".to_string(),
        };
        let errors = validate(&draft);

        // Description is the only field that accepts an empty value.
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.message(Field::Name).unwrap(), "Name is required");
        assert_eq!(errors.message(Field::Price).unwrap(), "Price must be positive");
        assert_eq!(
            errors.message(Field::Stock).unwrap(),
            "Stock must be non-negative"
        );
        assert_eq!(
            errors.message(Field::FeaturedImage).unwrap(),
            "Must be a valid URL"
        );
    }

    #[test]
    fn test_all_five_fields_can_fail_together() {
        let draft = ProductDraft {
            name: String::new(),
            description: "d".repeat(201),
            price: -1.0,
            stock: -1.0,
            featured_image: "not-a-url".to_string(),
        };
        let errors = validate(&draft);
        for field in Field::ALL {
            assert!(errors.contains(field), "{field:?} should fail");
        }
    }

    #[test]
    fn test_empty_name_only_fails_name() {
        let draft = ProductDraft {
            name: String::new(),
            ..widget()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Name),
            Some(&ValidationError::Required { field: Field::Name })
        );
    }

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name(&"A".repeat(50)).is_ok());
        assert!(validate_name("   ").is_ok());
        assert_eq!(
            validate_name(&"A".repeat(51)).unwrap_err().to_string(),
            "Name must be less than 50 characters"
        );
    }

    #[test]
    fn test_lengths_are_utf16_units() {
        // U+1F600 is two UTF-16 code units.
        assert!(validate_name(&"😀".repeat(25)).is_ok());
        assert!(validate_name(&format!("{}a", "😀".repeat(25))).is_err());
        // Multi-byte but single-unit characters count once.
        assert!(validate_name(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_description_bounds() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(200)).is_ok());
        assert_eq!(
            validate_description(&"d".repeat(201)).unwrap_err().to_string(),
            "Description must be less than 200 characters"
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(999_999.0).is_ok());

        assert_eq!(
            validate_price(0.0).unwrap_err().to_string(),
            "Price must be positive"
        );
        assert_eq!(
            validate_price(999_999.01).unwrap_err().to_string(),
            "Price must be less than 999999"
        );
        assert_eq!(
            validate_price(f64::NAN).unwrap_err().to_string(),
            "Price must be a number"
        );
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0.0).is_ok());
        assert!(validate_stock(10_000.0).is_ok());

        assert_eq!(
            validate_stock(1.5).unwrap_err().to_string(),
            "Stock must be an integer"
        );
        // Integer check runs before the sign check.
        assert_eq!(
            validate_stock(-0.5).unwrap_err().to_string(),
            "Stock must be an integer"
        );
        assert_eq!(
            validate_stock(-1.0).unwrap_err().to_string(),
            "Stock must be non-negative"
        );
        assert_eq!(
            validate_stock(10_001.0).unwrap_err().to_string(),
            "Stock must be less than 10000"
        );
        assert_eq!(
            validate_stock(f64::NAN).unwrap_err().to_string(),
            "Stock must be a number"
        );
        assert!(validate_stock(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_featured_image() {
        assert!(validate_featured_image("https://example.com/x.png").is_ok());
        assert!(validate_featured_image("http://localhost:3003/img.jpg").is_ok());

        assert!(validate_featured_image("").is_err());
        assert!(validate_featured_image("example.com/x.png").is_err());
        assert!(validate_featured_image("/relative/path.png").is_err());

        let long = format!("https://example.com/{}", "a".repeat(500));
        assert_eq!(
            validate_featured_image(&long).unwrap_err().to_string(),
            "URL must be less than 500 characters"
        );
    }

    #[test]
    fn test_invalid_url_reported_before_length() {
        let long_garbage = "x".repeat(600);
        assert_eq!(
            validate_featured_image(&long_garbage).unwrap_err(),
            ValidationError::InvalidUrl {
                field: Field::FeaturedImage
            }
        );
    }

    #[test]
    fn test_field_errors_json_shape() {
        let draft = ProductDraft {
            price: 0.0,
            ..widget()
        };
        let json = serde_json::to_value(validate(&draft)).unwrap();
        assert_eq!(json, serde_json::json!({ "price": "Price must be positive" }));
    }

    #[test]
    fn test_field_errors_display() {
        let draft = ProductDraft {
            name: String::new(),
            featured_image: "nope".to_string(),
            ..widget()
        };
        assert_eq!(
            validate(&draft).to_string(),
            "name: Name is required; featuredImage: Must be a valid URL"
        );
    }

    #[test]
    fn test_field_keys() {
        let keys: Vec<_> = Field::ALL.iter().map(Field::key).collect();
        assert_eq!(
            keys,
            ["name", "description", "price", "stock", "featuredImage"]
        );
        assert_eq!(
            serde_json::to_string(&Field::FeaturedImage).unwrap(),
            "\"featuredImage\""
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any draft inside every bound validates cleanly.
            #[test]
            fn in_bounds_drafts_are_valid(
                name in "[A-Za-z0-9 ]{1,50}",
                description in "[A-Za-z0-9 ]{0,200}",
                cents in 1u32..=99_999_900,
                stock in 0u32..=10_000,
                path in "[a-z0-9]{1,40}",
            ) {
                let draft = ProductDraft {
                    name,
                    description,
                    price: f64::from(cents) / 100.0,
                    stock: f64::from(stock),
                    featured_image: format!("https://cdn.example.com/{path}.png"),
                };
                prop_assert!(validate(&draft).is_empty());
            }

            /// An empty name is always reported, whatever the other fields hold.
            #[test]
            fn empty_name_always_reported(price in -10.0f64..10.0, stock in -5i32..5) {
                let draft = ProductDraft {
                    name: String::new(),
                    description: String::new(),
                    price,
                    stock: f64::from(stock),
                    featured_image: "https://example.com/x.png".to_string(),
                };
                let errors = validate(&draft);
                prop_assert_eq!(errors.message(Field::Name), Some("Name is required".to_string()));
            }
        }
    }
}
