//! # Domain Types
//!
//! Core domain types used throughout the catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │ ProductPayload  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  from backend   │──►│  form input     │──►│  validated body │       │
//! │  │  lenient nums   │   │  price: f64     │   │  stock: u32     │       │
//! │  │  id (_id)       │   │  stock: f64     │   │  POST / PUT     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                 │                      ▲                │
//! │                                 └── validate() ────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Reads, Strict Writes
//! The backend is not under our control, so [`Product`] accepts whatever
//! numeric junk it returns (`null`, strings, missing keys) and records it as
//! `None`. Anything we *send* goes through [`ProductPayload`], which can only
//! be built from a draft that passed validation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate;

// =============================================================================
// Product ID
// =============================================================================

/// Opaque backend-assigned product identifier.
///
/// Some backends emit numeric ids; they are kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(ProductId(id)),
            Value::Number(n) => Ok(ProductId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "product id must be a string or number, got {other}"
            ))),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog record as returned by the backend.
///
/// `price` and `stock` are `None` when the backend sent something that is
/// not a JSON number. Such products drop out of the list filters instead of
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier (`_id` on the wire, `id` also accepted).
    #[serde(alias = "_id")]
    pub id: ProductId,

    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub stock: Option<f64>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub featured_image: String,
}

impl Product {
    /// Price if it is a finite number.
    #[inline]
    pub fn finite_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite())
    }

    /// True when stock is a finite number above zero.
    pub fn is_in_stock(&self) -> bool {
        matches!(self.stock, Some(s) if s.is_finite() && s > 0.0)
    }

    /// True when stock is exactly zero (highlighted in the list).
    ///
    /// Unknown stock is not "out of stock"; it is simply unknown.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == Some(0.0)
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

// =============================================================================
// Product Draft
// =============================================================================

/// A user-edited candidate record, possibly invalid.
///
/// Numbers are `f64` so that fractional stock and unparseable input (NaN)
/// can be represented and reported by [`validate`]. `Default` matches an
/// empty add form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: f64,
    pub featured_image: String,
}

impl ProductDraft {
    /// Validates the draft and converts it into a request body.
    ///
    /// ## Errors
    /// `CoreError::Validation` with every failing field when the draft is
    /// not submittable.
    pub fn into_payload(self) -> CoreResult<ProductPayload> {
        let errors = validate(&self);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(ProductPayload {
            name: self.name,
            description: self.description,
            price: self.price,
            // validate_stock guarantees a whole number in 0..=10000
            stock: self.stock as u32,
            featured_image: self.featured_image,
        })
    }
}

/// Prefills an edit form from a stored product.
impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.unwrap_or(f64::NAN),
            stock: product.stock.unwrap_or(f64::NAN),
            featured_image: product.featured_image.clone(),
        }
    }
}

// =============================================================================
// Product Payload
// =============================================================================

/// The JSON body of a create or update request.
///
/// Only obtainable through [`ProductDraft::into_payload`], so every payload
/// satisfies all field rules at once.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductPayload {
    name: String,
    description: String,
    price: f64,
    stock: u32,
    featured_image: String,
}

impl ProductPayload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn featured_image(&self) -> &str {
        &self.featured_image
    }
}

impl TryFrom<ProductDraft> for ProductPayload {
    type Error = CoreError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        draft.into_payload()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
