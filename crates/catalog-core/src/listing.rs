//! # Listing Module
//!
//! Client-side filtering and sorting of the product list.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process(products, prefs)                             │
//! │                                                                         │
//! │  products (as fetched, backend order)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. only_in_stock?  keep stock > 0 (finite)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. price_range     keep min <= price <= max (finite)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. sort_key        none: input order                                  │
//! │                     name: collated, stable                             │
//! │                     price: ascending, stable                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rows to display                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller owns both the product list and the preferences and simply
//! calls [`process`] again whenever either changes. Nothing here can fail:
//! products with unusable numbers are left out, and an inverted price range
//! matches nothing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{CaseFirst, Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::Product;
use crate::MAX_PRICE;

// =============================================================================
// Sort Key
// =============================================================================

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortKey {
    /// Keep the order the backend returned.
    #[default]
    None,
    /// Ascending by name, locale-style collation.
    Name,
    /// Ascending by price.
    Price,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::None => write!(f, "none"),
            SortKey::Name => write!(f, "name"),
            SortKey::Price => write!(f, "price"),
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "default" => Ok(SortKey::None),
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            other => Err(CoreError::UnknownSortKey(other.to_string())),
        }
    }
}

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price filter.
///
/// Not normalized: a range with `min > max` is kept as given and matches
/// no product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        PriceRange { min, max }
    }

    /// True if `price` is finite and within `[min, max]`.
    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price.is_finite() && self.min <= price && price <= self.max
    }

    /// True if `min <= max` and both lie in `[0, 999999]`.
    pub fn is_well_formed(&self) -> bool {
        let in_bounds = |v: f64| (0.0..=MAX_PRICE).contains(&v);
        in_bounds(self.min) && in_bounds(self.max) && self.min <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange::new(0.0, MAX_PRICE)
    }
}

// =============================================================================
// View Preferences
// =============================================================================

/// Caller-held sort and filter settings for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ViewPreferences {
    pub sort_key: SortKey,
    pub only_in_stock: bool,
    pub price_range: PriceRange,
}

impl ViewPreferences {
    /// True if `product` passes every active filter.
    pub fn admits(&self, product: &Product) -> bool {
        if self.only_in_stock && !product.is_in_stock() {
            return false;
        }

        product
            .finite_price()
            .is_some_and(|price| self.price_range.contains(price))
    }
}

// =============================================================================
// Processing
// =============================================================================

/// Filters and sorts `products`, borrowing from the input.
pub fn select<'a>(products: &'a [Product], prefs: &ViewPreferences) -> Vec<&'a Product> {
    let mut rows: Vec<&Product> = products.iter().filter(|p| prefs.admits(p)).collect();

    // sort_by is stable: equal keys keep their input order
    match prefs.sort_key {
        SortKey::None => {}
        SortKey::Name => rows.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Price => rows.sort_by(|a, b| compare_prices(a, b)),
    }

    rows
}

/// Filters and sorts `products` into an owned list.
///
/// ## Example
/// ```rust
/// use catalog_core::listing::{process, SortKey, ViewPreferences};
/// use catalog_core::Product;
///
/// let products: Vec<Product> = serde_json::from_str(r#"[
///     {"_id": "1", "name": "B", "price": 10, "stock": 0},
///     {"_id": "2", "name": "A", "price": 5, "stock": 3}
/// ]"#).unwrap();
///
/// let prefs = ViewPreferences {
///     sort_key: SortKey::Name,
///     only_in_stock: true,
///     ..ViewPreferences::default()
/// };
///
/// let rows = process(&products, &prefs);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].name, "A");
/// ```
pub fn process(products: &[Product], prefs: &ViewPreferences) -> Vec<Product> {
    select(products, prefs).into_iter().cloned().collect()
}

fn compare_prices(a: &Product, b: &Product) -> Ordering {
    // Both prices are finite once the range filter has run.
    a.price
        .partial_cmp(&b.price)
        .unwrap_or(Ordering::Equal)
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> = name_collator();
}

/// Root-locale collator at tertiary strength, lowercase first.
fn name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    options.case_first = Some(CaseFirst::LowerFirst);
    Collator::try_new(&Default::default(), options).ok()
}

/// Locale-aware name collation.
///
/// Accents and case are secondary to the base letters, so "Éclair" sorts
/// between "apple" and "Zebra", and names that differ only in case put the
/// lowercase spelling first ("apple" < "Apple" < "banana").
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => compare_folded(a, b),
    })
}

/// Case-folded code point order, used only if collation data fails to load.
fn compare_folded(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();

    folded(a).cmp(&folded(b)).then_with(|| {
        let case_key = |s: &str| s.chars().map(|c| (c.is_uppercase(), c)).collect::<Vec<_>>();
        case_key(a).cmp(&case_key(b))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
