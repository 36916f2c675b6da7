//! # catalog-core: Pure Business Logic for the Product Catalog
//!
//! This crate holds the rules of the catalog as pure functions with zero
//! I/O dependencies. The REST client and the CLI call into it; it never
//! calls out.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (catalog CLI)                      │   │
//! │  │      list ──► show ──► add ──► edit ──► delete                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │  listing  │  │  display  │  │   │
//! │  │   │  Product  │  │ validate  │  │  process  │  │  $1,234   │  │   │
//! │  │   │   Draft   │  │FieldErrors│  │ViewPrefs  │  │  trunc... │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                catalog-client (REST backend)                    │   │
//! │  │        GET/POST/PUT/DELETE /products[/{id}]                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductDraft, ProductPayload
//! - [`validation`] - Field-level form validation
//! - [`listing`] - Filtering and sorting for the product list
//! - [`display`] - Price and text formatting for tables
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::listing::{process, SortKey, ViewPreferences};
//! use catalog_core::validation::validate;
//! use catalog_core::ProductDraft;
//!
//! let draft = ProductDraft {
//!     name: "Widget".to_string(),
//!     description: String::new(),
//!     price: 9.99,
//!     stock: 5.0,
//!     featured_image: "https://example.com/x.png".to_string(),
//! };
//! assert!(validate(&draft).is_empty());
//!
//! let prefs = ViewPreferences {
//!     sort_key: SortKey::Name,
//!     ..ViewPreferences::default()
//! };
//! assert!(process(&[], &prefs).is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod error;
pub mod listing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use listing::{PriceRange, SortKey, ViewPreferences};
pub use types::*;
pub use validation::{validate, Field, FieldErrors};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound for a product price, and the default upper end of the
/// list's price filter.
pub const MAX_PRICE: f64 = 999_999.0;

/// Upper bound for a product's stock level.
pub const MAX_STOCK: f64 = 10_000.0;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Maximum length of the featured image URL.
pub const MAX_IMAGE_URL_LEN: usize = 500;

/// Text longer than this is truncated in list tables.
pub const DISPLAY_TEXT_LIMIT: usize = 30;
