//! # catalog-client: Product Backend Client
//!
//! Talks to the product REST backend. All network I/O in the workspace
//! lives here.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method   Path               Client call                               │
//! │  ──────   ────               ───────────                               │
//! │  GET      /products          list_products()                           │
//! │  GET      /products/{id}     get_product(id)                           │
//! │  POST     /products          create_product(draft)   validated first   │
//! │  PUT      /products/{id}     update_product(id, draft) validated first │
//! │  DELETE   /products/{id}     delete_product(id)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - `ProductClient`
//! - [`config`] - `ClientConfig` (defaults → catalog.toml → environment)
//! - [`error`] - `ClientError`, `ConfigError`

pub mod client;
pub mod config;
pub mod error;

pub use client::ProductClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ConfigError, ConfigResult};
