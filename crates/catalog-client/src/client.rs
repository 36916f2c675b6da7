//! # Product Client
//!
//! Async wrapper around the backend's product endpoints.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create_product / update_product                      │
//! │                                                                         │
//! │  ProductDraft                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  into_payload() ── invalid ──► ClientError::Validation (nothing sent)  │
//! │       │                                                                 │
//! │       ▼ valid                                                           │
//! │  POST /products  |  PUT /products/{id}                                 │
//! │       │                                                                 │
//! │       ├── 2xx ──► Product (decoded leniently)                          │
//! │       ├── 404 ──► ClientError::NotFound                                │
//! │       └── other ► ClientError::Api { status, body }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use catalog_core::{Product, ProductDraft, ProductId, ProductPayload};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Client for the product backend.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// ## Usage
/// ```rust,ignore
/// let client = ProductClient::new(&ClientConfig::load(None)?)?;
///
/// let products = client.list_products().await?;
/// let created = client.create_product(&draft).await?;
/// client.delete_product(&created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    base: Url,
}

impl ProductClient {
    /// Creates a client from validated configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        let base = Url::parse(config.api.url.trim())?;

        debug!(base = %base, timeout_secs = config.api.timeout_secs, "Product client ready");
        Ok(ProductClient { http, base })
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Fetches every product (`GET /products`).
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let url = self.endpoint(&["products"])?;
        let products: Vec<Product> = self.fetch(Method::GET, url, None, None).await?;
        info!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// Fetches one product (`GET /products/{id}`).
    pub async fn get_product(&self, id: &ProductId) -> ClientResult<Product> {
        let url = self.endpoint(&["products", id.as_str()])?;
        self.fetch(Method::GET, url, None, Some(id)).await
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Validates `draft` and creates it (`POST /products`).
    pub async fn create_product(&self, draft: &ProductDraft) -> ClientResult<Product> {
        let payload = Self::checked_payload(draft)?;
        self.create(&payload).await
    }

    /// Creates a product from an already-validated payload.
    pub async fn create(&self, payload: &ProductPayload) -> ClientResult<Product> {
        let url = self.endpoint(&["products"])?;
        let product: Product = self.fetch(Method::POST, url, Some(payload), None).await?;
        info!(id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Validates `draft` and replaces product `id` (`PUT /products/{id}`).
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> ClientResult<Product> {
        let payload = Self::checked_payload(draft)?;
        self.update(id, &payload).await
    }

    /// Replaces product `id` with an already-validated payload.
    pub async fn update(&self, id: &ProductId, payload: &ProductPayload) -> ClientResult<Product> {
        let url = self.endpoint(&["products", id.as_str()])?;
        let product: Product = self.fetch(Method::PUT, url, Some(payload), Some(id)).await?;
        info!(id = %id, "Product updated");
        Ok(product)
    }

    /// Deletes product `id` (`DELETE /products/{id}`).
    pub async fn delete_product(&self, id: &ProductId) -> ClientResult<()> {
        let url = self.endpoint(&["products", id.as_str()])?;
        self.send(Method::DELETE, url, None, Some(id)).await?;
        info!(id = %id, "Product deleted");
        Ok(())
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn checked_payload(draft: &ProductDraft) -> ClientResult<ProductPayload> {
        draft.clone().into_payload().map_err(|err| {
            warn!(error = %err, "Product draft rejected, request not sent");
            ClientError::from(err)
        })
    }

    /// Appends path segments (percent-encoded) to the base URL.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&ProductPayload>,
        id: Option<&ProductId>,
    ) -> ClientResult<T> {
        let text = self.send(method, url, body, id).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sends one request and returns the body of a successful response.
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&ProductPayload>,
        id: Option<&ProductId>,
    ) -> ClientResult<String> {
        let start = Instant::now();
        let path = url.path().to_string();

        let mut request = self.http.request(method.clone(), url);
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Backend request complete"
        );

        if status.is_success() {
            return Ok(text);
        }

        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(ClientError::NotFound(id.clone())),
            _ => {
                warn!(method = %method, path = %path, status = status.as_u16(), "Backend request failed");
                Err(ClientError::Api {
                    status: status.as_u16(),
                    body: text,
                })
            }
        }
    }
}
