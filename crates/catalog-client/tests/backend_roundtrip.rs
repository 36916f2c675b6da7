//! Client tests against an in-process fake of the product backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use catalog_client::{ClientConfig, ClientError, ProductClient};
use catalog_core::listing::{process, SortKey, ViewPreferences};
use catalog_core::{Field, ProductDraft, ProductId};

// =============================================================================
// Fake Backend
// =============================================================================

#[derive(Clone, Default)]
struct Backend {
    products: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl Backend {
    fn seeded(rows: Vec<Value>) -> Self {
        let backend = Backend::default();
        *backend.products.lock().unwrap() = rows;
        backend
    }
}

fn with_id(id: &str, mut body: Value) -> Value {
    body["_id"] = Value::String(id.to_string());
    body
}

async fn list(State(backend): State<Backend>) -> Json<Value> {
    let products = backend.products.lock().unwrap().clone();
    Json(Value::Array(products))
}

async fn create(State(backend): State<Backend>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    backend.writes.fetch_add(1, Ordering::SeqCst);
    let id = format!("p{}", backend.next_id.fetch_add(1, Ordering::SeqCst) + 1);
    let stored = with_id(&id, body);
    backend.products.lock().unwrap().push(stored.clone());
    (StatusCode::CREATED, Json(stored))
}

async fn get_one(
    State(backend): State<Backend>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let found = backend
        .products
        .lock()
        .unwrap()
        .iter()
        .find(|p| p["_id"] == id.as_str())
        .cloned();
    found.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    backend.writes.fetch_add(1, Ordering::SeqCst);
    let mut products = backend.products.lock().unwrap();
    let slot = products
        .iter_mut()
        .find(|p| p["_id"] == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = with_id(&id, body);
    Ok(Json(slot.clone()))
}

async fn remove(
    State(backend): State<Backend>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    backend.writes.fetch_add(1, Ordering::SeqCst);
    let mut products = backend.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p["_id"] != id.as_str());
    if products.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({ "message": "Product deleted" })))
}

async fn serve(app: Router) -> ProductClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ProductClient::new(&ClientConfig::with_api_url(format!("http://{addr}"))).unwrap()
}

async fn start(backend: Backend) -> ProductClient {
    let app = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/{id}", get(get_one).put(update).delete(remove))
        .with_state(backend);
    serve(app).await
}

fn widget() -> ProductDraft {
    ProductDraft {
        name: "Widget".to_string(),
        description: String::new(),
        price: 9.99,
        stock: 5.0,
        featured_image: "https://example.com/x.png".to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_create_read_update_delete() {
    let client = start(Backend::default()).await;

    let created = client.create_product(&widget()).await.unwrap();
    assert_eq!(created.id, ProductId::from("p1"));
    assert_eq!(created.name, "Widget");
    assert_eq!(created.stock, Some(5.0));

    let listed = client.list_products().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let fetched = client.get_product(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    let mut edit = ProductDraft::from(&fetched);
    edit.price = 12.5;
    let updated = client.update_product(&created.id, &edit).await.unwrap();
    assert_eq!(updated.price, Some(12.5));

    client.delete_product(&created.id).await.unwrap();
    let err = client.get_product(&created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(id) if id == created.id));
}

#[tokio::test]
async fn test_invalid_draft_is_never_sent() {
    let backend = Backend::default();
    let client = start(backend.clone()).await;

    let draft = ProductDraft {
        name: String::new(),
        ..widget()
    };
    let err = client.create_product(&draft).await.unwrap_err();
    let errors = err.field_errors().expect("validation failure");
    assert_eq!(errors.message(Field::Name).unwrap(), "Name is required");

    let err = client
        .update_product(&ProductId::from("p1"), &ProductDraft { stock: 1.5, ..widget() })
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().contains(Field::Stock));

    assert_eq!(backend.writes.load(Ordering::SeqCst), 0);
    assert!(client.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_rows_do_not_break_the_list() {
    let backend = Backend::seeded(vec![
        json!({ "_id": "b", "name": "B", "price": 10, "stock": 0 }),
        json!({ "_id": "a", "name": "A", "price": 5, "stock": 3 }),
        json!({ "_id": "junk", "name": "Junk", "price": "cheap", "stock": null }),
    ]);
    let client = start(backend).await;

    let products = client.list_products().await.unwrap();
    assert_eq!(products.len(), 3);

    let prefs = ViewPreferences {
        sort_key: SortKey::Name,
        only_in_stock: true,
        ..ViewPreferences::default()
    };
    let rows = process(&products, &prefs);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "A");

    // Without filters the junk row is still excluded by the price range.
    let rows = process(&products, &ViewPreferences::default());
    let names: Vec<_> = rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let client = start(Backend::default()).await;
    let err = client
        .update_product(&ProductId::from("ghost"), &widget())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let app = Router::new().route(
        "/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
    );
    let client = serve(app).await;

    match client.list_products().await.unwrap_err() {
        ClientError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database offline");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let app = Router::new().route("/products", get(|| async { "<html>maintenance</html>" }));
    let client = serve(app).await;

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
