use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use lendhub::domain::config::ApiConfig;
use lendhub::kernel::server::ApiState;
use lendhub_database::Database;
use lendhub_server::router;
use tower::ServiceExt;

async fn app() -> Router {
    let config = ApiConfig::default();
    let db = Database::builder()
        .url("sqlite::memory:")
        .init()
        .await
        .expect("in-memory database");

    let slices = lendhub::init(&config).expect("slices");
    let state = slices
        .into_iter()
        .fold(ApiState::builder().config(config).db(db), |builder, slice| {
            builder.register_slice(slice)
        })
        .build()
        .expect("state");

    router::init(state)
}

async fn get(app: Router, uri: &str) -> StatusCode {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    response.status()
}

#[tokio::test]
async fn root_endpoint_answers() {
    assert_eq!(get(app().await, "/").await, StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_answers() {
    assert_eq!(get(app().await, "/health").await, StatusCode::OK);
}

#[tokio::test]
async fn empty_region_table_lists_fine() {
    assert_eq!(get(app().await, "/v1/regions").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_item_is_not_found() {
    assert_eq!(get(app().await, "/v1/items/999").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn out_of_range_image_size_is_rejected_before_the_service() {
    assert_eq!(get(app().await, "/v1/images/abc?s=15").await, StatusCode::BAD_REQUEST);
}
