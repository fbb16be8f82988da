use crate::core::client::ApiClient;
use crate::core::errors::ApiError;
use crate::infrastructure::transport::http_client::HttpTransport;
use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;

async fn list_loans() -> Json<Value> {
    Json(json!([{ "id": 1, "loanName": "Car" }]))
}

async fn add_loan(Json(mut loan): Json<Value>) -> Json<Value> {
    loan["id"] = json!(2);
    Json(loan)
}

async fn delete_loan(Path(_id): Path<String>) -> StatusCode {
    StatusCode::OK
}

async fn cash_flow(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({ "months": params.get("months") }))
}

async fn spawn_backend() -> SocketAddr {
    let api = Router::new()
        .route("/loans", get(list_loans).post(add_loan))
        .route("/loans/{id}", axum::routing::delete(delete_loan))
        .route("/forecast", get(cash_flow));
    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_round_trip_against_backend() {
    let addr = spawn_backend().await;
    let client = ApiClient::new(&format!("http://{}", addr), HttpTransport::new());

    let loans = client.loans().get_all().await.unwrap();
    assert_eq!(loans[0]["loanName"], "Car");

    // axum's Json extractor rejects bodies without a JSON content type
    let created = client
        .loans()
        .add(&json!({ "loanName": "Phone", "totalAmount": 4999.0 }))
        .await
        .unwrap();
    assert_eq!(created, json!({ "id": 2, "loanName": "Phone", "totalAmount": 4999.0 }));

    let deleted = client.loans().delete(2).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    assert!(deleted.body().is_empty());

    let forecast = client.forecast().get_cash_flow(Some(3)).await.unwrap();
    assert_eq!(forecast, json!({ "months": "3" }));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr), HttpTransport::new());
    let result = client.dashboard().get_overview().await;
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
