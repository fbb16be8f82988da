use crate::core::models::{BalanceHistory, BalanceUpdate};
use crate::tests::create_test_client;
use futures::future::join_all;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_balance_routes() {
    let (client, transport) = create_test_client();
    transport.push_json(StatusCode::OK, json!({ "balance": 5230.75 })).await;
    transport
        .push_json(
            StatusCode::OK,
            json!({ "id": 3, "balance": 6000, "changeAmount": 769.25, "changeType": "manual" }),
        )
        .await;

    let current = client.balance().get_current().await.unwrap();
    assert_eq!(current["balance"], json!(5230.75));

    let update = BalanceUpdate {
        balance: 6000.0,
        description: Some("payday".to_string()),
    };
    let entry: BalanceHistory = serde_json::from_value(client.balance().update(&update).await.unwrap()).unwrap();
    assert_eq!(entry.id, Some(3));
    assert_eq!(entry.change_type.as_deref(), Some("manual"));

    client.balance().get_history().await.unwrap();
    client.balance().get_history_by_type("loan_payment").await.unwrap();

    let requests = transport.requests().await;
    let seen: Vec<(Method, &str)> = requests.iter().map(|r| (r.method.clone(), r.path())).collect();
    assert_eq!(
        seen,
        vec![
            (Method::GET, "/api/balance/current"),
            (Method::POST, "/api/balance/update"),
            (Method::GET, "/api/balance/history"),
            (Method::GET, "/api/balance/history/type/loan_payment"),
        ]
    );
    assert_eq!(requests[1].content_type(), Some("application/json"));
    assert_eq!(
        requests[1].body_json(),
        Some(json!({ "balance": 6000.0, "description": "payday" }))
    );
}

#[tokio::test]
async fn test_dashboard_routes() {
    let (client, transport) = create_test_client();
    client.dashboard().get_data().await.unwrap();
    client.dashboard().get_overview().await.unwrap();

    let paths: Vec<String> = transport
        .requests()
        .await
        .iter()
        .map(|r| r.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/api/dashboard", "/api/dashboard/overview"]);
}

#[tokio::test]
async fn test_concurrent_calls_each_resolve_once() {
    let (client, transport) = create_test_client();

    let calls = (0..8).map(|i| {
        let client = &client;
        async move {
            if i % 2 == 0 {
                client.dashboard().get_overview().await
            } else {
                client.balance().get_current().await
            }
        }
    });
    let results = join_all(calls).await;

    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(transport.requests().await.len(), 8);
}
