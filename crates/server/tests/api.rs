use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use api_types::{
    expense::SplitRecorded,
    group::GroupProvisioned,
    summary::{DetailedSummaryResponse, GroupSummaryResponse},
    wallet::BalanceUpdated,
};
use migration::MigratorTrait;
use server::{ServerState, router};

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = engine::Engine::builder().database(db).build();
    router(ServerState {
        engine: Arc::new(engine),
    })
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn banner_lists_endpoints() {
    let app = app().await;

    let res = app.oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = json_body(res).await;
    assert_eq!(body["message"], "Splitfund API is running!");
}

#[tokio::test]
async fn full_expense_flow() {
    let app = app().await;

    // Provision a group with a bare name and a typed member.
    let res = app
        .clone()
        .oneshot(post(
            "/group/create",
            json!({
                "group_id": 1,
                "members": [
                    "Alice",
                    {"name": "Smiths", "type": "family", "head_count": 3},
                ],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: GroupProvisioned = json_body(res).await;
    assert_eq!(created.members, vec!["Alice", "Smiths"]);

    // Top up Alice by name.
    let res = app
        .clone()
        .oneshot(post(
            "/wallet/add",
            json!({"name": "Alice", "group_id": 1, "amount": 100.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: BalanceUpdated = json_body(res).await;
    assert_eq!(updated.balance, 100.0);

    // Equal split, participants as a csv string.
    let res = app
        .clone()
        .oneshot(post(
            "/expense/split",
            json!({
                "group_id": 1,
                "payer": "Smiths",
                "participants": "Alice, Smiths",
                "amount": 50.0,
                "split_type": "equal",
                "category": "groceries",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let recorded: SplitRecorded = json_body(res).await;
    assert_eq!(recorded.details["Alice"], 25.0);
    assert_eq!(recorded.details["Smiths"], 25.0);

    let res = app.clone().oneshot(get("/group/summary/1")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let summary: GroupSummaryResponse = json_body(res).await;
    assert_eq!(summary.summary["Alice"], 75.0);
    assert_eq!(summary.summary["Smiths"], -25.0);
    let smiths = summary.members.iter().find(|m| m.name == "Smiths").unwrap();
    assert_eq!(smiths.head_count, 3);

    let res = app
        .oneshot(get("/group/summary/detailed/1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let detailed: DetailedSummaryResponse = json_body(res).await;
    let alice = &detailed["Alice"];
    assert_eq!(alice.total_spent, 25.0);
    assert_eq!(alice.initial_balance_estimate, 100.0);
    let smiths = &detailed["Smiths"];
    assert_eq!(smiths.total_paid, 50.0);
    assert_eq!(smiths.paid_for[0].category.as_deref(), Some("groceries"));
}

#[tokio::test]
async fn missing_wallet_is_a_404_with_diagnostic() {
    let app = app().await;

    app.clone()
        .oneshot(post(
            "/group/create",
            json!({"group_id": 1, "members": ["Alice", "Bob"]}),
        ))
        .await
        .unwrap();

    let res = app
        .oneshot(post(
            "/expense/split",
            json!({
                "group_id": 1,
                "payer": "Alice",
                "participants": ["Alice", "Ghost"],
                "amount": 30.0,
                "split_type": "equal",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(res).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Ghost"));
    assert!(message.contains("Alice"));
    assert!(message.contains("Bob"));
}

#[tokio::test]
async fn invalid_splits_are_unprocessable() {
    let app = app().await;

    app.clone()
        .oneshot(post(
            "/group/create",
            json!({"group_id": 1, "members": ["Alice"]}),
        ))
        .await
        .unwrap();

    // Unknown split type.
    let res = app
        .clone()
        .oneshot(post(
            "/expense/split",
            json!({
                "group_id": 1,
                "payer": "Alice",
                "participants": ["Alice"],
                "amount": 10.0,
                "split_type": "percentage",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Ratio split without a ratio map.
    let res = app
        .clone()
        .oneshot(post(
            "/expense/split",
            json!({
                "group_id": 1,
                "payer": "Alice",
                "participants": ["Alice"],
                "amount": 10.0,
                "split_type": "ratio",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Non-positive amount.
    let res = app
        .oneshot(post(
            "/wallet/add",
            json!({"name": "Alice", "group_id": 1, "amount": -5.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_envelopes_are_bad_requests() {
    let app = app().await;

    // A group without members.
    let res = app
        .clone()
        .oneshot(post("/group/create", json!({"group_id": 1, "members": []})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // An add-money request with no wallet target at all.
    let res = app
        .clone()
        .oneshot(post("/wallet/add", json!({"amount": 10.0})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // A split with a blank payer.
    app.clone()
        .oneshot(post(
            "/group/create",
            json!({"group_id": 1, "members": ["Alice"]}),
        ))
        .await
        .unwrap();
    let res = app
        .oneshot(post(
            "/expense/split",
            json!({
                "group_id": 1,
                "payer": "  ",
                "participants": ["Alice"],
                "amount": 10.0,
                "split_type": "equal",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summaries_for_unknown_groups_are_empty() {
    let app = app().await;

    let res = app.clone().oneshot(get("/group/summary/99")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let summary: GroupSummaryResponse = json_body(res).await;
    assert!(summary.summary.is_empty());
    assert!(summary.members.is_empty());

    let res = app
        .oneshot(get("/group/summary/detailed/99"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let detailed: DetailedSummaryResponse = json_body(res).await;
    assert!(detailed.is_empty());
}
