//! API integration tests.
//!
//! Tests the complete request flow: HTTP → routes → catalog → store.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Value, json};

use ludo_api::server::ServerBuilder;
use ludo_catalog::{MemoryStore, SeedData, reset_and_load};

async fn seeded_router() -> axum::Router {
    let store = Arc::new(MemoryStore::new());
    reset_and_load(store.as_ref(), SeedData::load().unwrap())
        .await
        .unwrap();
    ServerBuilder::new()
        .debug(true)
        .store(store)
        .build()
        .test_router()
}

async fn component_id_by_category(router: axum::Router, category: &str) -> String {
    let (status, components): (_, Vec<Value>) =
        helpers::get_json(router, "/api/v1/components").await;
    assert_eq!(status, StatusCode::OK);
    components
        .iter()
        .find(|c| c["category"] == category)
        .unwrap_or_else(|| panic!("no seeded component with category {category}"))["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn list_components_returns_full_catalog_in_order() {
    let (status, components): (_, Vec<Value>) =
        helpers::get_json(seeded_router().await, "/api/v1/components").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(components.len(), 10);

    let orders: Vec<u64> = components
        .iter()
        .map(|c| c["step_order"].as_u64().unwrap())
        .collect();
    assert_eq!(orders, (1..=10).collect::<Vec<u64>>());
}

#[tokio::test]
async fn list_components_filters_by_every_difficulty() {
    for difficulty in ["beginner", "intermediate", "advanced"] {
        let (status, components): (_, Vec<Value>) = helpers::get_json(
            seeded_router().await,
            &format!("/api/v1/components?difficulty={difficulty}"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(!components.is_empty());
        assert!(
            components
                .iter()
                .all(|c| c["difficulty_level"] == difficulty)
        );
    }
}

#[tokio::test]
async fn list_components_rejects_unknown_difficulty() {
    let status = helpers::get_status(
        seeded_router().await,
        "/api/v1/components?difficulty=impossible",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seeded_components_round_trip_by_id() {
    let router = seeded_router().await;
    let (_, components): (_, Vec<Value>) =
        helpers::get_json(router.clone(), "/api/v1/components").await;

    for expected in components {
        let id = expected["id"].as_str().unwrap();
        let (status, fetched): (_, Value) =
            helpers::get_json(router.clone(), &format!("/api/v1/components/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, expected);
    }
}

#[tokio::test]
async fn unknown_component_id_is_404_not_5xx() {
    let router = seeded_router().await;

    // Well-formed but absent.
    let (status, body): (_, Value) = helpers::get_json(
        router.clone(),
        "/api/v1/components/01ARZ3NDEKTSV4RRFFQ69G5FAV",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Component not found"}));

    // Not even a parseable ID.
    let (status, body): (_, Value) =
        helpers::get_json(router, "/api/v1/components/not-an-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Component not found"}));
}

#[tokio::test]
async fn list_steps_returns_all_steps_in_order() {
    let (status, steps): (_, Vec<Value>) =
        helpers::get_json(seeded_router().await, "/api/v1/steps").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(steps.len(), 8);

    let numbers: Vec<u64> = steps
        .iter()
        .map(|s| s["step_number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, (1..=8).collect::<Vec<u64>>());
}

#[tokio::test]
async fn get_step_by_number() {
    let (status, step): (_, Value) =
        helpers::get_json(seeded_router().await, "/api/v1/steps/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(step["step_number"], 3);
    assert!(!step["title"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_step_number_is_404_not_5xx() {
    let (status, body): (_, Value) =
        helpers::get_json(seeded_router().await, "/api/v1/steps/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Step not found"}));
}

#[tokio::test]
async fn game_server_capacity_scenario() {
    let router = seeded_router().await;
    let id = component_id_by_category(router.clone(), "game_server").await;

    let (status, body): (_, Value) = helpers::post_json(
        router,
        "/api/v1/calculate-capacity",
        json!({
            "component_id": id,
            "calculation_type": "throughput",
            "inputs": {"concurrent_players": 30_000_000.0, "players_per_server": 80.0}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["component_id"], id);
    assert_eq!(body["calculation_type"], "throughput");
    assert_eq!(body["result"]["servers_needed"], 375_000);
    assert!(
        body["explanation"]
            .as_str()
            .unwrap()
            .contains("375,000 game servers")
    );
}

#[tokio::test]
async fn database_capacity_scenario() {
    let router = seeded_router().await;
    let id = component_id_by_category(router.clone(), "database").await;

    let (status, body): (_, Value) = helpers::post_json(
        router,
        "/api/v1/calculate-capacity",
        json!({
            "component_id": id,
            "calculation_type": "throughput",
            "inputs": {"reads_per_second": 2_000_000.0, "writes_per_second": 500_000.0}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["read_replicas_needed"], 200);
    assert_eq!(body["result"]["shards_needed"], 50);
}

#[tokio::test]
async fn load_balancer_capacity_scenario() {
    let router = seeded_router().await;
    let id = component_id_by_category(router.clone(), "load_balancer").await;

    let (status, body): (_, Value) = helpers::post_json(
        router,
        "/api/v1/calculate-capacity",
        json!({
            "component_id": id,
            "calculation_type": "throughput",
            "inputs": {"requests_per_second": 2_000_000.0}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["load_balancers_needed"], 20);
    assert_eq!(body["result"]["bandwidth_gbps"], 20_000);
}

#[tokio::test]
async fn capacity_calculation_is_idempotent() {
    let router = seeded_router().await;
    let id = component_id_by_category(router.clone(), "game_server").await;
    let request = json!({
        "component_id": id,
        "calculation_type": "throughput",
        "inputs": {"concurrent_players": 5_000_000.0}
    });

    let (_, first): (_, Value) =
        helpers::post_json(router.clone(), "/api/v1/calculate-capacity", request.clone()).await;
    let (_, second): (_, Value) =
        helpers::post_json(router, "/api/v1/calculate-capacity", request).await;

    assert_eq!(first["result"], second["result"]);
    assert_eq!(first["explanation"], second["explanation"]);
}

#[tokio::test]
async fn capacity_for_unimplemented_category_is_a_placeholder_success() {
    let router = seeded_router().await;
    let id = component_id_by_category(router.clone(), "cdn").await;

    let (status, body): (_, Value) = helpers::post_json(
        router,
        "/api/v1/calculate-capacity",
        json!({"component_id": id, "calculation_type": "throughput", "inputs": {}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"]["message"],
        "Capacity calculation not implemented for this component type"
    );
    assert_eq!(
        body["explanation"],
        "Capacity calculation not available for this component."
    );
}

#[tokio::test]
async fn capacity_rejects_invalid_inputs() {
    let router = seeded_router().await;
    let id = component_id_by_category(router.clone(), "game_server").await;

    let (status, body): (_, Value) = helpers::post_json(
        router,
        "/api/v1/calculate-capacity",
        json!({
            "component_id": id,
            "calculation_type": "throughput",
            "inputs": {"concurrent_players": -1.0}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("negative"));
}

#[tokio::test]
async fn capacity_for_unknown_component_is_404() {
    let (status, body): (_, Value) = helpers::post_json(
        seeded_router().await,
        "/api/v1/calculate-capacity",
        json!({
            "component_id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "calculation_type": "throughput",
            "inputs": {}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Component not found"}));
}

#[tokio::test]
async fn overview_returns_fixed_headline_metrics() {
    let (status, body): (_, Value) =
        helpers::get_json(seeded_router().await, "/api/v1/overview").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_concurrent_players"], 26_000_000);
    assert_eq!(body["total_game_servers"], 50_000);
    assert_eq!(body["total_games"], 1_000_000);
    assert_eq!(body["global_regions"], 12);
    assert_eq!(body["edge_locations"], 200);
    assert_eq!(body["requests_per_second"], 10_000_000);
    assert_eq!(body["data_processed_per_day_tb"], 1_000);
    assert_eq!(body["uptime_percentage"], 99.99);
}

mod helpers {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn make_request(method: Method, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        let body = match body {
            Some(v) => Body::from(serde_json::to_vec(&v).expect("serialize request body")),
            None => Body::empty(),
        };

        builder.body(body).expect("build request")
    }

    async fn response_body(
        response: axum::response::Response,
    ) -> (StatusCode, axum::body::Bytes) {
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read response body");
        (status, body)
    }

    pub async fn get_status(router: axum::Router, uri: &str) -> StatusCode {
        let request = make_request(Method::GET, uri, None);
        let response = router.oneshot(request).await.expect("send request");
        response.status()
    }

    pub async fn get_json<T: DeserializeOwned>(
        router: axum::Router,
        uri: &str,
    ) -> (StatusCode, T) {
        let request = make_request(Method::GET, uri, None);
        let response = router.oneshot(request).await.expect("send request");
        let (status, body) = response_body(response).await;
        let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!(
                "parse JSON response (status={status}): {e}: {}",
                String::from_utf8_lossy(&body)
            )
        });
        (status, json)
    }

    pub async fn post_json<T: DeserializeOwned>(
        router: axum::Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, T) {
        let request = make_request(Method::POST, uri, Some(body));
        let response = router.oneshot(request).await.expect("send request");
        let (status, body) = response_body(response).await;
        let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!(
                "parse JSON response (status={status}): {e}",
            )
        });
        (status, json)
    }
}
