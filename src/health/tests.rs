use crate::dataset::tests::testville;
use crate::dataset::DatasetStatus;
use crate::health::responses::HealthCheckResponse;
use crate::http::tests::{loading_test_server, test_server};

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        dataset: DatasetStatus::Loaded { cities: 1 },
        sessions: 0,
    });
}

#[tokio::test]
async fn test_health_check_while_loading() {
    let (server, app_context) = loading_test_server();

    let response = server.get("/health/check").await;

    response.assert_json(&HealthCheckResponse {
        error: false,
        dataset: DatasetStatus::Loading,
        sessions: 0,
    });

    app_context.dataset.publish(testville());
    server.post("/sessions").await.assert_status_ok();

    let response = server.get("/health/check").await;

    response.assert_json(&HealthCheckResponse {
        error: false,
        dataset: DatasetStatus::Loaded { cities: 1 },
        sessions: 1,
    });
}

#[tokio::test]
async fn test_health_check_after_failed_load() {
    let (server, app_context) = loading_test_server();
    app_context
        .dataset
        .fail(String::from("Failed to read `cities.geojson`."));

    let response = server.get("/health/check").await;

    response.assert_json(&HealthCheckResponse {
        error: false,
        dataset: DatasetStatus::Failed {
            reason: String::from("Failed to read `cities.geojson`."),
        },
        sessions: 0,
    });
}
