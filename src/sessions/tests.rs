use crate::dataset::tests::testville;
use crate::http::tests::{loading_test_server, test_server};
use axum_test::TestServer;
use serde_json::{json, Value};

async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    body["session"]["sessionId"]
        .as_str()
        .expect("a created session has an id")
        .to_string()
}

#[tokio::test]
async fn test_create_session_starts_a_round() {
    let server = test_server();

    let response = server.post("/sessions").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!(false));
    let session = &body["session"];
    assert_eq!(session["phase"]["state"], json!("ready"));
    assert_eq!(session["phase"]["round"]["cityName"], json!("Testville"));
    assert!(session["phase"].get("guess").is_none());
    assert_eq!(session["controls"]["submitEnabled"], json!(false));
    assert_eq!(session["controls"]["restartVisible"], json!(false));
    let true_point = &session["phase"]["round"]["truePoint"];
    let satellite = &session["maps"]["satellite"];
    assert_eq!(&satellite["center"], true_point);
    assert_eq!(satellite["zoom"], json!(16));
    assert_eq!(satellite["interaction"]["dragging"], json!(false));
    assert_eq!(session["maps"]["guess"]["worldCopyJump"], json!(true));
    assert!(session["maps"].get("result").is_none());
}

#[tokio::test]
async fn test_full_round() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/guess"))
        .json(&json!({ "lat": 0.5, "lng": 0.5 }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["session"]["controls"]["submitEnabled"], json!(true));
    assert_eq!(
        body["session"]["maps"]["guess"]["layers"],
        json!([{ "type": "marker", "position": { "lat": 0.5, "lng": 0.5 }, "popupOpen": false }])
    );

    let response = server
        .post(&format!("/sessions/{session_id}/submit"))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    let phase = &body["session"]["phase"];
    assert_eq!(phase["state"], json!("revealed"));
    let distance = phase["result"]["distanceKm"].as_f64().unwrap();
    // Testville spans one degree, so no guess inside it can be much further off.
    assert!((0.0..=160.0).contains(&distance), "got {distance}");
    assert!(phase["result"]["summary"]
        .as_str()
        .unwrap()
        .ends_with("km away from Testville."));
    assert_eq!(body["session"]["controls"]["restartVisible"], json!(true));
    assert_eq!(
        body["session"]["maps"]["result"]["fitBounds"]["padding"],
        json!([50, 50])
    );

    let response = server
        .post(&format!("/sessions/{session_id}/restart"))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    let session = &body["session"];
    assert_eq!(session["phase"]["state"], json!("ready"));
    assert!(session["phase"].get("guess").is_none());
    assert!(session["maps"].get("result").is_none());
    assert_eq!(session["maps"]["guess"]["layers"], json!([]));
    assert_eq!(session["controls"]["submitEnabled"], json!(false));
}

#[tokio::test]
async fn test_submit_without_guess() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/submit"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": true, "errorCode": "noGuessRecorded" })
    );
}

#[tokio::test]
async fn test_restart_before_reveal() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/restart"))
        .await;

    assert_eq!(
        response.json::<Value>(),
        json!({ "error": true, "errorCode": "notRevealed" })
    );
}

#[tokio::test]
async fn test_guess_out_of_range() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/guess"))
        .json(&json!({ "lat": 95.0, "lng": 0.0 }))
        .await;

    assert_eq!(
        response.json::<Value>(),
        json!({ "error": true, "errorCode": "invalidCoordinates" })
    );
}

#[tokio::test]
async fn test_unknown_session() {
    let server = test_server();

    let response = server.get("/sessions/does-not-exist").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": true, "errorCode": "sessionNotFound" })
    );
}

#[tokio::test]
async fn test_session_waits_for_the_dataset() {
    let (server, app_context) = loading_test_server();
    let session_id = create_session(&server).await;

    let response = server.get(&format!("/sessions/{session_id}")).await;
    let body = response.json::<Value>();
    assert_eq!(body["session"]["phase"], json!({ "state": "loading" }));
    assert!(body["session"]["maps"].get("satellite").is_none());

    let response = server
        .post(&format!("/sessions/{session_id}/guess"))
        .json(&json!({ "lat": 0.5, "lng": 0.5 }))
        .await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": true, "errorCode": "notAcceptingGuesses" })
    );

    app_context.dataset.publish(testville());

    let response = server.get(&format!("/sessions/{session_id}")).await;
    let body = response.json::<Value>();
    assert_eq!(body["session"]["phase"]["state"], json!("ready"));
    assert!(body["session"]["maps"].get("satellite").is_some());
}

#[tokio::test]
async fn test_close_session() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server.delete(&format!("/sessions/{session_id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "error": false }));

    let response = server.delete(&format!("/sessions/{session_id}")).await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": true, "errorCode": "sessionNotFound" })
    );
}
