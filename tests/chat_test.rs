mod common;

use axum::http::StatusCode;
use common::{setup_test_server, setup_test_server_with, unique_session, TestOptions};
use serde_json::json;
use studio_api::modules::chat::prompt::SYSTEM_PROMPT;

#[tokio::test]
async fn test_chat_empty_message_fails() {
    let app = setup_test_server().await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "session_id": "s1", "message": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("Message cannot be empty"));
    assert!(app.provider.requests().is_empty());
}

#[tokio::test]
async fn test_chat_empty_session_fails() {
    let app = setup_test_server().await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "session_id": "", "message": "Hello" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_missing_field_is_bad_request() {
    let app = setup_test_server().await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "message": "Hello" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_chat_non_json_body_is_bad_request() {
    let app = setup_test_server().await;

    let response = app.server.post("/api/chat").text("hello there").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_chat_persists_user_then_assistant() {
    let app = setup_test_server().await;
    let session_id = unique_session();

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "session_id": session_id, "message": "Do you shoot weddings?" }))
        .await;

    response.assert_status(StatusCode::OK);
    let chat: serde_json::Value = response.json();
    assert_eq!(chat["session_id"], session_id.as_str());
    assert_eq!(chat["response"], "Happy to help with: Do you shoot weddings?");

    let history: Vec<serde_json::Value> = app
        .server
        .get(&format!("/api/messages/{}", session_id))
        .await
        .json();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[0]["content"], "Do you shoot weddings?");
    assert_eq!(history[1]["role"], "assistant");
    assert_eq!(history[1]["content"], chat["response"]);
    assert_ne!(history[0]["id"], history[1]["id"]);
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_chat_sends_system_prompt_and_history() {
    let app = setup_test_server().await;
    let session_id = unique_session();

    for message in ["Hi!", "What does the Premium package include?"] {
        app.server
            .post("/api/chat")
            .json(&json!({ "session_id": session_id, "message": message }))
            .await
            .assert_status(StatusCode::OK);
    }

    let requests = app.provider.requests();
    assert_eq!(requests.len(), 2);

    let second = requests[1]["messages"].as_array().unwrap();
    assert_eq!(requests[1]["model"], "gpt-5");
    assert_eq!(second[0]["role"], "system");
    assert_eq!(second[0]["content"], SYSTEM_PROMPT);
    // system + user + assistant + user
    assert_eq!(second.len(), 4);
    assert_eq!(second[1]["content"], "Hi!");
    assert_eq!(second[2]["role"], "assistant");
    assert_eq!(second[3]["content"], "What does the Premium package include?");
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_history_is_ordered_by_timestamp() {
    let app = setup_test_server().await;
    let session_id = unique_session();

    for message in ["one", "two", "three"] {
        app.server
            .post("/api/chat")
            .json(&json!({ "session_id": session_id, "message": message }))
            .await
            .assert_status(StatusCode::OK);
    }

    let history: Vec<serde_json::Value> = app
        .server
        .get(&format!("/api/messages/{}", session_id))
        .await
        .json();

    assert_eq!(history.len(), 6);
    let timestamps: Vec<_> = history
        .iter()
        .map(|m| chrono::DateTime::parse_from_rfc3339(m["timestamp"].as_str().unwrap()).unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));

    let roles: Vec<&str> = history.iter().map(|m| m["role"].as_str().unwrap()).collect();
    assert_eq!(roles, ["user", "assistant", "user", "assistant", "user", "assistant"]);
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_unknown_session_has_empty_history() {
    let app = setup_test_server().await;

    let response = app
        .server
        .get(&format!("/api/messages/{}", unique_session()))
        .await;

    response.assert_status(StatusCode::OK);
    let history: Vec<serde_json::Value> = response.json();
    assert!(history.is_empty());
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_chat_without_api_key_is_server_error() {
    let app = setup_test_server_with(TestOptions {
        api_key: None,
        ..TestOptions::default()
    })
    .await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "session_id": unique_session(), "message": "Hello" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Missing API key");
    assert!(app.provider.requests().is_empty());
}

#[tokio::test]
async fn test_empty_session_has_empty_history() {
    let app = setup_test_server().await;

    let response = app.server.get("/api/messages/").await;

    response.assert_status(StatusCode::OK);
    let history: Vec<serde_json::Value> = response.json();
    assert!(history.is_empty());
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_provider_error_surfaces_as_server_error() {
    let app = setup_test_server_with(TestOptions {
        provider_rate_limited: true,
        ..TestOptions::default()
    })
    .await;
    let session_id = unique_session();

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "session_id": session_id, "message": "Are you free in June?" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "API error: Rate limit reached");
    assert_eq!(app.provider.requests().len(), 1);

    let history: Vec<serde_json::Value> = app
        .server
        .get(&format!("/api/messages/{}", session_id))
        .await
        .json();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[0]["content"], "Are you free in June?");
}
