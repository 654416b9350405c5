#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use studio_api::{
    config::{self, DatabaseConfig, LlmConfig},
    router::build_router,
    services::llm::LlmClient,
    AppState,
};

/// Stand-in for an OpenAI-compatible provider. Records every request body and
/// answers with a reply that echoes the last turn it was sent, or with a 429
/// rate-limit error when `rate_limited` is set.
#[derive(Clone, Default)]
pub struct MockProvider {
    requests: Arc<Mutex<Vec<Value>>>,
    rate_limited: bool,
}

impl MockProvider {
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn mock_completion(State(provider): State<MockProvider>, Json(body): Json<Value>) -> Response {
    let last = body["messages"]
        .as_array()
        .and_then(|m| m.last())
        .and_then(|m| m["content"].as_str())
        .unwrap_or_default()
        .to_string();

    provider.requests.lock().unwrap().push(body);

    if provider.rate_limited {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": { "message": "Rate limit reached", "type": "requests" } })),
        )
            .into_response();
    }

    Json(json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": format!("Happy to help with: {last}") }
        }]
    }))
    .into_response()
}

pub async fn spawn_mock_provider(rate_limited: bool) -> (String, MockProvider) {
    let provider = MockProvider {
        rate_limited,
        ..MockProvider::default()
    };

    let app = Router::new()
        .route("/chat/completions", post(mock_completion))
        .with_state(provider.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), provider)
}

pub struct TestApp {
    pub server: TestServer,
    pub provider: MockProvider,
}

pub struct TestOptions {
    pub api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub provider_rate_limited: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            cors_origins: vec!["*".to_string()],
            provider_rate_limited: false,
        }
    }
}

pub async fn setup_test_server() -> TestApp {
    setup_test_server_with(TestOptions::default()).await
}

pub async fn setup_test_server_with(options: TestOptions) -> TestApp {
    dotenvy::dotenv().ok();

    let database = DatabaseConfig {
        url: std::env::var("MONGO_URL").unwrap_or_else(|_| DatabaseConfig::default().url),
        name: "studio_api_test".to_string(),
    };
    let client = config::database::connect(&database).await.unwrap();
    let db = client.database(&database.name);

    let (base_url, provider) = spawn_mock_provider(options.provider_rate_limited).await;
    let llm = LlmClient::new(&LlmConfig {
        provider: "openai".to_string(),
        base_url,
        model: "gpt-5".to_string(),
        api_key: options.api_key,
    });

    let app = build_router(AppState { db, llm }, &options.cors_origins);

    TestApp {
        server: TestServer::new(app).unwrap(),
        provider,
    }
}

pub fn unique_session() -> String {
    format!("test-{}", uuid::Uuid::new_v4())
}
