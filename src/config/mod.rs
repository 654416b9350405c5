pub mod database;

use std::env;

const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DB_NAME: &str = "photography_studio";
const DEFAULT_PROVIDER: &str = "openai";
const DEFAULT_MODEL: &str = "gpt-5";

/// Runtime configuration, read once at startup.
///
/// | Variable       | Default                      |
/// |----------------|------------------------------|
/// | `MONGO_URL`    | `mongodb://localhost:27017`  |
/// | `DB_NAME`      | `photography_studio`         |
/// | `LLM_API_KEY`  | unset                        |
/// | `LLM_PROVIDER` | `openai`                     |
/// | `LLM_BASE_URL` | derived from the provider    |
/// | `LLM_MODEL`    | `gpt-5`                      |
/// | `CORS_ORIGINS` | `*`                          |
/// | `HOST`/`PORT`  | `0.0.0.0` / `8000`           |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: String,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let provider = env::var("LLM_PROVIDER").unwrap_or_else(|_| DEFAULT_PROVIDER.to_string());
        let base_url = env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| default_base_url(&provider).to_string());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database: DatabaseConfig {
                url: env::var("MONGO_URL").unwrap_or_else(|_| DEFAULT_MONGO_URL.to_string()),
                name: env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            },
            llm: LlmConfig {
                provider,
                base_url,
                model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                api_key: env::var("LLM_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            },
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MONGO_URL.to_string(),
            name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

/// OpenAI-compatible endpoint root for a known provider name.
pub fn default_base_url(provider: &str) -> &'static str {
    match provider.to_ascii_lowercase().as_str() {
        "openrouter" => "https://openrouter.ai/api/v1",
        "groq" => "https://api.groq.com/openai/v1",
        _ => "https://api.openai.com/v1",
    }
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
