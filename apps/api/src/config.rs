use anyhow::{bail, Context, Result};

use crate::pipeline::DispatchMode;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Per-request timeout for completion calls.
    pub llm_timeout_secs: u64,
    /// Retries on 429 / 5xx after the first attempt. `0` means a single attempt.
    pub llm_max_retries: u32,
    /// Default number of questions per category when a request does not specify one.
    pub question_count: u32,
    pub extraction_dispatch: DispatchMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let question_count = parse_env("QUESTION_COUNT", 5u32)?;
        if question_count == 0 {
            bail!("QUESTION_COUNT must be a positive integer");
        }

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120u64)?,
            llm_max_retries: parse_env("LLM_MAX_RETRIES", 3u32)?,
            question_count,
            extraction_dispatch: match std::env::var("EXTRACTION_DISPATCH") {
                Ok(raw) => DispatchMode::parse(&raw)
                    .with_context(|| format!("EXTRACTION_DISPATCH has unknown value '{raw}'"))?,
                Err(_) => DispatchMode::Concurrent,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
