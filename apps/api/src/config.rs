use std::num::NonZeroU32;

use anyhow::{bail, Context, Result};

use crate::resume::skills::SkillMatchMode;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub skill_match_mode: SkillMatchMode,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_max_connections(
                &std::env::var("DB_MAX_CONNECTIONS").unwrap_or_else(|_| "10".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_match_mode: parse_match_mode(
                &std::env::var("SKILL_MATCH_MODE").unwrap_or_else(|_| "strict".to_string()),
            )?,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

/// Pool size; zero is rejected.
fn parse_max_connections(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .with_context(|| format!("DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_match_mode(raw: &str) -> Result<SkillMatchMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(SkillMatchMode::Strict),
        "normalized" => Ok(SkillMatchMode::Normalized),
        other => bail!("SKILL_MATCH_MODE must be 'strict' or 'normalized', got '{other}'"),
    }
}
