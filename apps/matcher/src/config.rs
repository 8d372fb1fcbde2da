use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Driver configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rust_log: String,
    /// Date treated as "today" for open experience periods.
    pub reference_date: Option<NaiveDate>,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            reference_date: optional_env("MATCHER_REFERENCE_DATE")
                .map(|value| parse_date(&value))
                .transpose()
                .context("MATCHER_REFERENCE_DATE must be a YYYY-MM-DD date")?,
            pretty: optional_env("MATCHER_PRETTY")
                .map(|value| parse_flag(&value))
                .transpose()
                .context("MATCHER_PRETTY must be true or false")?
                .unwrap_or(false),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("'{value}' is not a YYYY-MM-DD date"))
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("'{other}' is not a boolean"),
    }
}
