use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::llm_client::DEFAULT_COMPLETION_URL;

/// Which of the two form applications this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppVariant {
    /// Single-roster editor: add, select, update, cancel, delete.
    Coach,
    /// Student and mentor rosters plus the match action. No select/update.
    Student,
}

impl FromStr for AppVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coach" => Ok(AppVariant::Coach),
            "student" => Ok(AppVariant::Student),
            other => bail!("APP_VARIANT must be 'coach' or 'student', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub variant: AppVariant,
    /// Only required by the student variant, which issues completion calls.
    pub openai_api_key: Option<String>,
    pub completion_api_url: String,
    pub seed_demo_profiles: bool,
    /// When set, deleting a profile also drops matches that reference it.
    pub cascade_match_deletes: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let variant = optional_env("APP_VARIANT")
            .map(|v| v.parse::<AppVariant>())
            .transpose()?
            .unwrap_or(AppVariant::Student);

        let openai_api_key = match variant {
            AppVariant::Student => Some(require_env("OPENAI_API_KEY")?),
            AppVariant::Coach => optional_env("OPENAI_API_KEY"),
        };

        Ok(Config {
            variant,
            openai_api_key,
            completion_api_url: optional_env("COMPLETION_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
            seed_demo_profiles: flag_env("SEED_DEMO_PROFILES")?,
            cascade_match_deletes: flag_env("CASCADE_MATCH_DELETES")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn flag_env(key: &str) -> Result<bool> {
    match optional_env(key) {
        None => Ok(false),
        Some(v) => parse_flag(&v).with_context(|| format!("'{key}' must be true or false")),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}

#[cfg(test)]
impl Config {
    /// In-process configuration for handler and matchmaker tests.
    pub fn for_tests(variant: AppVariant) -> Self {
        Config {
            variant,
            openai_api_key: Some("test-key".to_string()),
            completion_api_url: DEFAULT_COMPLETION_URL.to_string(),
            seed_demo_profiles: false,
            cascade_match_deletes: false,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parses_case_insensitively() {
        assert_eq!("Coach".parse::<AppVariant>().unwrap(), AppVariant::Coach);
        assert_eq!(" student ".parse::<AppVariant>().unwrap(), AppVariant::Student);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!("admin".parse::<AppVariant>().is_err());
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("off").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
