use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use crate::error::{AppError, Result};
use crate::types::Limit;

pub const DATABASE_URL: &str = "sqlite:news.db";

/// Articles shown when ARTICLE_LIMIT is unset.
pub const DEFAULT_ARTICLE_LIMIT: &str = "3";

pub const DEFAULT_AUTHOR_LIMIT: &str = "all";

/// Percentage of failed requests a day must exceed to be reported.
pub const DEFAULT_ERROR_THRESHOLD_PCT: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub log_level: String,
    /// Rows in the top articles report (ARTICLE_LIMIT, `all` or a positive integer)
    pub article_limit: Limit,
    /// Rows in the top authors report (AUTHOR_LIMIT)
    pub author_limit: Limit,
    /// Error-rate threshold in percent (ERROR_THRESHOLD_PCT)
    pub error_threshold_pct: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let error_threshold_pct = match var("ERROR_THRESHOLD_PCT") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    AppError::Config("ERROR_THRESHOLD_PCT must be a finite number".to_string())
                })?,
            None => DEFAULT_ERROR_THRESHOLD_PCT,
        };

        // Checked here so a malformed URL fails startup instead of the first query.
        let database_url = var("DATABASE_URL").unwrap_or_else(|| DATABASE_URL.to_string());
        SqliteConnectOptions::from_str(&database_url)
            .map_err(|e| AppError::Config(format!("DATABASE_URL: {e}")))?;

        Ok(Self {
            database_url,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            article_limit: var("ARTICLE_LIMIT")
                .unwrap_or_else(|| DEFAULT_ARTICLE_LIMIT.to_string())
                .parse::<Limit>()
                .map_err(|e| AppError::Config(format!("ARTICLE_LIMIT: {e}")))?,
            author_limit: var("AUTHOR_LIMIT")
                .unwrap_or_else(|| DEFAULT_AUTHOR_LIMIT.to_string())
                .parse::<Limit>()
                .map_err(|e| AppError::Config(format!("AUTHOR_LIMIT: {e}")))?,
            error_threshold_pct,
        })
    }
}
