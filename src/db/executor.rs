use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{ConnectOptions, Connection, Sqlite};
use tracing::{debug, warn};

use crate::error::Result;

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryParam {
    Int(i64),
    Real(f64),
}

/// Runs report queries against the configured database.
/// Every call opens its own read-only connection, fetches all rows eagerly and
/// closes the connection before returning. Nothing is pooled between calls.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    options: SqliteConnectOptions,
}

impl QueryExecutor {
    /// Parses the database URL up front; connecting is deferred to each query.
    pub fn from_url(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .read_only(true)
            .create_if_missing(false);
        Ok(Self { options })
    }

    pub async fn fetch_all<T>(&self, sql: &'static str, params: &[QueryParam]) -> Result<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut conn = self.options.connect().await?;

        let mut query = sqlx::query_as::<Sqlite, T>(sql);
        for param in params {
            query = match *param {
                QueryParam::Int(v) => query.bind(v),
                QueryParam::Real(v) => query.bind(v),
            };
        }

        let fetched = query.fetch_all(&mut conn).await;
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {e}");
        }

        let rows = fetched?;
        debug!(rows = rows.len(), params = params.len(), "Query complete");
        Ok(rows)
    }
}
