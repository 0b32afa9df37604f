use std::io::Write;

use tracing::{error, info};

use crate::db::models::{ArticleViewRow, AuthorViewRow, ErrorDayRow};
use crate::db::queries;
use crate::db::{QueryExecutor, QueryParam};
use crate::error::Result;
use crate::report::format;
use crate::report::section::ReportSection;
use crate::types::Limit;

/// Builds and prints the three log reports.
///
/// The `top_*`/`error_days` methods return the raw query outcome so callers can
/// decide what a failure means. The `*_section` and `print_*` methods log a failed
/// query and carry on with an empty body, so one broken report never stops the rest.
pub struct ReportGenerator {
    executor: QueryExecutor,
}

impl ReportGenerator {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }

    pub async fn top_articles(&self, limit: Limit) -> Result<Vec<ArticleViewRow>> {
        match limit.bound() {
            None => self.executor.fetch_all(queries::TOP_ARTICLES, &[]).await,
            Some(n) => {
                self.executor
                    .fetch_all(queries::TOP_ARTICLES_LIMITED, &[QueryParam::Int(n)])
                    .await
            }
        }
    }

    pub async fn top_authors(&self, limit: Limit) -> Result<Vec<AuthorViewRow>> {
        match limit.bound() {
            None => self.executor.fetch_all(queries::TOP_AUTHORS, &[]).await,
            Some(n) => {
                self.executor
                    .fetch_all(queries::TOP_AUTHORS_LIMITED, &[QueryParam::Int(n)])
                    .await
            }
        }
    }

    /// Days whose error rate is strictly above `threshold_pct`, oldest first.
    pub async fn error_days(&self, threshold_pct: f64) -> Result<Vec<ErrorDayRow>> {
        self.executor
            .fetch_all(queries::ERROR_DAYS, &[QueryParam::Real(threshold_pct)])
            .await
    }

    pub async fn top_articles_section(&self, limit: Limit) -> ReportSection {
        let rows = rows_or_empty("top_articles", self.top_articles(limit).await);
        ReportSection::new(
            format::articles_header(limit),
            rows.iter().map(format::article_line).collect(),
        )
    }

    pub async fn top_authors_section(&self, limit: Limit) -> ReportSection {
        let rows = rows_or_empty("top_authors", self.top_authors(limit).await);
        ReportSection::new(
            format::authors_header(limit),
            rows.iter().map(format::author_line).collect(),
        )
    }

    pub async fn error_days_section(&self, threshold_pct: f64) -> ReportSection {
        let rows = rows_or_empty("error_days", self.error_days(threshold_pct).await);
        ReportSection::new(
            format::error_days_header(threshold_pct),
            rows.iter().map(format::error_day_line).collect(),
        )
        .or_no_results()
    }

    pub async fn print_top_articles<W: Write>(&self, out: &mut W, limit: Limit) -> Result<()> {
        self.top_articles_section(limit).await.write_to(out)?;
        Ok(())
    }

    pub async fn print_top_authors<W: Write>(&self, out: &mut W, limit: Limit) -> Result<()> {
        self.top_authors_section(limit).await.write_to(out)?;
        Ok(())
    }

    pub async fn print_error_days<W: Write>(&self, out: &mut W, threshold_pct: f64) -> Result<()> {
        self.error_days_section(threshold_pct).await.write_to(out)?;
        Ok(())
    }
}

fn rows_or_empty<T>(report: &'static str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(rows) => {
            info!(report, rows = rows.len(), "Report query succeeded");
            rows
        }
        Err(e) => {
            error!(report, "Report query failed: {e}");
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
