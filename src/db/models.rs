//! Row types for the report queries. Decoded by sqlx from the
//! `article_views` and `daily_error_rates` views.
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ArticleViewRow {
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AuthorViewRow {
    pub author: String,
    pub total_views: i64,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ErrorDayRow {
    pub date: NaiveDate,
    /// Already multiplied by 100.
    pub error_percent: f64,
}
