use crate::db::models::{ArticleViewRow, AuthorViewRow, ErrorDayRow};
use crate::types::Limit;

pub fn articles_header(limit: Limit) -> String {
    match limit {
        Limit::All => "Top Articles by All Time Views".to_string(),
        Limit::Top(n) => format!("Top {n} Articles by All Time Views"),
    }
}

pub fn authors_header(limit: Limit) -> String {
    match limit {
        Limit::All => "Top Authors by All Time Views".to_string(),
        Limit::Top(n) => format!("Top {n} Authors by All Time Views"),
    }
}

/// `1.0` renders as `1`, `2.5` as `2.5`.
pub fn error_days_header(threshold_pct: f64) -> String {
    format!("Days With Over {threshold_pct}% Error Access Rate")
}

pub fn article_line(row: &ArticleViewRow) -> String {
    format!("\"{}\" -- {} views", row.title, row.views)
}

pub fn author_line(row: &AuthorViewRow) -> String {
    format!("{} -- {} views", row.author, row.total_views)
}

pub fn error_day_line(row: &ErrorDayRow) -> String {
    format!(
        "{} -- {:.2}% errors",
        row.date.format("%B %d, %Y"),
        row.error_percent
    )
}
