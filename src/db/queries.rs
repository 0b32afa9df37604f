//! Fixed statements for each report. Limits and thresholds are always bound,
//! so each limited report has a with-limit and a without-limit variant.
//! Equal counts fall back to name order so reruns print identical reports.

pub const TOP_ARTICLES: &str = r#"
    SELECT title, views
    FROM article_views
    ORDER BY views DESC, title ASC
"#;

pub const TOP_ARTICLES_LIMITED: &str = r#"
    SELECT title, views
    FROM article_views
    ORDER BY views DESC, title ASC
    LIMIT ?
"#;

pub const TOP_AUTHORS: &str = r#"
    SELECT author, SUM(views) AS total_views
    FROM article_views
    GROUP BY author_id, author
    ORDER BY total_views DESC, author ASC, author_id ASC
"#;

pub const TOP_AUTHORS_LIMITED: &str = r#"
    SELECT author, SUM(views) AS total_views
    FROM article_views
    GROUP BY author_id, author
    ORDER BY total_views DESC, author ASC, author_id ASC
    LIMIT ?
"#;

pub const ERROR_DAYS: &str = r#"
    SELECT date, error_percent
    FROM daily_error_rates
    WHERE error_percent > ?
    ORDER BY date ASC
"#;
