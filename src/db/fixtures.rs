//! Temporary `news` databases for tests.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Fills `log` with `count` identical rows.
const INSERT_LOG_ROWS: &str = r#"
    INSERT INTO log (path, ip, method, status, time)
    WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < ?)
    SELECT ?, '127.0.0.1', 'GET', ?, ? FROM seq
"#;

/// Day on which every seeded article hit lands. All hits succeed, so its error rate is 0%.
pub const ARTICLE_HIT_DAY: &str = "2024-01-03";

pub struct NewsFixture {
    _dir: TempDir,
    path: PathBuf,
    pool: SqlitePool,
}

impl NewsFixture {
    /// Schema only, no rows.
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("news.db");
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        let pool = SqlitePool::connect_with(options).await.expect("open fixture db");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrate fixture db");
        Self { _dir: dir, path, pool }
    }

    /// Articles A=10, B=30, C=20, D=5 by three authors, plus two days of traffic
    /// at 0.5% and 2.3% errors.
    pub async fn standard() -> Self {
        let fixture = Self::empty().await;

        let ursula = fixture.add_author("Ursula La Multa").await;
        let rudolf = fixture.add_author("Rudolf von Treppenwitz").await;
        let anon = fixture.add_author("Anonymous Contributor").await;

        fixture.add_article(ursula, "A", 10).await;
        fixture.add_article(rudolf, "B", 30).await;
        fixture.add_article(ursula, "C", 20).await;
        fixture.add_article(anon, "D", 5).await;

        fixture.add_day("2024-01-01", 1000, 5).await;
        fixture.add_day("2024-01-02", 1000, 23).await;

        fixture
    }

    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    pub async fn add_author(&self, name: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("INSERT INTO authors (name, bio) VALUES (?, '') RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("insert author")
    }

    /// Adds an article and `views` successful hits on its page.
    pub async fn add_article(&self, author_id: i64, title: &str, views: i64) {
        let slug = title.to_lowercase().replace(' ', "-");
        sqlx::query("INSERT INTO articles (author, title, slug, lead, body) VALUES (?, ?, ?, '', '')")
            .bind(author_id)
            .bind(title)
            .bind(&slug)
            .execute(&self.pool)
            .await
            .expect("insert article");

        let path = format!("/article/{slug}");
        let time = format!("{ARTICLE_HIT_DAY} 08:00:00");
        self.add_log_rows(&path, "200 OK", &time, views).await;
    }

    /// Adds `requests` requests on `date`, `errors` of which are 404s.
    pub async fn add_day(&self, date: &str, requests: i64, errors: i64) {
        let time = format!("{date} 12:00:00");
        self.add_log_rows("/", "200 OK", &time, requests - errors).await;
        self.add_log_rows("/article/no-such-article", "404 NOT FOUND", &time, errors)
            .await;
    }

    async fn add_log_rows(&self, path: &str, status: &str, time: &str, count: i64) {
        if count <= 0 {
            return;
        }
        sqlx::query(INSERT_LOG_ROWS)
            .bind(count)
            .bind(path)
            .bind(status)
            .bind(time)
            .execute(&self.pool)
            .await
            .expect("insert log rows");
    }
}
