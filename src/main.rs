mod config;
mod db;
mod error;
mod report;
mod types;

use std::io::Write;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::QueryExecutor;
use crate::error::Result;
use crate::report::ReportGenerator;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env is fine; the environment may already carry everything.
    dotenvy::dotenv().ok();

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let executor = QueryExecutor::from_url(&cfg.database_url)?;
    info!(
        "Reporting on {} (articles={}, authors={}, error threshold={}%)",
        cfg.database_url, cfg.article_limit, cfg.author_limit, cfg.error_threshold_pct,
    );

    let generator = ReportGenerator::new(executor);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Each section handles its own query failure; only a broken stdout stops the run.
    generator.print_top_articles(&mut out, cfg.article_limit).await?;
    generator.print_top_authors(&mut out, cfg.author_limit).await?;
    generator.print_error_days(&mut out, cfg.error_threshold_pct).await?;

    out.flush()?;
    Ok(())
}
