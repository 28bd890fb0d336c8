//! Content inventory summary: per-table record counts plus recent intake
//! activity. This is the dashboard number set an admin UI renders, exposed
//! as a diagnostics CLI.

use anyhow::Result;
use std::fmt::Write as _;

use crate::util::db::Db;
use crate::util::env as env_util;

#[derive(Debug, Clone, Default)]
pub struct ContentStatsConfig {
    /// Optional override for the Postgres connection string.
    pub database_url: Option<String>,
}

pub async fn run(cfg: ContentStatsConfig) -> Result<()> {
    env_util::init_env();
    let db_url = match cfg.database_url {
        Some(url) => url,
        None => env_util::db_url()?,
    };
    let db = Db::connect(&db_url, 5).await?;

    fn is_undefined_table_error(err: &sqlx::Error) -> bool {
        match err {
            sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("42P01"),
            _ => false,
        }
    }

    // Partially provisioned databases report missing tables as zero instead
    // of failing the whole summary.
    macro_rules! count {
        ($sql:expr) => {
            match sqlx::query_scalar::<_, i64>($sql).fetch_one(&db.pool).await {
                Ok(val) => val,
                Err(e) if is_undefined_table_error(&e) => 0,
                Err(e) => return Err(e.into()),
            }
        };
    }

    let companies = count!("SELECT count(*) FROM company");
    let categories = count!("SELECT count(*) FROM product_category");
    let root_categories =
        count!("SELECT count(*) FROM product_category WHERE parent_category_id IS NULL");
    let brands = count!("SELECT count(*) FROM brand");
    let products = count!("SELECT count(*) FROM product");
    let news = count!("SELECT count(*) FROM news");
    let certificates = count!("SELECT count(*) FROM certificate");
    let banners = count!("SELECT count(*) FROM banner");
    let messages = count!("SELECT count(*) FROM contact_message");
    let messages_24h = count!(
        "SELECT count(*) FROM contact_message WHERE submission_date > now() - interval '1 day'"
    );
    let subscribers = count!("SELECT count(*) FROM newsletter_subscriber");
    let subscribers_24h = count!(
        "SELECT count(*) FROM newsletter_subscriber WHERE subscription_date > now() - interval '1 day'"
    );

    let mut out = String::new();
    writeln!(out, "CONTENT COUNTS SUMMARY:").ok();
    writeln!(out, "companies: {companies}").ok();
    writeln!(out, "categories: {categories} (roots: {root_categories})").ok();
    writeln!(out, "brands: {brands}").ok();
    writeln!(out, "products: {products}").ok();
    writeln!(out, "news: {news}").ok();
    writeln!(out, "certificates: {certificates}").ok();
    writeln!(out, "banners: {banners}").ok();
    writeln!(out, "contact messages: {messages} (last 24h: {messages_24h})").ok();
    writeln!(
        out,
        "newsletter subscribers: {subscribers} (last 24h: {subscribers_24h})"
    )
    .ok();
    println!("{}", out);

    Ok(())
}
