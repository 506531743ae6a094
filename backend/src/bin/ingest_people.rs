//! Fetch a batch of random people and store it in PostgreSQL.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nearby_users::domain::PeopleIngestionService;
use nearby_users::domain::ports::PeopleIngestionCommand;
use nearby_users::inbound::http::people::FETCH_STATUS;
use nearby_users::outbound::persistence::{
    DbPool, DieselPersonRepository, PoolConfig, apply_migrations,
};
use nearby_users::outbound::randomuser::{DEFAULT_SOURCE_URL, RandomUserHttpSource};
use reqwest::Url;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `ingest-people` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ingest-people",
    about = "Fetch random people and store them as one numbered batch",
    version
)]
struct CliArgs {
    /// Number of people to fetch.
    #[arg(long, value_name = "n", value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Random-person source endpoint.
    #[arg(long = "source-url", value_name = "url", default_value = DEFAULT_SOURCE_URL)]
    source_url: Url,
    /// Source request timeout in seconds.
    #[arg(
        long = "timeout-secs",
        value_name = "secs",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args.database_url)?;

    apply_migrations(database_url.clone())
        .await
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
    let pool = DbPool::new(PoolConfig::new(&database_url).with_max_size(2))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let source = RandomUserHttpSource::new(args.source_url, Duration::from_secs(args.timeout_secs))
        .map_err(|error| io::Error::other(format!("create source client: {error}")))?;
    let command = PeopleIngestionService::new(
        Arc::new(source),
        Arc::new(DieselPersonRepository::new(pool)),
    );

    let outcome = command
        .ingest(args.count)
        .await
        .map_err(|error| io::Error::other(format!("ingest command failed: {error}")))?;

    println!("status={FETCH_STATUS}");
    println!("run_id={}", outcome.batch_id);
    println!("ingested={}", outcome.ingested);

    Ok(())
}

fn resolve_database_url(explicit: Option<String>) -> io::Result<String> {
    let (value, origin) = match explicit {
        Some(value) => (value, "--database-url"),
        None => (
            env::var("DATABASE_URL").map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "database URL missing: set --database-url or DATABASE_URL",
                )
            })?,
            "DATABASE_URL",
        ),
    };
    if value.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{origin} must not be empty"),
        ));
    }
    Ok(value)
}
