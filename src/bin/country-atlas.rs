//! Country list REST service.
//!
//! Usage:
//!   country-atlas --data countries.json --port 3000 [--write-through]
//!
//! Without `--write-through` the data file only seeds the in-memory list
//! and changes are lost on exit.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use country_atlas::{
    logging, service, CountryService, CountryStore, JsonFilePersistence, ServiceConfig,
    ValidationMode,
};

#[derive(Parser, Debug)]
#[command(name = "country-atlas")]
#[command(about = "REST service over a JSON-backed list of countries")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// JSON file holding the country list
    #[arg(short, long, default_value = "countries.json")]
    data: PathBuf,

    /// Rewrite the data file after every change
    #[arg(short, long)]
    write_through: bool,

    /// Which fields must be present when adding a country
    #[arg(long, value_enum, default_value_t = ValidationMode::Strict)]
    validation: ValidationMode,

    /// Answer a successful add with a redirect to the listing
    #[arg(long)]
    redirect_after_add: bool,

    /// Maximum number of countries in the listing
    #[arg(long, default_value_t = country_atlas::query::DEFAULT_LIMIT)]
    list_limit: usize,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let persistence = JsonFilePersistence::new(&args.data).write_through(args.write_through);
    let store = CountryStore::open(persistence)
        .with_context(|| format!("failed to load countries from {}", args.data.display()))?;

    let config = ServiceConfig {
        validation: args.validation,
        list_limit: args.list_limit,
        redirect_after_add: args.redirect_after_add,
    };
    info!(
        data = %args.data.display(),
        write_through = args.write_through,
        ?config,
        "starting country service"
    );

    let service = Arc::new(CountryService::new(store, config));
    let addr = format!("{}:{}", args.host, args.port);
    service::serve(service, &addr, shutdown_signal())
        .await
        .with_context(|| format!("HTTP server on {} failed", addr))?;

    info!("country service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
