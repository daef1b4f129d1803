// src/main.rs
use std::io;

use anyhow::Context;
use tokio::task;
use tracing_subscriber::EnvFilter;

use love_sandwiches::input_handler::collect_sales;
use love_sandwiches::{run_cycle, ui, CloudHandler, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the operator's console.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let config = Config::default();
    let store = CloudHandler::connect(&config)
        .await
        .context("failed to open the sales spreadsheet")?;

    println!("{}", ui::WELCOME);

    let sales = task::spawn_blocking(|| {
        let stdin = io::stdin();
        collect_sales(stdin.lock(), io::stdout())
    })
    .await
    .context("input task failed")??;

    run_cycle(&store, &mut io::stdout(), sales)
        .await
        .context("failed to record market data")?;

    Ok(())
}
