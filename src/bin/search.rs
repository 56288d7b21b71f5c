use anyhow::{Context, Result};
use clap::Parser;

use humandbs_store::{cli::SearchCli, init_tracing, search};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = SearchCli::parse();
    let request = cli.request();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    search::run_search(&cli.store, &request, &mut out)
        .await
        .with_context(|| format!("Search for {:?} failed", request.value))?;

    Ok(())
}
