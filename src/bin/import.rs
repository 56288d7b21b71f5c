use anyhow::{Context, Result};
use clap::Parser;

use humandbs_store::{cli::ImportCli, init_tracing, loader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = ImportCli::parse();

    let inserted = loader::import_file(&cli.store, &cli.file)
        .await
        .with_context(|| format!("Failed to import {:?}", cli.file))?;

    println!("inserted {} documents", inserted);
    Ok(())
}
