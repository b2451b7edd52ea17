use anyhow::Result;
use ytc::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
