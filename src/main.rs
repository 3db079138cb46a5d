#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = sheetscore_rust::run().await {
        eprintln!("sheetscore-rust fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
