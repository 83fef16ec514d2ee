#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dems::run().await {
        eprintln!("dems fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
