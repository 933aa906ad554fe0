#[tokio::main]
async fn main() -> anyhow::Result<()> {
    asset_dashboard::app::run().await
}
