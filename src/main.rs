use anyhow::Result;
use zanowallet::app::handler;

#[tokio::main]
async fn main() -> Result<()> {
    handler::init().await
}
