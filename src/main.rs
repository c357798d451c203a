use tracing::info;
use yomi_digest::startup;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting yomi-digest");

    // Load configuration once; everything downstream receives it explicitly
    let config = startup::load_config()?;

    startup::start_server(config).await
}
