use anyhow::Context;
use mise_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment setup (dotenv, logging)
    setup_environment();

    print_banner();

    tracing::info!("Mise cost server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state
    let state = ServerState::initialize(&config);

    // 4. Run the HTTP server
    Server::with_state(config, state)
        .run()
        .await
        .context("server terminated with error")?;

    Ok(())
}
