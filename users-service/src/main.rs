use users_service::{init_tracing, router, AppState, Config, Result, Server};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("Server failed to start: {}", e);
        eprintln!("Server failed to start: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config);

    let state = AppState::seeded(config.clone());

    Server::new(config).serve(router(state)).await
}
