use anyhow::Result;
use htmx_todo::{
    app,
    store::{MemoryStore, SledStore},
    AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // TODO_DB_PATH set: persist through sled there; unset: seeded in-memory list
    let state = match std::env::var("TODO_DB_PATH") {
        Ok(path) => {
            tracing::info!(path, "using sled store");
            AppState::new(SledStore::open(&path)?)
        }
        Err(_) => {
            tracing::info!("using in-memory store");
            AppState::new(MemoryStore::seeded())
        }
    };

    let addr = std::env::var("TODO_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
