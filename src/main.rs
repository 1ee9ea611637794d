use redis_map::config::{Backend, Config};
use redis_map::http;
use redis_map::map::{IntMap, RedisMap};
use redis_map::runner::run_demo;
use redis_map::store::{InMemoryHashStore, RedisHashStore};

use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::load()?;
    tracing::info!("Starting with {:?}", config);

    // 1. Store client and adapter:
    match config.backend {
        Backend::Redis => {
            let store = RedisHashStore::connect(&config.redis_url()).await?;
            store.ping().await?;
            serve(RedisMap::new(store), &config).await
        }
        Backend::Memory => {
            tracing::warn!("Using the in-memory store, data is lost on exit");
            serve(RedisMap::new(InMemoryHashStore::new()), &config).await
        }
    }
}

async fn serve<M: IntMap + 'static>(map: M, config: &Config) -> anyhow::Result<()> {
    // 2. Startup demo:
    if config.run_demo {
        let report = run_demo(&map).await?;
        tracing::info!("Demo finished: {:?}", report);
    }

    // 3. HTTP Router:
    let app = http::router(Arc::new(map));

    // 4. Start HTTP server:
    let addr: SocketAddr = config.bind;
    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
