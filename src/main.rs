use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use repository::{init_repository, MemoryStore, Repository};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use util::{config_dir, database_url, load_config, load_env, MEMORY_URL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dir = config_dir();
    let config = load_config(&dir)?;
    let secrets = load_env(&dir)?;
    let db_url = database_url(&secrets)?;

    let (repository, store) = if db_url == MEMORY_URL {
        warn!(task = "use in-memory document store");
        (Repository::new(Arc::new(MemoryStore::new())), None)
    } else {
        let (repository, store) =
            init_repository(&db_url, &config.database.name)
                .await
                .context("failed to connect document store")?;
        (repository, Some(store))
    };

    let router = api::router(repository);

    let address = SocketAddr::from((config.server.host, config.server.port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "start api serving", address = %address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = store {
        store.shutdown().await;
    }
    info!(task = "stop api serving");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(task = "install ctrl-c handler", error = %e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                warn!(task = "install sigterm handler", error = %e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!(task = "shutdown requested");
}
