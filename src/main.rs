use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = nutri_catalog::config::Config::load()?;
    nutri_catalog::utils::logging::init_tracing(&cfg.server.loglevel);

    info!(
        database_url = %cfg.database.url,
        loglevel = %cfg.server.loglevel,
        listen_addr = %cfg.server.listen_addr,
        listen_port = cfg.server.listen_port,
        context_path = %cfg.server.context_path,
        cors_allow_origins = ?cfg.server.cors_allow_origins
    );

    let pool = nutri_catalog::db::connect(&cfg.database).await?;

    let state = nutri_catalog::server::router::AppState::new(pool.clone());
    let app = nutri_catalog::server::router::catalog_router(state, &cfg.server);

    let addr = SocketAddr::from((cfg.server.listen_addr, cfg.server.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
