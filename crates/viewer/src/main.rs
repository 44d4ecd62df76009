use anyhow::anyhow;
use axum::serve;
use futures::TryFutureExt;
use log::{error, info, warn};
use std::{net::SocketAddr, path::Path, str::FromStr};
use tokio::{net::TcpListener, signal};
use wxmap_viewer::{app, build_app_state, get_config_info, get_log_level, setup_logger, ViewerSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = get_config_info();
    let log_level = get_log_level(&cli);

    setup_logger()
        .level(log_level)
        .level_for("wxmap_viewer", log_level)
        .level_for("wxmap_feeds", log_level)
        .level_for("http_response", log_level)
        .level_for("http_request", log_level)
        .apply()?;

    let host = cli.host();
    let port = cli.port();
    let feed_base = cli.feed_base();
    let ui_dir = cli.ui_dir();
    let image_dir = cli.image_dir();
    let refresh_interval = cli.refresh_interval();

    for dir in [&ui_dir, &image_dir] {
        if !Path::new(dir).is_dir() {
            warn!("directory not found, requests under it will 404: {}", dir);
        }
    }

    let socket_addr = SocketAddr::from_str(&format!("{}:{}", host, port))
        .map_err(|e| anyhow!("invalid address: {}", e))?;

    let listener = TcpListener::bind(socket_addr)
        .map_err(|e| anyhow!("error binding to socket: {}", e))
        .await?;

    info!("wxmap viewer starting...");
    info!("  Listen: http://{}", socket_addr);
    info!("  Feeds:  {}", feed_base);
    info!("  UI:     {}", ui_dir);
    info!("  Images: {}", image_dir);
    info!("  Refresh every {}s", refresh_interval.as_secs());

    let app_state = build_app_state(ViewerSettings {
        remote_url: format!("http://{}", socket_addr),
        feed_base,
        ui_dir,
        image_dir,
        user_agent: cli.user_agent(),
        request_timeout: cli.request_timeout(),
        domestic_firs: cli.domestic_firs(),
    })
    .map_err(|e| {
        error!("error building app: {}", e);
        e
    })?;

    app_state.controller.start();
    let refresh = app_state.controller.spawn_refresh(refresh_interval);

    let app = app(app_state);

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    refresh.abort();
    info!("wxmap viewer stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
