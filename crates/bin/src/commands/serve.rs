//! Serve command - runs the VoxPop web server.

use tokio::signal::unix::{SignalKind, signal};
use tracing_subscriber::EnvFilter;
use voxpop::{
    FeedSettings,
    web::{self, AppState},
};

use crate::cli::ServeArgs;

/// Run the VoxPop server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("voxpop=info".parse()?))
        .init();

    let settings = FeedSettings::new(args.page_size, args.max_page_size)?;
    tracing::info!(
        default_page_size = settings.default_page_size(),
        max_page_size = settings.max_page_size(),
        "Feed settings loaded"
    );

    // The store starts empty on every run
    let app_state = AppState::new(settings);

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    // Print startup message
    println!("VoxPop starting on http://{local_addr}");
    println!();
    println!("Available endpoints:");
    println!("  GET  /              - Landing page");
    println!("  GET  /comments/new  - Comment form");
    println!("  POST /comments/new  - Comment submission");
    println!("  GET  /feed          - Public feed (?page=N&page_size=M)");
    println!("  GET  /health        - Health check");
    println!();
    println!("Press Ctrl+C to shutdown");

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    web::serve(listener, app_state, async move {
        tokio::select! {
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
            _ = sigint.recv() => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
        }
    })
    .await?;

    println!("Server shut down");
    Ok(())
}
