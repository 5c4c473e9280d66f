//! Toastkit demo binary
//!
//! Runs a scripted toast session and prints every frame of the board.
//!
//! Usage: `toastkit [config.json]`

use std::path::PathBuf;
use toastkit_cli::{demo, settings, Theme, ToastBoard};
use toastkit_core::ToastProvider;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Toastkit v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = settings::load_config(config_path.as_deref())?;

    let provider = ToastProvider::start(config.clone())?;
    let toaster = provider.toaster();

    let board = ToastBoard::new(toaster.clone(), Theme::dark());
    let board_task = tokio::spawn(board.run(toaster.subscribe()?, std::io::stdout()));

    demo::run(&toaster, &config).await?;

    provider.shutdown();
    let stats = board_task.await??;

    info!(
        "Session finished: {} shown, {} timed out, {} dismissed, {} evicted, {} via action",
        stats.shown, stats.timed_out, stats.dismissed, stats.evicted, stats.actioned
    );
    Ok(())
}
