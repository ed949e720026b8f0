// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::engine::{Runtime, RuntimeEvent};
use crate::errors::Result;
use crate::exec::{LaunchSpec, Supervisor};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (or `--generate-config`)
/// - the file watcher
/// - the process supervisor and its stdout monitor
/// - Ctrl-C handling
/// - the runtime event loop
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);

    if args.generate_config {
        config::write_default(&config_path)?;
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let cfg = load_and_validate(&config_path)?;
    let device = cfg.watch.device.clone();

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // File watcher; the handle must stay alive for the process lifetime.
    let _watcher_handle = watch::spawn_watcher(&cfg.watch.directories, rt_tx.clone())?;

    // Primary process.
    let supervisor = Arc::new(Supervisor::new());
    supervisor
        .start(&LaunchSpec::flutter_run(&device), rt_tx.clone())
        .await?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    info!(device = %device, "flicker started");

    let runtime = Runtime::new(supervisor, LaunchSpec::flutter_attach(&device), rt_rx);
    runtime.run().await
}
