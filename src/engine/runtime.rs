// src/engine/runtime.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::errors::{FlickerError, Result};
use crate::exec::{self, LaunchSpec, Supervisor};
use crate::watch::ChangeKind;

/// Events sent into the runtime from the watcher, the output monitor, or
/// external signals.
///
/// The idea is that:
/// - the watcher sends `FileChanged` / `WatchFailed`
/// - the stdout monitor sends `AppReady` / `AppFinished` / `AppExited`
/// - Ctrl-C handling sends `ShutdownRequested`
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    FileChanged { path: PathBuf, kind: ChangeKind },
    WatchFailed { message: String },
    AppReady,
    AppFinished,
    AppExited,
    ShutdownRequested,
}

/// The main supervision runtime.
///
/// Responsibilities:
/// - Consume `RuntimeEvent`s from the watcher, monitor and signal handler.
/// - Forward write-type changes as hot-reload commands, one command per
///   event, in delivery order.
/// - Start the attach session once the app reports readiness.
/// - Drive teardown when the app finishes, dies, or the user interrupts.
pub struct Runtime {
    supervisor: Arc<Supervisor>,
    attach_spec: LaunchSpec,

    /// Unified event stream from all producers.
    events_rx: mpsc::Receiver<RuntimeEvent>,
}

impl Runtime {
    pub fn new(
        supervisor: Arc<Supervisor>,
        attach_spec: LaunchSpec,
        events_rx: mpsc::Receiver<RuntimeEvent>,
    ) -> Self {
        Self {
            supervisor,
            attach_spec,
            events_rx,
        }
    }

    /// Main event loop.
    ///
    /// Returns once the app finishes, exits on its own, or a shutdown is
    /// requested; the supervised process is cleaned up on every exit path.
    pub async fn run(mut self) -> Result<()> {
        info!("flicker runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::FileChanged { path, kind } => {
                    self.handle_file_change(&path, kind).await;
                }
                RuntimeEvent::WatchFailed { message } => {
                    warn!(%message, "file watcher reported an error");
                }
                RuntimeEvent::AppReady => {
                    info!("application ready, starting attach session");
                    exec::spawn_attach(self.attach_spec.clone());
                }
                RuntimeEvent::AppFinished => {
                    info!("application finished, shutting down");
                    break;
                }
                RuntimeEvent::AppExited => {
                    warn!("supervised process exited without finishing, shutting down");
                    break;
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping runtime");
                    break;
                }
            }
        }

        self.supervisor.cleanup().await;
        info!("flicker runtime exiting");
        Ok(())
    }

    /// React to one filesystem change: write-type events become exactly one
    /// reload command each; everything else is ignored.
    async fn handle_file_change(&self, path: &Path, kind: ChangeKind) {
        if !kind.triggers_reload() {
            debug!(?path, ?kind, "ignoring non-write change");
            return;
        }

        info!(?path, "Sending hot reload command");
        match self.supervisor.send_reload().await {
            Ok(()) => {}
            Err(FlickerError::NoActiveProcess) => {
                warn!("no active process, skipping hot reload");
            }
            Err(err) => {
                warn!(error = %err, "failed to send hot reload command");
            }
        }
    }
}
