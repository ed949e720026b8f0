// src/watch/watcher.rs

use std::path::Path;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::RuntimeEvent;
use crate::errors::Result;
use crate::watch::events::ChangeKind;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher over the configured directories and forward
/// changes into the runtime as [`RuntimeEvent`]s.
///
/// - Directories that do not exist are skipped with a warning.
/// - Any other registration failure is fatal.
/// - Each directory is watched recursively for the process lifetime.
/// - Watcher-internal errors are forwarded as `RuntimeEvent::WatchFailed` and
///   never stop the forwarding loop.
///
/// Event delivery order is preserved: notify's callback feeds an unbounded
/// channel, and a single spawned task drains it into the runtime channel.
pub fn spawn_watcher(
    directories: &[String],
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<notify::Result<Event>>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            if event_tx.send(res).is_err() {
                // We can't log via tracing here easily, so fallback to stderr.
                eprintln!("flicker: failed to forward notify event");
            }
        },
        Config::default(),
    )?;

    let mut registered = 0usize;
    for dir in directories {
        let path = Path::new(dir);
        if !path.exists() {
            warn!(directory = %dir, "watch directory does not exist, skipping");
            continue;
        }
        watcher.watch(path, RecursiveMode::Recursive)?;
        info!(directory = %dir, "watching directory");
        registered += 1;
    }

    if registered == 0 {
        warn!("no watch directories registered; file changes will not trigger reloads");
    }

    // Async task that consumes notify events and forwards them to the runtime.
    tokio::spawn(async move {
        while let Some(res) = event_rx.recv().await {
            match res {
                Ok(event) => {
                    let Some(kind) = ChangeKind::classify(&event.kind) else {
                        continue;
                    };
                    for path in event.paths {
                        debug!(?path, ?kind, "filesystem change");
                        if runtime_tx
                            .send(RuntimeEvent::FileChanged { path, kind })
                            .await
                            .is_err()
                        {
                            // Runtime is gone; no point keeping the loop alive.
                            return;
                        }
                    }
                }
                Err(err) => {
                    if runtime_tx
                        .send(RuntimeEvent::WatchFailed {
                            message: err.to_string(),
                        })
                        .await
                        .is_err()
                    {
                        return;
                    }
                }
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}
