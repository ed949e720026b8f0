use std::error::Error;
use std::fs;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};

use flicker::engine::RuntimeEvent;
use flicker::watch::{ChangeKind, spawn_watcher};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn missing_directories_are_skipped_without_error() -> TestResult {
    let (tx, _rx) = mpsc::channel(16);

    let dirs = vec!["definitely/not/a/real/dir".to_string()];
    let handle = spawn_watcher(&dirs, tx)?;
    drop(handle);

    Ok(())
}

#[tokio::test]
async fn write_events_reach_the_runtime_channel() -> TestResult {
    let dir = tempfile::tempdir()?;
    let lib = dir.path().join("lib");
    fs::create_dir(&lib)?;

    let (tx, mut rx) = mpsc::channel(64);
    let dirs = vec![lib.to_string_lossy().into_owned()];
    let _handle = spawn_watcher(&dirs, tx)?;

    // Give the watcher backend a moment to arm before producing events.
    sleep(Duration::from_millis(250)).await;

    let file = lib.join("main.dart");
    fs::write(&file, "void main() {}")?;
    fs::write(&file, "void main() { print('hi'); }")?;

    let saw_write = async {
        while let Some(event) = rx.recv().await {
            if let RuntimeEvent::FileChanged { kind, .. } = event {
                if kind == ChangeKind::Write {
                    return true;
                }
            }
        }
        false
    };

    assert!(timeout(Duration::from_secs(10), saw_write).await?);

    Ok(())
}
