// src/exec/monitor.rs

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::ChildStdout;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::engine::RuntimeEvent;

/// Substring of a stdout line that marks the app as ready for reloads.
/// Case-sensitive.
pub const READY_MARKER: &str = "To hot reload";

/// Substring of a stdout line that marks the app as finished. Case-sensitive.
pub const FINISHED_MARKER: &str = "Application finished.";

/// Lifecycle transition observed in the primary process's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The app is up; the attach session can start. Emitted at most once.
    Ready,
    /// The app reported completion; the program should shut down.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Finalizing,
}

/// Line-by-line scanner over the primary process's stdout.
///
/// Explicit state machine: in `Scanning` each line is checked for the two
/// markers; the finished marker transitions to `Finalizing`, after which no
/// further observations are produced. The ready marker is only reported the
/// first time it appears, so a marker recurring later (e.g. after a hot
/// restart) does not start a second attach session.
#[derive(Debug)]
pub struct OutputScan {
    state: ScanState,
    ready_seen: bool,
}

impl OutputScan {
    pub fn new() -> Self {
        Self {
            state: ScanState::Scanning,
            ready_seen: false,
        }
    }

    /// Inspect one output line, possibly yielding a lifecycle observation.
    pub fn observe(&mut self, line: &str) -> Option<Observation> {
        if self.state == ScanState::Finalizing {
            return None;
        }

        if line.contains(FINISHED_MARKER) {
            self.state = ScanState::Finalizing;
            return Some(Observation::Finished);
        }

        if line.contains(READY_MARKER) && !self.ready_seen {
            self.ready_seen = true;
            return Some(Observation::Ready);
        }

        None
    }

    /// Whether the finished marker has been observed.
    pub fn is_finalizing(&self) -> bool {
        self.state == ScanState::Finalizing
    }
}

impl Default for OutputScan {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the primary process's stdout until the finished marker or
/// end-of-stream.
///
/// Every line is passed through to our own stdout so the user sees the
/// child's output unchanged. Marker matches are reported to the runtime as
/// [`RuntimeEvent`]s; end-of-stream without the finished marker means the
/// child ended on its own and is reported as `AppExited`.
pub fn spawn_stdout_monitor(
    stdout: ChildStdout,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut scan = OutputScan::new();
        let reader = BufReader::new(stdout);
        let mut lines = reader.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            println!("{line}");

            match scan.observe(&line) {
                Some(Observation::Ready) => {
                    let _ = runtime_tx.send(RuntimeEvent::AppReady).await;
                }
                Some(Observation::Finished) => {
                    let _ = runtime_tx.send(RuntimeEvent::AppFinished).await;
                    break;
                }
                None => {}
            }
        }

        if !scan.is_finalizing() {
            debug!("supervised process stdout closed without the finished marker");
            let _ = runtime_tx.send(RuntimeEvent::AppExited).await;
        }

        debug!("stdout monitor ended");
    })
}
