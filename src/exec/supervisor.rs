// src/exec/supervisor.rs

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin, Command};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::engine::RuntimeEvent;
use crate::errors::{FlickerError, Result};
use crate::exec::monitor;

/// Command token written to the primary process to request a hot reload.
///
/// `flutter run` reads single-letter commands from stdin terminated by a
/// newline; the child must receive exactly these bytes.
pub const RELOAD_COMMAND: &[u8] = b"r\n";

/// How long `cleanup` waits for the stdout monitor after killing the child.
const MONITOR_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// A command to launch, described independently of `tokio::process` so the
/// supervisor can be driven with arbitrary programs in tests.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchSpec {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `flutter run -d <device>`, the primary development process.
    pub fn flutter_run(device: &str) -> Self {
        Self::new("flutter", ["run", "-d", device])
    }

    /// `flutter attach -d <device>`, the secondary observer process.
    pub fn flutter_attach(device: &str) -> Self {
        Self::new("flutter", ["attach", "-d", device])
    }

    pub(crate) fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// The primary child process and everything needed to talk to it.
struct SupervisedProcess {
    child: Child,
    stdin: ChildStdin,
    monitor: JoinHandle<()>,
}

/// Owns the primary development process.
///
/// All tasks that need the process (reload trigger, output monitor, shutdown
/// paths) share one `Supervisor` behind an `Arc`; the record itself lives
/// under a mutex so a reload write cannot race a concurrent kill.
pub struct Supervisor {
    inner: Mutex<Option<SupervisedProcess>>,
}

impl Supervisor {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Spawn the primary process and hand its stdout to the output monitor.
    ///
    /// The child's stderr passes straight through to our own stderr; its
    /// stdin is retained for reload commands. At most one primary process
    /// may be active at a time.
    pub async fn start(
        &self,
        spec: &LaunchSpec,
        runtime_tx: mpsc::Sender<RuntimeEvent>,
    ) -> Result<()> {
        let mut guard = self.inner.lock().await;
        if guard.is_some() {
            return Err(FlickerError::Launch(
                "a supervised process is already running".to_string(),
            ));
        }

        info!(program = %spec.program, args = ?spec.args, "starting supervised process");

        let mut cmd = spec.command();
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|err| FlickerError::Launch(format!("spawning '{}': {}", spec.program, err)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| FlickerError::Launch("child stdin pipe unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| FlickerError::Launch("child stdout pipe unavailable".to_string()))?;

        let monitor = monitor::spawn_stdout_monitor(stdout, runtime_tx);

        *guard = Some(SupervisedProcess {
            child,
            stdin,
            monitor,
        });
        Ok(())
    }

    /// Whether a supervised process is currently alive.
    pub async fn is_running(&self) -> bool {
        self.inner.lock().await.is_some()
    }

    /// Write the reload token to the child's stdin.
    ///
    /// Fails with [`FlickerError::NoActiveProcess`] when nothing is running,
    /// without writing any bytes; a broken pipe surfaces as an IO error.
    /// Neither is fatal to the program; the caller logs and waits for the
    /// next change event.
    pub async fn send_reload(&self) -> Result<()> {
        let mut guard = self.inner.lock().await;
        let Some(process) = guard.as_mut() else {
            return Err(FlickerError::NoActiveProcess);
        };

        process.stdin.write_all(RELOAD_COMMAND).await?;
        process.stdin.flush().await?;
        Ok(())
    }

    /// Best-effort teardown of the supervised process.
    ///
    /// Kills the child, reaps it, then waits for the stdout monitor to
    /// observe stream closure, bounded by [`MONITOR_SHUTDOWN_TIMEOUT`].
    /// Calling this with no active process is a silent no-op, so it is safe
    /// to invoke from every shutdown path.
    pub async fn cleanup(&self) {
        let Some(mut process) = self.inner.lock().await.take() else {
            return;
        };

        info!("cleaning up supervised process");

        if let Err(err) = process.child.start_kill() {
            warn!(error = %err, "failed to kill supervised process");
        }
        if let Err(err) = process.child.wait().await {
            warn!(error = %err, "failed to reap supervised process");
        }

        match timeout(MONITOR_SHUTDOWN_TIMEOUT, process.monitor).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(error = %err, "stdout monitor task failed"),
            Err(_) => warn!(
                timeout_secs = MONITOR_SHUTDOWN_TIMEOUT.as_secs(),
                "stdout monitor did not finish in time, continuing shutdown"
            ),
        }
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}
