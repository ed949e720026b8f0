// src/exec/attach.rs

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::errors::{FlickerError, Result};
use crate::exec::supervisor::LaunchSpec;

/// Spawn the attach session as a fire-and-forget task.
///
/// Failures here are logged and stay contained; they never terminate the
/// primary process or the rest of the program.
pub fn spawn_attach(spec: LaunchSpec) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = run_attach(spec).await {
            warn!(error = %err, "attach process failed");
        }
    })
}

/// Run the attach process to completion, forwarding its output verbatim.
///
/// stdout and stderr are forwarded line-by-line by two independent reader
/// tasks; this function itself blocks until the process exits and logs the
/// outcome.
async fn run_attach(spec: LaunchSpec) -> Result<()> {
    info!(program = %spec.program, args = ?spec.args, "starting attach process");

    let mut cmd = spec.command();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .map_err(|err| FlickerError::Launch(format!("spawning '{}': {}", spec.program, err)))?;

    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                println!("{line}");
            }
        });
    }

    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                eprintln!("{line}");
            }
        });
    }

    let status = child.wait().await?;
    if status.success() {
        info!("attach process exited");
    } else {
        warn!(
            exit_code = status.code().unwrap_or(-1),
            "attach process exited with failure"
        );
    }

    Ok(())
}
