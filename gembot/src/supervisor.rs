//! `gembot serve`: keeps a child bot process alive and stops it on SIGINT/SIGTERM.

use std::ffi::OsString;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::{Child, Command};
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;
use tracing::{error, info, warn};

/// Waits for SIGTERM or SIGINT (Ctrl+C).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        } else {
            info!("Received Ctrl+C signal, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Respawns `program args...` after `restart_delay` every time it exits.
#[derive(Debug, Clone)]
pub struct ChildSupervisor {
    program: PathBuf,
    args: Vec<OsString>,
    restart_delay: Duration,
}

impl ChildSupervisor {
    pub fn new(
        program: impl Into<PathBuf>,
        args: impl IntoIterator<Item = impl Into<OsString>>,
        restart_delay: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            restart_delay,
        }
    }

    /// Supervises `<current executable> run`.
    pub fn for_current_exe(restart_delay: Duration) -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate current executable")?;
        Ok(Self::new(exe, ["run"], restart_delay))
    }

    fn spawn_child(&self) -> std::io::Result<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
    }

    /// Runs until `shutdown` resolves, killing the live child at that point. Returns how many
    /// spawns were attempted.
    pub async fn supervise<S>(&self, shutdown: S) -> usize
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut spawns = 0;

        loop {
            spawns += 1;
            match self.spawn_child() {
                Ok(mut child) => {
                    info!(
                        pid = ?child.id(),
                        program = %self.program.display(),
                        "Bot process started"
                    );
                    tokio::select! {
                        status = child.wait() => match status {
                            Ok(status) => warn!(%status, "Bot process exited, restarting"),
                            Err(e) => error!(error = %e, "Failed to wait on bot process"),
                        },
                        () = &mut shutdown => {
                            info!(pid = ?child.id(), "Stopping bot process");
                            if let Err(e) = child.kill().await {
                                warn!(error = %e, "Failed to kill bot process");
                            }
                            return spawns;
                        }
                    }
                }
                Err(e) => error!(
                    error = %e,
                    program = %self.program.display(),
                    "Failed to start bot process"
                ),
            }

            tokio::select! {
                () = tokio::time::sleep(self.restart_delay) => {},
                () = &mut shutdown => return spawns,
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_respawns_exiting_child() {
        let supervisor =
            ChildSupervisor::new("true", Vec::<OsString>::new(), Duration::from_millis(10));
        let spawns = supervisor
            .supervise(tokio::time::sleep(Duration::from_millis(500)))
            .await;
        assert!(spawns >= 2, "expected restarts, got {}", spawns);
    }

    #[tokio::test]
    async fn test_shutdown_kills_running_child() {
        let supervisor = ChildSupervisor::new("sleep", ["30"], Duration::from_millis(10));
        let started = Instant::now();
        let spawns = supervisor
            .supervise(tokio::time::sleep(Duration::from_millis(100)))
            .await;
        assert_eq!(spawns, 1);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_retried() {
        let supervisor = ChildSupervisor::new(
            "/nonexistent/gembot-child",
            Vec::<OsString>::new(),
            Duration::from_millis(10),
        );
        let spawns = supervisor
            .supervise(tokio::time::sleep(Duration::from_millis(200)))
            .await;
        assert!(spawns >= 2);
    }
}
