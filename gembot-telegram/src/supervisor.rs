//! Restart-forever loop around the bot-building sequence.

use std::future::Future;
use std::time::Duration;

use teloxide::{ApiError, RequestError};
use tracing::{error, info, warn};

/// Why an attempt ended with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashKind {
    /// Another process is polling with the same token.
    DuplicateInstance,
    Other,
}

const CONFLICT_TEXT: &str = "terminated by other getUpdates request";

/// Classifies an attempt's error by looking for a getUpdates conflict anywhere in its chain.
pub fn classify_crash(err: &anyhow::Error) -> CrashKind {
    let conflict = err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<RequestError>(),
            Some(RequestError::Api(ApiError::TerminatedByOtherGetUpdates))
        ) || cause.to_string().contains(CONFLICT_TEXT)
    });
    if conflict {
        CrashKind::DuplicateInstance
    } else {
        CrashKind::Other
    }
}

/// Runs `attempt` until it returns `Ok(())`. Each error or panic is logged (a duplicate
/// instance distinctly) and the attempt is restarted after `restart_delay`. Returns the number
/// of attempts made.
pub async fn run_supervised<F, Fut>(restart_delay: Duration, mut attempt: F) -> usize
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let mut attempts = 0;
    loop {
        attempts += 1;
        info!(attempt = attempts, "step: starting bot");

        match tokio::spawn(attempt()).await {
            Ok(Ok(())) => {
                info!(attempt = attempts, "Bot stopped");
                return attempts;
            }
            Ok(Err(e)) => match classify_crash(&e) {
                CrashKind::DuplicateInstance => warn!(
                    delay_secs = restart_delay.as_secs_f64(),
                    "Conflict detected: another bot instance is running, retrying"
                ),
                CrashKind::Other => error!(
                    error = %e,
                    delay_secs = restart_delay.as_secs_f64(),
                    "Bot crashed, retrying"
                ),
            },
            Err(join_error) => error!(
                error = %join_error,
                delay_secs = restart_delay.as_secs_f64(),
                "Bot task panicked, retrying"
            ),
        }

        tokio::time::sleep(restart_delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_classify_teloxide_conflict() {
        let err = anyhow::Error::from(RequestError::Api(ApiError::TerminatedByOtherGetUpdates));
        assert_eq!(classify_crash(&err), CrashKind::DuplicateInstance);
    }

    #[test]
    fn test_classify_conflict_in_context_chain() {
        let err = anyhow::anyhow!(
            "Conflict: terminated by other getUpdates request; make sure that only one bot instance is running"
        )
        .context("polling failed");
        assert_eq!(classify_crash(&err), CrashKind::DuplicateInstance);
    }

    #[test]
    fn test_classify_other() {
        let err = anyhow::anyhow!("network unreachable");
        assert_eq!(classify_crash(&err), CrashKind::Other);
    }

    #[tokio::test]
    async fn test_run_supervised_restarts_until_clean_exit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let attempts = run_supervised(Duration::from_millis(1), move || {
            let counter = counter.clone();
            async move {
                match counter.fetch_add(1, Ordering::SeqCst) {
                    0 => Err(anyhow::anyhow!("boom")),
                    1 => Err(RequestError::Api(ApiError::TerminatedByOtherGetUpdates).into()),
                    2 => panic!("handler panicked"),
                    _ => Ok(()),
                }
            }
        })
        .await;

        assert_eq!(attempts, 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
