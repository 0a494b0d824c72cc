//! Stdin listener: typing `end` stops the process.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

pub fn is_end_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("end")
}

/// Reads lines until one is `end`. Returns false if input closes first.
pub async fn wait_for_end<R>(reader: R) -> bool
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if is_end_command(&line) => return true,
            Ok(Some(_)) => continue,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "Console input failed");
                return false;
            }
        }
    }
}

/// Watches stdin in the background and exits the process with status 0 on `end`.
pub fn spawn_console_listener() {
    tokio::spawn(async {
        if wait_for_end(BufReader::new(tokio::io::stdin())).await {
            info!("Console requested shutdown");
            std::process::exit(0);
        }
    });
}
