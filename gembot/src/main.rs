//! gembot CLI: `run` the bot, or `serve` the health endpoint and supervise `run` as a child.

use anyhow::Result;
use clap::Parser;
use gembot::console::spawn_console_listener;
use gembot::{
    run_bot, serve_health, shutdown_signal, BotConfig, ChildSupervisor, Cli, Commands, ServeConfig,
};
use gembot_core::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, health } => {
            let config = BotConfig::load(token)?;
            init_tracing(&config.log_file)?;
            spawn_console_listener();
            if health {
                spawn_health(config.port);
            }
            run_bot(config).await
        }
        Commands::Serve => {
            let config = ServeConfig::load()?;
            init_tracing(&config.log_file)?;
            spawn_health(config.port);
            let supervisor = ChildSupervisor::for_current_exe(config.restart_delay)?;
            let spawns = supervisor.supervise(shutdown_signal()).await;
            info!(spawns, "Supervisor stopped");
            Ok(())
        }
    }
}

fn spawn_health(port: u16) {
    tokio::spawn(async move {
        if let Err(e) = serve_health(port).await {
            error!(error = %e, "Health server failed");
        }
    });
}
