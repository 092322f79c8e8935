use paydesk::commands::Cli;
use paydesk::libs::messages::macros::{default_log_level, is_debug_mode};
use paydesk::msg_error;
use std::process::exit;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_log_level(is_debug_mode()).into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = Cli::menu().await {
        msg_error!(format!("{:#}", e));
        exit(1);
    }
}
