//! paydesk-ui: terminal dashboard for paydesk
//!
//! Lists companies and lets an operator create companies and block or
//! unblock them by toggling their paid status.

use std::sync::Arc;

use paydesk_core::{HttpCompanyApi, PaydeskConfig, events, init_file_logging};
use tracing::{info, warn};

mod actions;
mod controller;
mod input;
mod state;
mod terminal;
mod timer;
mod views;

use controller::Controller;

const LOG_FILE: &str = "paydesk-ui.log";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_dashboard_logging();
    events::log_app_startup();

    let config = load_config_with_warning();
    let api = match HttpCompanyApi::new(&config.api) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("❌ {}", e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };
    info!(
        event = "ui.app.api_configured",
        base_url = %api.base_url()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let mut controller = Controller::new(api, runtime.handle().clone(), config.ui.message_timeout());

    let result = terminal::run(&mut controller);
    drop(controller);
    events::log_app_shutdown();

    if let Err(e) = result {
        events::log_app_error(&e);
        return Err(e.into());
    }
    Ok(())
}

/// Log to `~/.paydesk/logs/paydesk-ui.log` so log lines never land on the
/// dashboard's screen.
fn init_dashboard_logging() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let path = home.join(".paydesk").join("logs").join(LOG_FILE);
    if let Err(e) = init_file_logging(&path) {
        eprintln!("Warning: Could not open log file {}: {}", path.display(), e);
    }
}

fn load_config_with_warning() -> PaydeskConfig {
    match PaydeskConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.paydesk/config.toml and ./.paydesk/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "ui.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PaydeskConfig::default()
        }
    }
}
