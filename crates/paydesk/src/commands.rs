use clap::ArgMatches;
use tokio::runtime::Runtime;
use tracing::{error, info, warn};

use paydesk_core::companies::ToggleAction;
use paydesk_core::events;
use paydesk_core::{ApiError, CompanyApi, CompanyId, HttpCompanyApi, PaydeskConfig};

use crate::table::TableFormatter;

const EMPTY_NAME_ERROR: &str = "Company name cannot be empty";

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
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
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PaydeskConfig::default()
        }
    }
}

/// Build the API client from config, with `--base-url` taking precedence.
fn build_api(base_url: Option<&String>) -> Result<HttpCompanyApi, ApiError> {
    let mut config = load_config_with_warning();
    if let Some(url) = base_url {
        config.api.base_url = Some(url.clone());
    }

    HttpCompanyApi::new(&config.api).inspect_err(|e| {
        eprintln!("❌ {}", e);
        error!(event = "cli.api.configure_failed", error = %e);
        events::log_app_error(e);
    })
}

/// Print the user-facing message for a failed request and log the details.
fn report_api_failure(e: &ApiError, event: &str) {
    let message = e
        .operation()
        .map(|op| op.failure_message().to_string())
        .unwrap_or_else(|| e.to_string());
    eprintln!("❌ {}", message);

    error!(event = event, error = %e, status = ?e.status());
    events::log_app_error(e);
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let api = build_api(matches.get_one::<String>("base-url"))?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(&runtime, &api, sub_matches),
        Some(("create", sub_matches)) => handle_create_command(&runtime, &api, sub_matches),
        Some(("toggle", sub_matches)) => handle_toggle_command(&runtime, &api, sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

fn handle_list_command(
    runtime: &Runtime,
    api: &HttpCompanyApi,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    match runtime.block_on(api.list_companies()) {
        Ok(companies) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&companies)?);
            } else if companies.is_empty() {
                println!("No companies found.");
            } else {
                let formatter = TableFormatter::new(&companies);
                formatter.print_table(&companies);
            }

            info!(event = "cli.list_completed", count = companies.len());

            Ok(())
        }
        Err(e) => {
            report_api_failure(&e, "cli.list_failed");
            Err(e.into())
        }
    }
}

fn handle_create_command(
    runtime: &Runtime,
    api: &HttpCompanyApi,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Name argument is required")?
        .trim();

    if name.is_empty() {
        eprintln!("❌ {}", EMPTY_NAME_ERROR);
        warn!(
            event = "cli.create_validation_failed",
            reason = "empty company name"
        );
        return Err(EMPTY_NAME_ERROR.into());
    }

    info!(event = "cli.create_started", name = name);

    match runtime.block_on(api.create_company(name)) {
        Ok(company) => {
            println!("✅ Company created successfully!");
            println!("   Name: {}", company.name);
            println!("   ID: {}", company.id);
            println!("   Status: {}", company.status_label());

            info!(
                event = "cli.create_completed",
                company_id = %company.id,
                name = company.name
            );

            Ok(())
        }
        Err(e) => {
            report_api_failure(&e, "cli.create_failed");
            Err(e.into())
        }
    }
}

fn handle_toggle_command(
    runtime: &Runtime,
    api: &HttpCompanyApi,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = CompanyId::new(
        matches
            .get_one::<String>("id")
            .ok_or("ID argument is required")?
            .as_str(),
    );

    info!(event = "cli.toggle_started", company_id = %id);

    let companies = match runtime.block_on(api.list_companies()) {
        Ok(companies) => companies,
        Err(e) => {
            report_api_failure(&e, "cli.toggle_list_failed");
            return Err(e.into());
        }
    };

    let Some(company) = companies.into_iter().find(|c| c.id == id) else {
        eprintln!("❌ Company '{}' not found", id);
        error!(event = "cli.toggle_company_not_found", company_id = %id);
        return Err(format!("Company '{}' not found", id).into());
    };

    let is_paid = !company.is_paid;
    match runtime.block_on(api.set_paid_status(&company.id, is_paid)) {
        Ok(()) => {
            let action = ToggleAction::for_new_status(is_paid);
            println!("✅ {}", action.success_message());
            println!("   Name: {}", company.name);
            println!("   Status: {}", if is_paid { "Paid" } else { "Unpaid" });

            info!(
                event = "cli.toggle_completed",
                company_id = %company.id,
                is_paid = is_paid
            );

            Ok(())
        }
        Err(e) => {
            report_api_failure(&e, "cli.toggle_failed");
            Err(e.into())
        }
    }
}
