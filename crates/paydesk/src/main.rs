use paydesk_core::init_logging;

mod app;
mod commands;
mod table;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless -v/--verbose; logs go to stderr either way
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    commands::run_command(&matches)?;

    Ok(())
}
