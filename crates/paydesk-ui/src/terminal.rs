use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use paydesk_core::CompanyApi;
use ratatui::DefaultTerminal;

use crate::controller::Controller;
use crate::{input, views};

/// How long to wait for a key before re-checking background results.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the dashboard until the user quits.
///
/// The terminal is restored on return, including when drawing or reading
/// input fails.
pub fn run<A: CompanyApi + 'static>(controller: &mut Controller<A>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, controller);
    ratatui::restore();
    controller.teardown();
    result
}

fn event_loop<A: CompanyApi + 'static>(
    terminal: &mut DefaultTerminal,
    controller: &mut Controller<A>,
) -> io::Result<()> {
    controller.mount();

    loop {
        controller.drain_events();
        terminal.draw(|frame| views::render(frame, controller.state()))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Windows compatibility: only handle Press events
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(action) = input::map_key(key, controller.state().dialog()) else {
                continue;
            };
            if !input::apply(controller, action) {
                tracing::info!(event = "ui.app.quit_requested");
                return Ok(());
            }
        }
    }
}
