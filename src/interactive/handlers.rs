use std::io;
use std::sync::Arc;

use super::app::InteractiveApp;
use super::event::{Event, EventHandler};
use super::keys::map_key;
use crate::auth::AuthRoles;
use crate::client::ParametrizationsApi;
use crate::error::{AdminError, AdminResult};
use crate::logging::{log_debug, log_error, log_info};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run_interactive_mode(api: Arc<dyn ParametrizationsApi>, auth: AuthRoles) -> AdminResult<()> {
    log_info("Starting interactive mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = InteractiveApp::new(api, auth);
    let result = event_loop(&mut terminal, &mut app).await;

    log_info("Exiting interactive mode");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(terminal: &mut Term, app: &mut InteractiveApp) -> AdminResult<()> {
    let events = EventHandler::new(100);

    loop {
        draw(terminal, app)?;

        if app.pending.is_some() {
            app.run_pending().await;
            // Keys pressed while the call was in flight hit disabled controls.
            while events.try_recv().is_some() {}
            continue;
        }

        match events
            .recv()
            .map_err(|e| AdminError::TerminalError(e.to_string()))?
        {
            Event::Key(key_event) => {
                let phase = app.editor.as_ref().map(|e| e.phase());
                let action = map_key(key_event, app.popup, phase);
                log_debug(&format!("Key {:?} -> {:?}", key_event.code, action));
                app.handle_action(action);
            }
            Event::Tick => app.tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(terminal: &mut Term, app: &InteractiveApp) -> AdminResult<()> {
    terminal
        .draw(|f| super::ui::draw(f, app))
        .map(|_| ())
        .map_err(|e| {
            log_error(&format!("Error drawing UI: {}", e));
            AdminError::TerminalError(e.to_string())
        })
}
