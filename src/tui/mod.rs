pub mod app;
pub mod event;
pub mod form;
pub mod layout;
pub mod toast;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::config::Config;

use self::app::{Screen, TuiApp};
use self::event::{AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run(ctx: AppContext, config: &Config, screen: Option<Screen>) -> Result<()> {
    let screen = screen.unwrap_or(config.ui.start_screen);
    let mut tui_app = TuiApp::new(ctx, screen, config.ui.toast_duration());

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut tui_app, config);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Tui, tui_app: &mut TuiApp, config: &Config) -> Result<()> {
    let event_handler = EventHandler::new(Duration::from_millis(100));
    tracing::debug!(screen = ?tui_app.screen, "admin TUI started");

    loop {
        terminal.draw(|frame| layout::render(frame, tui_app, &config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => tui_app.handle_key(key, &config.keybindings),
            AppEvent::Tick => {
                tui_app.expire_toast(Instant::now());
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}
