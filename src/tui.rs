pub mod app;
pub mod toast;
pub mod ui;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::actions::{ActionDispatcher, PlatformActions};
use crate::config::Config;
use crate::domain::ContactBook;
use crate::errors::AppError;
use crate::platform::{DesktopPlatform, TuiPlatform};

pub use app::App;
use toast::ToastQueue;

const TICK: Duration = Duration::from_millis(100);

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs the grid UI until the user quits. Once raw mode is on, the terminal is
/// restored on every exit path, including failed setup.
pub fn run(book: ContactBook, config: &Config) -> Result<(), AppError> {
    let toasts = Rc::new(RefCell::new(ToastQueue::default()));
    let desktop = (!config.dry_run).then(|| DesktopPlatform::new(config.dialer.clone()));
    let platform = TuiPlatform::new(desktop, Rc::clone(&toasts));
    let dispatcher =
        ActionDispatcher::new(platform).with_notice_duration(config.notice_duration);
    let mut app = App::new(book, dispatcher, toasts);

    enable_raw_mode()?;
    let result = run_in_terminal(&mut app);
    restore_terminal();
    tracing::info!("terminal ui stopped");

    result
}

fn run_in_terminal<P: PlatformActions>(app: &mut App<P>) -> Result<(), AppError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    tracing::info!("terminal ui started");

    event_loop(&mut terminal, app)
}

/// Best effort: each step runs even if an earlier one failed.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "could not leave raw mode");
    }
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show) {
        tracing::warn!(error = %e, "could not restore terminal screen");
    }
}

fn event_loop<P: PlatformActions>(
    terminal: &mut CrosstermTerminal,
    app: &mut App<P>,
) -> Result<(), AppError> {
    loop {
        app.tick();
        terminal.draw(|frame| {
            app.set_viewport(ui::cell_rect(frame.area()));
            ui::render(frame, app);
        })?;

        if event::poll(TICK)? {
            match event::read()? {
                // Only key presses, not releases
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
