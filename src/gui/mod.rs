//! Interactive terminal front-end
//!
//! One screen: a masked password entry, a strength gauge and a result pane.
//! The estimator runs synchronously on every keystroke, inside the event loop.

mod app;
mod view;

pub use app::App;
pub use view::{render, to_lines};

use std::io::{self, Stdout};

use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};

use crate::evaluator::{Estimator, ZxcvbnEstimator};

/// Sets up the terminal, runs the event loop until the user quits and
/// restores the terminal, even when the loop fails.
pub fn run() -> anyhow::Result<()> {
    enable_raw_mode()?;
    let (mut terminal, reports_release) = match setup_terminal() {
        Ok(ready) => ready,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    };

    #[cfg(feature = "tracing")]
    tracing::info!("terminal ready, key release events: {}", reports_release);

    let mut app = App::new(ZxcvbnEstimator, reports_release);
    let outcome = event_loop(&mut terminal, &mut app);

    cleanup(&mut terminal, reports_release)?;
    outcome
}

/// Enters the alternate screen and opts into key release events where the
/// terminal supports them. Expects raw mode to be enabled already.
fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, bool)> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Key releases are only reported by terminals with the keyboard
    // enhancement protocol.
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok((terminal, reports_release)),
        Err(e) => {
            if reports_release {
                let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
            }
            Err(e)
        }
    }
}

fn event_loop<B: Backend, E: Estimator>(
    terminal: &mut Terminal<B>,
    app: &mut App<E>,
) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| render(frame, &*app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }
    }
    Ok(())
}

fn cleanup(terminal: &mut Terminal<CrosstermBackend<Stdout>>, reports_release: bool) -> io::Result<()> {
    if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
