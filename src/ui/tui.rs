// src/ui/tui.rs
//! Terminal setup and the event loop.

use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use ratatui_image::picker::Picker;
use tracing::{info, warn};

use crate::{app::App, config::Config};

/// Restores the terminal when dropped, including on early error returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen) {
            warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
    }
}

/// Pick an image protocol for the artwork, falling back to half blocks.
fn picker() -> Picker {
    Picker::from_query_stdio().unwrap_or_else(|_| {
        warn!("terminal graphics query failed, using half blocks");
        Picker::from_fontsize((8, 12))
    })
}

/// Run the player until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config, picker(), Instant::now());
    let frame = Duration::from_millis(config.ui.frame_ms);
    info!(?frame, "event loop started");

    let result = event_loop(&mut terminal, &mut app, frame);
    app.shutdown();
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    frame: Duration,
) -> Result<()> {
    loop {
        app.advance(Instant::now());
        terminal.draw(|f| app.draw(f))?;

        // Wake for the next frame or the next player timer, whichever is first.
        if event::poll(app.next_wakeup(frame))? {
            let now = Instant::now();
            // Timers due before the input was read fire first.
            app.advance(now);
            match event::read()? {
                CEvent::Key(key) => {
                    if app.on_key(key, now) {
                        return Ok(());
                    }
                }
                CEvent::Mouse(mouse) => app.on_mouse(mouse, now),
                // Resizes need nothing: the next draw re-measures everything
                _ => {}
            }
        }
    }
}
