mod app;

pub use app::{BrowseApp, page_input};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use regview_core::ArtifactSource;
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the terminal for the lifetime of one browse session.
pub struct TuiRenderer;

impl TuiRenderer {
    pub fn run<S: ArtifactSource>(mut app: BrowseApp<S>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = Self::event_loop(&mut terminal, &mut app);

        // Restore the terminal even when the loop failed.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<S: ArtifactSource>(
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        app: &mut BrowseApp<S>,
    ) -> Result<()> {
        loop {
            app.tick();
            terminal.draw(|f| app.render(f))?;

            if app.should_quit() {
                return Ok(());
            }

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                app.handle_key(key);
            }
        }
    }
}
