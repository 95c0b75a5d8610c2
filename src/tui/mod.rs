//! Terminal UI for Strictly Jeopardy

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use strictly_jeopardy::{BoardEvent, CategoryApi, ChannelPresentation, GameSession, StartOutcome};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, PlayerCommand};

/// Session type driven by the terminal UI.
pub type TuiSession<A> = GameSession<A, ChannelPresentation>;

/// Sends logs to a file so they don't draw over the board.
pub fn init_logging() -> Result<()> {
    let log_file = std::fs::File::create("strictly_jeopardy_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_jeopardy=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Run the TUI client
pub async fn run_tui<A: CategoryApi + 'static>(
    session: Arc<TuiSession<A>>,
    mut event_rx: mpsc::UnboundedReceiver<BoardEvent>,
) -> Result<()> {
    info!("Starting Strictly Jeopardy TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_board_loop(&mut terminal, session, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Board loop error");
    }
    res
}

/// Draws the board and dispatches key presses until the player quits.
#[instrument(skip_all)]
async fn run_board_loop<A: CategoryApi + 'static>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: Arc<TuiSession<A>>,
    event_rx: &mut mpsc::UnboundedReceiver<BoardEvent>,
) -> Result<()> {
    let mut app = App::new();

    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            Some(PlayerCommand::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(PlayerCommand::Start) => {
                let session = Arc::clone(&session);
                tokio::spawn(async move {
                    if let StartOutcome::Started(summary) = session.start().await {
                        debug!(?summary, "Board loaded");
                    }
                });
            }
            Some(PlayerCommand::Reveal { category, clue }) => {
                if let Err(e) = session.reveal(category, clue) {
                    debug!(error = %e, "Reveal rejected");
                }
            }
            None => {}
        }
    }
}
