//! Tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_tui::{App, Cli, TerminalGuard, TuiConfig, init_tracing, input, ui};
use tracing::{debug, error, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?.with_overrides(cli.first, cli.log_file);
    init_tracing(&config)?;

    info!(first_player = ?config.first_player(), "Starting tic-tac-toe");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(config.starting());
    let res = run_app(&mut terminal, app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        if app.take_redraw() {
            let mut layout = *app.layout();
            terminal.draw(|f| layout = ui::draw(f, &app))?;
            app.set_layout(layout);
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::key_action(app.cursor(), key.code)
            }
            Event::Mouse(mouse) => input::mouse_action(app.layout(), mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                app.request_redraw();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            app.handle_action(action);
        }

        if app.should_quit() {
            let snapshot = serde_json::to_string(app.state())?;
            info!(%snapshot, "Quitting");
            return Ok(());
        }
    }
}
