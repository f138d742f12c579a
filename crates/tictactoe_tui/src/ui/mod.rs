//! UI rendering.

pub mod board;

use crate::app::App;
use board::{BOARD_HEIGHT, BoardLayout};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::GameStatus;

/// Draws the whole screen and returns where the board ended up.
pub fn draw(f: &mut Frame, app: &App) -> BoardLayout {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Tic-tac-toe ");
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(BOARD_HEIGHT), Constraint::Length(3)])
        .split(inner);

    let layout = BoardLayout::centered(chunks[0]);
    board::render_board(f, &layout, app.state(), app.cursor());
    render_status(f, chunks[1], app);
    layout
}

fn render_status(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let status = app.state().status();
    let style = match status {
        GameStatus::InProgress(_) => Style::default(),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    };

    let hint = if app.state().is_game_over() {
        "r: play again   q: quit"
    } else {
        "arrows/hjkl: move   enter/click/1-9: place   r: restart   q: quit"
    };

    let lines = vec![
        Line::styled(status.to_string(), style),
        Line::styled(hint, Style::default().fg(Color::DarkGray)),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
