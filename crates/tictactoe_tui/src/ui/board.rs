//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tictactoe_core::{GameState, Player, Position, Square};

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Full board width including the two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Full board height including the two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Where the grid sits on screen; shared by rendering and hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardLayout {
    area: Rect,
}

impl BoardLayout {
    /// Centres the board inside `area`.
    pub fn centered(area: Rect) -> Self {
        let x = area.x + area.width.saturating_sub(BOARD_WIDTH) / 2;
        let y = area.y + area.height.saturating_sub(BOARD_HEIGHT) / 2;
        Self {
            area: Rect::new(x, y, BOARD_WIDTH, BOARD_HEIGHT),
        }
    }

    /// The whole grid.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        let col = pos.col() as u16;
        let row = pos.row() as u16;
        Rect::new(
            self.area.x + col * (CELL_WIDTH + 1),
            self.area.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// The cell under a terminal coordinate, if any. Separators hit nothing.
    pub fn hit(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let cell = self.cell(*pos);
            column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
        })
    }
}

/// Renders the grid, the marks, the cursor preview and the winning line.
pub fn render_board(f: &mut Frame, layout: &BoardLayout, state: &GameState, cursor: Position) {
    let screen = f.area();
    render_grid(f, layout.area().intersection(screen));

    let win_line = state.win_line();
    for pos in Position::ALL {
        let area = layout.cell(pos).intersection(screen);
        if area.is_empty() {
            continue;
        }

        let on_win_line = win_line.is_some_and(|w| w.line().contains(pos));
        let has_cursor = pos == cursor;
        let (text, style) = match state.board().get(pos) {
            Square::Occupied(player) => (player.symbol().to_string(), mark_style(player)),
            // Preview the mark the current player would place here.
            Square::Empty if has_cursor && !state.is_game_over() => (
                state.current_player().symbol().to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
            Square::Empty => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let mut style = style;
        if on_win_line {
            style = style.bg(Color::Green).fg(Color::Black);
        } else if has_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let lines = vec![Line::from(""), Line::from(text), Line::from("")];
        let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

fn mark_style(player: Player) -> Style {
    let colour = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(colour).add_modifier(Modifier::BOLD)
}

fn render_grid(f: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let cell_row = format!(
        "{blank}│{blank}│{blank}",
        blank = " ".repeat(CELL_WIDTH as usize)
    );
    let separator = format!(
        "{bar}┼{bar}┼{bar}",
        bar = "─".repeat(CELL_WIDTH as usize)
    );

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for band in 0..3 {
        for _ in 0..CELL_HEIGHT {
            lines.push(Line::from(cell_row.clone()));
        }
        if band < 2 {
            lines.push(Line::from(separator.clone()));
        }
    }

    let grid = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(grid, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_tile_the_board() {
        let layout = BoardLayout::centered(Rect::new(0, 0, 23, 11));
        assert_eq!(layout.area(), Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT));
        assert_eq!(layout.cell(Position::TopLeft), Rect::new(0, 0, 7, 3));
        assert_eq!(layout.cell(Position::Center), Rect::new(8, 4, 7, 3));
        assert_eq!(layout.cell(Position::BottomRight), Rect::new(16, 8, 7, 3));
    }

    #[test]
    fn test_hit_testing() {
        let layout = BoardLayout::centered(Rect::new(10, 5, 43, 21));
        let origin = layout.area();
        assert_eq!(origin.x, 20);
        assert_eq!(origin.y, 10);

        assert_eq!(layout.hit(20, 10), Some(Position::TopLeft));
        assert_eq!(layout.hit(42, 20), Some(Position::BottomRight));
        // Vertical separator between the first two columns.
        assert_eq!(layout.hit(27, 10), None);
        // Horizontal separator below the first row.
        assert_eq!(layout.hit(20, 13), None);
        assert_eq!(layout.hit(0, 0), None);
    }
}
