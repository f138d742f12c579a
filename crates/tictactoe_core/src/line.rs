//! The eight winning lines and the geometry used to highlight them.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A row, column, or diagonal triple of cells.
///
/// Variants are declared in scan order: rows top to bottom, columns left
/// to right, then the ↘ diagonal and the ↙ diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Line {
    /// The three cells of this line, from its start to its end.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

/// A point in view coordinates (x grows rightwards, y downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// The line that won the game, recorded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    line: Line,
    player: Player,
}

impl WinLine {
    pub(crate) fn new(line: Line, player: Player) -> Self {
        Self { line, player }
    }

    /// Which line was completed.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Who completed it.
    pub fn player(&self) -> Player {
        self.player
    }

    /// First cell of the line.
    pub fn from(&self) -> Position {
        self.line.cells()[0]
    }

    /// Last cell of the line.
    pub fn to(&self) -> Position {
        self.line.cells()[2]
    }

    /// Segment between the centres of the first and last cell, for a grid
    /// whose cells are `cell_size` units square.
    pub fn endpoints(&self, cell_size: f32) -> (Point, Point) {
        let centre = |pos: Position| Point {
            x: (pos.col() as f32 + 0.5) * cell_size,
            y: (pos.row() as f32 + 0.5) * cell_size,
        };
        (centre(self.from()), centre(self.to()))
    }
}
