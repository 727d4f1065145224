use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    /// Plain-text glyph used by [`Board::render`]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Result of a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    Won(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Column is full")]
    ColumnFull,
    #[error("Invalid column")]
    InvalidColumn,
}

/// Largest accepted column or row count.
pub const MAX_DIMENSION: usize = 1024;

/// Board dimensions and win length, loadable from the `[board]` TOML section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub cols: usize,
    pub rows: usize,
    pub required_to_win: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            cols: 7,
            rows: 6,
            required_to_win: 4,
        }
    }
}

impl BoardConfig {
    /// Reject dimensions that cannot form a board.
    ///
    /// A win length longer than every line is allowed; such a game can only
    /// end in a draw, so it is logged rather than rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be <= {MAX_DIMENSION}"
            )));
        }
        if self.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if self.required_to_win == 0 {
            return Err(ConfigError::Validation(
                "board.required_to_win must be > 0".into(),
            ));
        }
        if self.required_to_win > self.cols.max(self.rows) {
            log::warn!(
                "required_to_win = {} exceeds every line on a {}x{} board; no one can win",
                self.required_to_win,
                self.cols,
                self.rows
            );
        }
        Ok(())
    }
}

/// A `cols` x `rows` grid of column-stacks.
///
/// Cells are stored column-major and row 0 is the bottom of each column, so a
/// column fills from index `col * rows` upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: usize,
    rows: usize,
    required_to_win: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(cols: usize, rows: usize, required_to_win: usize) -> Result<Self, ConfigError> {
        Self::from_config(&BoardConfig {
            cols,
            rows,
            required_to_win,
        })
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config.cols, config.rows, config.required_to_win))
    }

    fn empty(cols: usize, rows: usize, required_to_win: usize) -> Self {
        Board {
            cols,
            rows,
            required_to_win,
            cells: vec![Cell::Empty; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn required_to_win(&self) -> usize {
        self.required_to_win
    }

    /// Get the cell at a position, `None` when out of bounds.
    /// Row 0 is the bottom.
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.at(col, row))
    }

    fn at(&self, col: usize, row: usize) -> Cell {
        self.cells[col * self.rows + row]
    }

    fn column(&self, col: usize) -> &[Cell] {
        &self.cells[col * self.rows..(col + 1) * self.rows]
    }

    /// Number of discs stacked in a column (0 for an invalid column)
    pub fn height(&self, col: usize) -> usize {
        if col >= self.cols {
            return 0;
        }
        self.column(col)
            .iter()
            .take_while(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if a column is full; invalid columns count as full
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || self.at(col, self.rows - 1) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    /// Columns that can still take a disc
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Clear every cell; dimensions are kept.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Drop `player`'s disc into the lowest free cell of `column`, then scan
    /// the whole board for a winner.
    ///
    /// A failed insert leaves the board untouched. A win does not undo the
    /// move.
    pub fn insert(&mut self, column: usize, player: Player) -> Result<MoveOutcome, MoveError> {
        if column >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.height(column);
        if row == self.rows {
            return Err(MoveError::ColumnFull);
        }

        self.cells[column * self.rows + row] = player.to_cell();
        log::debug!("{} dropped into column {column}, row {row}", player.name());

        Ok(match self.winner() {
            Some(winner) => MoveOutcome::Won(winner),
            None => MoveOutcome::Continued,
        })
    }

    /// Find a run of at least `required_to_win` equal discs on any line.
    ///
    /// Lines are scanned columns first (left to right, each top down), then
    /// rows (top row first), then `/` diagonals from the top-left corner, then
    /// `\` diagonals from the top-right corner; the first qualifying run wins.
    pub fn winner(&self) -> Option<Player> {
        let (cols, rows) = (self.cols, self.rows);

        let columns = (0..cols).map(|col| self.line(col, rows - 1, 0, -1, rows));
        let horizontal = (0..rows).rev().map(|row| self.line(0, row, 1, 0, cols));

        // `/` diagonals hold col - row constant; `\` diagonals hold col + row.
        let positive = (0..cols + rows - 1).map(|d| {
            let (col, row) = if d < rows {
                (0, rows - 1 - d)
            } else {
                (d - rows + 1, 0)
            };
            let len = (cols - col).min(rows - row);
            self.line(col, row, 1, 1, len)
        });
        let negative = (0..cols + rows - 1).rev().map(|s| {
            let (col, row) = if s < rows {
                (0, s)
            } else {
                (s - rows + 1, rows - 1)
            };
            let len = (cols - col).min(row + 1);
            self.line(col, row, 1, -1, len)
        });

        columns
            .chain(horizontal)
            .chain(positive)
            .chain(negative)
            .find_map(|line| longest_run_winner(line, self.required_to_win))
    }

    /// `len` cells starting at (`col`, `row`) stepping by (`dc`, `dr`).
    fn line(
        &self,
        col: usize,
        row: usize,
        dc: usize,
        dr: isize,
        len: usize,
    ) -> impl Iterator<Item = Cell> + '_ {
        (0..len).map(move |i| {
            let r = row as isize + dr * i as isize;
            self.at(col + dc * i, r as usize)
        })
    }

    /// Plain-text snapshot: a header of column indices, then the rows from
    /// top to bottom.
    pub fn render(&self) -> String {
        self.render_with(|_, symbol| symbol)
    }

    /// Render with each padded cell symbol passed through `paint`, so a
    /// front end can style tokens without the board knowing how.
    pub fn render_with<F>(&self, paint: F) -> String
    where
        F: Fn(Cell, String) -> String,
    {
        let width = self.cols.saturating_sub(1).to_string().len();
        let mut out = String::new();

        let header: Vec<String> = (0..self.cols).map(|col| format!("{col:<width$}")).collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        for row in (0..self.rows).rev() {
            let fields: Vec<String> = (0..self.cols)
                .map(|col| {
                    let cell = self.at(col, row);
                    paint(cell, format!("{:<width$}", cell.symbol()))
                })
                .collect();
            out.push_str(fields.join("  ").trim_end());
            out.push('\n');
        }
        out
    }
}

/// Winner of the first maximal run reaching `required` on one line.
fn longest_run_winner(line: impl Iterator<Item = Cell>, required: usize) -> Option<Player> {
    let mut current = Cell::Empty;
    let mut run = 0;
    for cell in line {
        if cell == current {
            run += 1;
        } else {
            current = cell;
            run = 1;
        }
        if run >= required {
            if let Some(player) = current.player() {
                return Some(player);
            }
        }
    }
    None
}

impl Default for Board {
    /// The traditional 7 x 6 board, four to win
    fn default() -> Self {
        let config = BoardConfig::default();
        Self::empty(config.cols, config.rows, config.required_to_win)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
