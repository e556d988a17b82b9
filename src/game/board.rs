use std::fmt;
use std::ops::Deref;

use super::token::Token;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of equal tokens in a line needed to win.
const RUN: usize = 4;

/// The playing grid. Row 0 is the top, row `ROWS - 1` the bottom; tokens
/// dropped into a column settle in its lowest empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Token>; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn columns(&self) -> usize {
        COLS
    }

    /// Get the token at a specific position, if any.
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Token> {
        Self::assert_in_bounds(row, col);
        self.cells[row][col].as_ref()
    }

    /// Lowest empty row in `col`, scanning from the bottom up. `None` when the
    /// column is full.
    ///
    /// Panics if `col` is outside the grid; use [`Board::is_valid_move`] to
    /// screen untrusted input.
    pub fn first_available_row(&self, col: usize) -> Option<usize> {
        Self::assert_column(col);
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// A column is full once its top cell is occupied.
    ///
    /// Panics if `col` is outside the grid.
    pub fn is_column_full(&self, col: usize) -> bool {
        Self::assert_column(col);
        self.cells[0][col].is_some()
    }

    pub fn are_all_columns_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// True iff `col` is on the board and still has room. Never panics.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && !self.is_column_full(col)
    }

    /// Columns that still accept a token, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Write `token` into a cell without any legality check. Callers must
    /// already know the cell is the first available row of a valid column.
    pub fn set_token(&mut self, row: usize, col: usize, token: Token) {
        Self::assert_in_bounds(row, col);
        self.cells[row][col] = Some(token);
    }

    /// Clear a cell. Only used to take back a placement made with
    /// [`Board::set_token`].
    pub fn remove_token(&mut self, row: usize, col: usize) {
        Self::assert_in_bounds(row, col);
        self.cells[row][col] = None;
    }

    /// Drop `token` into `col` for as long as the returned guard lives.
    ///
    /// Returns `None` without touching the board if the move is not valid.
    /// The token is removed again when the guard is dropped, whichever way
    /// the caller leaves the scope.
    pub fn speculate(&mut self, col: usize, token: Token) -> Option<Speculation<'_>> {
        if !self.is_valid_move(col) {
            return None;
        }
        let row = self.first_available_row(col)?;
        self.set_token(row, col, token);
        Some(Speculation {
            board: self,
            row,
            col,
        })
    }

    /// Any row holding four equal tokens side by side
    pub fn check_horizontally(&self) -> bool {
        (0..ROWS).any(|row| (0..=COLS - RUN).any(|col| self.window_matches(row, col, 0, 1)))
    }

    /// Any column holding four equal tokens stacked
    pub fn check_vertically(&self) -> bool {
        (0..=ROWS - RUN).any(|row| (0..COLS).any(|col| self.window_matches(row, col, 1, 0)))
    }

    /// Both diagonal directions, scanned independently: top-left to
    /// bottom-right (\) and top-right to bottom-left (/).
    pub fn check_diagonally(&self) -> bool {
        let descending = (0..=ROWS - RUN)
            .any(|row| (0..=COLS - RUN).any(|col| self.window_matches(row, col, 1, 1)));
        let ascending = (0..=ROWS - RUN)
            .any(|row| (RUN - 1..COLS).any(|col| self.window_matches(row, col, 1, -1)));
        descending || ascending
    }

    /// The win condition: four in a row in any orientation, recomputed from
    /// the whole grid.
    pub fn has_four_in_a_row(&self) -> bool {
        self.check_horizontally() || self.check_vertically() || self.check_diagonally()
    }

    /// Window of `RUN` cells starting at (row, col) and stepping by
    /// (d_row, d_col). Empty cells never match.
    fn window_matches(&self, row: usize, col: usize, d_row: usize, d_col: isize) -> bool {
        let Some(first) = &self.cells[row][col] else {
            return false;
        };
        (1..RUN).all(|i| {
            let r = row + i * d_row;
            let c = col.wrapping_add_signed(d_col * i as isize);
            self.cells[r][c].as_ref() == Some(first)
        })
    }

    fn assert_column(col: usize) {
        assert!(col < COLS, "column {col} out of range (0..{COLS})");
    }

    fn assert_in_bounds(row: usize, col: usize) {
        assert!(row < ROWS, "row {row} out of range (0..{ROWS})");
        Self::assert_column(col);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.as_ref().map_or_else(|| ".".to_string(), Token::to_string))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

/// A token placed on the board for evaluation only. Derefs to the board in
/// its speculative state; dropping it restores the cell to empty.
pub struct Speculation<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl Speculation<'_> {
    /// Row the speculative token landed in
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.remove_token(self.row, self.col);
    }
}
