// grid.rs
// ──────────────────────────────────────────────────────────────────────────────
// A validated, immutable letter board. Cells are stored row-major as
// case-folded `char`s. Two cells are adjacent when they differ by at most one
// in both row and column (king-move adjacency, diagonals included).
//
// Construction is the only fallible step: once a `Grid` exists it is
// rectangular, so the searches built on top of it are total.
// ──────────────────────────────────────────────────────────────────────────────
use std::fmt;

use super::error::GridError;

/// The eight `(row, col)` offsets reaching every adjacent cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Lowercases `ch` when its lowercase form is a single character.
///
/// Characters whose lowercase mapping expands (e.g. `'İ'`) are kept as-is so
/// that a cell always stays one character wide.
pub fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// A `(row, col)` coordinate on a grid, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular board of single-character cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from rows of single-character strings.
    ///
    /// Zero rows, or rows of zero columns, produce an empty grid. Each cell is
    /// trimmed before validation.
    ///
    /// # Errors
    /// * `GridError::Jagged` if any row's length differs from the first row.
    /// * `GridError::InvalidCell` if a cell is not exactly one character.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };
        let cols = first.len();
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Jagged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, value) in row.iter().enumerate() {
                let value = value.as_ref().trim();
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => cells.push(fold_char(ch)),
                    _ => {
                        return Err(GridError::InvalidCell {
                            row: r,
                            col: c,
                            value: value.to_string(),
                        })
                    }
                }
            }
        }

        if cols == 0 {
            return Ok(Self::default());
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Builds a grid from rows of characters. Same rules as [`Grid::from_rows`].
    pub fn from_chars(rows: &[Vec<char>]) -> Result<Self, GridError> {
        let as_strings: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|ch| ch.to_string()).collect())
            .collect();
        Self::from_rows(&as_strings)
    }

    /// Parses the textual board format.
    ///
    /// One row per non-blank line; `#` starts a comment line. A line holding
    /// whitespace or commas is split into tokens, otherwise every character is
    /// a cell. Bracketed input such as `[["C","A"],["T","X"]]` is also accepted.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let trimmed = text.trim();
        let rows = if trimmed.starts_with('[') {
            parse_bracketed_rows(trimmed)
        } else {
            trimmed
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(tokenize_line)
                .collect()
        };
        Self::from_rows(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, `rows * cols`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The case-folded character at `cell`, or `None` when out of bounds.
    pub fn get(&self, cell: Cell) -> Option<char> {
        if self.contains(cell) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    /// Iterates over every cell with its character, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &ch)| (Cell::new(i / self.cols, i % self.cols), ch))
    }

    /// The neighbor of `cell` in direction `NEIGHBOR_OFFSETS[direction]`,
    /// if it lies inside the grid.
    pub fn neighbor(&self, cell: Cell, direction: usize) -> Option<Cell> {
        let (dr, dc) = *NEIGHBOR_OFFSETS.get(direction)?;
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        self.contains(next).then_some(next)
    }

    /// All in-bounds cells adjacent to `cell`.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        (0..NEIGHBOR_OFFSETS.len()).filter_map(move |direction| self.neighbor(cell, direction))
    }

    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let row = &self.cells[r * self.cols..(r + 1) * self.cols];
            let line = row
                .iter()
                .map(|ch| ch.to_uppercase().to_string())
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn tokenize_line(line: &str) -> Vec<String> {
    if line.contains(|ch: char| ch.is_whitespace() || ch == ',') {
        line.split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        line.chars().map(|ch| ch.to_string()).collect()
    }
}

// Splits `[["C","A"],["T","X"]]` into rows of cells; quotes may be single or double.
// Empty inner rows are kept so that `from_rows` can reject them as jagged.
fn parse_bracketed_rows(text: &str) -> Vec<Vec<String>> {
    let unquoted: String = text.chars().filter(|&ch| ch != '"' && ch != '\'').collect();
    let outer = unquoted.trim();
    let inner = outer
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(outer)
        .trim();
    if inner.is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<&str> = inner.split(']').collect();
    // Whatever follows the last row's closing bracket.
    if segments.len() > 1 && segments.last().is_some_and(|tail| tail.trim().is_empty()) {
        segments.pop();
    }

    segments
        .into_iter()
        .map(|segment| {
            segment
                .trim_start_matches(|ch: char| ch == '[' || ch == ',' || ch.is_whitespace())
                .trim_end()
        })
        .map(|segment| {
            if segment.is_empty() {
                Vec::new()
            } else {
                segment.split(',').map(|token| token.trim().to_string()).collect()
            }
        })
        .collect()
}
