use std::collections::BTreeSet;
use std::io::Write;

use super::prefix::{NodeId, PrefixSet};
use crate::board::{fold_char, Cell, Grid, VisitedMask, NEIGHBOR_OFFSETS};

/// Shortest word the enumerator reports, whatever the dictionary holds.
pub const MIN_WORD_LEN: usize = 3;

/// One cell on the active path, with the next neighbor direction to try.
struct Frame {
    cell: Cell,
    node: NodeId,
    next_direction: usize,
}

impl Frame {
    fn new(cell: Cell, node: NodeId) -> Self {
        Self {
            cell,
            node,
            next_direction: 0,
        }
    }

    /// Hands out the next untried direction, or `None` once all eight are spent.
    fn next_direction(&mut self) -> Option<usize> {
        if self.next_direction == NEIGHBOR_OFFSETS.len() {
            return None;
        }
        self.next_direction += 1;
        Some(self.next_direction - 1)
    }
}

/// `BoardExplorer` traces words along paths of adjacent, distinct cells.
///
/// Both searches walk an explicit frame stack instead of recursing: a cell
/// is marked in the call's `VisitedMask` when its frame is pushed and
/// unmarked when the frame is popped. A pruned step never marks anything,
/// so there is nothing to undo on that branch.
pub struct BoardExplorer;

impl BoardExplorer {
    /// Returns the first path spelling `word`, or `None` if there is none.
    ///
    /// The word is trimmed and case-folded. Starting cells are tried in
    /// row-major order, neighbors in `NEIGHBOR_OFFSETS` order.
    pub fn find_path(word: &str, grid: &Grid) -> Option<Vec<Cell>> {
        let target: Vec<char> = word.trim().chars().map(fold_char).collect();
        // A path cannot be longer than the number of cells.
        if target.is_empty() || grid.is_empty() || target.len() > grid.len() {
            return None;
        }

        let mut visited = VisitedMask::for_grid(grid);
        grid.cells()
            .filter(|&(_, ch)| ch == target[0])
            .find_map(|(start, _)| Self::trace(grid, &target, start, &mut visited))
    }

    fn trace(
        grid: &Grid,
        target: &[char],
        start: Cell,
        visited: &mut VisitedMask,
    ) -> Option<Vec<Cell>> {
        if target.len() == 1 {
            return Some(vec![start]);
        }

        visited.mark(start);
        let mut stack = vec![Frame::new(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.next_direction() else {
                let cell = frame.cell;
                stack.pop();
                visited.unmark(cell);
                continue;
            };
            let Some(next) = grid.neighbor(frame.cell, direction) else {
                continue;
            };
            if visited.is_marked(next) || grid.get(next) != Some(target[stack.len()]) {
                continue;
            }

            visited.mark(next);
            stack.push(Frame::new(next, 0));

            if stack.len() == target.len() {
                let path: Vec<Cell> = stack.iter().map(|f| f.cell).collect();
                for cell in &path {
                    visited.unmark(*cell);
                }
                return Some(path);
            }
        }
        None
    }

    /// Collects every word of `prefixes` that can be traced on `grid`.
    ///
    /// Results are uppercased. A branch is abandoned as soon as the letters
    /// gathered so far are no prefix of any word.
    pub fn find_all(grid: &Grid, prefixes: &PrefixSet) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        if grid.is_empty() || prefixes.is_empty() {
            return found;
        }

        let mut visited = VisitedMask::for_grid(grid);
        let mut curr = String::new();
        for (start, ch) in grid.cells() {
            Self::enumerate_from(grid, prefixes, start, ch, &mut visited, &mut curr, &mut found);
        }
        found
    }

    fn enumerate_from(
        grid: &Grid,
        prefixes: &PrefixSet,
        start: Cell,
        start_ch: char,
        visited: &mut VisitedMask,
        curr: &mut String,
        found: &mut BTreeSet<String>,
    ) {
        let Some(start_node) = prefixes.child(prefixes.root(), start_ch) else {
            return;
        };

        visited.mark(start);
        curr.push(start_ch);
        Self::record(prefixes, start_node, curr, 1, found);
        let mut stack = vec![Frame::new(start, start_node)];

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.next_direction() else {
                let cell = frame.cell;
                stack.pop();
                visited.unmark(cell);
                curr.pop();
                continue;
            };
            let node = frame.node;
            let Some(next) = grid.neighbor(frame.cell, direction) else {
                continue;
            };
            if visited.is_marked(next) {
                continue;
            }
            let Some(ch) = grid.get(next) else {
                continue;
            };
            let Some(child) = prefixes.child(node, ch) else {
                continue;
            };

            visited.mark(next);
            curr.push(ch);
            stack.push(Frame::new(next, child));
            Self::record(prefixes, child, curr, stack.len(), found);
        }
    }

    fn record(
        prefixes: &PrefixSet,
        node: NodeId,
        curr: &str,
        length: usize,
        found: &mut BTreeSet<String>,
    ) {
        if length >= MIN_WORD_LEN && prefixes.is_terminal(node) {
            found.insert(curr.to_uppercase());
        }
    }

    /// Writes the board and its solution list to the given writer.
    pub fn print_solutions_to_writer(
        grid: &Grid,
        words: &BTreeSet<String>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "=== BOARD ({} x {}) ===", grid.rows(), grid.cols())?;
        write!(writer, "{}", grid)?;
        writeln!(writer)?;
        writeln!(writer, "=== WORDS ON BOARD ===")?;
        writeln!(writer, "Total words found: {}", words.len())?;
        for word in words {
            writeln!(writer, "{}", word)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

//─────────────────────────────────────────────────────────────────────────────
// Entry points used by callers holding a grid and a word or dictionary.
//─────────────────────────────────────────────────────────────────────────────

/// Returns `true` if `word` can be traced on `grid` without reusing a cell.
pub fn word_exists_on_board(word: &str, grid: &Grid) -> bool {
    BoardExplorer::find_path(word, grid).is_some()
}

/// Returns the first path spelling `word` on `grid`, if any.
pub fn find_word_path(word: &str, grid: &Grid) -> Option<Vec<Cell>> {
    BoardExplorer::find_path(word, grid)
}

/// Every dictionary word of at least `MIN_WORD_LEN` letters traceable on
/// `grid`, uppercased. Builds a fresh `PrefixSet` from `dictionary`.
pub fn find_all_board_words<I, S>(grid: &Grid, dictionary: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if grid.is_empty() {
        return BTreeSet::new();
    }
    BoardExplorer::find_all(grid, &PrefixSet::build(dictionary))
}

/// Same as [`find_all_board_words`] with a prebuilt, reusable `PrefixSet`.
pub fn find_all_board_words_with_prefixes(grid: &Grid, prefixes: &PrefixSet) -> BTreeSet<String> {
    BoardExplorer::find_all(grid, prefixes)
}

/// [`word_exists_on_board`] over unvalidated rows; malformed rows give `false`.
pub fn word_exists_on_rows<S: AsRef<str>>(word: &str, rows: &[Vec<S>]) -> bool {
    Grid::from_rows(rows).is_ok_and(|grid| word_exists_on_board(word, &grid))
}

/// [`find_all_board_words`] over unvalidated rows; malformed rows give an empty set.
pub fn find_all_words_on_rows<R, I, S>(rows: &[Vec<R>], dictionary: I) -> BTreeSet<String>
where
    R: AsRef<str>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match Grid::from_rows(rows) {
        Ok(grid) => find_all_board_words(&grid, dictionary),
        Err(_) => BTreeSet::new(),
    }
}
