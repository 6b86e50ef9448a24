//! Word search over letter boards.
//!
//! A word is on a board when it can be spelled along a path of adjacent
//! cells (diagonals included) that never uses a cell twice.
//! [`search::word_exists_on_board`] checks a single word and
//! [`search::find_all_board_words`] lists every dictionary word of at least
//! three letters, pruning the search with a [`search::PrefixSet`] built once
//! per dictionary.
//!
//! ```
//! use boggle_search::board::Grid;
//! use boggle_search::search::{find_all_board_words, word_exists_on_board};
//!
//! let grid = Grid::parse("ca\ntx").unwrap();
//! assert!(word_exists_on_board("CAT", &grid));
//! assert!(!word_exists_on_board("dog", &grid));
//!
//! let words = find_all_board_words(&grid, ["cat", "tax", "at"]);
//! assert_eq!(words.into_iter().collect::<Vec<_>>(), ["CAT", "TAX"]);
//! ```

pub mod app;
pub mod board;
pub mod loader;
pub mod search;
