// explorer module
mod explorer;
// prefix module
mod prefix;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the search modules.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{
    find_all_board_words, find_all_board_words_with_prefixes, find_all_words_on_rows,
    find_word_path, word_exists_on_board, word_exists_on_rows, BoardExplorer, MIN_WORD_LEN,
};
pub use prefix::PrefixSet;
