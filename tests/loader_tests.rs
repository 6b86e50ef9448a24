use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use boggle_search::board::Grid;
use boggle_search::loader::{
    load_dictionary_from_file, load_grid_from_file, load_word_list_from_file, LoaderError,
};
use boggle_search::search::find_all_board_words;

/// Writes `content` to `dir/name` and returns its path.
fn fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn grid_file_round_trips_through_the_search() {
    let td = tempdir().expect("tempdir");
    let grid_path = fixture(td.path(), "board.txt", "# 2x2 board\nC A\nT X\n");
    let dict_path = fixture(td.path(), "words.txt", "cat\nTAX\n\n# comment\nact\ndog\nat\n");

    let grid = load_grid_from_file(&grid_path).unwrap();
    assert_eq!(grid, Grid::parse("ca\ntx").unwrap());

    let dictionary = load_dictionary_from_file(&dict_path).unwrap();
    assert_eq!(dictionary, vec!["cat", "tax", "act", "dog", "at"]);

    let found: Vec<String> = find_all_board_words(&grid, &dictionary).into_iter().collect();
    assert_eq!(found, vec!["ACT", "CAT", "TAX"]);
}

#[test]
fn stored_game_grid_format_is_accepted() {
    let td = tempdir().expect("tempdir");
    let path = fixture(td.path(), "stored.txt", "[['C', 'A'], ['T', 'X']]\n");
    let grid = load_grid_from_file(&path).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
}

#[test]
fn jagged_grid_file_is_a_parse_error() {
    let td = tempdir().expect("tempdir");
    let path = fixture(td.path(), "jagged.txt", "abc\nde\n");
    let err = load_grid_from_file(&path).unwrap_err();
    assert!(matches!(err, LoaderError::ParseGrid(..)));
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn stored_game_grid_with_an_empty_row_is_rejected() {
    let td = tempdir().expect("tempdir");
    let path = fixture(td.path(), "stored-jagged.txt", "[['A', 'B'], []]\n");
    let err = load_grid_from_file(&path).unwrap_err();
    assert!(matches!(err, LoaderError::ParseGrid(..)));
    assert!(err.to_string().contains("row 1 has 0 cells, expected 2"));
}

#[test]
fn dictionary_without_words_is_rejected() {
    let td = tempdir().expect("tempdir");
    let path = fixture(td.path(), "empty-dict.txt", "# nothing here\n\n");
    assert!(matches!(
        load_dictionary_from_file(&path),
        Err(LoaderError::EmptyDictionary(_))
    ));
}

#[test]
fn found_words_are_uppercased_and_may_be_empty() {
    let td = tempdir().expect("tempdir");
    let path = fixture(td.path(), "found.txt", "cat\nCat\n# skipped\ntax\n");
    // Repeats are kept so the round summary can report them.
    assert_eq!(
        load_word_list_from_file(&path).unwrap(),
        vec!["CAT", "CAT", "TAX"]
    );

    let empty = fixture(td.path(), "found-empty.txt", "");
    assert!(load_word_list_from_file(&empty).unwrap().is_empty());
}
