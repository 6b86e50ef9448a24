use std::collections::BTreeSet;
use std::thread;

use proptest::collection::vec;
use proptest::prelude::*;

use boggle_search::board::{Grid, GridError};
use boggle_search::search::{
    find_all_board_words, find_all_board_words_with_prefixes, find_all_words_on_rows,
    word_exists_on_board, word_exists_on_rows, PrefixSet, MIN_WORD_LEN,
};

fn grid_of(rows: &[&[&str]]) -> Grid {
    let rows: Vec<Vec<&str>> = rows.iter().map(|row| row.to_vec()).collect();
    Grid::from_rows(&rows).expect("valid grid")
}

fn words(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

const ALPHABET: &[char] = &['a', 'e', 'i', 'n', 'r', 's', 't'];

/// Rectangular boards of 1 to 5 rows and columns over a small alphabet.
fn small_board() -> impl Strategy<Value = Vec<Vec<char>>> {
    (1..=5usize, 1..=5usize).prop_flat_map(|(rows, cols)| {
        vec(vec(prop::sample::select(ALPHABET), cols), rows)
    })
}

fn brute_force(grid: &Grid, dictionary: &[String]) -> BTreeSet<String> {
    dictionary
        .iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN && word_exists_on_board(w, grid))
        .map(|w| w.to_uppercase())
        .collect()
}

#[test]
fn cat_is_traced_through_a_diagonal() {
    let grid = grid_of(&[&["C", "A"], &["T", "X"]]);
    assert!(word_exists_on_board("CAT", &grid));
}

#[test]
fn dog_is_absent_when_no_cell_matches() {
    let grid = grid_of(&[&["C", "A"], &["T", "X"]]);
    assert!(!word_exists_on_board("DOG", &grid));
}

#[test]
fn single_cell_board_has_no_three_letter_words() {
    let grid = grid_of(&[&["A"]]);
    assert!(find_all_board_words(&grid, ["an", "at", "a"]).is_empty());
}

#[test]
fn two_by_two_board_matches_brute_force() {
    let grid = grid_of(&[&["A", "B"], &["C", "D"]]);
    let dictionary: Vec<String> = ["abc", "abd", "xyz"].iter().map(|w| w.to_string()).collect();
    let found = find_all_board_words(&grid, &dictionary);
    assert_eq!(found, words(&["ABC", "ABD"]));
    assert_eq!(found, brute_force(&grid, &dictionary));
}

#[test]
fn single_letter_word_matches_its_cell() {
    let grid = grid_of(&[&["Q", "R"], &["S", "T"]]);
    for letter in ["q", "R", "s", "T"] {
        assert!(word_exists_on_board(letter, &grid), "{} should be on the board", letter);
    }
    assert!(!word_exists_on_board("z", &grid));
}

#[test]
fn a_cell_cannot_be_used_twice() {
    let grid = grid_of(&[&["A"]]);
    assert!(!word_exists_on_board("AA", &grid));
}

#[test]
fn lookups_ignore_case() {
    let grid = grid_of(&[&["c", "A"], &["T", "x"]]);
    for word in ["cat", "CAT", "Cat", "tax", "TAX"] {
        assert_eq!(
            word_exists_on_board(word, &grid),
            word_exists_on_board(&word.to_lowercase(), &grid)
        );
        assert!(word_exists_on_board(word, &grid));
    }
    let found = find_all_board_words(&grid, ["CAT", "Tax"]);
    assert_eq!(found, words(&["CAT", "TAX"]));
}

#[test]
fn empty_inputs_give_empty_results() {
    let empty = Grid::from_rows(&Vec::<Vec<String>>::new()).unwrap();
    assert!(!word_exists_on_board("a", &empty));
    assert!(find_all_board_words(&empty, ["abc"]).is_empty());

    let grid = grid_of(&[&["A", "B"], &["C", "D"]]);
    assert!(!word_exists_on_board("", &grid));
    assert!(find_all_board_words(&grid, Vec::<String>::new()).is_empty());
}

#[test]
fn jagged_rows_are_rejected() {
    let jagged = vec![vec!["a", "b"], vec!["c"]];
    assert!(matches!(
        Grid::from_rows(&jagged),
        Err(GridError::Jagged { row: 1, expected: 2, found: 1 })
    ));
    assert!(!word_exists_on_rows("ab", &jagged));
    assert!(find_all_words_on_rows(&jagged, ["abc"]).is_empty());

    let square = vec![vec!["a", "b"], vec!["c", "d"]];
    assert!(word_exists_on_rows("abc", &square));
    assert_eq!(find_all_words_on_rows(&square, ["abc"]), words(&["ABC"]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn enumeration_matches_brute_force_on_random_boards(
        cells in small_board(),
        dictionary in vec("[aeinrst]{1,6}", 0..300),
    ) {
        let grid = Grid::from_chars(&cells).expect("generated board is rectangular");
        prop_assert_eq!(
            find_all_board_words(&grid, &dictionary),
            brute_force(&grid, &dictionary)
        );
    }
}

#[test]
fn prebuilt_prefix_set_is_reusable_across_boards() {
    let dictionary = ["tea", "eat", "ate", "tree", "rest", "stare"];
    let prefixes = PrefixSet::build(dictionary);
    let boards = ["te\nax", "tre\nsae", "sta\nxre"];
    for text in boards {
        let grid = Grid::parse(text).unwrap();
        assert_eq!(
            find_all_board_words_with_prefixes(&grid, &prefixes),
            find_all_board_words(&grid, dictionary),
            "board\n{}",
            grid
        );
    }
}

#[test]
fn repeated_calls_agree() {
    let grid = Grid::parse("rst\neai\nnte").unwrap();
    let dictionary = ["rest", "tea", "neat", "stain", "satin", "tin", "rat"];
    let first = find_all_board_words(&grid, dictionary);
    let second = find_all_board_words(&grid, dictionary);
    assert_eq!(first, second);
    assert!(!first.is_empty());
    assert_eq!(
        word_exists_on_board("stain", &grid),
        word_exists_on_board("stain", &grid)
    );
}

#[test]
fn concurrent_searches_share_grid_and_prefixes() {
    let grid = Grid::parse("rst\neai\nnte").unwrap();
    let dictionary = ["rest", "tea", "neat", "stain", "satin", "tin", "rat", "ant"];
    let prefixes = PrefixSet::build(dictionary);
    let expected = find_all_board_words_with_prefixes(&grid, &prefixes);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| find_all_board_words_with_prefixes(&grid, &prefixes)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn large_board_does_not_overflow_the_stack() {
    // A single long row: the only path for the full word is thousands of cells deep.
    let grid = Grid::parse(&"a".repeat(5000)).unwrap();
    assert_eq!(grid.rows(), 1);
    assert!(word_exists_on_board(&"a".repeat(5000), &grid));
    assert!(!word_exists_on_board(&"a".repeat(5001), &grid));
}
