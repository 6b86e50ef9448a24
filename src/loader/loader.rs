use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::LoaderError;
use crate::board::Grid;

//─────────────────────────────────────────────────────────────────────────────

/// Loads and validates a board from a text file.
pub fn load_grid_from_file(file_path: &Path) -> Result<Grid, LoaderError> {
    let file_content = read_file(file_path)?;
    Grid::parse(&file_content)
        .map_err(|e| LoaderError::ParseGrid(file_path.display().to_string(), e))
}

/// Loads a dictionary, one word per line, normalized to lowercase.
///
/// # Errors
/// Returns `LoaderError::EmptyDictionary` if the file holds no words after
/// blank lines and `#` comments are dropped.
pub fn load_dictionary_from_file(file_path: &Path) -> Result<Vec<String>, LoaderError> {
    let file_content = read_file(file_path)?;
    let words = parse_word_list(&file_content, |word| word.to_lowercase());
    if words.is_empty() {
        return Err(LoaderError::EmptyDictionary(file_path.display().to_string()));
    }
    Ok(words)
}

/// Loads a list of words a player already submitted, normalized to uppercase.
///
/// An empty list is fine here. Repeated submissions are kept, in file order.
pub fn load_word_list_from_file(file_path: &Path) -> Result<Vec<String>, LoaderError> {
    let file_content = read_file(file_path)?;
    Ok(word_lines(&file_content, |word| word.to_uppercase()))
}

/// Splits `content` into normalized words.
///
/// Each line is trimmed; blank lines and lines starting with `#` are skipped,
/// and duplicates after normalization are dropped keeping first occurrence.
pub fn parse_word_list(content: &str, normalize: impl Fn(&str) -> String) -> Vec<String> {
    let mut seen = HashSet::new();
    word_lines(content, normalize)
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn word_lines(content: &str, normalize: impl Fn(&str) -> String) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(normalize)
        .collect()
}

fn read_file(file_path: &Path) -> Result<String, LoaderError> {
    fs::read_to_string(file_path)
        .map_err(|e| LoaderError::ReadFile(file_path.display().to_string(), e))
}
