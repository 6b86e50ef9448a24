// error module
pub mod error;
// loader module
mod loader;

pub use error::LoaderError;
pub use loader::{
    load_dictionary_from_file, load_grid_from_file, load_word_list_from_file, parse_word_list,
};
