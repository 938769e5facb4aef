//! Dictionary sources for the word pool
//!
//! Provides the embedded dictionary compiled into the binary and loaders for
//! custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;

/// Five-letter words of the embedded dictionary
#[must_use]
pub fn dictionary_words() -> Vec<Word> {
    loader::words_from_slice(DICTIONARY)
}
