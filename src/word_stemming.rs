use std::collections::HashSet;
use std::io::{self, BufRead};

use log::debug;
use rust_stemmers::Algorithm;

use crate::text_parsing;

/// A single-word stemming capability.
///
/// Implementations take one lowercase alphabetic word and hand back its
/// stem. The collectors below only ever call this one word at a time, so
/// swapping the algorithm never touches parsing or collection logic. Any
/// `Fn(&str) -> String` qualifies through the blanket impl, which lets a
/// free function or closure be injected directly.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Snowball English stemmer ("Porter2"), the default backend.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// The classic Porter (1980) stemmer, kept as a drop-in alternative. It
/// agrees with Snowball on most regular inflections but strips some
/// suffixes differently.
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        porter_stemmer::stem(word)
    }
}

/// Stems every word of an ordered sequence into a deduplicated set.
pub fn stem_words(
    words: impl Iterator<Item = String>,
    stemmer: &impl Stemmer,
) -> HashSet<String> {
    words.map(|word| stemmer.stem(&word)).collect()
}

/// Parses `line` into words and returns the set of their unique stems.
///
/// Input with no words in it (empty, whitespace, digits and symbols only)
/// produces an empty set.
pub fn unique_stems(line: &str, stemmer: &impl Stemmer) -> HashSet<String> {
    stem_words(text_parsing::parse(line).into_iter(), stemmer)
}

/// Reads `reader` line by line and accumulates the stems of every word into
/// one set shared across the whole source.
///
/// The set is handed back only once the source is exhausted; a failed read
/// (including bytes that do not decode as UTF-8) surfaces as an error and
/// the partially built set is dropped rather than returned as if complete.
pub fn reader_to_stems(
    reader: impl BufRead,
    stemmer: &impl Stemmer,
) -> io::Result<HashSet<String>> {
    let mut stems = HashSet::new();
    for line in reader.lines() {
        for word in text_parsing::parse(&line?) {
            stems.insert(stemmer.stem(&word));
        }
    }
    debug!("collected {} unique stems from reader", stems.len());
    Ok(stems)
}
