use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes `text` down to lowercase Latin letters and whitespace.
///
/// Three passes over the characters:
///
/// 1. canonical decomposition (NFD), dropping the combining marks, so
///    accented letters fall back to their plain base (`é` -> `e`, `Ḷ` -> `L`)
/// 2. case folding to lowercase
/// 3. substituting a single space for every character that is still not
///    `a-z` or whitespace (digits, punctuation, symbols, non-Latin letters)
///
/// Substitution keeps a word boundary where the junk was: `"ante*lope"`
/// cleans to `"ante lope"`, two words. Whitespace that was already present
/// passes through untouched; nothing is trimmed or collapsed.
pub fn clean(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Cleans `text` and splits it into words, left to right.
///
/// Words that survive are non-empty runs of `a-z`. Input with nothing to
/// keep (empty, whitespace, digits and symbols only) parses to an empty
/// vector. Parsing already-cleaned text gives the same words as parsing the
/// raw original, so callers never need to `clean` up front.
pub fn parse(text: &str) -> Vec<String> {
    clean(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
