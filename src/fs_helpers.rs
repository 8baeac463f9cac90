use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use log::error;
use serde::{Deserialize, Serialize};

use crate::word_stemming::{reader_to_stems, Stemmer};

/// The unique stems of one document, sorted for stable presentation.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemReport {
    pub document: String,
    pub count: usize,
    pub stems: Vec<String>,
}

/// Collects the unique stems of the UTF-8 text file at `file_path`.
///
/// The file handle lives only for the duration of the call; it is released
/// on the error paths too.
pub fn unique_stems_in_file(
    file_path: &Path,
    stemmer: &impl Stemmer,
) -> io::Result<HashSet<String>> {
    let file_handle = File::open(file_path)?;
    reader_to_stems(BufReader::new(file_handle), stemmer)
}

/// Stems `file_path` and packages the result as a sorted [`StemReport`].
pub fn stem_report_for_file(
    file_path: &Path,
    stemmer: &impl Stemmer,
) -> io::Result<StemReport> {
    let mut stems: Vec<String> = unique_stems_in_file(file_path, stemmer)?
        .into_iter()
        .collect();
    stems.sort();

    Ok(StemReport {
        document: file_path.display().to_string(),
        count: stems.len(),
        stems,
    })
}

/// Builds one report per readable file. A file that cannot be read is
/// logged and skipped so one bad path does not sink the whole batch;
/// callers can compare report and input counts to notice the skips.
pub fn stem_files(files: &[PathBuf], stemmer: &impl Stemmer) -> Vec<StemReport> {
    let mut reports = Vec::with_capacity(files.len());
    for file_path in files {
        match stem_report_for_file(file_path, stemmer) {
            Ok(report) => reports.push(report),
            Err(err) => error!("error collecting stems in {:?}; error: {}", file_path, err),
        }
    }
    reports
}

/// Expands command-line `paths` into a sorted list of files to process.
///
/// A file path is taken as-is; a directory contributes every regular file
/// directly inside it. Anything else is logged and skipped.
pub fn collect_file_paths<'a>(paths: impl Iterator<Item = &'a String>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths.map(Path::new) {
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            match path.read_dir() {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        let entry_path = entry.path();
                        if entry_path.is_file() {
                            files.push(entry_path);
                        }
                    }
                }
                Err(err) => error!("could not list {:?}: {}", path, err),
            }
        } else if !path.exists() {
            error!("{:?} does not exist", path);
        } else {
            error!("{:?} is neither a file nor a directory", path);
        }
    }
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::word_stemming::SnowballStemmer;

    fn test_data(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join(name)
    }

    fn set_of(words: &[&str]) -> HashSet<String> {
        words.iter().map(|&word| word.to_owned()).collect()
    }

    #[test]
    fn test_unique_stems_in_words_file() {
        let stems =
            unique_stems_in_file(&test_data("words.tExT"), &SnowballStemmer::english()).unwrap();
        assert_eq!(
            stems,
            set_of(&["observ", "observa", "observacion", "perfor", "perforc", "perform"])
        );
    }

    #[test]
    fn test_unique_stems_in_symbols_file() {
        let stems =
            unique_stems_in_file(&test_data("symbols.txt"), &SnowballStemmer::english()).unwrap();
        assert_eq!(stems, set_of(&["antelop"]));
    }

    #[test]
    fn test_unique_stems_in_animals_file() {
        let stems =
            unique_stems_in_file(&test_data("animals.text"), &SnowballStemmer::english()).unwrap();
        assert_eq!(
            stems,
            set_of(&[
                "axolotl", "echidna", "lori", "mongoos", "narwhal", "okapi", "platypus", "tarsier",
            ])
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = unique_stems_in_file(&test_data("missing.txt"), &SnowballStemmer::english());
        assert!(result.is_err());
    }

    #[test]
    fn test_stem_report_is_sorted() {
        let report =
            stem_report_for_file(&test_data("animals.text"), &SnowballStemmer::english()).unwrap();

        assert!(report.document.ends_with("animals.text"));
        assert_eq!(report.count, report.stems.len());
        assert_eq!(report.count, 8);
        assert!(report.stems.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_stem_files_skips_unreadable_paths() {
        let files = vec![test_data("missing.txt"), test_data("animals.text")];
        let reports = stem_files(&files, &SnowballStemmer::english());

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].count, 8);
    }

    #[test]
    fn test_collect_file_paths_expands_directories() {
        let args = vec![
            test_data("").display().to_string(),
            "no_such_path".to_owned(),
        ];
        let files = collect_file_paths(args.iter());

        assert_eq!(files.len(), 3);
        assert!(files.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(files.iter().all(|file| file.is_file()));
    }

    #[test]
    fn test_collect_file_paths_keeps_plain_files() {
        let args = vec![test_data("symbols.txt").display().to_string()];
        let files = collect_file_paths(args.iter());
        assert_eq!(files, vec![test_data("symbols.txt")]);
    }
}
