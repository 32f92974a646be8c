//! Word list loading utilities
//!
//! Lexicons come either from a plain newline-separated list or from a WordNet
//! database directory. Either way the result is filtered to one word size,
//! lowercased, and deduplicated in first-seen order.

use crate::core::Word;
use crate::error::{Error, Result};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// WordNet index files read from `<root>/dict/`
pub const WORDNET_INDEX_FILES: [&str; 4] = ["index.noun", "index.verb", "index.adj", "index.adv"];

/// On-disk lexicon layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LexiconFormat {
    /// Pick `Wordnet` for directories and `Plain` for files
    #[default]
    Auto,
    /// One word per line
    Plain,
    /// WordNet database root containing `dict/index.*`
    Wordnet,
}

/// Load a lexicon of `word_size`-letter words
///
/// # Errors
/// Returns `Error::Lexicon` if a plain list or every WordNet index file cannot
/// be read, and `Error::EmptyLexicon` if no word of the requested size was found.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::{LexiconFormat, load_lexicon};
///
/// let words = load_lexicon("WordNet-3.0", LexiconFormat::Auto, 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_lexicon<P: AsRef<Path>>(
    path: P,
    format: LexiconFormat,
    word_size: usize,
) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let format = match format {
        LexiconFormat::Auto if path.is_dir() => LexiconFormat::Wordnet,
        LexiconFormat::Auto => LexiconFormat::Plain,
        explicit => explicit,
    };

    let words = match format {
        LexiconFormat::Wordnet => load_wordnet(path, word_size)?,
        _ => load_from_file(path, word_size)?,
    };

    if words.is_empty() {
        return Err(Error::EmptyLexicon { word_size });
    }

    debug!(
        "loaded {} {word_size}-letter words from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Load words from a newline-separated file
///
/// Blank lines and entries that are not `word_size` ASCII letters are skipped.
///
/// # Errors
/// Returns `Error::Lexicon` if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P, word_size: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Lexicon {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines(), word_size))
}

/// Load words from the four WordNet index files under `<root>/dict/`
///
/// A missing or unreadable index file is logged and skipped, so the result may
/// be empty.
///
/// # Errors
/// Returns `Error::Lexicon` for the last failure if none of the index files
/// can be read.
pub fn load_wordnet<P: AsRef<Path>>(root: P, word_size: usize) -> Result<Vec<Word>> {
    let dict = root.as_ref().join("dict");
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut last_failure = None;
    let mut read_any = false;

    for name in WORDNET_INDEX_FILES {
        let path = dict.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                read_any = true;
                for word in parse_wordnet_index(&content, word_size) {
                    if seen.insert(word.clone()) {
                        words.push(word);
                    }
                }
            }
            Err(source) => {
                warn!("could not read {}: {source}", path.display());
                last_failure = Some(Error::Lexicon { path, source });
            }
        }
    }

    match last_failure {
        Some(failure) if !read_any => Err(failure),
        _ => Ok(words),
    }
}

/// Extract lemmas from the contents of one WordNet index file
///
/// License header lines start with a space; every other line starts with the
/// lemma followed by a space. Multi-word lemmas (`a_cappella`) and entries of
/// another length are dropped.
#[must_use]
pub fn parse_wordnet_index(content: &str, word_size: usize) -> Vec<Word> {
    let lemmas = content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with(' '))
        .filter_map(|line| line.split_once(' ').map(|(lemma, _)| lemma));

    words_from_lines(lemmas, word_size)
}

/// Convert raw entries into unique words of `word_size` letters
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::words_from_lines;
///
/// let words = words_from_lines(["Crane", "slate", "crane", "toolong", ""], 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
pub fn words_from_lines<'a, I>(lines: I, word_size: usize) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();

    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::with_size(line, word_size).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Convert a string slice to words of `word_size` letters
#[must_use]
pub fn words_from_slice(slice: &[&str], word_size: usize) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), word_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const INDEX_NOUN: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n  2 Princeton University under the following license.\n\
crane n 4 4 @ ~ #p %p 4 1 02012345 03126789\n\
slate n 3 3 @ ~ + 3 0 06500000\n\
a_cappella n 1 0 1 0 07000000\n\
cat n 8 5 @ ~ %p 8 1 02121620\n";

    const INDEX_VERB: &str = "  1 license\n\
crane v 1 2 @ + 1 0 01234567\n\
irate v 1 0 1 0 00000001\n";

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_assistant_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("dict")).unwrap();
        dir
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_other_sizes_and_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl-te", "slate"], 5);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn words_are_lowercased_and_deduplicated() {
        let words = words_from_slice(&["CRANE", "crane", "Slate", "crane"], 5);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[], 5).is_empty());
    }

    #[test]
    fn wordnet_index_skips_header_and_compounds() {
        let words = parse_wordnet_index(INDEX_NOUN, 5);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn wordnet_index_filters_by_size() {
        let words = parse_wordnet_index(INDEX_NOUN, 3);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat"]);
    }

    #[test]
    fn load_wordnet_merges_files_without_duplicates() {
        let dir = scratch_dir("wordnet");
        fs::write(dir.join("dict/index.noun"), INDEX_NOUN).unwrap();
        fs::write(dir.join("dict/index.verb"), INDEX_VERB).unwrap();

        // index.adj and index.adv are missing and only produce warnings
        let words = load_lexicon(&dir, LexiconFormat::Auto, 5).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn plain_file_is_detected() {
        let dir = scratch_dir("plain");
        let file = dir.join("words.txt");
        fs::write(&file, "crane\n\nslate\nCRANE\nirate\n").unwrap();

        let words = load_lexicon(&file, LexiconFormat::Auto, 5).unwrap();
        assert_eq!(words.len(), 3);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn no_matching_words_is_an_error() {
        let dir = scratch_dir("empty");
        fs::write(dir.join("dict/index.noun"), INDEX_NOUN).unwrap();

        assert!(matches!(
            load_lexicon(&dir, LexiconFormat::Wordnet, 8),
            Err(Error::EmptyLexicon { word_size: 8 })
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unreadable_wordnet_database_reports_path() {
        let dir = scratch_dir("no_index");

        let result = load_lexicon(&dir, LexiconFormat::Wordnet, 5);
        match result {
            Err(Error::Lexicon { path, .. }) => assert!(path.starts_with(dir.join("dict"))),
            other => panic!("expected a lexicon error, got {other:?}"),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_plain_file_reports_path() {
        let result = load_lexicon("/nonexistent/words.txt", LexiconFormat::Plain, 5);
        assert!(matches!(result, Err(Error::Lexicon { .. })));
    }
}
