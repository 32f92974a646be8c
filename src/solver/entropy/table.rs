//! Entropy-keyed grouping of candidate guesses

use crate::core::Word;

/// Entropy values closer than this are treated as the same key
pub const ENTROPY_EPSILON: f64 = 1e-9;

/// Words sharing one entropy value, in the order they were inserted
#[derive(Debug, Clone)]
pub struct EntropyGroup<'a> {
    pub entropy: f64,
    pub words: Vec<&'a Word>,
}

/// Mapping from entropy value to the words achieving it
///
/// Groups are kept sorted by ascending entropy. Keys are matched with an
/// absolute tolerance of [`ENTROPY_EPSILON`], so scores that differ only by
/// floating-point noise share a group.
#[derive(Debug, Clone, Default)]
pub struct EntropyTable<'a> {
    groups: Vec<EntropyGroup<'a>>,
}

impl<'a> EntropyTable<'a> {
    /// Add `word` under `entropy`, appending to an existing group when one matches
    pub fn insert(&mut self, entropy: f64, word: &'a Word) {
        let index = self
            .groups
            .partition_point(|group| group.entropy < entropy - ENTROPY_EPSILON);

        match self.groups.get_mut(index) {
            Some(group) if group.entropy <= entropy + ENTROPY_EPSILON => group.words.push(word),
            _ => self.groups.insert(
                index,
                EntropyGroup {
                    entropy,
                    words: vec![word],
                },
            ),
        }
    }

    /// Highest entropy and the first word inserted with it
    #[must_use]
    pub fn best(&self) -> Option<(f64, &'a Word)> {
        let group = self.groups.last()?;
        group.words.first().map(|&word| (group.entropy, word))
    }

    /// Number of distinct entropy values
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of words across all groups
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|group| group.words.len()).sum()
    }

    /// Groups from highest to lowest entropy
    pub fn iter_descending(&self) -> impl Iterator<Item = &EntropyGroup<'a>> {
        self.groups.iter().rev()
    }
}
