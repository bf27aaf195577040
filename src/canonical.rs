//! Canonical name resolution for subjects and courses.
//!
//! An exact canonical name always resolves to itself. Otherwise aliases are
//! consulted in table order and the first entry listing the alias wins.
//! Resolution is therefore idempotent: a canonical name never maps to a
//! different canonical name.

use std::collections::HashMap;

use crate::synonyms::{SynonymEntry, SynonymTable};
use crate::text::{Token, fold_phrase};

/// Alias lookup for one table (subjects or courses).
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    lookup: HashMap<String, String>,
    max_words: usize,
}

impl AliasIndex {
    pub fn new(entries: &[SynonymEntry]) -> Self {
        let mut lookup = HashMap::new();
        for entry in entries {
            lookup.insert(fold_phrase(&entry.canonical), entry.canonical.clone());
        }
        for entry in entries {
            for alias in &entry.aliases {
                lookup
                    .entry(fold_phrase(alias))
                    .or_insert_with(|| entry.canonical.clone());
            }
        }
        let max_words = lookup
            .keys()
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(0);
        Self { lookup, max_words }
    }

    /// Canonical name for an already-folded phrase.
    pub fn resolve(&self, phrase: &str) -> Option<&str> {
        self.lookup.get(phrase).map(String::as_str)
    }

    /// Longest known phrase formed by words `tokens[at..]`.
    ///
    /// `usable` filters tokens that may take part (e.g. not yet consumed by
    /// an earlier extraction). Returns the canonical name and the number of
    /// tokens spanned.
    pub fn longest_at(
        &self,
        tokens: &[Token],
        at: usize,
        usable: impl Fn(usize) -> bool,
    ) -> Option<(&str, usize)> {
        let avail = (at..tokens.len())
            .take(self.max_words)
            .take_while(|&i| tokens[i].is_word() && usable(i))
            .count();
        (1..=avail).rev().find_map(|n| {
            let phrase = join_words(&tokens[at..at + n]);
            self.resolve(&phrase).map(|c| (c, n))
        })
    }

    /// Longest known phrase whose last word is `tokens[end - 1]`.
    ///
    /// Returns the canonical name and the start index of the phrase.
    pub fn longest_ending(
        &self,
        tokens: &[Token],
        end: usize,
        usable: impl Fn(usize) -> bool,
    ) -> Option<(&str, usize)> {
        let avail = (0..end)
            .rev()
            .take(self.max_words)
            .take_while(|&i| tokens[i].is_word() && usable(i))
            .count();
        (1..=avail).rev().find_map(|n| {
            let phrase = join_words(&tokens[end - n..end]);
            self.resolve(&phrase).map(|c| (c, end - n))
        })
    }
}

/// Join the text of word tokens with single spaces.
pub fn join_words(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Subject and course resolution over one synonym table.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    subjects: AliasIndex,
    courses: AliasIndex,
}

impl Canonicalizer {
    pub fn new(table: &SynonymTable) -> Self {
        Self {
            subjects: AliasIndex::new(table.subjects()),
            courses: AliasIndex::new(table.courses()),
        }
    }

    pub fn subjects(&self) -> &AliasIndex {
        &self.subjects
    }

    pub fn courses(&self) -> &AliasIndex {
        &self.courses
    }

    /// Canonical subject name, or the folded input when unrecognized.
    pub fn normalize_subject(&self, text: &str) -> String {
        let folded = fold_phrase(text);
        match self.subjects.resolve(&folded) {
            Some(canonical) => canonical.to_string(),
            None => folded,
        }
    }

    /// Canonical course name, or the folded input when unrecognized.
    pub fn normalize_course(&self, text: &str) -> String {
        let folded = fold_phrase(text);
        match self.courses.resolve(&folded) {
            Some(canonical) => canonical.to_string(),
            None => folded,
        }
    }
}
