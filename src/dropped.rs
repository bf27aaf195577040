//! Removal of dropped, failed and retaken subjects.
//!
//! "dropped chemistry, music" or "i quit physics" must not yield grades, so
//! those clauses are cut out of the text before grade extraction. The
//! object of a drop phrase is the run of known subjects after it, or, when
//! none is recognized, the rest of the clause. Following comma-separated
//! clauses made only of known subjects belong to the same list and go too.
//! A none-phrase object ("retook nothing") removes only the phrase itself.

use crate::canonical::Canonicalizer;
use crate::synonyms::SynonymTable;
use crate::text::{PhraseSet, Token, TokenKind, render, tokenize};

/// Words that start a new clause inside an unrecognized drop object.
const CLAUSE_STARTERS: &[&str] = &[
    "but", "got", "get", "have", "achieved", "received", "scored", "then", "so", "because",
    "though", "although", "while", "whereas",
];

/// Compiled drop and none phrases.
#[derive(Debug, Clone, Default)]
pub struct DropFilter {
    dropped: PhraseSet,
    none: PhraseSet,
}

impl DropFilter {
    pub fn new(table: &SynonymTable) -> Self {
        Self {
            dropped: PhraseSet::new(table.dropped()),
            none: PhraseSet::new(table.none()),
        }
    }

    /// Remove every drop phrase together with the subjects it governs.
    ///
    /// The output is derived from `text` by deletion only and is never
    /// longer than the input.
    pub fn remove_dropped(&self, text: &str, canon: &Canonicalizer) -> String {
        let tokens = tokenize(text);
        let mut keep = vec![true; tokens.len()];
        let mut saw_drop = false;
        let mut i = 0;

        while i < tokens.len() {
            let Some(n) = self.dropped.match_at(&tokens, i) else {
                i += 1;
                continue;
            };
            saw_drop = true;
            let object = i + n;
            keep[i..object].fill(false);

            if let Some(m) = self.none.match_at(&tokens, object) {
                keep[object..object + m].fill(false);
                tracing::debug!(phrase = %join(&tokens[i..object]), "drop phrase with empty object");
                i = object + m;
                continue;
            }

            let end = object_end(&tokens, object, canon);
            keep[object..end].fill(false);
            tracing::debug!(
                phrase = %join(&tokens[i..object]),
                object = %join(&tokens[object..end]),
                "removed dropped subjects"
            );

            let mut next = end;
            if end > object {
                while tokens.get(next).is_some_and(|t| t.kind == TokenKind::Comma) {
                    let clause = next + 1;
                    let clause_end = (clause..tokens.len())
                        .find(|&k| tokens[k].is_boundary())
                        .unwrap_or(tokens.len());
                    if clause == clause_end || !all_subjects(&tokens, clause, clause_end, canon) {
                        break;
                    }
                    keep[clause..clause_end].fill(false);
                    next = clause_end;
                }
            }
            i = next.max(object);
        }

        if saw_drop {
            drop_leading_bare_word(&tokens, &mut keep);
        }
        render(text, &tokens, &keep)
    }
}

fn join(tokens: &[Token]) -> String {
    crate::canonical::join_words(tokens)
}

/// End index of the subjects governed by a drop phrase whose object starts
/// at `start`.
fn object_end(tokens: &[Token], start: usize, canon: &Canonicalizer) -> usize {
    let known = segment_subjects(tokens, start, tokens.len(), canon);
    if known > start {
        return known;
    }
    (start..tokens.len())
        .find(|&k| {
            let t = &tokens[k];
            !t.is_word() || CLAUSE_STARTERS.contains(&t.text.as_str())
        })
        .unwrap_or(tokens.len())
}

/// Greedily consume known subjects (optionally joined by "and") starting at
/// `start` and ending no later than `limit`. Returns the index after the
/// last subject consumed, or `start` if none.
fn segment_subjects(tokens: &[Token], start: usize, limit: usize, canon: &Canonicalizer) -> usize {
    let mut end = start;
    let mut k = start;
    loop {
        match canon.subjects().longest_at(tokens, k, |i| i < limit) {
            Some((_, n)) => {
                k += n;
                end = k;
            }
            None => break,
        }
        if k < limit && tokens[k].is_word() && tokens[k].text == "and" {
            k += 1;
        }
    }
    end
}

fn all_subjects(tokens: &[Token], start: usize, end: usize, canon: &Canonicalizer) -> bool {
    segment_subjects(tokens, start, end, canon) == end
}

/// Remove a first clause that is a single leftover word ("i" in
/// "i dropped maths, ...").
fn drop_leading_bare_word(tokens: &[Token], keep: &mut [bool]) {
    let mut kept = (0..tokens.len()).filter(|&k| keep[k]);
    let Some(first) = kept.find(|&k| tokens[k].is_word()) else {
        return;
    };
    let leads = (0..first).all(|k| !keep[k] || tokens[k].is_boundary());
    let alone = match kept.next() {
        None => true,
        Some(k) => tokens[k].is_boundary(),
    };
    if leads && alone {
        keep[first] = false;
    }
}
