//! Course interest detection.
//!
//! When the text contains an interest phrase ("interested in", "hoping to
//! study"), courses are looked for in the stretch of text following each
//! phrase up to the end of its sentence. Without any interest phrase the
//! whole text is scanned as a fallback. A course name that is contained in
//! another match ("english" inside "english literature") is dropped.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::canonical::Canonicalizer;
use crate::synonyms::{SynonymEntry, SynonymTable};
use crate::text::tokenize;

// ── Regex patterns ──────────────────────────────────────────────────────

static RE_SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?;](?:\s|$)").unwrap());

static RE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:like|likes|love|loves|enjoy|enjoys)\s+(?:doing\s+|studying\s+|to\s+(?:study|do)\s+)?",
    )
    .unwrap()
});

/// Whole-word alternation over `phrases`, longest first, with any run of
/// whitespace allowed between words.
fn alternation<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut parts: Vec<String> = phrases
        .into_iter()
        .map(|p| {
            p.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }
    parts.sort_by_key(|p| std::cmp::Reverse(p.len()));
    parts.dedup();
    Some(format!(r"\b(?:{})\b", parts.join("|")))
}

/// Interests found in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestReport {
    /// Canonical course names in table order.
    pub courses: Vec<String>,
    /// Whether an explicit interest phrase was present.
    pub explicit: bool,
}

/// Compiled interest phrases and per-course matchers.
#[derive(Debug, Clone)]
pub struct InterestMatcher {
    phrases: Option<Regex>,
    courses: Vec<(String, Regex)>,
}

impl InterestMatcher {
    pub fn new(table: &SynonymTable) -> Self {
        let phrases = alternation(table.interest().iter().map(String::as_str))
            .and_then(|pattern| compile(&pattern, "interest phrases"));
        let courses = table
            .courses()
            .iter()
            .filter_map(|entry| {
                let pattern = course_pattern(entry)?;
                compile(&pattern, &entry.canonical).map(|re| (entry.canonical.clone(), re))
            })
            .collect();
        Self { phrases, courses }
    }

    /// Text following each interest phrase, up to the end of its sentence.
    pub fn scopes<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let Some(phrases) = &self.phrases else {
            return Vec::new();
        };
        phrases
            .find_iter(text)
            .map(|m| {
                let rest = &text[m.end()..];
                let end = RE_SENTENCE_END.find(rest).map_or(rest.len(), |e| e.start());
                &rest[..end]
            })
            .collect()
    }

    /// Find the courses a (normalized) text expresses interest in.
    pub fn find(&self, text: &str) -> InterestReport {
        let scopes = self.scopes(text);
        let explicit = !scopes.is_empty();
        let haystacks: Vec<&str> = if explicit { scopes } else { vec![text] };

        let found: Vec<String> = self
            .courses
            .iter()
            .filter(|(_, re)| haystacks.iter().any(|h| re.is_match(h)))
            .map(|(canonical, _)| canonical.clone())
            .collect();
        let courses = drop_contained(found);

        tracing::debug!(explicit, courses = ?courses, "interest scan");
        InterestReport { courses, explicit }
    }
}

fn course_pattern(entry: &SynonymEntry) -> Option<String> {
    alternation(
        std::iter::once(entry.canonical.as_str()).chain(entry.aliases.iter().map(String::as_str)),
    )
}

fn compile(pattern: &str, what: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(entry = what, error = %e, "skipping unmatchable synonym entry");
            None
        }
    }
}

/// Remove names that are a strict substring of another name in the list.
fn drop_contained(names: Vec<String>) -> Vec<String> {
    names
        .iter()
        .filter(|name| {
            !names
                .iter()
                .any(|other| other.len() > name.len() && other.contains(name.as_str()))
        })
        .cloned()
        .collect()
}

/// Subjects and courses named directly after "like", "love" or "enjoy".
pub fn liked_subjects(text: &str, canon: &Canonicalizer) -> HashSet<String> {
    let mut liked = HashSet::new();
    for m in RE_LIKE.find_iter(text) {
        let tokens = tokenize(&text[m.end()..]);
        for index in [canon.subjects(), canon.courses()] {
            if let Some((canonical, _)) = index.longest_at(&tokens, 0, |_| true) {
                liked.insert(canonical.to_string());
            }
        }
    }
    liked
}
