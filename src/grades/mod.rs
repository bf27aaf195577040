//! Grade extraction.
//!
//! Grades are pulled out of drop-filtered text by a set of [`Strategy`]
//! implementations run in priority order over one token stream. Each
//! strategy claims the tokens it matches, so a later, looser pattern can
//! never reinterpret text an earlier one already explained. The first
//! strategy to produce a subject wins it.

pub mod grouped;
pub mod single;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::canonical::Canonicalizer;
use crate::error::GradeError;
use crate::text::{Token, TokenKind, tokenize};

// ---------------------------------------------------------------------------
// Grades
// ---------------------------------------------------------------------------

/// A single qualification grade.
/// Variants are ordered best first within each scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A*")]
    AStar,
    A,
    B,
    C,
    D,
    E,
    U,
    /// Distinction* (BTEC).
    #[serde(rename = "D*")]
    DStar,
    /// Merit (BTEC).
    M,
    /// Pass (BTEC).
    P,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::AStar => "A*",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::U => "U",
            Grade::DStar => "D*",
            Grade::M => "M",
            Grade::P => "P",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeScale::Extended
            .parse_token(&s.trim().to_lowercase())
            .ok_or_else(|| GradeError::Unknown {
                token: s.to_string(),
            })
    }
}

/// Which grade letters are recognized in text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeScale {
    /// A-level grades: A*, A–E and U.
    #[default]
    Standard,
    /// A-level grades plus BTEC D*, M and P.
    Extended,
}

/// Common words that happen to spell a run of grade letters.
const GRADE_RUN_STOPWORDS: &[&str] = &[
    "be", "bad", "bed", "bee", "add", "dad", "cab", "dab", "ace", "cue", "due", "dude",
];

impl GradeScale {
    /// Parse one lowercase grade token such as `a*` or `b`.
    pub fn parse_token(self, token: &str) -> Option<Grade> {
        let grade = match token {
            "a*" => Grade::AStar,
            "a" => Grade::A,
            "b" => Grade::B,
            "c" => Grade::C,
            "d" => Grade::D,
            "e" => Grade::E,
            "u" => Grade::U,
            "d*" if self == GradeScale::Extended => Grade::DStar,
            "m" if self == GradeScale::Extended => Grade::M,
            "p" if self == GradeScale::Extended => Grade::P,
            _ => return None,
        };
        Some(grade)
    }

    /// Split a concatenated run such as `a*ab` into its grades.
    ///
    /// Returns `None` unless the whole token is made of grades.
    pub fn parse_run(self, token: &str) -> Option<Vec<Grade>> {
        if GRADE_RUN_STOPWORDS.contains(&token) {
            return None;
        }
        let bytes = token.as_bytes();
        let mut grades = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            let width = if bytes.get(i + 1) == Some(&b'*') { 2 } else { 1 };
            let unit = token.get(i..i + width)?;
            grades.push(self.parse_token(unit)?);
            i += width;
        }
        (!grades.is_empty()).then_some(grades)
    }
}

// ---------------------------------------------------------------------------
// Grade map
// ---------------------------------------------------------------------------

/// Subject → grade mapping that preserves insertion order and never
/// overwrites an existing subject.
///
/// Maps built by [`GradeExtractor::extract`] list subjects in the order
/// they appear in the text, not the order the patterns found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeMap {
    entries: Vec<(String, Grade)>,
}

impl GradeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless `subject` is already present. Returns whether the
    /// entry was added.
    pub fn insert(&mut self, subject: impl Into<String>, grade: Grade) -> bool {
        let subject = subject.into();
        if self.contains_key(&subject) {
            return false;
        }
        self.entries.push((subject, grade));
        true
    }

    pub fn get(&self, subject: &str) -> Option<Grade> {
        self.entries
            .iter()
            .find(|(s, _)| s == subject)
            .map(|(_, g)| *g)
    }

    pub fn contains_key(&self, subject: &str) -> bool {
        self.entries.iter().any(|(s, _)| s == subject)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Grade)> {
        self.entries.iter().map(|(s, g)| (s.as_str(), *g))
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }
}

impl Serialize for GradeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (subject, grade) in &self.entries {
            map.serialize_entry(subject, grade)?;
        }
        map.end()
    }
}

impl<S: Into<String>> FromIterator<(S, Grade)> for GradeMap {
    fn from_iter<I: IntoIterator<Item = (S, Grade)>>(iter: I) -> Self {
        let mut map = GradeMap::new();
        for (subject, grade) in iter {
            map.insert(subject, grade);
        }
        map
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Read-only inputs shared by every strategy.
pub struct Context<'a> {
    pub tokens: &'a [Token],
    pub canon: &'a Canonicalizer,
    pub scale: GradeScale,
}

/// Token indices already claimed by an earlier match.
#[derive(Debug, Default)]
pub struct Consumed(HashSet<usize>);

impl Consumed {
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn claim(&mut self, range: std::ops::Range<usize>) {
        self.0.extend(range);
    }

    pub fn any_in(&self, range: std::ops::Range<usize>) -> bool {
        range.into_iter().any(|i| self.contains(i))
    }
}

/// One subject/grade pair found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub subject: String,
    pub grade: Grade,
    /// Token index of the subject's first word.
    pub position: usize,
}

/// A strategy match: pairs plus the token range that explains them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub pairs: Vec<Pair>,
    pub span: std::ops::Range<usize>,
}

/// A grade-matching pattern.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Find non-overlapping matches that avoid `consumed` tokens.
    fn extract(&self, cx: &Context<'_>, consumed: &Consumed) -> Vec<Extraction>;
}

/// Runs strategies in priority order and merges their results.
pub struct GradeExtractor {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Default for GradeExtractor {
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(grouped::GroupedGrades),
                Box::new(single::GradeInSubject),
                Box::new(single::LabelledGrade),
                Box::new(single::SubjectGrade),
                Box::new(single::InSubjectIsGrade),
            ],
        }
    }
}

impl GradeExtractor {
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Extract grades from (normalized, drop-filtered) text.
    ///
    /// Precedence follows strategy order; the resulting map lists subjects
    /// in the order they appear in the text.
    pub fn extract(&self, text: &str, canon: &Canonicalizer, scale: GradeScale) -> GradeMap {
        let tokens = tokenize(text);
        let cx = Context {
            tokens: &tokens,
            canon,
            scale,
        };
        let mut consumed = Consumed::default();
        let mut winners: Vec<Pair> = Vec::new();

        for strategy in &self.strategies {
            for extraction in strategy.extract(&cx, &consumed) {
                if consumed.any_in(extraction.span.clone()) {
                    continue;
                }
                consumed.claim(extraction.span.clone());
                for pair in extraction.pairs {
                    if pair.subject.is_empty() || winners.iter().any(|w| w.subject == pair.subject) {
                        continue;
                    }
                    tracing::debug!(
                        strategy = strategy.name(),
                        subject = %pair.subject,
                        grade = %pair.grade,
                        "grade extracted"
                    );
                    winners.push(pair);
                }
            }
        }

        winners.sort_by_key(|p| p.position);
        winners.into_iter().map(|p| (p.subject, p.grade)).collect()
    }
}

// ---------------------------------------------------------------------------
// Shared token helpers
// ---------------------------------------------------------------------------

/// Verbs that may introduce a "GRADE in SUBJECT" clause.
pub(crate) const GRADE_VERBS: &[&str] = &[
    "got", "get", "have", "hav", "achieved", "received", "scored", "expect", "expecting",
];

/// Words that open a new clause right after a grade ("maths a i want to
/// study medicine").
const CLAUSE_OPENERS: &[&str] = &[
    "i", "im", "i'm", "my", "but", "so", "also", "then", "got", "get", "interested", "hoping",
    "planning", "looking", "want", "wanting", "would",
];

impl Context<'_> {
    /// Text of the word at `i` if it exists and is not consumed.
    pub(crate) fn free_word<'t>(&'t self, i: usize, consumed: &Consumed) -> Option<&'t str> {
        self.tokens
            .get(i)
            .filter(|t| t.is_word() && !consumed.contains(i))
            .map(|t| t.text.as_str())
    }

    pub(crate) fn grade_at(&self, i: usize, consumed: &Consumed) -> Option<Grade> {
        self.free_word(i, consumed)
            .and_then(|w| self.scale.parse_token(w))
    }

    pub(crate) fn is_grade_word(&self, i: usize) -> bool {
        self.tokens
            .get(i)
            .is_some_and(|t| t.is_word() && self.scale.parse_token(&t.text).is_some())
    }

    /// Whether a lone grade at `i` closes its clause.
    ///
    /// The next token must be a separator, another grade, the start of a
    /// known subject or a clause opener, or the text must end. Anything
    /// else ("maths a while back") reads the letter as an article.
    pub(crate) fn grade_ends_clause(&self, i: usize) -> bool {
        let next = i + 1;
        match self.tokens.get(next) {
            None => true,
            Some(t) if !t.is_word() => true,
            Some(t) => {
                self.is_grade_word(next)
                    || CLAUSE_OPENERS.contains(&t.text.as_str())
                    || self
                        .canon
                        .subjects()
                        .longest_at(self.tokens, next, |_| true)
                        .is_some()
            }
        }
    }

    /// Longest known subject starting at `i` over free words.
    pub(crate) fn subject_at(&self, i: usize, consumed: &Consumed) -> Option<(String, usize)> {
        self.canon
            .subjects()
            .longest_at(self.tokens, i, |k| !consumed.contains(k))
            .map(|(c, n)| (c.to_string(), n))
    }

    /// Length of an unrecognized subject phrase starting at `i`.
    ///
    /// Up to three free words that are not grades or the connectives "in"
    /// and "is", stopping early where a known subject begins. The phrase
    /// must be followed by a clause boundary, a grade, a known subject, or
    /// the end of text.
    pub(crate) fn unknown_subject_len(&self, i: usize, consumed: &Consumed) -> Option<usize> {
        let mut n = 0;
        while n < 3 {
            let k = i + n;
            let Some(word) = self.free_word(k, consumed) else {
                break;
            };
            if matches!(word, "in" | "is")
                || self.is_grade_word(k)
                || (n > 0 && self.subject_at(k, consumed).is_some())
            {
                break;
            }
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let next = i + n;
        let terminated = match self.tokens.get(next) {
            None => true,
            Some(t) if !t.is_word() => true,
            Some(_) => self.is_grade_word(next) || self.subject_at(next, consumed).is_some(),
        };
        terminated.then_some(n)
    }

    /// Whether the subject ending before `end` carries its own grade, as in
    /// "physics b" or "physics: b".
    fn labels_own_grade(&self, end: usize) -> bool {
        match self.tokens.get(end).map(|t| t.kind) {
            Some(TokenKind::Word) => self.is_grade_word(end) && self.grade_ends_clause(end),
            Some(TokenKind::Colon | TokenKind::Dash) => self.is_grade_word(end + 1),
            _ => false,
        }
    }

    /// Read a list of subjects starting at `start`.
    ///
    /// Items are separated by commas or plain spaces. The first item may be
    /// an unrecognized phrase; later items must be known subjects unless
    /// `open_list` is set. Returns `(canonical, first token, end token)`.
    pub(crate) fn subject_list(
        &self,
        start: usize,
        consumed: &Consumed,
        open_list: bool,
    ) -> Vec<(String, usize, usize)> {
        let mut items: Vec<(String, usize, usize)> = Vec::new();
        let mut i = start;
        loop {
            let mut at = i;
            if !items.is_empty()
                && self
                    .tokens
                    .get(at)
                    .is_some_and(|t| t.kind == TokenKind::Comma)
                && !consumed.contains(at)
            {
                at += 1;
            }
            if let Some((canonical, n)) = self.subject_at(at, consumed) {
                if !items.is_empty() && self.labels_own_grade(at + n) {
                    break;
                }
                items.push((canonical, at, at + n));
                i = at + n;
                continue;
            }
            if items.is_empty() || open_list {
                if let Some(n) = self.unknown_subject_len(at, consumed) {
                    let phrase = crate::canonical::join_words(&self.tokens[at..at + n]);
                    items.push((self.canon.normalize_subject(&phrase), at, at + n));
                    i = at + n;
                    continue;
                }
            }
            break;
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonyms::SynonymTable;

    fn extract(text: &str) -> GradeMap {
        let canon = Canonicalizer::new(&SynonymTable::builtin());
        GradeExtractor::default().extract(text, &canon, GradeScale::Standard)
    }

    #[test]
    fn grade_tokens() {
        assert_eq!(GradeScale::Standard.parse_token("a*"), Some(Grade::AStar));
        assert_eq!(GradeScale::Standard.parse_token("u"), Some(Grade::U));
        assert_eq!(GradeScale::Standard.parse_token("m"), None);
        assert_eq!(GradeScale::Extended.parse_token("d*"), Some(Grade::DStar));
        assert_eq!(GradeScale::Standard.parse_token("d*"), None);
    }

    #[test]
    fn grade_runs() {
        let s = GradeScale::Standard;
        assert_eq!(s.parse_run("aab"), Some(vec![Grade::A, Grade::A, Grade::B]));
        assert_eq!(s.parse_run("a*aa"), Some(vec![Grade::AStar, Grade::A, Grade::A]));
        assert_eq!(s.parse_run("a*a*b"), Some(vec![Grade::AStar, Grade::AStar, Grade::B]));
        assert_eq!(s.parse_run("abx"), None);
        assert_eq!(s.parse_run("be"), None);
        assert_eq!(s.parse_run("*a"), None);
    }

    #[test]
    fn grade_display_and_parse() {
        assert_eq!(Grade::AStar.to_string(), "A*");
        assert_eq!("a*".parse::<Grade>().unwrap(), Grade::AStar);
        assert_eq!(" B ".parse::<Grade>().unwrap(), Grade::B);
        assert!("Z".parse::<Grade>().is_err());
    }

    #[test]
    fn grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::AStar).unwrap(), "\"A*\"");
        let map: GradeMap = [("physics", Grade::B), ("mathematics", Grade::A)]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"physics":"B","mathematics":"A"}"#
        );
    }

    #[test]
    fn grade_map_never_overwrites() {
        let mut map = GradeMap::new();
        assert!(map.insert("physics", Grade::A));
        assert!(!map.insert("physics", Grade::C));
        assert_eq!(map.get("physics"), Some(Grade::A));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn mixed_patterns_in_text_order() {
        let grades = extract("maths: a*, b in physics, chemistry - c");
        let subjects: Vec<&str> = grades.subjects().collect();
        assert_eq!(subjects, vec!["mathematics", "physics", "chemistry"]);
        assert_eq!(grades.get("mathematics"), Some(Grade::AStar));
        assert_eq!(grades.get("physics"), Some(Grade::B));
        assert_eq!(grades.get("chemistry"), Some(Grade::C));
    }

    #[test]
    fn earlier_strategy_wins_subject() {
        // "a in maths" is claimed before the bare pattern sees "maths c".
        let grades = extract("a in maths, maths c");
        assert_eq!(grades.get("mathematics"), Some(Grade::A));
        assert_eq!(grades.len(), 1);
    }

    #[test]
    fn no_grades_in_plain_prose() {
        assert!(extract("i really like maths a lot").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn extended_scale_is_opt_in() {
        let canon = Canonicalizer::new(&SynonymTable::builtin());
        let extractor = GradeExtractor::default();
        assert!(extractor
            .extract("m in business", &canon, GradeScale::Standard)
            .is_empty());
        let grades = extractor.extract("d* in business, m in sport", &canon, GradeScale::Extended);
        assert_eq!(grades.get("business"), Some(Grade::DStar));
    }
}
