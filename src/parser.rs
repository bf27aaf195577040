//! The grade parser: normalization, drop filtering, grade extraction and
//! interest detection combined into one result.
//!
//! ```text
//! raw text ─▶ normalize ─┬─▶ remove_dropped ─▶ extract grades ─┐
//!                        └─▶ find interests ───────────────────┴─▶ ParseResult
//! ```
//!
//! Interests are read from the normalized text before drop filtering, so a
//! dropped subject may still be named as a course of interest.

use std::sync::{Arc, LazyLock};

use rayon::prelude::*;
use serde::Serialize;

use crate::canonical::Canonicalizer;
use crate::config::ParserConfig;
use crate::dropped::DropFilter;
use crate::grades::{GradeExtractor, GradeMap, GradeScale};
use crate::interests::{InterestMatcher, liked_subjects};
use crate::synonyms::SynonymTable;
use crate::text::normalize;

/// Grades and course interests extracted from one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub grades: GradeMap,
    pub interests: Vec<String>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty() && self.interests.is_empty()
    }
}

/// A configured parser. Cheap to share across threads.
pub struct GradeParser {
    table: Arc<SynonymTable>,
    canon: Canonicalizer,
    drops: DropFilter,
    interests: InterestMatcher,
    extractor: GradeExtractor,
    scale: GradeScale,
}

impl GradeParser {
    pub fn new(table: Arc<SynonymTable>) -> Self {
        Self::with_scale(table, GradeScale::default())
    }

    pub fn with_scale(table: Arc<SynonymTable>, scale: GradeScale) -> Self {
        Self {
            canon: Canonicalizer::new(&table),
            drops: DropFilter::new(&table),
            interests: InterestMatcher::new(&table),
            extractor: GradeExtractor::default(),
            scale,
            table,
        }
    }

    /// Parser over the built-in synonym table.
    pub fn builtin() -> Self {
        Self::new(Arc::new(SynonymTable::builtin()))
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::with_scale(Arc::new(config.synonym_table()), config.grade_scale)
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    pub fn scale(&self) -> GradeScale {
        self.scale
    }

    /// Grade patterns in the order they are tried.
    pub fn strategies(&self) -> Vec<&'static str> {
        self.extractor.strategy_names()
    }

    pub fn normalize_subject(&self, text: &str) -> String {
        self.canon.normalize_subject(text)
    }

    pub fn normalize_course(&self, text: &str) -> String {
        self.canon.normalize_course(text)
    }

    /// Strip dropped-subject clauses from already normalized text.
    pub fn remove_dropped(&self, text: &str) -> String {
        self.drops.remove_dropped(text, &self.canon)
    }

    /// Grades in already normalized, drop-filtered text.
    pub fn extract_grades(&self, text: &str) -> GradeMap {
        self.extractor.extract(text, &self.canon, self.scale)
    }

    /// Courses of interest in already normalized text, before reconciling
    /// with grades.
    pub fn find_interest(&self, text: &str) -> Vec<String> {
        self.interests.find(text).courses
    }

    /// Parse one free-text statement.
    ///
    /// Never fails: text with nothing recognizable yields an empty result.
    pub fn parse(&self, text: &str) -> ParseResult {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return ParseResult::default();
        }

        let filtered = self.remove_dropped(&normalized);
        let grades = self.extract_grades(&filtered);

        let report = self.interests.find(&normalized);
        let explicit = report.explicit;
        let liked = if explicit {
            Default::default()
        } else {
            liked_subjects(&normalized, &self.canon)
        };
        // A graded subject only counts as an interest when the student said
        // so explicitly or named it after like/love/enjoy.
        let interests: Vec<String> = report
            .courses
            .into_iter()
            .filter(|course| explicit || !grades.contains_key(course) || liked.contains(course))
            .collect();

        tracing::debug!(
            grades = grades.len(),
            interests = interests.len(),
            explicit,
            "parsed statement"
        );
        ParseResult { grades, interests }
    }

    /// Parse many statements in parallel. Output order matches input order.
    pub fn parse_batch<S>(&self, inputs: &[S]) -> Vec<ParseResult>
    where
        S: AsRef<str> + Sync,
    {
        inputs.par_iter().map(|text| self.parse(text.as_ref())).collect()
    }
}

impl Default for GradeParser {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN_PARSER: LazyLock<GradeParser> = LazyLock::new(GradeParser::builtin);

/// Parse with the built-in synonym table and standard grade scale.
pub fn parse(text: &str) -> ParseResult {
    BUILTIN_PARSER.parse(text)
}
