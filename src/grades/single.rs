//! Single-grade patterns, in priority order:
//!
//! 1. [`GradeInSubject`]: `(got) a in maths` or `a in maths, physics`
//! 2. [`LabelledGrade`]: `maths: a` or `physics - b`
//! 3. [`SubjectGrade`]: `chem c` (known subjects only)
//! 4. [`InSubjectIsGrade`]: `my grade in geography is d`

use super::{Consumed, Context, Extraction, GRADE_VERBS, Pair, Strategy};
use crate::canonical::join_words;
use crate::text::TokenKind;

/// Longest unrecognized subject phrase accepted before a label separator
/// or between "in" and "is".
const MAX_UNKNOWN_WORDS: usize = 3;

// ── GRADE in SUBJECT ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct GradeInSubject;

impl Strategy for GradeInSubject {
    fn name(&self) -> &'static str {
        "grade-in-subject"
    }

    fn extract(&self, cx: &Context<'_>, consumed: &Consumed) -> Vec<Extraction> {
        let mut out = Vec::new();
        let mut i = 0;

        while i < cx.tokens.len() {
            let Some(grade) = cx.grade_at(i, consumed) else {
                i += 1;
                continue;
            };
            if cx.free_word(i + 1, consumed) != Some("in") {
                i += 1;
                continue;
            }
            let items = cx.subject_list(i + 2, consumed, false);
            let Some(end) = items.last().map(|(_, _, end)| *end) else {
                i += 1;
                continue;
            };

            let start = match i.checked_sub(1).and_then(|p| cx.free_word(p, consumed)) {
                Some(verb) if GRADE_VERBS.contains(&verb) => i - 1,
                _ => i,
            };
            let pairs = items
                .into_iter()
                .map(|(subject, position, _)| Pair {
                    subject,
                    grade,
                    position,
                })
                .collect();
            out.push(Extraction {
                pairs,
                span: start..end,
            });
            i = end;
        }

        out
    }
}

// ── SUBJECT : GRADE ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct LabelledGrade;

impl Strategy for LabelledGrade {
    fn name(&self) -> &'static str {
        "labelled"
    }

    fn extract(&self, cx: &Context<'_>, consumed: &Consumed) -> Vec<Extraction> {
        let mut out = Vec::new();
        let mut floor = 0;

        for (i, token) in cx.tokens.iter().enumerate() {
            if !matches!(token.kind, TokenKind::Colon | TokenKind::Dash) || consumed.contains(i) {
                continue;
            }
            let Some(grade) = cx.grade_at(i + 1, consumed) else {
                continue;
            };
            if !cx.grade_ends_clause(i + 1) {
                continue;
            }

            let usable = |k: usize| k >= floor && !consumed.contains(k);
            let subject = match cx.canon.subjects().longest_ending(cx.tokens, i, usable) {
                Some((canonical, start)) => Some((canonical.to_string(), start)),
                None => {
                    let words = (floor..i)
                        .rev()
                        .take_while(|&k| cx.free_word(k, consumed).is_some())
                        .count();
                    let take = if words <= MAX_UNKNOWN_WORDS { words } else { 1 };
                    (take > 0).then(|| {
                        let start = i - take;
                        (
                            cx.canon.normalize_subject(&join_words(&cx.tokens[start..i])),
                            start,
                        )
                    })
                }
            };
            let Some((subject, start)) = subject else {
                continue;
            };

            out.push(Extraction {
                pairs: vec![Pair {
                    subject,
                    grade,
                    position: start,
                }],
                span: start..i + 2,
            });
            floor = i + 2;
        }

        out
    }
}

// ── SUBJECT GRADE ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectGrade;

impl Strategy for SubjectGrade {
    fn name(&self) -> &'static str {
        "subject-grade"
    }

    fn extract(&self, cx: &Context<'_>, consumed: &Consumed) -> Vec<Extraction> {
        let mut out = Vec::new();
        let mut floor = 0;

        for i in 1..cx.tokens.len() {
            let Some(grade) = cx.grade_at(i, consumed) else {
                continue;
            };
            if !cx.grade_ends_clause(i) {
                continue;
            }
            let usable = |k: usize| k >= floor && !consumed.contains(k);
            let Some((subject, start)) = cx.canon.subjects().longest_ending(cx.tokens, i, usable)
            else {
                continue;
            };

            out.push(Extraction {
                pairs: vec![Pair {
                    subject: subject.to_string(),
                    grade,
                    position: start,
                }],
                span: start..i + 1,
            });
            floor = i + 1;
        }

        out
    }
}

// ── in SUBJECT is GRADE ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct InSubjectIsGrade;

impl Strategy for InSubjectIsGrade {
    fn name(&self) -> &'static str {
        "in-subject-is-grade"
    }

    fn extract(&self, cx: &Context<'_>, consumed: &Consumed) -> Vec<Extraction> {
        let mut out = Vec::new();
        let mut i = 0;

        while i < cx.tokens.len() {
            if cx.free_word(i, consumed) != Some("in") {
                i += 1;
                continue;
            }
            let first = i + 1;
            let limit = first + MAX_UNKNOWN_WORDS + 2;
            let mut is_at = first;
            while is_at < limit {
                match cx.free_word(is_at, consumed) {
                    Some("is") | None => break,
                    Some(_) => is_at += 1,
                }
            }
            let grade = match cx.grade_at(is_at + 1, consumed) {
                Some(grade)
                    if is_at > first
                        && cx.free_word(is_at, consumed) == Some("is")
                        && cx.grade_ends_clause(is_at + 1) =>
                {
                    grade
                }
                _ => {
                    i += 1;
                    continue;
                }
            };

            let phrase = join_words(&cx.tokens[first..is_at]);
            let subject = match cx.canon.subjects().resolve(&phrase) {
                Some(canonical) => canonical.to_string(),
                None if is_at - first <= MAX_UNKNOWN_WORDS => cx.canon.normalize_subject(&phrase),
                None => {
                    i += 1;
                    continue;
                }
            };

            let mut start = i;
            if let Some(word) = start.checked_sub(1).and_then(|p| cx.free_word(p, consumed)) {
                if matches!(word, "grade" | "grades") {
                    start -= 1;
                    if start > 0 && cx.free_word(start - 1, consumed) == Some("my") {
                        start -= 1;
                    }
                }
            }

            out.push(Extraction {
                pairs: vec![Pair {
                    subject,
                    grade,
                    position: first,
                }],
                span: start..is_at + 2,
            });
            i = is_at + 2;
        }

        out
    }
}
