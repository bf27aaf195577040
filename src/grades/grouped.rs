//! Grouped grades: a run of grade letters followed by a subject list.
//!
//! `aab in maths, cs, physics` pairs grades with subjects positionally.
//! When there are more subjects than grades, the surplus subjects take the
//! last grade; surplus grades are ignored.

use super::{Consumed, Context, Extraction, Pair, Strategy};

#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedGrades;

impl Strategy for GroupedGrades {
    fn name(&self) -> &'static str {
        "grouped"
    }

    fn extract(&self, cx: &Context<'_>, consumed: &Consumed) -> Vec<Extraction> {
        let mut out = Vec::new();
        let mut i = 0;

        while i < cx.tokens.len() {
            let run = cx
                .free_word(i, consumed)
                .and_then(|w| cx.scale.parse_run(w))
                .filter(|grades| grades.len() >= 2);
            let Some(run) = run else {
                i += 1;
                continue;
            };
            if cx.free_word(i + 1, consumed) != Some("in") {
                i += 1;
                continue;
            }

            let items = cx.subject_list(i + 2, consumed, true);
            let Some(end) = items.last().map(|(_, _, end)| *end) else {
                i += 1;
                continue;
            };

            let last = run.len() - 1;
            let pairs = items
                .into_iter()
                .enumerate()
                .map(|(k, (subject, position, _))| Pair {
                    subject,
                    grade: run[k.min(last)],
                    position,
                })
                .collect();
            out.push(Extraction {
                pairs,
                span: i..end,
            });
            i = end;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::Canonicalizer;
    use crate::grades::{Grade, GradeScale};
    use crate::synonyms::SynonymTable;
    use crate::text::tokenize;

    fn run(text: &str) -> Vec<(String, Grade)> {
        let canon = Canonicalizer::new(&SynonymTable::builtin());
        let tokens = tokenize(text);
        let cx = Context {
            tokens: &tokens,
            canon: &canon,
            scale: GradeScale::Standard,
        };
        GroupedGrades
            .extract(&cx, &Consumed::default())
            .into_iter()
            .flat_map(|e| e.pairs)
            .map(|p| (p.subject, p.grade))
            .collect()
    }

    fn pairs(expected: &[(&str, Grade)]) -> Vec<(String, Grade)> {
        expected.iter().map(|(s, g)| (s.to_string(), *g)).collect()
    }

    #[test]
    fn positional_pairing() {
        assert_eq!(
            run("my grades are aab in maths, cs, physics"),
            pairs(&[
                ("mathematics", Grade::A),
                ("computer science", Grade::A),
                ("physics", Grade::B),
            ])
        );
    }

    #[test]
    fn surplus_subjects_take_last_grade() {
        assert_eq!(
            run("ab in maths, physics, chemistry"),
            pairs(&[
                ("mathematics", Grade::A),
                ("physics", Grade::B),
                ("chemistry", Grade::B),
            ])
        );
    }

    #[test]
    fn star_grades_and_space_separated_subjects() {
        assert_eq!(
            run("a*aa in maths physics, biology"),
            pairs(&[
                ("mathematics", Grade::AStar),
                ("physics", Grade::A),
                ("biology", Grade::A),
            ])
        );
    }

    #[test]
    fn unknown_subjects_pass_through() {
        assert_eq!(
            run("abb in english, history, geography, looking to apply for law"),
            pairs(&[
                ("english", Grade::A),
                ("history", Grade::B),
                ("geography", Grade::B),
            ])
        );
    }

    #[test]
    fn single_grade_is_not_grouped() {
        assert!(run("a in maths").is_empty());
        assert!(run("to be in medicine").is_empty());
    }
}
