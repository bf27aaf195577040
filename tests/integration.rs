//! End-to-end tests for statement parsing.
//!
//! These run realistic student statements through the full pipeline:
//! normalization, drop filtering, grade extraction and interest detection,
//! and check the combined result.

use std::sync::Arc;

use coursefinder_nlp::synonyms::{CatalogProvider, load_table};
use coursefinder_nlp::{Grade, GradeParser, ParseResult, ParserConfig, parse};

fn grades(result: &ParseResult) -> Vec<(&str, Grade)> {
    let mut pairs: Vec<_> = result.grades.iter().collect();
    pairs.sort();
    pairs
}

fn expect_grades(text: &str, expected: &[(&str, Grade)]) {
    let result = parse(text);
    let mut expected = expected.to_vec();
    expected.sort();
    assert_eq!(grades(&result), expected, "statement: {text}");
}

fn expect_interests(text: &str, expected: &[&str]) {
    let result = parse(text);
    let mut actual = result.interests.clone();
    actual.sort();
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(actual, expected, "statement: {text}");
}

// ---------------------------------------------------------------------------
// Grades
// ---------------------------------------------------------------------------

#[test]
fn grades_then_interests_with_drop() {
    let text = "I got A in maths, B in physics and dropped chemistry, and im interested in med";
    expect_grades(text, &[("mathematics", Grade::A), ("physics", Grade::B)]);
    expect_interests(text, &["medicine"]);
}

#[test]
fn mixed_separators() {
    expect_grades(
        "Maths: A*, Physics - B, Chem C",
        &[
            ("mathematics", Grade::AStar),
            ("physics", Grade::B),
            ("chemistry", Grade::C),
        ],
    );
}

#[test]
fn grouped_grades() {
    expect_grades(
        "My grades are AAB in maths, CS, physics",
        &[
            ("mathematics", Grade::A),
            ("computer science", Grade::A),
            ("physics", Grade::B),
        ],
    );
    expect_grades(
        "I got AAA in physics, maths and CS",
        &[
            ("physics", Grade::A),
            ("mathematics", Grade::A),
            ("computer science", Grade::A),
        ],
    );
    expect_grades(
        "My predicted grades are A*AA in maths physics and biology",
        &[
            ("mathematics", Grade::AStar),
            ("physics", Grade::A),
            ("biology", Grade::A),
        ],
    );
}

#[test]
fn grouped_grades_repeat_last_for_extra_subjects() {
    expect_grades(
        "AB in maths, physics, chemistry",
        &[
            ("mathematics", Grade::A),
            ("physics", Grade::B),
            ("chemistry", Grade::B),
        ],
    );
}

#[test]
fn newline_separated_grades() {
    expect_grades(
        "A in Maths\nB in Physics\nC in Chemistry",
        &[
            ("mathematics", Grade::A),
            ("physics", Grade::B),
            ("chemistry", Grade::C),
        ],
    );
}

#[test]
fn uppercase_and_lowercase_mix() {
    expect_grades(
        "got a in maths, b in physics, C IN CHEMISTRY",
        &[
            ("mathematics", Grade::A),
            ("physics", Grade::B),
            ("chemistry", Grade::C),
        ],
    );
}

#[test]
fn low_grades_and_arts() {
    expect_grades(
        "I got D in Art, E in Music and U in Drama",
        &[("art", Grade::D), ("music", Grade::E), ("drama", Grade::U)],
    );
    expect_grades(
        "I got A in Arts B in maths and A in chemistry. Which course and uni is best for me?",
        &[
            ("art", Grade::A),
            ("mathematics", Grade::B),
            ("chemistry", Grade::A),
        ],
    );
}

#[test]
fn abbreviations() {
    expect_grades(
        "Achieved A* in FM, received B in CS",
        &[("further mathematics", Grade::AStar), ("computer science", Grade::B)],
    );
}

#[test]
fn in_subject_is_grade() {
    expect_grades(
        "My grade in geography is D, and in history is C",
        &[("geography", Grade::D), ("history", Grade::C)],
    );
    expect_grades(
        "My grade in math is A, physics B, chemistry A",
        &[
            ("mathematics", Grade::A),
            ("physics", Grade::B),
            ("chemistry", Grade::A),
        ],
    );
}

#[test]
fn bare_pairs_with_extra_spaces() {
    let text = "Maths   A  Biology  B  Chemistry  A   Interested in    medicine";
    expect_grades(
        text,
        &[
            ("mathematics", Grade::A),
            ("biology", Grade::B),
            ("chemistry", Grade::A),
        ],
    );
    expect_interests(text, &["medicine"]);
}

#[test]
fn dropped_subjects_never_graded() {
    let text = "Retook psychology, got A in english literature, B in media studies";
    let result = parse(text);
    assert!(!result.grades.contains_key("psychology"));
    expect_grades(
        text,
        &[("english literature", Grade::A), ("media studies", Grade::B)],
    );

    let result = parse("I dropped music and drama, but got A in English");
    assert!(!result.grades.contains_key("music"));
    assert!(!result.grades.contains_key("drama"));
    assert_eq!(result.grades.get("english"), Some(Grade::A));
}

#[test]
fn article_after_subject_is_not_a_grade() {
    expect_grades(
        "I did chemistry a long time ago, got B in physics",
        &[("physics", Grade::B)],
    );
    expect_grades("took maths a while back", &[]);
    expect_grades("A in maths and I did it a while ago", &[("mathematics", Grade::A)]);
    expect_grades("physics a subject i love", &[]);
}

#[test]
fn unknown_subject_passes_through() {
    expect_grades(
        "I achieved ABB in English, history and geography, looking to apply for law",
        &[
            ("english", Grade::A),
            ("history", Grade::B),
            ("geography", Grade::B),
        ],
    );
}

// ---------------------------------------------------------------------------
// Interests
// ---------------------------------------------------------------------------

#[test]
fn interest_only_statements() {
    expect_interests("I'm interested in medicine", &["medicine"]);
    expect_interests("I want to apply for law", &["law"]);
    expect_interests("Looking for economics", &["economics"]);
    expect_interests("Curious about psychology", &["psychology"]);
    expect_interests("Hoping to study English literature", &["english literature"]);
}

#[test]
fn several_interests() {
    expect_interests(
        "Got A in Bio and B in Chem, interested in medicine and pharmacy",
        &["medicine", "pharmacy"],
    );
    expect_interests(
        "I would like to study international relations or economics.",
        &["international relations", "economics"],
    );
    expect_interests(
        "My grades are ABB in Maths, Physics and Chemistry. I want to apply for engineering and computer science.",
        &["engineering", "computer science"],
    );
}

#[test]
fn interest_after_grades() {
    expect_interests(
        "A* in Maths, A in Physics, B in Chemistry, interested in engineering",
        &["engineering"],
    );
    expect_interests(
        "Maths A Physics B Biology A. Planning to study biomedical engineering.",
        &["biomedical engineering"],
    );
    expect_interests(
        "I expect to get A* in Further Maths, B in Chemistry and C in Bio. I want to pursue Drama in my uni.",
        &["drama"],
    );
}

#[test]
fn fallback_scan_without_interest_phrase() {
    expect_interests("Got AAA in Bio, Chem, Physics. I want to do medicine", &["medicine"]);
    expect_interests(
        "scored A in Bio, B in English Lit and hoping to do medicine",
        &["medicine"],
    );
    expect_interests(
        "I have A* in biology and I would love to pursue a career in music",
        &["music"],
    );
}

#[test]
fn liked_subject_survives_grade() {
    let text = "Please help me decide as I like Maths and want to do Engineering. I got A in Math Chem and Bio.";
    expect_grades(
        text,
        &[
            ("mathematics", Grade::A),
            ("chemistry", Grade::A),
            ("biology", Grade::A),
        ],
    );
    expect_interests(text, &["mathematics", "engineering"]);
}

#[test]
fn nothing_to_find() {
    assert_eq!(parse(""), ParseResult::default());
    assert_eq!(parse("hello there"), ParseResult::default());
}

// ---------------------------------------------------------------------------
// Configuration and catalogs
// ---------------------------------------------------------------------------

#[test]
fn catalog_course_becomes_interest() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "courses = [\"Viticulture BSc (Hons)\"]\n").unwrap();

    let table = load_table(&CatalogProvider::new(&path));
    let parser = GradeParser::new(Arc::new(table));
    let result = parser.parse("A in chemistry, interested in viticulture");
    assert_eq!(result.grades.get("chemistry"), Some(Grade::A));
    assert_eq!(result.interests, vec!["viticulture"]);
}

#[test]
fn config_file_drives_parser() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("catalog.toml"),
        "subjects = [\"Esports\"]\n",
    )
    .unwrap();
    let config_path = dir.path().join("parser.toml");
    std::fs::write(
        &config_path,
        "grade_scale = \"extended\"\ncatalog = \"catalog.toml\"\n",
    )
    .unwrap();

    let config = ParserConfig::load(&config_path).unwrap();
    let parser = GradeParser::from_config(&config);
    let result = parser.parse("D* in business, esports m");
    assert_eq!(result.grades.get("business"), Some(Grade::DStar));
    assert_eq!(result.grades.get("esports"), Some(Grade::M));
}

#[test]
fn batch_matches_sequential() {
    let parser = GradeParser::builtin();
    let inputs: Vec<String> = [
        "A in maths",
        "Maths: A*, Physics - B",
        "dropped chemistry",
        "interested in law",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let batch = parser.parse_batch(&inputs);
    let sequential: Vec<ParseResult> = inputs.iter().map(|s| parser.parse(s)).collect();
    assert_eq!(batch, sequential);
}
