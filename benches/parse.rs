//! Benchmarks for statement parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use coursefinder_nlp::GradeParser;
use coursefinder_nlp::text::normalize;

const STATEMENTS: &[&str] = &[
    "I got A in maths, B in physics and dropped chemistry, and im interested in med",
    "Maths: A*, Physics - B, Chem C",
    "My grades are ABB in Maths, Physics and Chemistry. I want to apply for engineering and computer science.",
    "Please help me decide as I like Maths and want to do Engineering. I got A in Math Chem and Bio.",
    "My grade in geography is D, and in history is C",
];

fn bench_build(c: &mut Criterion) {
    c.bench_function("parser_build_builtin", |bench| {
        bench.iter(|| black_box(GradeParser::builtin()))
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |bench| {
        bench.iter(|| {
            for text in STATEMENTS {
                black_box(normalize(text));
            }
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let parser = GradeParser::builtin();
    c.bench_function("parse_5_statements", |bench| {
        bench.iter(|| {
            for text in STATEMENTS {
                black_box(parser.parse(text));
            }
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let parser = GradeParser::builtin();
    let inputs: Vec<&str> = STATEMENTS.iter().copied().cycle().take(500).collect();
    c.bench_function("parse_batch_500", |bench| {
        bench.iter(|| black_box(parser.parse_batch(&inputs)))
    });
}

criterion_group!(benches, bench_build, bench_normalize, bench_parse, bench_batch);
criterion_main!(benches);
