// ============================================================================
// Quiz Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Batch Generation - End-to-end batches across domain mixes
// 2. Style Comparison - Expression vs multiple-choice (distractor cost)
// 3. Grading - Submission checking per domain
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quiz_engine::prelude::*;
use std::hint::black_box;

// ============================================================================
// Batch Generation Benchmarks
// ============================================================================

fn benchmark_batch_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_generation");

    for count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("integer_only", count),
            count,
            |b, &count| {
                let config = QuizConfig::easy_arithmetic(count);
                let mut engine = QuizEngine::seeded(1);
                b.iter(|| black_box(engine.generate_batch(&config)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("all_domains", count),
            count,
            |b, &count| {
                let config = QuizConfig::hard_mixed_choice(count);
                let mut engine = QuizEngine::seeded(2);
                b.iter(|| black_box(engine.generate_batch(&config)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Style Comparison Benchmarks
// Distractor construction is the only extra work in multiple-choice
// ============================================================================

fn benchmark_question_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("question_styles");

    let base = QuizConfig::new(100, Difficulty::Hard)
        .with_operators(vec![
            Operator::Addition,
            Operator::Subtraction,
            Operator::Multiplication,
            Operator::Division,
        ])
        .with_domains(vec![
            NumberDomain::Integer,
            NumberDomain::Decimal,
            NumberDomain::Fraction,
            NumberDomain::Currency,
            NumberDomain::Clock,
        ]);

    for style in [QuestionStyle::Expression, QuestionStyle::MultipleChoice] {
        let config = base.clone().with_style(style);
        group.bench_with_input(
            BenchmarkId::from_parameter(style),
            &config,
            |b, config| {
                let mut engine = QuizEngine::seeded(3);
                b.iter(|| black_box(engine.generate_batch(config)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Grading Benchmarks
// ============================================================================

fn benchmark_grading(c: &mut Criterion) {
    let mut group = c.benchmark_group("grading");

    let cases: Vec<(&str, QuizConfig)> = vec![
        ("integer", QuizConfig::easy_arithmetic(100)),
        (
            "fraction",
            QuizConfig::new(100, Difficulty::Hard)
                .with_domains(vec![NumberDomain::Fraction]),
        ),
        (
            "currency",
            QuizConfig::new(100, Difficulty::Hard)
                .with_domains(vec![NumberDomain::Currency]),
        ),
        (
            "clock",
            QuizConfig::new(100, Difficulty::Hard).with_domains(vec![NumberDomain::Clock]),
        ),
    ];

    for (name, config) in cases {
        let questions = QuizEngine::seeded(4).generate_batch(&config);
        let submissions: Vec<String> =
            questions.iter().map(|q| q.display_answer()).collect();

        group.bench_function(name, |b| {
            b.iter(|| {
                for (question, submission) in questions.iter().zip(&submissions) {
                    black_box(check_submission(&question.answer, submission));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_batch_generation,
    benchmark_question_styles,
    benchmark_grading
);
criterion_main!(benches);
