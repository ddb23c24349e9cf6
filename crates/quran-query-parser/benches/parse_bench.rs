use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quran_query_parser::*;

fn bench_parse_simple(c: &mut Criterion) {
    let parser = QueryParser::default();

    c.bench_function("parse_single_word", |b| {
        b.iter(|| parser.parse(black_box("الرحمن")));
    });

    c.bench_function("parse_two_words", |b| {
        b.iter(|| parser.parse(black_box("الحمد لله")));
    });

    c.bench_function("parse_phrase", |b| {
        b.iter(|| parser.parse(black_box(r#""بسم الله الرحمن الرحيم""#)));
    });
}

fn bench_parse_complex(c: &mut Criterion) {
    let parser = QueryParser::default();

    c.bench_function("parse_complex_mixed", |b| {
        b.iter(|| parser.parse(black_box(r#"standard:"بسم" "الله" -الرحيم uthmani:رب"#)));
    });

    c.bench_function("parse_unterminated_phrase", |b| {
        b.iter(|| parser.parse(black_box(r#"رب "العالمين الرحمن الرحيم"#)));
    });

    c.bench_function("parse_many_exclusions", |b| {
        b.iter(|| parser.parse(black_box("الله -رب -الرحمن -الرحيم -مالك -يوم -الدين")));
    });
}

fn bench_parse_realistic_queries(c: &mut Criterion) {
    let parser = QueryParser::default();

    let queries = vec![
        "الله",
        "رحمن",
        "الحمد لله",
        r#""رب العالمين""#,
        "الرحمن -الرحيم",
        "standard:الله",
        r#"standard:"بسم" "الله""#,
        "uthmani:ٱلْحَمْدُ",
        "nosuchfield:",
        r#"مالك "يوم الدين" -standard:نعبد"#,
    ];

    let mut group = c.benchmark_group("realistic_queries");
    for query in queries.iter() {
        group.throughput(Throughput::Bytes(query.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| parser.parse(black_box(q)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_complex,
    bench_parse_realistic_queries
);
criterion_main!(benches);
