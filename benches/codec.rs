use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use markup_entities::{
    escape, unescape, unescape_strict, Charset, EscapeOptions, EscapeTier, ReferenceTable,
};

const PLAIN: &str = "The quick brown fox jumps over the lazy dog. ";
const MIXED: &str = "Café <b>naïve</b> & \"quoted\" — α≠β © 2024 😀 ";

fn benchmark_table_lookup(c: &mut Criterion) {
    let table = ReferenceTable::global();

    c.bench_function("name_to_char", |b| {
        b.iter(|| table.name_to_char(black_box("CounterClockwiseContourIntegral")))
    });

    c.bench_function("char_to_name_extended", |b| {
        b.iter(|| table.char_to_name(black_box('∮'), EscapeTier::Extended))
    });
}

fn benchmark_escape_plain(c: &mut Criterion) {
    let text = PLAIN.repeat(100);
    let options = EscapeOptions::new();

    c.bench_function("escape_plain_borrowed", |b| {
        b.iter(|| escape(black_box(&text), &options))
    });
}

fn benchmark_escape_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_tiers");
    let text = MIXED.repeat(100);

    for tier in EscapeTier::ALL {
        let options = EscapeOptions::new()
            .with_tier(tier)
            .with_charset(Charset::Ascii);
        group.bench_with_input(BenchmarkId::from_parameter(tier), &options, |b, options| {
            b.iter(|| escape(black_box(&text), options))
        });
    }
    group.finish();
}

fn benchmark_unescape(c: &mut Criterion) {
    let mut group = c.benchmark_group("unescape");

    for size in [10, 100, 1000].iter() {
        let options = EscapeOptions::extended().with_charset(Charset::Ascii);
        let escaped = escape(&MIXED.repeat(*size), &options).into_owned();

        group.bench_with_input(BenchmarkId::new("lenient", size), &escaped, |b, text| {
            b.iter(|| unescape(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("strict", size), &escaped, |b, text| {
            b.iter(|| unescape_strict(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_unescape_malformed(c: &mut Criterion) {
    let text = "AT&T &copy2024 &#99999999; &unknown; &#x; &notit; ".repeat(100);

    c.bench_function("unescape_malformed", |b| {
        b.iter(|| unescape(black_box(&text)))
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = MIXED.repeat(10);
    let options = EscapeOptions::new().with_charset(Charset::Latin1);

    c.bench_function("roundtrip_base_latin1", |b| {
        b.iter(|| {
            let escaped = escape(black_box(&text), &options);
            let _unescaped = unescape(black_box(&escaped)).into_owned();
        })
    });
}

criterion_group!(
    benches,
    benchmark_table_lookup,
    benchmark_escape_plain,
    benchmark_escape_tiers,
    benchmark_unescape,
    benchmark_unescape_malformed,
    benchmark_roundtrip
);
criterion_main!(benches);
