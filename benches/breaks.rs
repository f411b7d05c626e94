use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unitext::{case_map, grapheme_breaks, word_breaks, CaseMapOptions, Casing};

const TEXT: &str = "The quick (\"brown\") fox can't jump 32.3 feet, right? \
    \u{039F}\u{0394}\u{03A5}\u{03A3}\u{03A3}\u{0395}\u{03A5}\u{03A3} \
    \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F1E9}\u{1F1EA} \
    \u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947} stra\u{00DF}e\r\n";

fn text() -> String {
    TEXT.repeat(64)
}

fn breaks(c: &mut Criterion) {
    let text = text();
    c.bench_function("grapheme_breaks_utf8", |bench| {
        bench.iter(|| grapheme_breaks(black_box(text.as_bytes())));
    });
    c.bench_function("word_breaks_utf8", |bench| {
        bench.iter(|| word_breaks(black_box(text.as_bytes())));
    });
    let utf16: Vec<u16> = text.encode_utf16().collect();
    c.bench_function("word_breaks_utf16", |bench| {
        bench.iter(|| word_breaks(black_box(&utf16[..])));
    });
}

fn case_mapping(c: &mut Criterion) {
    let text = text();
    let options = CaseMapOptions::new();
    c.bench_function("to_lowercase_utf8", |bench| {
        bench.iter(|| case_map(black_box(text.as_bytes()), &Casing::LOWER, &options).unwrap());
    });
    c.bench_function("to_uppercase_utf8", |bench| {
        bench.iter(|| case_map(black_box(text.as_bytes()), &Casing::UPPER, &options).unwrap());
    });
}

criterion_group!(benches, breaks, case_mapping);
criterion_main!(benches);
