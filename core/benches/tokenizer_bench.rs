use core::tokenizer::Analyzer;
use criterion::{criterion_group, criterion_main, Criterion};

static POEM: &str = "The rose that blooms in the walled garden at dawn, \
heavy with rain and the memory of summer storms, \
leans toward the sea where gulls wheel over the breakwater \
and the tide drags its slow hem across the sand.";

fn bench_tokenize(c: &mut Criterion) {
    let analyzer = Analyzer::default();
    let text = POEM.repeat(64);
    c.bench_function("tokenize_poem", |b| b.iter(|| analyzer.tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
