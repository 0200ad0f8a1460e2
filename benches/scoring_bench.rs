use cipherforge::mapping::Mapping;
use cipherforge::model::NgramModel;
use cipherforge::scorer::{NgramWeights, Scorer};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const PARAGRAPH: &str = "It is a truth universally acknowledged, that a single man in \
possession of a good fortune, must be in want of a wife. However little known the \
feelings or views of such a man may be on his first entering a neighbourhood, this \
truth is so well fixed in the minds of the surrounding families, that he is considered \
as the rightful property of some one or other of their daughters.";

fn criterion_benchmark(c: &mut Criterion) {
    let reference = Scorer::new(Arc::new(NgramModel::reference()), NgramWeights::default());
    c.bench_function("score (reference model)", |b| {
        b.iter(|| reference.score(black_box(PARAGRAPH)))
    });

    let corpus_model =
        Arc::new(NgramModel::from_corpus(PARAGRAPH, &[2, 3, 4, 5]).expect("model build"));
    let corpus = Scorer::new(corpus_model, NgramWeights::default());
    c.bench_function("score (corpus model)", |b| {
        b.iter(|| corpus.score(black_box(PARAGRAPH)))
    });

    let mapping = Mapping::frequency_seed(PARAGRAPH);
    c.bench_function("apply mapping", |b| {
        b.iter(|| mapping.apply(black_box(PARAGRAPH)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
