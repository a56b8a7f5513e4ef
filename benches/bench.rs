//! Criterion benchmarks for the sentiment tokenizer.
//!
//! Covers single-document tokenization with and without stemming, the Porter
//! stemmer on its own, and parallel batch tokenization.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sentitok::analysis::token_filter::{PorterStemmer, Stemmer};
use sentitok::tokenizer::SentimentTokenizer;
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "The",
        "company",
        "reported",
        "strong",
        "earnings,",
        "and",
        "shares",
        "rallied",
        "sharply.",
        "Analysts",
        "don't",
        "expect",
        "losses",
        "in",
        "the",
        "coming",
        "quarters;",
        "however",
        "margins",
        "were",
        "weaker",
        "than",
        "forecast!",
        "(unaudited)",
        "revenue",
        "increased",
        "by",
        "12%",
        "year-over-year",
        "--",
        "\"outstanding\"",
        "guidance",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark single-document tokenization.
fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let tokenizer = SentimentTokenizer::new().unwrap();
    let texts = generate_test_documents(1000);

    group.bench_function("tokenize_single_document", |b| {
        b.iter(|| {
            let result = tokenizer.tokenize_with(black_box(&texts[0]), false);
            black_box(result)
        })
    });

    group.bench_function("tokenize_single_document_stemmed", |b| {
        b.iter(|| {
            let result = tokenizer.tokenize_with(black_box(&texts[0]), true);
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("tokenize_batch_sequential", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let result = tokenizer.tokenize_with(black_box(text), true);
                let _ = black_box(result);
            }
        })
    });

    group.bench_function("tokenize_batch_parallel", |b| {
        b.iter(|| {
            let result = tokenizer.tokenize_batch(black_box(&texts[..100]), true);
            let _ = black_box(result);
        })
    });

    group.finish();
}

/// Benchmark the Porter stemmer on its own.
fn bench_stemmer(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemmer");

    let stemmer = PorterStemmer::new();
    let words = [
        "relational",
        "conditional",
        "generalizations",
        "oscillators",
        "hopefulness",
        "rallied",
        "jumping",
    ];

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("porter_stem_words", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer.stem(black_box(word)).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_stemmer);
criterion_main!(benches);
