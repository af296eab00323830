//! Criterion benchmarks for nlprep.
//!
//! This module contains benchmarks for the main building blocks:
//! - Document creation and tokenization
//! - Token-level property filters and their negation
//! - Document frequency statistics
//! - The staged topic-modeling pipeline

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use nlprep::filter::{document_frequencies, props_by_document_frequency};
use nlprep::nlp::{LanguageToolkit, ParseCache, ParsedDocument, ParsedToken, ToolkitTokenizer};
use nlprep::pipeline::{apply_filters, apply_poc_topic_modeling, tokenize_documents};
use nlprep::prelude::*;

const WORDS: &[&str] = &[
    "der", "die", "das", "und", "oder", "Schule", "Lehrer", "Klasse", "Mathematik", "Bruch",
    "Zahl", "Geometrie", "Dreieck", "Kreis", "Fläche", "Volumen", "Aufgabe", "Lösung", "Beispiel",
    "Übung", "Arbeitsblatt", "Video", "Thema", ".", ",",
];

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 20 + (i % 60);
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
            .collect();
        documents.push(doc_words.join(" "));
    }
    documents
}

/// Tags by word list only, to keep the toolkit out of the measurements.
struct ListToolkit;

impl ListToolkit {
    fn analyze(words: &[String]) -> ParsedDocument {
        ParsedDocument::single_sentence(
            words
                .iter()
                .map(|word| {
                    let (upos, is_stop) = match word.as_str() {
                        "." | "," => (Upos::Punct, false),
                        "der" | "die" | "das" => (Upos::Det, true),
                        "und" | "oder" => (Upos::Cconj, true),
                        _ => (Upos::Noun, false),
                    };
                    ParsedToken::new(word.as_str(), word.as_str(), upos, is_stop)
                })
                .collect(),
        )
    }
}

impl LanguageToolkit for ListToolkit {
    fn parse_text(&self, text: &str, _language: Option<&str>) -> Result<ParsedDocument> {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        Ok(Self::analyze(&words))
    }

    fn parse_tokens(&self, tokens: &[String], _language: Option<&str>) -> Result<ParsedDocument> {
        Ok(Self::analyze(tokens))
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

fn whitespace_corpus(texts: &[String]) -> Vec<Document> {
    let tokenizer = WhitespaceTokenizer::new();
    tokenize_documents(texts, &tokenizer)
        .collect::<Result<_>>()
        .unwrap()
}

/// Benchmark document creation.
fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("documents");
    let texts = generate_test_documents(1000);
    let tokenizer = WhitespaceTokenizer::new();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("tokenize_corpus", |b| {
        b.iter(|| {
            let docs: Vec<Document> = tokenize_documents(black_box(&texts), &tokenizer)
                .collect::<Result<_>>()
                .unwrap();
            black_box(docs)
        })
    });

    let doc = Document::from_text(&texts[999], &tokenizer).unwrap();
    let indices: Vec<usize> = (0..doc.original_tokens().len()).step_by(2).collect();
    group.bench_function("sub_doc", |b| {
        b.iter(|| black_box(doc.sub_doc(black_box(indices.iter().copied())).unwrap()))
    });

    group.finish();
}

/// Benchmark token-level filters.
fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    let corpus = whitespace_corpus(&generate_test_documents(1000));
    let required = ["Schule", "Lehrer", "Klasse"].map(str::to_string);

    let pipeline = Pipeline::new()
        .add_filter(Arc::new(PropertyFilter::new(
            Arc::new(TokenText),
            required.clone(),
        )))
        .with_name("property");
    let negated = Pipeline::new()
        .add_filter(Arc::new(
            PropertyFilter::new(Arc::new(TokenText), required).negated(),
        ))
        .with_name("negated");

    group.throughput(Throughput::Elements(corpus.len() as u64));
    for pipeline in [pipeline, negated] {
        group.bench_function(pipeline.name().to_string(), |b| {
            b.iter_batched(
                || corpus.clone(),
                |docs| {
                    let result: Vec<Document> = apply_filters(docs, &pipeline)
                        .collect::<Result<_>>()
                        .unwrap();
                    black_box(result)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Benchmark document frequency statistics.
fn bench_document_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_frequency");
    let corpus = whitespace_corpus(&generate_test_documents(1000));
    let bounds = DocumentFrequencyBounds::new()
        .with_min_num(5.0)
        .with_max_rate(0.25);

    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("document_frequencies", |b| {
        b.iter(|| black_box(document_frequencies(black_box(&corpus), &TokenText, false).unwrap()))
    });
    group.bench_function("props_by_document_frequency", |b| {
        b.iter(|| {
            black_box(props_by_document_frequency(black_box(&corpus), &TokenText, &bounds).unwrap())
        })
    });

    group.finish();
}

/// Benchmark the topic-modeling pipeline end to end.
fn bench_topic_modeling(c: &mut Criterion) {
    let mut group = c.benchmark_group("topic_modeling");
    group.sample_size(20);

    let texts = generate_test_documents(1000);
    let config = TopicModelingConfig::default();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("poc_topic_modeling", |b| {
        b.iter_batched(
            || {
                let cache = Arc::new(ParseCache::new(Arc::new(ListToolkit)));
                let tokenizer = ToolkitTokenizer::new(cache.clone());
                let corpus: Vec<Document> = tokenize_documents(&texts, &tokenizer)
                    .collect::<Result<_>>()
                    .unwrap();
                (corpus, cache)
            },
            |(corpus, cache)| black_box(apply_poc_topic_modeling(corpus, cache, &config).unwrap()),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_documents,
    bench_filters,
    bench_document_frequency,
    bench_topic_modeling
);

criterion_main!(benches);
