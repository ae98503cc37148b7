//! Benchmarks for index build, query latency and bounded edit distance.
//!
//! Simulates documentation sites of realistic size:
//! - Small site:  ~30 pages, ~200 words each
//! - Medium site: ~150 pages, ~400 words each
//! - Large site:  ~600 pages, ~600 words each
//!
//! Run with: cargo bench

use book_search::{
    bounded_levenshtein, DocKey, Document, DocumentIndex, IndexOptions, Tokenize, RESULT_LIMIT,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

struct SiteSize {
    name: &'static str,
    pages: usize,
    words_per_page: usize,
}

const SITE_SIZES: &[SiteSize] = &[
    SiteSize {
        name: "small",
        pages: 30,
        words_per_page: 200,
    },
    SiteSize {
        name: "medium",
        pages: 150,
        words_per_page: 400,
    },
    SiteSize {
        name: "large",
        pages: 600,
        words_per_page: 600,
    },
];

const TECHNICAL_WORDS: &[&str] = &[
    "install", "configuration", "shortcode", "menu", "search", "index", "theme", "layout",
    "template", "partial", "markdown", "frontmatter", "taxonomy", "section", "bundle", "asset",
    "pipeline", "render", "hook", "deploy", "server", "module", "language", "translation",
    "mermaid", "katex", "button", "column", "hint", "tabs", "details", "expand", "toc",
];

const GENERAL_WORDS: &[&str] = &[
    "the", "a", "is", "are", "be", "have", "with", "from", "into", "each", "page", "site",
    "file", "option", "default", "value", "setting", "example", "usage", "below", "above",
];

const SECTIONS: &[&str] = &["Docs", "Guide", "Reference", "Blog"];

fn generate_content(word_count: usize, seed: usize) -> String {
    let all_words: Vec<&str> = TECHNICAL_WORDS
        .iter()
        .chain(GENERAL_WORDS.iter())
        .copied()
        .collect();

    (0..word_count)
        .map(|i| all_words[(seed * 7 + i * 3) % all_words.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_site(size: &SiteSize) -> Vec<Document> {
    (0..size.pages)
        .map(|i| Document {
            id: DocKey::from(i as u64),
            title: format!(
                "{} {}",
                TECHNICAL_WORDS[i % TECHNICAL_WORDS.len()],
                TECHNICAL_WORDS[(i + 5) % TECHNICAL_WORDS.len()]
            ),
            content: generate_content(size.words_per_page, i),
            href: format!("/docs/page-{}/", i),
            section: SECTIONS[i % SECTIONS.len()].to_string(),
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in SITE_SIZES {
        let docs = generate_site(size);
        group.throughput(Throughput::Elements((size.pages * size.words_per_page) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), &docs, |b, docs| {
            b.iter(|| DocumentIndex::build(black_box(docs.clone()), IndexOptions::default()));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_query");

    let Ok(index) = DocumentIndex::build(generate_site(&SITE_SIZES[1]), IndexOptions::default())
    else {
        return;
    };

    // What a reader types, one key-up at a time
    let queries = [
        ("single_char", "s"),
        ("prefix", "conf"),
        ("exact", "shortcode"),
        ("typo", "shortcdoe"),
        ("multi_term", "menu install"),
        ("no_match", "xyznonexistent"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::new("forward", name), &query, |b, query| {
            b.iter(|| index.search(black_box(query), RESULT_LIMIT));
        });
    }

    group.finish();
}

fn bench_tokenize_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_mode");
    let docs = generate_site(&SITE_SIZES[1]);

    for (name, tokenize) in [
        ("strict", Tokenize::Strict),
        ("forward", Tokenize::Forward),
        ("full", Tokenize::Full),
        ("reverse", Tokenize::Reverse),
    ] {
        let options = IndexOptions {
            tokenize,
            ..IndexOptions::default()
        };
        let Ok(index) = DocumentIndex::build(docs.clone(), options) else {
            continue;
        };
        group.bench_function(name, |b| {
            b.iter(|| index.search(black_box("templat"), RESULT_LIMIT));
        });
    }

    group.finish();
}

fn bench_levenshtein(c: &mut Criterion) {
    let pairs = [
        ("install", "install"),
        ("install", "instal"),
        ("configuration", "configuraton"),
        ("shortcode", "shortcdoe"),
        ("translation", "transltaion"),
        ("completely", "different"),
    ];

    c.bench_function("bounded_levenshtein", |b| {
        b.iter(|| {
            for (a, b_str) in &pairs {
                black_box(bounded_levenshtein(a, b_str, 2));
            }
        });
    });
}

/// Less noisy than the default: 99% confidence, 2% noise threshold.
fn tight_confidence() -> Criterion {
    Criterion::default()
        .confidence_level(0.99)
        .sample_size(100)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .noise_threshold(0.02)
}

criterion_group!(
    name = benches;
    config = tight_confidence();
    targets = bench_build, bench_search, bench_tokenize_modes, bench_levenshtein
);
criterion_main!(benches);
