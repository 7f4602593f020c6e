//! # wordvocab
//!
//! Runs the word pipeline over a corpus file: tokenize every line, count token frequencies,
//! build (or load) a vocabulary, encode each document, and print a JSON report to stdout.
//!
//! Settings come from `WORDVOCAB_*` environment variables (see [`wordvocab_core::config`]);
//! log verbosity from `RUST_LOG` (default `info`, logs go to stderr).

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordvocab_core::config::{self, Config};
use wordvocab_core::data::{load_from_path, load_vocabulary};
use wordvocab_core::{EncodedDocument, Encoder, FrequencyTable, Tokenizer, Vocabulary};

/// One entry of the most-common list.
#[derive(Debug, Serialize)]
struct TokenCount {
    token: String,
    count: usize,
}

/// Everything the pipeline produced for one corpus.
#[derive(Debug, Serialize)]
struct Report {
    documents: usize,
    tokens: usize,
    vocabulary_size: usize,
    vocabulary: Vocabulary,
    most_common: Vec<TokenCount>,
    frequencies: FrequencyTable,
    encoded: Vec<EncodedDocument>,
}

fn run(config: &Config) -> Result<Report> {
    let min_count = config.min_count()?;
    let tokenizer = config.tokenizer();

    let corpus = load_from_path(&config.input_path)
        .with_context(|| format!("loading corpus {}", config.input_path.display()))?;
    info!(documents = corpus.len(), "loaded corpus");

    let all_counts = FrequencyTable::from_tokens(
        corpus
            .documents()
            .iter()
            .flat_map(|doc| tokenizer.tokenize(doc.as_str())),
    );
    let frequencies = all_counts.filter_min(min_count);

    let vocab = match &config.vocab_path {
        Some(path) => load_vocabulary(path)
            .with_context(|| format!("loading vocabulary {}", path.display()))?,
        None => Vocabulary::from_documents(corpus.documents(), &tokenizer),
    };
    info!(
        size = vocab.len(),
        prebuilt = config.vocab_path.is_some(),
        "vocabulary ready"
    );

    let encoder = Encoder::with_tokenizer(tokenizer, vocab);
    let encoded = encoder
        .encode_all(corpus.documents())
        .context("encoding corpus")?;
    info!(
        tokens = all_counts.total(),
        distinct = all_counts.len(),
        "encoded corpus"
    );

    let most_common = all_counts
        .most_common(config.top_n)
        .into_iter()
        .map(|(token, count)| TokenCount {
            token: token.to_string(),
            count,
        })
        .collect();
    let vocabulary = encoder.into_vocab();

    Ok(Report {
        documents: corpus.len(),
        tokens: all_counts.total(),
        vocabulary_size: vocabulary.len(),
        vocabulary,
        most_common,
        frequencies,
        encoded,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::from_env().context("reading WORDVOCAB_* environment")?;
    config.validate()?;

    let report = run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
