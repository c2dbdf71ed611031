use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use keyword_search::document::source::{DirectorySource, DocumentSource, read_lines};
use keyword_search::engine::search;
use keyword_search::error::EngineError;
use keyword_search::index::KeywordIndex;
use keyword_search::preprocessing::tokenizer::{self, NoiseWordSet};

/// Builds a keyword index over a document collection, then answers
/// two-keyword OR queries read from stdin, one "keyword keyword" pair per
/// line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File listing the document identifiers to index, one per line
    docs: PathBuf,

    /// File listing the noise words to exclude, one per line
    noise_words: PathBuf,

    /// Directory against which document identifiers are resolved
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Skip unreadable documents instead of aborting the build
    #[arg(long)]
    skip_missing: bool,

    /// Print each query result as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), EngineError> {
    let noise_lines =
        read_lines(&args.noise_words).map_err(|source| EngineError::NoiseListUnavailable {
            path: args.noise_words.display().to_string(),
            source,
        })?;
    let noise = NoiseWordSet::from_lines(noise_lines);

    let doc_ids = read_lines(&args.docs).map_err(|source| EngineError::DocumentListUnavailable {
        path: args.docs.display().to_string(),
        source,
    })?;

    let source = DirectorySource::new(&args.root);
    let mut index = KeywordIndex::new();
    let mut indexed = 0usize;

    for id in &doc_ids {
        let text = match source.read(id) {
            Ok(text) => text,
            Err(err) if args.skip_missing => {
                warn!("skipping document: {err}");
                continue;
            }
            Err(err) => return Err(err),
        };
        index.merge_document(tokenizer::scan(id, &text, &noise));
        indexed += 1;
    }

    info!(
        documents = indexed,
        keywords = index.keyword_count(),
        noise_words = noise.len(),
        "index built"
    );

    query_loop(&index, &noise, args.json);
    Ok(())
}

fn query_loop(index: &KeywordIndex, noise: &NoiseWordSet, json: bool) {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut words = line.split_whitespace();
        let (Some(keyword_a), Some(keyword_b)) = (words.next(), words.next()) else {
            if !line.trim().is_empty() {
                warn!("queries take two keywords");
            }
            continue;
        };

        let results = search::search(index, noise, keyword_a, keyword_b);
        if json {
            println!(
                "{}",
                serde_json::to_string(&results).expect("a list of strings serializes")
            );
        } else if results.is_empty() {
            println!("no matching documents");
        } else {
            for document in &results {
                println!("{document}");
            }
        }
    }
}
