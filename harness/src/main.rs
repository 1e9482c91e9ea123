use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use core::persist::{load_index, save_index, IndexPaths};
use core::tokenizer::Analyzer;
use core::{execute, mean_score, parse, parse_judgments, score_all, InvertedIndex, MissingPolicy};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "harness")]
#[command(about = "Build a boolean-OR index and evaluate retrieval recall", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index from a directory of text documents
    Build {
        /// Corpus directory
        #[arg(long)]
        corpus: String,
        /// Output index directory
        #[arg(long)]
        output: String,
        /// Filename extension of corpus documents
        #[arg(long, default_value = "poem")]
        suffix: String,
    },
    /// Run a single free-text query against a persisted index
    Search {
        /// Index directory
        #[arg(long)]
        index: String,
        /// Query text
        #[arg(long)]
        query: String,
    },
    /// Execute every query file and score recall against a judgment file
    Eval {
        /// Index directory
        #[arg(long)]
        index: String,
        /// Directory of query files
        #[arg(long)]
        queries: String,
        /// Filename extension of query files
        #[arg(long, default_value = "query")]
        query_suffix: String,
        /// Relevance judgment file
        #[arg(long)]
        judgments: String,
        /// Score queries without a judgment entry as 0.0 instead of failing
        #[arg(long, default_value_t = false)]
        lenient: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, output, suffix } => build(&corpus, &output, &suffix),
        Commands::Search { index, query } => search(&index, &query),
        Commands::Eval { index, queries, query_suffix, judgments, lenient } => {
            eval(&index, &queries, &query_suffix, &judgments, lenient)
        }
    }
}

fn build(corpus: &str, output: &str, suffix: &str) -> Result<()> {
    let documents = read_named_files(corpus, suffix)?;
    let index = InvertedIndex::build(&Analyzer::default(), documents)?;

    let created_at = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".into());
    save_index(&IndexPaths::new(output), &index, created_at)?;
    tracing::info!(output, "index build complete");
    Ok(())
}

fn search(index_dir: &str, query_text: &str) -> Result<()> {
    let index = load_index(&IndexPaths::new(index_dir))?;
    let analyzer = Analyzer::default();
    let results = execute(&parse(&analyzer, query_text), &index);
    tracing::info!(total_hits = results.len(), "query executed");
    for name in &results {
        println!("{name}");
    }
    Ok(())
}

fn eval(
    index_dir: &str,
    queries_dir: &str,
    query_suffix: &str,
    judgments_path: &str,
    lenient: bool,
) -> Result<()> {
    let index = load_index(&IndexPaths::new(index_dir))?;
    let analyzer = Analyzer::default();

    let mut actual_by_query: BTreeMap<String, _> = BTreeMap::new();
    for (name, text) in read_named_files(queries_dir, query_suffix)? {
        let results = execute(&parse(&analyzer, &text), &index);
        actual_by_query.insert(name, results);
    }

    let judgments_text = fs::read_to_string(judgments_path)
        .with_context(|| format!("reading {judgments_path}"))?;
    let expected_by_query = parse_judgments(&judgments_text);

    let policy = if lenient { MissingPolicy::ScoreZero } else { MissingPolicy::Fail };
    let scores = score_all(&actual_by_query, &expected_by_query, policy)?;
    let mean = mean_score(&scores)?;

    println!("Scores by query: {}", serde_json::to_string_pretty(&scores)?);
    println!("Mean: {mean}");
    Ok(())
}

/// Read every `*.{suffix}` file under `dir` as a `(filename, content)`
/// pair, sorted by filename. An unreadable or non-UTF-8 file fails the
/// whole read.
fn read_named_files(dir: &str, suffix: &str) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let p: &Path = entry.path();
        if !p.is_file() || p.extension().and_then(|s| s.to_str()) != Some(suffix) {
            continue;
        }
        let name = p
            .file_name()
            .and_then(|s| s.to_str())
            .context("non-UTF-8 filename")?
            .to_string();
        let text = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
        out.push((name, text));
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}
