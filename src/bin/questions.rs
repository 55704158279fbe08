//! Answers a question from a directory of text documents.
//!
//! Loads every matching file in the corpus directory, reads a question
//! (from `--query` or an interactive prompt) and prints the best sentences,
//! one per line, or the whole answer as JSON.

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use rapid_qa::pipeline::StageTimingObserver;
use rapid_qa::{QaConfig, QuestionAnswerer};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "questions", about = "Answers questions from a corpus of text files")]
struct Args {
    /// Directory containing the corpus documents.
    corpus: PathBuf,

    /// Question to answer. Prompts on stdin when omitted.
    #[arg(short, long)]
    query: Option<String>,

    /// Number of top documents to search.
    #[arg(short, long)]
    files: Option<usize>,

    /// Number of sentences to print.
    #[arg(short, long)]
    sentences: Option<usize>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full answer as JSON.
    #[arg(long)]
    json: bool,

    /// Print per-stage timings to stderr.
    #[arg(long)]
    timings: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => QaConfig::from_json_file(path)?,
        None => QaConfig::default(),
    };
    if let Some(n) = args.files {
        config = config.with_file_matches(n);
    }
    if let Some(n) = args.sentences {
        config = config.with_sentence_matches(n);
    }

    let qa = QuestionAnswerer::from_dir(&args.corpus, config)?;
    tracing::info!(documents = qa.corpus().len(), "corpus ready");

    let question = match args.query {
        Some(q) => q,
        None => prompt("Query: ")?,
    };

    let mut observer = StageTimingObserver::new();
    let answer = qa.answer_with_observer(&question, &mut observer);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    if args.json {
        writeln!(out, "{}", answer.to_json()?)?;
    } else {
        for sentence in answer.sentence_texts() {
            writeln!(out, "{sentence}")?;
        }
    }
    out.flush()?;

    if args.timings {
        for (stage, report) in observer.reports() {
            eprintln!(
                "{stage:>16}: {:8.3} ms ({} items)",
                report.elapsed_ms, report.items
            );
        }
        eprintln!("{:>16}: {:8.3} ms", "total", observer.total_ms());
    }

    Ok(())
}

/// Print `label` and read one line from stdin
fn prompt(label: &str) -> std::io::Result<String> {
    let mut stdout = std::io::stdout();
    stdout.write_all(label.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
