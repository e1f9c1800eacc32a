use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{info, warn};
use serde_json::json;
use tweets_gen_core::model::config::{DEFAULT_MAX_WORDS, DEFAULT_TERMINATORS};
use tweets_gen_core::{BuildOptions, ChainModel, GenerationConfig, Sentence, SentenceGenerator};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random tweets from a word-level Markov chain",
    long_about = None,
    allow_negative_numbers = true
)]
struct Cli {
    /// Seed for the random number generator
    seed: i64,

    /// Number of sentences to generate
    count: usize,

    /// Text corpus, tokenized on whitespace line by line
    path: PathBuf,

    /// Maximum number of words to read (absent or negative reads the whole file)
    max_tokens: Option<i64>,

    /// Maximum number of words added after the first one
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Characters that end a sentence when they close a word
    #[arg(long, value_name = "CHARS")]
    terminators: Option<String>,

    /// Generate on worker threads (0 = one per CPU); sentence i gets its own seeded RNG
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Emit one JSON object per sentence
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    run(cli)
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            1 => LevelFilter::Error,
            _ => LevelFilter::Off,
        }
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    // RUST_LOG, when set, takes precedence over -v/-q.
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn run(cli: Cli) -> Result<()> {
    let options = BuildOptions::default()
        .with_token_limit(cli.max_tokens.unwrap_or(-1))
        .with_terminators(cli.terminators.as_deref().unwrap_or(DEFAULT_TERMINATORS));

    let model = ChainModel::from_file(&cli.path, &options)
        .with_context(|| format!("failed to build a model from {}", cli.path.display()))?;
    let stats = model.stats();
    info!(
        "model: {} tokens, {} distinct words, {} start candidates, {} transitions",
        stats.tokens, stats.words, stats.start_candidates, stats.transitions
    );
    if model.start_candidates() == 0 && cli.count > 0 {
        warn!("corpus {} has no word that can start a sentence", cli.path.display());
    }

    let config = GenerationConfig {
        max_words: cli.max_words,
        jobs: cli.jobs.filter(|&jobs| jobs > 0),
    };
    let generator = SentenceGenerator::new(&model, &config)?;
    let seed = cli.seed as u64;

    let sentences = if cli.jobs.is_some() {
        let jobs = config.effective_jobs(cli.count);
        generator.generate_parallel(cli.count, seed, jobs)?
    } else {
        generator.generate_many(cli.count, seed)?
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, sentence) in sentences.iter().enumerate() {
        write_sentence(&mut out, i + 1, sentence, cli.json)?;
    }
    out.flush().context("failed to write to stdout")?;
    Ok(())
}

fn write_sentence<W: Write>(out: &mut W, index: usize, sentence: &Sentence, as_json: bool) -> Result<()> {
    if as_json {
        let record = json!({
            "index": index,
            "text": sentence.to_string(),
            "words": sentence.words,
            "termination": sentence.termination,
        });
        writeln!(out, "{record}")?;
    } else {
        writeln!(out, "Tweet {index}: {sentence}")?;
    }
    Ok(())
}
