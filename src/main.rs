//! Greedy Wordle Solver - CLI
//!
//! Interactive and batch front end for the maximum-entropy solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use greedy_wordle::{
    cache::{self, DEFAULT_CACHE_PATH, TableSource},
    commands::{
        all_secrets, analyze_word, run_benchmark, run_interactive, sample_secrets, solve_word,
    },
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{CandidateId, DEFAULT_OPENER, GuessSelector, Opener, PatternTable, SelectorConfig},
    wordlists::{DEFAULT_ANSWERS_PATH, DEFAULT_GUESSES_PATH, WordLists},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "greedy_wordle",
    about = "Wordle solver that suggests the maximum-entropy guess each turn",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of possible secret words, one per line
    #[arg(long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    answers: PathBuf,

    /// File of allowed guesses, one per line
    #[arg(long, global = true, default_value = DEFAULT_GUESSES_PATH)]
    guesses: PathBuf,

    /// Pattern table cache file
    #[arg(long, global = true, default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,

    /// Always rebuild the pattern table and never write the cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Opening guess, or 'auto' to search for the best one
    #[arg(long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,

    /// Hard mode: only suggest words that could still be the secret
    #[arg(long, global = true)]
    hard: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word as an opener
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of largest buckets to list
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Benchmark solver performance on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the word sample (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL possible answers
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let table = load_table(&cli)?;

    match command {
        Commands::Play => {
            let selector = build_selector(&table, &cli.opener)?;
            run_interactive(&selector, cli.hard, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Solve { word, verbose } => {
            let selector = build_selector(&table, &cli.opener)?;
            let result = solve_word(&selector, &word, cli.hard)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&table, &word, top)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Running benchmark on {count} random words (seed {seed})...");
            let secrets = sample_secrets(&table, count, seed);
            run_benchmark_command(&table, &cli, &secrets)
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Wordle Solver Test ");
            println!("{}", "═".repeat(70));
            println!(
                "\nTesting against {} possible answers",
                table.candidate_count()
            );
            println!("Opener: {}", cli.opener);
            if cli.hard {
                println!("Hard mode");
            }
            println!();

            let secrets = all_secrets(&table, limit);
            run_benchmark_command(&table, &cli, &secrets)
        }
    }
}

/// Load both word lists and obtain the pattern table, from cache when possible
fn load_table(cli: &Cli) -> Result<PatternTable> {
    let lists = WordLists::load(&cli.answers, &cli.guesses).with_context(|| {
        format!(
            "Failed to read word lists {} and {}",
            cli.answers.display(),
            cli.guesses.display()
        )
    })?;
    eprintln!(
        "{} {} possible answers, {} allowed guesses",
        "Loaded".green().bold(),
        lists.possible.len(),
        lists.allowed.len()
    );

    let spinner = spinner("Preparing pattern table...")?;
    let result = if cli.no_cache {
        PatternTable::build(lists.allowed, lists.possible)
            .map(|table| (table, "Built pattern table (cache disabled)".to_string()))
            .context("Failed to build pattern table")
    } else {
        cache::load_or_build(&cli.cache, lists.allowed, lists.possible)
            .map(|(table, source)| {
                let verb = match source {
                    TableSource::Loaded => "Loaded pattern table from",
                    TableSource::Built => "Built pattern table and cached it at",
                };
                (table, format!("{verb} {}", cli.cache.display()))
            })
            .with_context(|| {
                format!("Failed to prepare pattern table at {}", cli.cache.display())
            })
    };
    spinner.finish_and_clear();

    let (table, message) = result?;
    eprintln!(
        "{} {message} ({} guesses × {} candidates)",
        "Ready".green().bold(),
        table.guess_count(),
        table.candidate_count()
    );
    Ok(table)
}

fn build_selector<'t>(table: &'t PatternTable, opener: &str) -> Result<GuessSelector<'t>> {
    let opener = if opener.eq_ignore_ascii_case("auto") {
        Opener::Search
    } else {
        Opener::Fixed(opener.to_lowercase())
    };
    let searching = matches!(opener, Opener::Search);
    let config = SelectorConfig {
        opener,
        ..SelectorConfig::default()
    };

    if !searching {
        return Ok(GuessSelector::new(table, &config)?);
    }

    let spinner = spinner("Searching for the best opener...")?;
    let selector = GuessSelector::new(table, &config);
    spinner.finish_and_clear();

    let selector = selector?;
    eprintln!(
        "{} opener {}",
        "Chose".green().bold(),
        table.guess(selector.opener()).text().to_uppercase().bright_yellow()
    );
    Ok(selector)
}

fn run_benchmark_command(table: &PatternTable, cli: &Cli, secrets: &[CandidateId]) -> Result<()> {
    let selector = build_selector(table, &cli.opener)?;

    let progress = ProgressBar::new(secrets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")?
            .progress_chars("█▓▒░"),
    );

    let result = run_benchmark(&selector, secrets, cli.hard, &progress);
    progress.finish_and_clear();

    print_benchmark_result(&result?);
    Ok(())
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
