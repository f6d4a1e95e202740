//! Display functions for command results

use super::formatters::{entropy_bar, guess_count, histogram_bar, rule_label};
use crate::commands::{AnalysisResult, BenchmarkResult, MAX_TURNS, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!("  Rule:        {}", rule_label(step.rule));
            println!(
                "  Candidates:  {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(entropy) = step.entropy {
                println!("  Entropy:     {entropy:.3} bits");
            }
            if !step.pattern.is_perfect() {
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    step.information_gained(),
                    step.information_gained().exp2()
                );
            }
        }
    }

    println!();
    let summary = format!("Solved in {}", guess_count(result.guesses.len()));
    if result.success() {
        println!("{}", summary.green().bold());
    } else {
        println!(
            "{}",
            format!("{summary}, more than the {MAX_TURNS} a real game allows")
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.total_candidates as f64).log2();
    let bar = entropy_bar(result.metrics.entropy, max_entropy, 30);

    println!("\nAgainst {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction());
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates",
        result.metrics.max_partition
    );
    println!("   Patterns:    {} distinct", result.metrics.buckets);

    if !result.largest_buckets.is_empty() {
        println!("\n{}", "Largest buckets:".bright_cyan().bold());
        for (pattern, size) in &result.largest_buckets {
            println!("   {} {size:5}", pattern.to_emoji());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&turns, &count) in &result.distribution {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let bar = histogram_bar(count, max_count, 40);
        let bar = if turns > MAX_TURNS {
            bar.red()
        } else {
            bar.green()
        };
        println!("   {turns:2}: {bar} {count:5} ({pct:5.1}%)");
    }

    if result.failures.is_empty() {
        println!(
            "\n{}",
            format!("Every word solved within {MAX_TURNS} guesses").green()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "{} words needed more than {MAX_TURNS} guesses:",
                result.failures.len()
            )
            .red()
            .bold()
        );
        for (word, turns) in &result.failures {
            println!("   {} ({turns})", word.to_uppercase().yellow());
        }
    }
}
