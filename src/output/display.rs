//! Display functions for command results

use super::formatters::{create_progress_bar, format_number, information_bits, plural};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::FeedbackKind;
use colored::Colorize;

/// Print the result of solving a number
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        format_number(result.target, result.width)
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            format_number(step.guess, result.width),
            step.report.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Feedback:   {} correct, {} present, {} absent",
                step.report.count(FeedbackKind::Correct),
                step.report.count(FeedbackKind::Present),
                step.report.count(FeedbackKind::Absent)
            );
            if let Some(score) = step.score {
                println!("  Score:      {score}");
            }
            if step.candidates_after > 0 {
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    information_bits(step.candidates_before, step.candidates_after),
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    let count = result.guesses.len();
    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} guess{}!", plural(count))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {count} guess{}", plural(count))
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        format_number(result.number, result.width)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} possible answers{}:",
        result.total_candidates,
        if result.is_candidate {
            " (itself a candidate)"
        } else {
            " (not a candidate)"
        }
    );

    let bar = create_progress_bar(
        result.frequency_score as f64,
        result.best_frequency_score as f64,
        30,
    );
    println!(
        "   Frequency:   [{}] {} / {}",
        bar.green(),
        result.frequency_score.to_string().bright_yellow(),
        result.best_frequency_score
    );
    for (position, stat) in result.positions.iter().enumerate() {
        let common = stat
            .most_common
            .map_or_else(String::new, |(digit, count)| {
                format!(" (most common: {digit} × {count})")
            });
        println!(
            "     position {}: {} × {}{}",
            position + 1,
            stat.digit,
            stat.count,
            common.bright_black()
        );
    }

    let metrics = &result.simulation;
    println!(
        "   Simulation:  {} total remaining",
        metrics.total_remaining.to_string().bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", metrics.worst_case);
    println!("   Outcomes:    {} distinct", metrics.distinct_outcomes);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Numbers tested:   {}", result.total_numbers);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
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
    println!("   Numbers/second:   {:.1}", result.numbers_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = count as f64 / result.total_numbers.max(1) as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
