//! Primel Solver - CLI
//!
//! Primel solver with simple line-based, TUI and batch evaluation modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use primel_solver::{
    commands::{
        Outcome, SolveConfig, analyze_number, print_test_all_statistics, run_benchmark,
        run_simple, run_test_all, sample_targets, solve_number,
    },
    core::{EngineError, Number},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    primes::{DEFAULT_WIDTH, universe},
    solver::{Solver, Strategy, StrategyType},
};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "primel_solver",
    about = "Primel solver: finds the hidden prime from per-digit feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default), simulation, hybrid
    #[arg(short, long, global = true, default_value = "frequency", value_parser = parse_strategy)]
    strategy: String,

    /// Number of digits in the hidden prime
    #[arg(short, long, global = true, default_value_t = DEFAULT_WIDTH)]
    digits: usize,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default - prompts for feedback digit by digit)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Solve a specific target number
    Solve {
        /// The target prime to solve
        number: Number,

        /// Give up after this many guesses
        #[arg(long, default_value = "6")]
        max_guesses: usize,
    },

    /// Score a guess against every candidate
    Analyze {
        /// Number to analyze
        number: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random targets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible target sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Override the opening guess
        #[arg(short, long)]
        first: Option<Number>,
    },

    /// Test solver on ALL possible targets
    TestAll {
        /// Limit number of targets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Override the opening guess
        #[arg(short, long)]
        first: Option<Number>,
    },
}

fn parse_strategy(name: &str) -> Result<String, String> {
    if StrategyType::from_name(name).is_some() {
        Ok(name.to_string())
    } else {
        Err(format!(
            "unknown strategy '{name}' (expected one of: {})",
            StrategyType::NAMES.join(", ")
        ))
    }
}

/// Install the stderr log subscriber; the level follows the `-v` count
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Default to simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);
    if !matches!(command, Commands::Play) {
        init_logging(cli.verbose);
    }

    match run(command, &cli.strategy, cli.digits, cli.verbose > 0) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<EngineError>()
                .map_or(1, EngineError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(command: Commands, strategy_name: &str, width: usize, verbose: bool) -> Result<ExitCode> {
    let strategy = StrategyType::from_name(strategy_name).unwrap_or_default();
    let candidates = universe(width)?;

    match command {
        Commands::Play => {
            use primel_solver::interactive::{App, run_tui};

            run_tui(App::new(strategy, candidates))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Simple => run_simple_command(&mut Solver::new(strategy, candidates)),
        Commands::Solve {
            number,
            max_guesses,
        } => {
            let config = SolveConfig::new(number).with_max_guesses(max_guesses);
            let result = solve_number(config, &mut Solver::new(strategy, candidates))?;
            print_solve_result(&result, verbose);
            Ok(if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Analyze { number } => {
            let result = analyze_number(&number, &candidates)?;
            print_analysis_result(&result);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Benchmark { count, seed, first } => {
            benchmark_command(&mut Solver::new(strategy, candidates), count, seed, first)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::TestAll { limit, first } => {
            test_all_command(&mut Solver::new(strategy, candidates), limit, first)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_simple_command<S: Strategy>(solver: &mut Solver<S>) -> Result<ExitCode> {
    match run_simple(solver)? {
        Outcome::Solved { .. } => Ok(ExitCode::SUCCESS),
        Outcome::Exhausted => {
            eprintln!("No more candidates found!");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn benchmark_command<S: Strategy>(
    solver: &mut Solver<S>,
    count: usize,
    seed: Option<u64>,
    first: Option<Number>,
) -> Result<()> {
    if let Some(first) = first {
        println!("Running benchmark on {count} random targets with forced first guess: {first}...");
    } else {
        println!("Running benchmark on {count} random targets...");
    }

    let targets = sample_targets(solver.universe(), count, seed);
    let result = run_benchmark(solver, &targets, first, 6).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}

fn test_all_command<S: Strategy>(
    solver: &mut Solver<S>,
    limit: Option<usize>,
    first: Option<Number>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Primel Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible targets",
        solver.universe().len()
    );
    println!("Strategy: {}", solver.strategy().name());
    if let Some(first) = first {
        println!("Forced first guess: {first}");
    }
    println!();

    let stats = run_test_all(solver, limit, first)?;
    print_test_all_statistics(&stats);
    Ok(())
}
