//! CLI entry point for the vaccination solver.
//!
//! Usage:
//!   pets-vaccination solve [options]
//!   pets-vaccination verify <moves.json> | --stdin [options]
//!
//! Options:
//!   --chihuahuas <n>   Chihuahuas in the waiting room (default: 3)
//!   --cats <n>         Cats in the waiting room (default: 3)
//!   --batch-size <n>   Animals per surgery (default: 2)
//!   --config <file>    JSON problem configuration, overrides the flags above
//!   --json             Machine-readable output (solve only)
//!
//! Set RUST_LOG=debug to see search progress on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use pets_vaccination::config::{DEFAULT_CATS, DEFAULT_CHIHUAHUAS, SURGERY_CAPACITY};
use pets_vaccination::report::{self, ERROR_PREFIX, SUCCESS_PREFIX};
use pets_vaccination::{
    execute, solve_problem, AnimalCount, AppError, ProblemConfig, ReplayStatus, SolverResult,
    VaccinationMove, VaccinationState,
};

#[derive(Parser)]
#[command(name = "pets-vaccination")]
#[command(about = "Find a safe vaccination schedule for chihuahuas and cats")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProblemArgs {
    /// Chihuahuas in the waiting room at the start
    #[arg(long, default_value_t = i64::from(DEFAULT_CHIHUAHUAS), allow_negative_numbers = true)]
    chihuahuas: i64,

    /// Cats in the waiting room at the start
    #[arg(long, default_value_t = i64::from(DEFAULT_CATS), allow_negative_numbers = true)]
    cats: i64,

    /// Animals that go to surgery together
    #[arg(long, default_value_t = i64::from(SURGERY_CAPACITY), allow_negative_numbers = true)]
    batch_size: i64,

    /// JSON problem configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl ProblemArgs {
    fn load(&self) -> Result<ProblemConfig, AppError> {
        match &self.config {
            Some(path) => Ok(ProblemConfig::from_json(&fs::read_to_string(path)?)?),
            None => Ok(ProblemConfig::new(self.chihuahuas, self.cats, self.batch_size)?),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a schedule that vaccinates every animal
    Solve {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a JSON list of moves against the rules
    Verify {
        /// Path to moves JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read moves from stdin instead of file
        #[arg(long)]
        stdin: bool,

        #[command(flatten)]
        problem: ProblemArgs,
    },
}

/// JSON output of the solve command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    visited_states: usize,
    solution_length: usize,
    time_elapsed_ms: u64,
    steps: Vec<StepOutput>,
}

#[derive(Debug, Serialize)]
struct StepOutput {
    action: String,
    movement: VaccinationMove,
    state: StateOutput,
}

#[derive(Debug, Serialize)]
struct StateOutput {
    waiting: AnimalCount,
    recovery: AnimalCount,
    vaccinated: AnimalCount,
}

impl From<VaccinationState> for StateOutput {
    fn from(state: VaccinationState) -> Self {
        Self {
            waiting: state.waiting,
            recovery: state.recovery,
            vaccinated: state.vaccinated,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Solve { problem, json } => run_solve(&problem, json),
        Commands::Verify {
            file,
            stdin,
            problem,
        } => run_verify(file.as_deref(), stdin, &problem),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{ERROR_PREFIX} {e}");
            ExitCode::from(2)
        }
    }
}

fn run_solve(problem: &ProblemArgs, json: bool) -> Result<bool, AppError> {
    let config = problem.load()?;
    let result = solve_problem(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&format_result(&result))?);
        return Ok(result.is_solved());
    }

    println!("{}", report::header(&config));
    println!("{}", report::rules(&config));
    print!("{}", report::solution(&config, result.solution.as_deref()));
    if result.is_solved() {
        print!("{}", report::statistics(&result.statistics));
    }
    Ok(result.is_solved())
}

fn run_verify(file: Option<&Path>, stdin: bool, problem: &ProblemArgs) -> Result<bool, AppError> {
    let config = problem.load()?;

    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(path)?
    } else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "must provide either a file path or --stdin",
        )
        .into());
    };

    let moves: Vec<VaccinationMove> = serde_json::from_str(&json_content)?;
    let result = execute(&config, &moves);

    match result.status {
        ReplayStatus::Solved => {
            println!("{SUCCESS_PREFIX} Schedule vaccinates every animal in {} steps", moves.len());
        }
        ReplayStatus::Incomplete => {
            println!(
                "{ERROR_PREFIX} Schedule ends before everyone is vaccinated: {}",
                result.final_state(&config)
            );
        }
        ReplayStatus::GoalBeforeEnd { step } => {
            println!("{ERROR_PREFIX} Everyone is vaccinated before step {}", step + 1);
        }
        ReplayStatus::IllegalMove { step } => {
            println!(
                "{ERROR_PREFIX} Step {} is not allowed from {}: {}",
                step + 1,
                result.final_state(&config),
                moves[step]
            );
        }
    }
    Ok(result.solved())
}

fn format_result(result: &SolverResult) -> SolveOutput {
    SolveOutput {
        solved: result.is_solved(),
        visited_states: result.statistics.visited_states,
        solution_length: result.statistics.solution_length,
        time_elapsed_ms: result.statistics.time_elapsed_ms,
        steps: result
            .solution
            .iter()
            .flatten()
            .map(|step| StepOutput {
                action: step.action.to_string(),
                movement: step.action,
                state: step.state.into(),
            })
            .collect(),
    }
}
