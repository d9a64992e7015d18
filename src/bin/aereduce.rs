//! Lattice Ambiguity Elimination - Command Line Interface
//!
//! Runs the reduction schemes on synthetic problem instances and reports
//! decisions, timings and objective call counts.

use clap::{Parser, ValueEnum};
use lattice_ae::{
    brute_force, write_truth_table, FacilityLocationObjective, InteractionObjective, Monotonicity,
    Objective, Reduction,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Run lattice reduction to its fixed point (default)
    Ae,
    /// Run full reduction: lattice reduction plus exact branching
    Eae,
    /// Exhaustively search all 2^n decision vectors
    BruteForce,
    /// Dump the objective's full truth table
    Dump,
}

#[derive(Debug, Clone, ValueEnum)]
enum Mode {
    /// Marginal values shrink as the open set grows
    Submodular,
    /// Marginal values grow as the open set grows
    Supermodular,
}

impl From<Mode> for Monotonicity {
    fn from(val: Mode) -> Self {
        match val {
            Mode::Submodular => Monotonicity::Submodular,
            Mode::Supermodular => Monotonicity::Supermodular,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum ObjectiveKind {
    /// Fixed costs plus pairwise interaction profit (supermodular)
    Interaction,
    /// Uncapacitated facility location as maximization (submodular)
    Facility,
}

#[derive(Parser, Debug)]
#[command(name = "aereduce")]
#[command(about = "Lattice-based ambiguity elimination for facility decisions", long_about = None)]
#[command(version)]
struct Args {
    /// Number of facilities
    #[arg(value_name = "FACILITIES", default_value_t = 10)]
    facilities: usize,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "ae")]
    command: Command,

    /// Monotonicity class assumed of the objective
    #[arg(short, long, value_enum, default_value = "submodular")]
    mode: Mode,

    /// Synthetic objective family
    #[arg(long, value_enum, default_value = "facility")]
    objective: ObjectiveKind,

    /// Seed for the objective's random parameters
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Suppress the per-facility decision listing
    #[arg(short = 'x', long = "no-output")]
    no_output: bool,

    /// Output file for the truth table dump (stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    out_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let objective: Box<dyn Objective> = match args.objective {
        ObjectiveKind::Interaction => {
            Box::new(InteractionObjective::new(args.facilities, args.seed))
        }
        ObjectiveKind::Facility => {
            Box::new(FacilityLocationObjective::new(args.facilities, args.seed))
        }
    };

    match args.command {
        Command::Ae | Command::Eae => {
            let mut reduction =
                Reduction::new(objective.as_ref(), args.facilities, args.mode.clone().into());

            let start = Instant::now();
            match args.command {
                Command::Ae => {
                    reduction.reduce();
                }
                _ => {
                    reduction.reduce_fully();
                }
            }
            let elapsed = start.elapsed();

            if !args.no_output && args.facilities < 50 {
                for (i, (&open, &ambiguous)) in reduction
                    .decisions()
                    .iter()
                    .zip(reduction.ambiguity().iter())
                    .enumerate()
                {
                    println!(
                        "{}, decision: {}, is ambiguous: {}",
                        i, open as u8, ambiguous as u8
                    );
                }
            }

            let stats = reduction.stats();
            let num_open = reduction
                .decisions()
                .iter()
                .zip(reduction.ambiguity().iter())
                .filter(|&(&open, &ambiguous)| open && !ambiguous)
                .count();

            println!("Total time took is {:.3} s", elapsed.as_secs_f64());
            println!(
                "Percentage of decisions eliminated: {:.3}",
                stats.percent_eliminated()
            );
            println!("# open facilities\t\t{}", num_open);
            println!("# ambiguous decisions\t\t{}", stats.num_ambiguous);
            println!("# profit calculations\t\t{}", stats.profit_calls);
        }

        Command::BruteForce => {
            let start = Instant::now();
            let (optimal, profit) = brute_force(objective.as_ref(), args.facilities);
            let elapsed = start.elapsed();

            if !args.no_output && args.facilities < 50 {
                for (i, &open) in optimal.iter().enumerate() {
                    println!("{}, decision: {}", i, open as u8);
                }
            }
            println!("Result is {:.3}", profit);
            println!("Total time took is {:.3} s", elapsed.as_secs_f64());
        }

        Command::Dump => {
            let result = match args.out_file {
                Some(ref path) => File::create(path).and_then(|file| {
                    let mut out = BufWriter::new(file);
                    write_truth_table(objective.as_ref(), args.facilities, &mut out)?;
                    out.flush()
                }),
                None => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    write_truth_table(objective.as_ref(), args.facilities, &mut out)
                        .and_then(|_| out.flush())
                }
            };
            if let Err(e) = result {
                eprintln!("Error writing truth table: {}", e);
                process::exit(1);
            }
        }
    }
}
