//! Command-line front end: solve clause-list files or sudoku grids.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use dpll_sat::{dpll_with, load_formula, sudoku, Solution, Strategy};

#[derive(Parser)]
#[command(name = "dpll-sat", version, about = "DPLL SAT solver", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a clause-list file (one clause of integers per line)
    Solve {
        /// Input file
        path: PathBuf,
        /// Also write the result line to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Branch on a random literal instead of the first shortest clause
        #[arg(long)]
        random: bool,
    },
    /// Solve a sudoku grid (81 cells; digits, with 0 or . for blanks)
    Sudoku {
        /// Grid file
        path: PathBuf,
        /// Also write the solved grid to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Solve {
            path,
            output,
            random,
        } => {
            let formula =
                load_formula(&path).with_context(|| format!("reading {}", path.display()))?;
            let strategy = if random {
                Strategy::Random
            } else {
                Strategy::Shortest
            };
            let line = match dpll_with(formula, strategy) {
                Solution::Sat(assignment) => format!("Solution found: {assignment}"),
                Solution::Unsat => "No solution found".to_string(),
            };
            println!("{line}");
            emit(output, &format!("{line}\n"))?;
        }
        Command::Sudoku { path, output } => {
            let text =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let grid = sudoku::parse_grid(&text)?;
            match dpll_with(sudoku::encode(&grid), Strategy::Shortest) {
                Solution::Sat(assignment) => {
                    let solved = sudoku::decode(&assignment)?;
                    let rendered = render_grid(&solved);
                    print!("{rendered}");
                    emit(output, &rendered)?;
                }
                Solution::Unsat => {
                    println!("No solution found");
                    emit(output, "No solution found\n")?;
                }
            }
        }
    }

    Ok(())
}

fn emit(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn render_grid(grid: &[u8; 81]) -> String {
    let mut rendered = String::new();
    for row in grid.chunks(9) {
        for cell in row {
            rendered.push((b'0' + cell) as char);
        }
        rendered.push('\n');
    }
    rendered
}
