#![warn(clippy::pedantic)]

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use corner_table::{CORNER_STATES, NibbleTable, generate, lookup};
use cube3::{CubeState, parse_move_sequence};
use log::{LevelFilter, info};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Generates and inspects the corner heuristic table of a 3x3x3 solver.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the table and write the 44089920-byte blob to a file.
    Generate {
        /// Where to write the table.
        output: PathBuf,

        /// Generate about this scramble of the solved cube instead of the
        /// solved cube itself.
        #[arg(long)]
        scramble: Option<String>,
    },
    /// Print the heuristic distance of a scrambled cube.
    Lookup {
        /// A table file produced by `generate`.
        table: PathBuf,

        /// Move sequence applied to the solved cube, e.g. "R U' F2".
        scramble: String,
    },
    /// Print the distance histogram of a table file.
    Stats {
        /// A table file produced by `generate`.
        table: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Generate { output, scramble } => {
            let reference = match scramble {
                Some(sequence) => scrambled(&sequence)?,
                None => CubeState::SOLVED,
            };
            let mut table = NibbleTable::new();
            generate(&mut table, &reference)?;

            let mut sink = BufWriter::new(
                File::create(&output)
                    .wrap_err_with(|| format!("cannot create {}", output.display()))?,
            );
            table
                .write_to(&mut sink)
                .and_then(|()| sink.flush())
                .wrap_err_with(|| format!("cannot write table to {}", output.display()))?;
            info!(
                "wrote {} bytes to {}",
                table.as_bytes().len(),
                output.display()
            );
        }
        Commands::Lookup { table, scramble } => {
            let table = read_table(&table)?;
            let state = scrambled(&scramble)?;
            println!("{}", lookup(&table, &state));
        }
        Commands::Stats { table } => {
            let table = read_table(&table)?;
            let mut histogram = [0_u64; 16];
            for index in 0..CORNER_STATES {
                histogram[usize::from(table.get(index))] += 1;
            }

            for (nibble, &count) in histogram.iter().enumerate().skip(1) {
                if count > 0 {
                    println!("distance {:>2}: {count:>9}", nibble - 1);
                }
            }
            println!("unset      : {:>9}", histogram[0]);
            println!(
                "filled     : {:>9}/{}",
                u64::from(CORNER_STATES) - histogram[0],
                CORNER_STATES
            );
        }
    }

    Ok(())
}

fn scrambled(sequence: &str) -> color_eyre::Result<CubeState> {
    let turns = parse_move_sequence(sequence)?;
    Ok(CubeState::SOLVED.scrambled_by(&turns))
}

fn read_table(path: &Path) -> color_eyre::Result<NibbleTable> {
    let mut source = BufReader::new(
        File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?,
    );
    NibbleTable::read_from(&mut source)
        .wrap_err_with(|| format!("{} is not a complete corner table", path.display()))
}
