//! Example demonstrating clue generation.
//!
//! This example shows how to:
//! - Configure a grid layout and clue count
//! - Generate a board from a random or fixed seed
//! - Display the board and the seed that reproduces it
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a specific board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64-hex-digit-seed>
//! ```
//!
//! Change the layout or density:
//!
//! ```sh
//! cargo run --example generate_board -- --rows 6 --columns 6 \
//!     --block-height 2 --block-width 3 --clues 12
//! ```

use std::process;

use clap::Parser;
use cluegrid_core::{Board, GridSpec};
use cluegrid_generator::{ClueGenerator, GeneratorSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of grid rows.
    #[arg(long, value_name = "COUNT", default_value_t = 9)]
    rows: u8,

    /// Number of grid columns.
    #[arg(long, value_name = "COUNT", default_value_t = 9)]
    columns: u8,

    /// Height of each block.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    block_height: u8,

    /// Width of each block.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    block_width: u8,

    /// Number of clues to place.
    #[arg(long, value_name = "COUNT", default_value_t = ClueGenerator::DEFAULT_CLUE_COUNT)]
    clues: usize,

    /// Seed (64 hex digits) for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let spec = match GridSpec::new(args.rows, args.columns, args.block_height, args.block_width) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("Invalid layout: {err}");
            process::exit(2);
        }
    };

    let generator = ClueGenerator::new(spec).clue_count(args.clues);
    let result = match &args.seed {
        Some(text) => match text.parse::<GeneratorSeed>() {
            Ok(seed) => generator.generate_with_seed(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => generator.generate(),
    };

    let generated = match result {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Board:");
    print!("{}", render(&generated.board));
}

fn render(board: &Board) -> String {
    let spec = board.spec();
    let blocks_across = usize::from(spec.columns() / spec.block_width());
    let rule = format!(
        "+{}\n",
        format!("{}-+", "-".repeat(usize::from(spec.block_width()) * 2)).repeat(blocks_across)
    );

    let mut out = String::new();
    for row in 0..spec.rows() {
        if row % spec.block_height() == 0 {
            out.push_str(&rule);
        }
        for column in 0..spec.columns() {
            if column % spec.block_width() == 0 {
                out.push_str("| ");
            }
            let cell = board
                .cell_at(cluegrid_core::Position::new(row, column))
                .expect("coordinates are in bounds");
            match cell.value() {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out
}
