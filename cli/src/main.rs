/*
  Perft, a bitboard move generator and PERFT node counter.
  Copyright (C) 2022 The Perft Authors (see AUTHORS.md file)

  Perft is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Perft is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! A one-shot PERFT runner: load a position, count legal move-tree leaves to
//! a fixed depth, report nodes and nodes/second.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use perft_core::{divide, parse_fen, perft, Board, CastleRights, Color, GameState};
use tracing::{error, info, info_span};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Starting position, in FEN. Defaults to the standard start position.
    #[arg(long)]
    fen: Option<String>,

    /// Search depth, in plies.
    #[arg(long)]
    depth: u32,

    /// Print the per-root-move node count breakdown in addition to the total.
    #[arg(long)]
    divide: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let (mut board, mut state) = match &args.fen {
        Some(fen) => match parse_fen(fen) {
            Ok(pair) => pair,
            Err(e) => {
                error!(%e, fen, "failed to parse FEN");
                eprintln!("error: invalid FEN '{fen}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => (Board::start_position(), GameState::new(Color::White, CastleRights::ALL_RIGHTS)),
    };

    let span = info_span!("perft", depth = args.depth, divide = args.divide);
    let _guard = span.enter();
    info!("starting perft");

    let start = Instant::now();
    let nodes = if args.divide {
        let breakdown = divide(&mut board, &mut state, args.depth);
        let mut total = 0;
        for (mv, count) in &breakdown {
            println!("{}: {count}", mv.to_uci());
            total += count;
        }
        total
    } else {
        perft(&mut board, &mut state, args.depth)
    };
    let elapsed = start.elapsed();

    let seconds = elapsed.as_secs_f64();
    let speed = if seconds > 0.0 { nodes as f64 / seconds } else { 0.0 };
    println!("nodes: {nodes}");
    println!("time: {seconds:.3} secs");
    println!("speed: {speed:.0} nodes/sec");
    info!(nodes, seconds, speed, "perft finished");

    ExitCode::SUCCESS
}
