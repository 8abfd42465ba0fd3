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

//! The PERFT node counter.
//!
//! `perft` walks the legal move tree to a fixed depth, counting leaves, using
//! the same `Board`/`GameState` pair for the whole recursion: every move is
//! made before recursing and unmade on the way back out, rather than handed a
//! fresh copy of the position at each ply.

use super::{legal_moves, make_move, unmake_move, Board, GameState, Move};
use tracing::debug;

/// Count the number of leaf positions reachable in exactly `depth` plies
/// from `board`/`state`. `depth == 0` counts the position itself (one leaf).
#[must_use]
pub fn perft(board: &mut Board, state: &mut GameState, depth: u32) -> u64 {
    let nodes = perft_search(board, state, depth);
    debug!(depth, nodes, "perft invocation complete");
    nodes
}

fn perft_search(board: &mut Board, state: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut total = 0;
    for mv in moves {
        let undo = make_move(board, state, mv);
        total += perft_search(board, state, depth - 1);
        unmake_move(board, state, mv, undo);
    }

    total
}

/// Run PERFT one ply at a time from the root, returning the node count
/// contributed by each individual root move alongside the move itself (root
/// or "divide" mode).
#[must_use]
pub fn divide(board: &mut Board, state: &mut GameState, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let breakdown: Vec<(Move, u64)> = legal_moves(board, state)
        .into_iter()
        .map(|mv| {
            let undo = make_move(board, state, mv);
            let count = perft_search(board, state, depth - 1);
            unmake_move(board, state, mv, undo);
            (mv, count)
        })
        .collect();
    debug!(depth, root_moves = breakdown.len(), "perft divide complete");
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CastleRights;
    use crate::Color;

    fn start() -> (Board, GameState) {
        (Board::start_position(), GameState::new(Color::White, CastleRights::ALL_RIGHTS))
    }

    #[test]
    fn depth_zero_counts_the_position_itself() {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, 0), 1);
    }

    #[test]
    fn start_position_depth_one() {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, 1), 20);
    }

    #[test]
    fn start_position_depth_two() {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, 2), 400);
    }

    #[test]
    fn start_position_depth_three() {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, 3), 8_902);
    }

    #[test]
    fn start_position_depth_four() {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, 4), 197_281);
    }

    #[test]
    fn divide_totals_match_perft() {
        let (mut b, mut s) = start();
        let total: u64 = divide(&mut b, &mut s, 3).iter().map(|&(_, n)| n).sum();
        assert_eq!(total, perft(&mut b, &mut s, 3));
    }

    #[test]
    fn board_and_state_are_unchanged_after_perft() {
        let (mut b, mut s) = start();
        let (b0, s0) = start();
        let _ = perft(&mut b, &mut s, 3);
        assert_eq!(b, b0);
        assert_eq!(s, s0);
    }

    #[test]
    #[ignore]
    fn start_position_depth_five() {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, 5), 4_865_609);
    }

    #[test]
    #[ignore]
    fn start_position_depth_six() {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, 6), 119_060_324);
    }
}
