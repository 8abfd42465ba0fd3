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

//! Per-ply pin and check masks, built fresh at the top of move generation
//! for the side to move.

use super::{tables, Bitboard, Board, Color, Piece, MAGIC};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Squares the side to move may land on, and the pin/check state of its
/// king, for one ply.
pub struct MaskSet {
    /// "Can move to": empty or enemy-occupied squares, narrowed to the
    /// check mask when in single check.
    pub cmt: Bitboard,
    /// Squares of pieces pinned against the king along a diagonal, plus the
    /// ray back to the pinning slider.
    pub pin_dg: Bitboard,
    /// Same, but along a rank or file.
    pub pin_orth: Bitboard,
    /// Squares which, landed on by the side to move, resolve a single
    /// check. Meaningless when `checkers >= 2`.
    pub check_mask: Bitboard,
    /// `~(pin_dg | pin_orth)`.
    pub nopin: Bitboard,
    /// 0, 1, or 2 (2 meaning double check).
    pub checkers: u8,
}

impl MaskSet {
    #[must_use]
    /// Build the mask set for `color` to move on `board`.
    pub fn new(board: &Board, color: Color) -> MaskSet {
        let own_occ = board.occupancy(color);
        let opp_occ = board.occupancy(!color);
        let king_sq = board.king_square(color);

        let mut check_mask = Bitboard::EMPTY;
        let mut checkers: u8 = 0;

        let knight_checkers =
            tables::KNIGHT_ATTACKS[king_sq as usize] & board.piece_occupancy(!color, Piece::Knight);
        let pawn_checkers = match color {
            Color::White => tables::pawn_attacks_north(Bitboard::from(king_sq)),
            Color::Black => tables::pawn_attacks_south(Bitboard::from(king_sq)),
        } & board.piece_occupancy(!color, Piece::Pawn);

        if !knight_checkers.is_empty() {
            check_mask |= knight_checkers;
            checkers += 1;
        } else if !pawn_checkers.is_empty() {
            check_mask |= pawn_checkers;
            checkers += 1;
        }

        // X-ray through own pieces (they're transparent here) so that a
        // slider behind one of our own pieces is still found as a pinner.
        let enemy_diag = board.piece_occupancy(!color, Piece::Bishop)
            | board.piece_occupancy(!color, Piece::Queen);
        let enemy_orth = board.piece_occupancy(!color, Piece::Rook)
            | board.piece_occupancy(!color, Piece::Queen);
        let diag_pinners = MAGIC.bishop_attacks(opp_occ, king_sq) & enemy_diag;
        let orth_pinners = MAGIC.rook_attacks(opp_occ, king_sq) & enemy_orth;

        let mut pin_dg = Bitboard::EMPTY;
        let mut pin_orth = Bitboard::EMPTY;
        process_pinners(diag_pinners, king_sq, own_occ, &mut check_mask, &mut checkers, &mut pin_dg);
        process_pinners(orth_pinners, king_sq, own_occ, &mut check_mask, &mut checkers, &mut pin_orth);

        let nopin = !(pin_dg | pin_orth);
        let mut cmt = !own_occ;
        if checkers == 1 {
            cmt &= check_mask;
        }

        MaskSet {
            cmt,
            pin_dg,
            pin_orth,
            check_mask,
            nopin,
            checkers,
        }
    }
}

fn process_pinners(
    mut pinners: Bitboard,
    king_sq: super::Square,
    own_occ: Bitboard,
    check_mask: &mut Bitboard,
    checkers: &mut u8,
    goal_mask: &mut Bitboard,
) {
    while let Some(src) = pinners.pop_lowest() {
        let between = Bitboard::between(king_sq, src);
        let ray = between | Bitboard::from(src);
        match (between & own_occ).len() {
            0 => {
                *check_mask |= ray;
                *checkers += 1;
            }
            1 => *goal_mask |= ray,
            _ => {}
        }
    }
}
