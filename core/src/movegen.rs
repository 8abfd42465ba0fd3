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

//! Legal move generation.
//!
//! `legal_moves` builds a `MaskSet` once for the side to move and uses it to
//! constrain every piece's reach: unpinned pieces are free to land on any
//! `cmt` square, pinned pieces are additionally confined to the ray back to
//! their pinner, and king moves are checked by simulating the king's own
//! departure before asking whether the destination is attacked.

use super::{tables, Bitboard, Board, Color, GameState, MaskSet, Move, MoveClass, Piece, Square, MAGIC};

#[must_use]
/// Every legal move available to `state.side_to_move` on `board`.
pub fn legal_moves(board: &Board, state: &GameState) -> Vec<Move> {
    let color = state.side_to_move;
    let masks = MaskSet::new(board, color);
    let mut moves = Vec::with_capacity(48);

    king_moves(board, color, &mut moves);

    if masks.checkers < 2 {
        pawn_moves(board, state, color, &masks, &mut moves);
        knight_moves(board, color, &masks, &mut moves);
        slider_moves(board, color, &masks, &mut moves);
        if masks.checkers == 0 {
            castles(board, state, color, &mut moves);
        }
    }

    moves
}

/// Every attacker of `by_color` that would strike `sq` given `occupancy`,
/// which may differ from `board.occupied()` when simulating a move.
fn attackers(board: &Board, sq: Square, by_color: Color, occupancy: Bitboard) -> Bitboard {
    let mut atk = Bitboard::EMPTY;

    let pawn_candidates = match by_color {
        Color::White => tables::pawn_attacks_south(Bitboard::from(sq)),
        Color::Black => tables::pawn_attacks_north(Bitboard::from(sq)),
    };
    atk |= pawn_candidates & board.piece_occupancy(by_color, Piece::Pawn);
    atk |= tables::KNIGHT_ATTACKS[sq as usize] & board.piece_occupancy(by_color, Piece::Knight);
    atk |= tables::KING_ATTACKS[sq as usize] & board.piece_occupancy(by_color, Piece::King);

    let diag = board.piece_occupancy(by_color, Piece::Bishop) | board.piece_occupancy(by_color, Piece::Queen);
    atk |= MAGIC.bishop_attacks(occupancy, sq) & diag;
    let orth = board.piece_occupancy(by_color, Piece::Rook) | board.piece_occupancy(by_color, Piece::Queen);
    atk |= MAGIC.rook_attacks(occupancy, sq) & orth;

    atk
}

#[must_use]
/// Whether `sq` is attacked by `by_color` on the current board.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    !attackers(board, sq, by_color, board.occupied()).is_empty()
}

fn king_moves(board: &Board, color: Color, moves: &mut Vec<Move>) {
    let king_sq = board.king_square(color);
    let own_occ = board.occupancy(color);
    let enemy = !color;

    for to in tables::KING_ATTACKS[king_sq as usize] & !own_occ {
        // Lift the king off its own square first: otherwise a slider firing
        // straight through the king's old square would look blocked by the
        // king itself, and the destination would be falsely ruled safe.
        let simulated_occ = (board.occupied() ^ Bitboard::from(king_sq)) | Bitboard::from(to);
        if attackers(board, to, enemy, simulated_occ).is_empty() {
            moves.push(Move::normal(king_sq, to));
        }
    }
}

/// Restrict `from`'s reach to the pin ray it is confined to, if any.
fn pin_allows(from: Square, to: Square, masks: &MaskSet) -> bool {
    if masks.pin_dg.contains(from) {
        masks.pin_dg.contains(to)
    } else if masks.pin_orth.contains(from) {
        masks.pin_orth.contains(to)
    } else {
        true
    }
}

fn knight_moves(board: &Board, color: Color, masks: &MaskSet, moves: &mut Vec<Move>) {
    // A pinned knight can never stay aligned with the pin ray while moving,
    // so `masks.nopin` rules out pinned knights entirely, not just some of
    // their targets.
    for from in board.piece_occupancy(color, Piece::Knight) & masks.nopin {
        for to in tables::KNIGHT_ATTACKS[from as usize] & masks.cmt {
            moves.push(Move::normal(from, to));
        }
    }
}

/// The reach of the slider on `from`, given which pin (if any) it is under.
/// A queen's diagonal-only or orthogonal-only reach while pinned is not a
/// separate piece tag: it falls out of calling `bishop_attacks` or
/// `rook_attacks` directly, selected by the pin mask the queen was found in.
fn slider_targets(board: &Board, from: Square, piece: Piece, masks: &MaskSet) -> Bitboard {
    let occ = board.occupied();
    let diag = matches!(piece, Piece::Bishop | Piece::Queen);
    let orth = matches!(piece, Piece::Rook | Piece::Queen);

    let reach = if masks.pin_dg.contains(from) {
        if diag {
            MAGIC.bishop_attacks(occ, from) & masks.pin_dg
        } else {
            Bitboard::EMPTY
        }
    } else if masks.pin_orth.contains(from) {
        if orth {
            MAGIC.rook_attacks(occ, from) & masks.pin_orth
        } else {
            Bitboard::EMPTY
        }
    } else {
        let mut reach = Bitboard::EMPTY;
        if diag {
            reach |= MAGIC.bishop_attacks(occ, from);
        }
        if orth {
            reach |= MAGIC.rook_attacks(occ, from);
        }
        reach
    };

    reach & masks.cmt
}

fn slider_moves(board: &Board, color: Color, masks: &MaskSet, moves: &mut Vec<Move>) {
    for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
        for from in board.piece_occupancy(color, piece) {
            for to in slider_targets(board, from, piece, masks) {
                moves.push(Move::normal(from, to));
            }
        }
    }
}

/// The rank a capturing pawn of `color` lands on when taking en passant.
fn ep_target_square(color: Color, file: u8) -> Square {
    let rank = match color {
        Color::White => 5,
        Color::Black => 2,
    };
    Square::new(rank, file as usize).expect("file is always in 0..8")
}

/// Whether an en passant capture from `from` to `to` leaves the king of
/// `color` safe, simulating the removal of both pawns involved. This can
/// expose a pin along the capture rank that the ordinary pin masks (built
/// against the captured pawn's own square) never see.
fn en_passant_is_safe(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let king_sq = board.king_square(color);
    let captured_sq = Board::ep_captured_square(color, to);
    let simulated_occ =
        (board.occupied() ^ Bitboard::from(from) ^ Bitboard::from(captured_sq)) | Bitboard::from(to);

    let enemy_orth = board.piece_occupancy(!color, Piece::Rook) | board.piece_occupancy(!color, Piece::Queen);
    let enemy_diag = board.piece_occupancy(!color, Piece::Bishop) | board.piece_occupancy(!color, Piece::Queen);

    (MAGIC.rook_attacks(simulated_occ, king_sq) & enemy_orth).is_empty()
        && (MAGIC.bishop_attacks(simulated_occ, king_sq) & enemy_diag).is_empty()
}

fn pawn_moves(board: &Board, state: &GameState, color: Color, masks: &MaskSet, moves: &mut Vec<Move>) {
    let own_pawns = board.piece_occupancy(color, Piece::Pawn);
    let enemy_occ = board.occupancy(!color);
    let empty = !board.occupied();
    let dir = color.pawn_direction();
    let double_dir = dir + dir;
    let promote_rank = color.pawn_promote_rank();

    for from in own_pawns {
        let single_to = from + dir;
        let path_clear = empty.contains(single_to);

        // Push. Gated on masks.cmt independently of the double push below:
        // a single push and a double push can block a checking ray at
        // different squares, so one landing off cmt must not suppress the
        // other.
        if path_clear && pin_allows(from, single_to, masks) && masks.cmt.contains(single_to) {
            push_pawn_move(from, single_to, promote_rank, moves);
        }

        // Double push, only possible once the square the pawn passes over is
        // empty.
        if path_clear && color.pawn_start_rank().contains(from) {
            let double_to = from + double_dir;
            if empty.contains(double_to) && pin_allows(from, double_to, masks) && masks.cmt.contains(double_to) {
                moves.push(Move::normal(from, double_to));
            }
        }

        // Captures.
        let attack_bb = match color {
            Color::White => tables::pawn_attacks_north(Bitboard::from(from)),
            Color::Black => tables::pawn_attacks_south(Bitboard::from(from)),
        };
        for to in attack_bb & enemy_occ & masks.cmt {
            if pin_allows(from, to, masks) {
                push_pawn_move(from, to, promote_rank, moves);
            }
        }

        // En passant.
        if let Some(file) = state.ep_file {
            let target = ep_target_square(color, file);
            if attack_bb.contains(target) {
                let captured_sq = Board::ep_captured_square(color, target);
                let resolves_check =
                    masks.checkers == 0 || masks.check_mask.contains(captured_sq) || masks.check_mask.contains(target);
                if resolves_check
                    && pin_allows(from, target, masks)
                    && en_passant_is_safe(board, color, from, target)
                {
                    moves.push(Move::en_passant(from, target));
                }
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, promote_rank: Bitboard, moves: &mut Vec<Move>) {
    if promote_rank.contains(to) {
        for &promote_type in &Piece::PROMOTE_TYPES {
            moves.push(Move::promoting(from, to, promote_type));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}

/// Squares (other than the king's own) that must be unattacked for kingside
/// castling to be legal, and the square-pair that must be empty.
fn kingside_castle_squares(color: Color) -> ([Square; 2], [Square; 2]) {
    match color {
        Color::White => ([Square::F1, Square::G1], [Square::F1, Square::G1]),
        Color::Black => ([Square::F8, Square::G8], [Square::F8, Square::G8]),
    }
}

/// Same, for queenside: the passthrough squares that must be unattacked
/// (c, d) and the squares that must merely be empty (b, c, d).
fn queenside_castle_squares(color: Color) -> ([Square; 2], [Square; 3]) {
    match color {
        Color::White => ([Square::C1, Square::D1], [Square::B1, Square::C1, Square::D1]),
        Color::Black => ([Square::C8, Square::D8], [Square::B8, Square::C8, Square::D8]),
    }
}

fn castles(board: &Board, state: &GameState, color: Color, moves: &mut Vec<Move>) {
    let king_sq = board.king_square(color);
    let occ = board.occupied();

    if state.can_castle_kingside(color) {
        let (attacked_check, empty_check) = kingside_castle_squares(color);
        let path_clear = empty_check.iter().all(|&sq| !occ.contains(sq));
        let path_safe = attacked_check.iter().all(|&sq| !is_square_attacked(board, sq, !color));
        if path_clear && path_safe {
            moves.push(Move::castling(king_sq, attacked_check[1]));
        }
    }

    if state.can_castle_queenside(color) {
        let (attacked_check, empty_check) = queenside_castle_squares(color);
        let path_clear = empty_check.iter().all(|&sq| !occ.contains(sq));
        let path_safe = attacked_check.iter().all(|&sq| !is_square_attacked(board, sq, !color));
        if path_clear && path_safe {
            moves.push(Move::castling(king_sq, attacked_check[0]));
        }
    }
}

/// Update `state` for a move about to be made on `board` (which must still
/// reflect the position *before* the move), clearing or setting en passant
/// availability and revoking castling rights as appropriate.
pub fn update_state_for_move(board: &Board, state: &mut GameState, mv: Move) {
    let color = state.side_to_move;
    let moving_piece = board.piece_at(mv.from_square());
    state.clear_ep();

    if mv.is_castle() || moving_piece == Some(Piece::King) {
        state.remove_castle_rights(color);
    } else if moving_piece == Some(Piece::Rook) {
        revoke_rook_right(state, color, mv.from_square());
    }

    if let Some(captured) = board.piece_at(mv.to_square()) {
        if captured == Piece::Rook {
            revoke_rook_right(state, !color, mv.to_square());
        }
    }

    if moving_piece == Some(Piece::Pawn) && mv.from_square().chebyshev_to(mv.to_square()) == 2 {
        if let Some(file) = board.pawn_double_ep_file(color, mv.to_square()) {
            state.set_ep(file);
        }
    }

    state.side_to_move = !color;
}

#[derive(Clone, Copy, Debug)]
/// Everything `unmake_move` needs to reverse a `make_move` call, besides the
/// `Move` itself: the game state from just before the move, and the pieces
/// involved that the post-move board can no longer tell us (the moving
/// piece's original type, and whatever was captured).
pub struct Undo {
    state: GameState,
    class: MoveClass,
    moving_piece: Piece,
    captured: Option<Piece>,
}

/// The kingside/queenside code `Board::make_castle`/`unmake_castle` expects,
/// recovered from the king's destination file.
fn castle_code_for(mv: Move) -> u8 {
    match mv.to_square().file() {
        6 => 0,
        2 => 1,
        _ => unreachable!("a castling move always lands the king on the g- or c-file"),
    }
}

#[must_use]
/// Apply `mv` to `board`, updating `state` to match, and return an `Undo`
/// that can later reverse it with `unmake_move`.
///
/// # Panics
///
/// Panics if `mv` does not originate from an occupied square, or promotes to
/// something other than `Piece::PROMOTE_TYPES`.
pub fn make_move(board: &mut Board, state: &mut GameState, mv: Move) -> Undo {
    let color = state.side_to_move;
    let from = mv.from_square();
    let to = mv.to_square();
    let class = mv.class(board);
    let moving_piece = board
        .piece_at(from)
        .expect("a move must originate from an occupied square");
    let captured = match class {
        MoveClass::Capture | MoveClass::Promotion => board.piece_at(to),
        MoveClass::EnPassant | MoveClass::Castle | MoveClass::Quiet | MoveClass::PawnDouble => None,
    };

    let saved_state = *state;
    update_state_for_move(board, state, mv);

    match class {
        MoveClass::Quiet => board.make_quiet(color, moving_piece, from, to),
        MoveClass::Capture => board.make_capture(color, moving_piece, captured.expect("capture always captures"), from, to),
        MoveClass::Castle => board.make_castle(color, castle_code_for(mv)),
        MoveClass::EnPassant => board.make_en_passant(color, from, to),
        MoveClass::PawnDouble => board.make_pawn_double(color, from, to),
        MoveClass::Promotion => board.make_promotion(
            color,
            mv.promote_type().expect("promotion move always carries a promote type"),
            captured,
            from,
            to,
        ),
    }

    Undo { state: saved_state, class, moving_piece, captured }
}

/// Reverse a `make_move` call. `mv` and `undo` must be exactly the values
/// produced by that call, applied to the same board.
pub fn unmake_move(board: &mut Board, state: &mut GameState, mv: Move, undo: Undo) {
    let color = undo.state.side_to_move;
    let from = mv.from_square();
    let to = mv.to_square();

    match undo.class {
        MoveClass::Quiet => board.unmake_quiet(color, undo.moving_piece, from, to),
        MoveClass::Capture => {
            board.unmake_capture(color, undo.moving_piece, undo.captured.expect("capture always captures"), from, to);
        }
        MoveClass::Castle => board.unmake_castle(color, castle_code_for(mv)),
        MoveClass::EnPassant => board.unmake_en_passant(color, from, to),
        MoveClass::PawnDouble => board.unmake_pawn_double(color, from, to),
        MoveClass::Promotion => board.unmake_promotion(
            color,
            mv.promote_type().expect("promotion move always carries a promote type"),
            undo.captured,
            from,
            to,
        ),
    }

    *state = undo.state;
}

fn revoke_rook_right(state: &mut GameState, color: Color, sq: Square) {
    let kingside_rook = match color {
        Color::White => Square::H1,
        Color::Black => Square::H8,
    };
    let queenside_rook = match color {
        Color::White => Square::A1,
        Color::Black => Square::A8,
    };
    if sq == kingside_rook {
        state.remove_kingside_castle_right(color);
    } else if sq == queenside_rook {
        state.remove_queenside_castle_right(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CastleRights, GameState};

    fn start(color: Color) -> (Board, GameState) {
        (Board::start_position(), GameState::new(color, CastleRights::ALL_RIGHTS))
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let (b, gs) = start(Color::White);
        assert_eq!(legal_moves(&b, &gs).len(), 20);
    }

    #[test]
    fn king_in_check_must_respond() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::King, Color::Black, Square::E8);
        b.add(Piece::Rook, Color::Black, Square::E5);
        let gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        let moves = legal_moves(&b, &gs);
        // King can step off the file, or block on e2/e3/e4.
        assert!(moves.iter().all(|m| {
            m.from_square() == Square::E1 || (m.to_square().file() == 4 && m.to_square().rank() < 4)
        }));
        assert!(!moves.is_empty());
    }

    #[test]
    fn double_check_only_allows_king_moves() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::King, Color::Black, Square::E8);
        b.add(Piece::Rook, Color::Black, Square::E5);
        b.add(Piece::Knight, Color::Black, Square::D3);
        let gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        let moves = legal_moves(&b, &gs);
        assert!(moves.iter().all(|m| m.from_square() == Square::E1));
        assert!(!moves.is_empty());
    }

    #[test]
    fn pinned_rook_may_only_move_along_the_pin() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::King, Color::Black, Square::H8);
        b.add(Piece::Rook, Color::White, Square::E4);
        b.add(Piece::Rook, Color::Black, Square::E8);
        let gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        let moves = legal_moves(&b, &gs);
        let rook_moves: Vec<Move> = moves.iter().copied().filter(|m| m.from_square() == Square::E4).collect();
        assert!(rook_moves.iter().all(|m| m.to_square().file() == 4));
        assert!(rook_moves.iter().any(|m| m.to_square() == Square::E8));
    }

    #[test]
    fn bishop_off_the_pin_line_does_not_restrict_the_rook() {
        // King e1, rook a1, bishop a6: superficially pin-shaped (rook and
        // bishop share the a-file), but e1 is not on that file and shares no
        // rank/file/diagonal with a6 either, so there is no real pin. The
        // bishop still blocks the rook's file moves at a6 like any other
        // enemy piece would, but the rook must keep its rank moves too: a
        // genuine pin along the a-file would wrongly suppress those.
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::King, Color::Black, Square::H8);
        b.add(Piece::Rook, Color::White, Square::A1);
        b.add(Piece::Bishop, Color::Black, Square::A6);
        let gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        let moves = legal_moves(&b, &gs);
        let rook_moves: Vec<Move> = moves.iter().copied().filter(|m| m.from_square() == Square::A1).collect();
        assert!(rook_moves.iter().any(|m| m.to_square() == Square::A6));
        assert!(rook_moves.iter().any(|m| m.to_square() == Square::D1));
        assert_eq!(rook_moves.len(), 8);
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::King, Color::Black, Square::H8);
        b.add(Piece::Knight, Color::White, Square::E4);
        b.add(Piece::Rook, Color::Black, Square::E8);
        let gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        let moves = legal_moves(&b, &gs);
        assert!(moves.iter().all(|m| m.from_square() != Square::E4));
    }

    #[test]
    fn promotion_generates_all_four_piece_types() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::A1);
        b.add(Piece::King, Color::Black, Square::H8);
        b.add(Piece::Pawn, Color::White, Square::B7);
        let gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        let moves = legal_moves(&b, &gs);
        let promos: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|m| m.from_square() == Square::B7 && m.to_square() == Square::B8)
            .collect();
        assert_eq!(promos.len(), 4);
    }

    #[test]
    fn en_passant_capture_is_generated_when_available() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::A1);
        b.add(Piece::King, Color::Black, Square::H8);
        b.add(Piece::Pawn, Color::White, Square::E5);
        b.add(Piece::Pawn, Color::Black, Square::D5);
        let mut gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        gs.set_ep(3);
        let moves = legal_moves(&b, &gs);
        assert!(moves.iter().any(|m| m.is_en_passant() && m.to_square() == Square::D6));
    }

    #[test]
    fn en_passant_is_forbidden_when_it_exposes_the_king() {
        // White king on a5, white pawn on b5, black pawn on c5 (just double
        // pushed), black rook on h5: capturing en passant removes both pawns
        // from the fifth rank, exposing the king to the rook.
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::A5);
        b.add(Piece::King, Color::Black, Square::H1);
        b.add(Piece::Pawn, Color::White, Square::B5);
        b.add(Piece::Pawn, Color::Black, Square::C5);
        b.add(Piece::Rook, Color::Black, Square::H5);
        let mut gs = GameState::new(Color::White, CastleRights::NO_RIGHTS);
        gs.set_ep(2);
        let moves = legal_moves(&b, &gs);
        assert!(!moves.iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn castling_requires_a_clear_and_unattacked_path() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::Rook, Color::White, Square::H1);
        b.add(Piece::King, Color::Black, Square::E8);
        let gs = GameState::new(Color::White, CastleRights::king_castle(Color::White));
        let moves = legal_moves(&b, &gs);
        assert!(moves.iter().any(|m| m.is_castle() && m.to_square() == Square::G1));

        b.add(Piece::Rook, Color::Black, Square::F8);
        let moves = legal_moves(&b, &gs);
        assert!(!moves.iter().any(|m| m.is_castle()));
    }

    #[test]
    fn castling_is_forbidden_while_in_check() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::Rook, Color::White, Square::H1);
        b.add(Piece::King, Color::Black, Square::H8);
        b.add(Piece::Rook, Color::Black, Square::E8);
        let gs = GameState::new(Color::White, CastleRights::ALL_RIGHTS);
        let moves = legal_moves(&b, &gs);
        assert!(!moves.iter().any(|m| m.is_castle()));
    }

    #[test]
    fn make_unmake_round_trips_through_every_legal_move() {
        let mut b = Board::start_position();
        let before = b.clone();
        let mut gs = GameState::new(Color::White, CastleRights::ALL_RIGHTS);
        let before_gs = gs;
        for mv in legal_moves(&b, &gs) {
            let undo = make_move(&mut b, &mut gs, mv);
            assert!(b.is_consistent());
            unmake_move(&mut b, &mut gs, mv, undo);
            assert_eq!(b, before);
            assert_eq!(gs, before_gs);
        }
    }

    #[test]
    fn make_move_updates_castle_rights_on_rook_move() {
        let mut b = Board::empty();
        b.add(Piece::King, Color::White, Square::E1);
        b.add(Piece::Rook, Color::White, Square::A1);
        b.add(Piece::King, Color::Black, Square::E8);
        let mut gs = GameState::new(Color::White, CastleRights::ALL_RIGHTS);
        let _ = make_move(&mut b, &mut gs, Move::normal(Square::A1, Square::A2));
        assert!(!GameState::new(Color::White, gs.castle_rights).can_castle_queenside(Color::White));
    }
}
