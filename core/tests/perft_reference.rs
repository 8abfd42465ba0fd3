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

//! Published PERFT node counts for the standard start position and a couple
//! of supplementary positions chosen to exercise en passant and castling
//! more heavily than the start position does.

use perft_core::{legal_moves, make_move, parse_fen, perft, Board, CastleRights, Color, GameState, Move};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn start() -> (Board, GameState) {
    (Board::start_position(), GameState::new(Color::White, CastleRights::ALL_RIGHTS))
}

#[test]
fn start_position_depths_one_through_four() {
    let expected = [20u64, 400, 8_902, 197_281];
    for (depth, &want) in (1u32..=4).zip(expected.iter()) {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, depth), want, "depth {depth}");
    }
}

#[test]
#[ignore]
fn start_position_depths_five_through_seven() {
    let expected = [4_865_609u64, 119_060_324, 3_195_901_860];
    for (depth, &want) in (5u32..=7).zip(expected.iter()) {
        let (mut b, mut s) = start();
        assert_eq!(perft(&mut b, &mut s, depth), want, "depth {depth}");
    }
}

#[test]
fn kiwipete_depths_one_through_four() {
    let expected = [48u64, 2_039, 97_862, 4_085_603];
    for (depth, &want) in (1u32..=4).zip(expected.iter()) {
        let (mut b, mut s) = parse_fen(KIWIPETE).unwrap();
        assert_eq!(perft(&mut b, &mut s, depth), want, "depth {depth}");
    }
}

#[test]
#[ignore]
fn kiwipete_depth_five() {
    let (mut b, mut s) = parse_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&mut b, &mut s, 5), 193_690_690);
}

#[test]
fn position_3_depths_one_through_five() {
    let expected = [14u64, 191, 2_812, 43_238, 674_624];
    for (depth, &want) in (1u32..=5).zip(expected.iter()) {
        let (mut b, mut s) = parse_fen(POSITION_3).unwrap();
        assert_eq!(perft(&mut b, &mut s, depth), want, "depth {depth}");
    }
}

#[test]
#[ignore]
fn position_3_depth_six() {
    let (mut b, mut s) = parse_fen(POSITION_3).unwrap();
    assert_eq!(perft(&mut b, &mut s, 6), 11_030_083);
}

#[test]
fn after_e4_black_has_twenty_replies() {
    let (mut b, mut s) = start();
    let e4 = Move::from_uci("e2e4").unwrap();
    let undo = make_move(&mut b, &mut s, e4);
    assert_eq!(legal_moves(&b, &s).len(), 20);
    // Unmake restores the undo return value's state rather than being
    // needed again here, but exercising it keeps the pair together.
    perft_core::unmake_move(&mut b, &mut s, e4, undo);
}

#[test]
fn after_e4_c5_nf3_black_has_twentytwo_replies() {
    let (mut b, mut s) = start();
    for uci in ["e2e4", "c7c5", "g1f3"] {
        let mv = Move::from_uci(uci).unwrap();
        let _ = make_move(&mut b, &mut s, mv);
    }
    assert_eq!(legal_moves(&b, &s).len(), 22);
}
