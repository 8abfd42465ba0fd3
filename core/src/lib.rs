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

//! A bitboard chess move generator and PERFT node counter.

mod bitboard;
mod board;
mod castling;
mod color;
mod direction;
mod error;
mod fen;
mod gamestate;
mod magic;
mod maskset;
mod movegen;
mod moves;
mod perft;
mod piece;
mod square;
mod tables;

pub use bitboard::Bitboard;
pub use board::Board;
pub use castling::CastleRights;
pub use color::Color;
pub use direction::Direction;
pub use error::ParseError;
pub use fen::parse as parse_fen;
pub use gamestate::GameState;
pub use magic::MAGIC;
pub use maskset::MaskSet;
pub use movegen::{is_square_attacked, legal_moves, make_move, unmake_move, update_state_for_move, Undo};
pub use moves::{Move, MoveClass};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use square::Square;
