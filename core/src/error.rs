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

//! Error types for the crate's two parsing surfaces: FEN and coordinate
//! move notation. The generator, mask builder, and make/unmake primitives
//! operate only on positions already known to be legal and never return
//! `Result`; invariant violations there are bugs, signaled by `panic!`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// An error encountered while parsing a FEN string or a coordinate move.
pub enum ParseError {
    #[error("FEN string has wrong number of fields: {0:?}")]
    WrongFieldCount(String),

    #[error("invalid piece placement field: {0}")]
    BadPiecePlacement(String),

    #[error("invalid side-to-move field: {0:?}")]
    BadSideToMove(String),

    #[error("invalid castling rights field: {0:?}")]
    BadCastlingRights(String),

    #[error("invalid en passant target square: {0:?}")]
    BadEnPassantSquare(String),

    #[error("malformed coordinate move: {0:?}")]
    MalformedMove(String),
}
