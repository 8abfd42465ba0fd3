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

//! FEN (Forsyth-Edwards Notation) parsing.

use super::{Board, CastleRights, Color, GameState, Piece, Square};
use crate::error::ParseError;
use tracing::{debug, warn};

/// Parse a FEN string into a board and the game state (side to move,
/// castling rights, en passant file) that goes with it. Move clock fields,
/// if present, are ignored.
///
/// # Errors
///
/// Returns `ParseError` if `fen` is not a well-formed FEN string.
pub fn parse(fen: &str) -> Result<(Board, GameState), ParseError> {
    match parse_inner(fen) {
        Ok(pair) => {
            debug!(fen, "loaded position from FEN");
            Ok(pair)
        }
        Err(e) => {
            warn!(fen, %e, "failed to parse FEN");
            Err(e)
        }
    }
}

fn parse_inner(fen: &str) -> Result<(Board, GameState), ParseError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParseError::WrongFieldCount(fen.to_string()));
    }

    let board = parse_placement(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castle_rights = parse_castle_rights(fields[2])?;
    let ep_file = parse_ep_file(fields[3])?;

    let mut state = GameState::new(side_to_move, castle_rights);
    if let Some(file) = ep_file {
        state.set_ep(file);
    }

    Ok((board, state))
}

fn parse_placement(field: &str) -> Result<Board, ParseError> {
    let mut board = Board::empty();
    let mut rank = 7usize;
    let mut file = 0usize;

    for chr in field.chars() {
        if chr == '/' {
            if file != 8 || rank == 0 {
                return Err(ParseError::BadPiecePlacement(field.to_string()));
            }
            rank -= 1;
            file = 0;
            continue;
        }
        if let Some(blanks) = chr.to_digit(10) {
            file += blanks as usize;
            continue;
        }
        let color = if chr.is_uppercase() { Color::White } else { Color::Black };
        let piece = chr
            .to_uppercase()
            .next()
            .and_then(Piece::from_code)
            .ok_or_else(|| ParseError::BadPiecePlacement(field.to_string()))?;
        let sq = Square::new(rank, file).ok_or_else(|| ParseError::BadPiecePlacement(field.to_string()))?;
        board.add(piece, color, sq);
        file += 1;
    }

    if file != 8 || rank != 0 || !board.is_consistent() {
        return Err(ParseError::BadPiecePlacement(field.to_string()));
    }

    Ok(board)
}

fn parse_side_to_move(field: &str) -> Result<Color, ParseError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ParseError::BadSideToMove(field.to_string())),
    }
}

fn parse_castle_rights(field: &str) -> Result<CastleRights, ParseError> {
    if field == "-" {
        return Ok(CastleRights::NO_RIGHTS);
    }
    let mut rights = CastleRights::NO_RIGHTS;
    for chr in field.chars() {
        rights |= match chr {
            'K' => CastleRights::king_castle(Color::White),
            'Q' => CastleRights::queen_castle(Color::White),
            'k' => CastleRights::king_castle(Color::Black),
            'q' => CastleRights::queen_castle(Color::Black),
            _ => return Err(ParseError::BadCastlingRights(field.to_string())),
        };
    }
    Ok(rights)
}

fn parse_ep_file(field: &str) -> Result<Option<u8>, ParseError> {
    if field == "-" {
        return Ok(None);
    }
    let sq = Square::from_algebraic(field).map_err(|_| ParseError::BadEnPassantSquare(field.to_string()))?;
    #[allow(clippy::cast_possible_truncation)]
    Ok(Some(sq.file() as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_round_trips() {
        let (board, state) = parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(board, Board::start_position());
        assert_eq!(state.side_to_move, Color::White);
        assert_eq!(state.castle_rights, CastleRights::ALL_RIGHTS);
        assert_eq!(state.ep_file, None);
    }

    #[test]
    fn kiwipete_parses() {
        let (board, state) =
            parse("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        assert!(board.is_consistent());
        assert_eq!(state.side_to_move, Color::White);
        assert!(state.can_castle_kingside(Color::White));
        assert!(state.can_castle_queenside(Color::Black));
    }

    #[test]
    fn en_passant_file_is_parsed() {
        let (_, state) =
            parse("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
        assert_eq!(state.ep_file, Some(3));
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert!(parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq").is_err());
    }

    #[test]
    fn bad_piece_char_is_rejected() {
        assert!(parse("xnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
    }

    #[test]
    fn bad_side_to_move_is_rejected() {
        assert!(parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
    }
}
