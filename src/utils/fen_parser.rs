//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! board, side to move, rights, en-passant target and clocks. FEN carries no
//! per-piece move history, so `has_moved` is reconstructed from start squares
//! and castling rights.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    king_home, pawn_start_rank, KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(reason.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(invalid(format!(
            "expected 6 fields, found {} in {fen:?}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();

    parse_board(fields[0], &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    game_state.en_passant_square = parse_en_passant_square(fields[3])?;
    game_state.halfmove_clock = fields[4]
        .parse::<u16>()
        .map_err(|_| invalid(format!("halfmove clock {:?}", fields[4])))?;
    game_state.fullmove_number = fields[5]
        .parse::<u16>()
        .map_err(|_| invalid(format!("fullmove number {:?}", fields[5])))?;

    derive_has_moved(&mut game_state);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                file += empty_count as i8;
                if file > 8 {
                    return Err(invalid(format!("rank {} has too many files", board_rank + 1)));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("piece character '{ch}' in board layout")))?;

            if file >= 8 {
                return Err(invalid(format!("rank {} has too many files", board_rank + 1)));
            }

            game_state.set_piece(Square::new(board_rank, file), Piece::new(kind, color));
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side-to-move field {side_part:?}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("en-passant square {en_passant_part:?}")))?;
    if square.rank != 2 && square.rank != 5 {
        return Err(invalid(format!(
            "en-passant square {en_passant_part} is not on rank 3 or 6"
        )));
    }

    Ok(Some(square))
}

/// Pawns off their start rank have moved; kings and rooks count as unmoved
/// only when a castling right still needs them.
fn derive_has_moved(game_state: &mut GameState) {
    let rights = game_state.castling_rights;

    for index in 0..64 {
        let square = Square::from_index(index);
        let piece = game_state.board[index];
        let has_moved = match piece.kind {
            PieceKind::Pawn => square.rank != pawn_start_rank(piece.color),
            PieceKind::King => {
                square != king_home(piece.color)
                    || rights & (kingside_right(piece.color) | queenside_right(piece.color)) == 0
            }
            PieceKind::Rook => {
                let needed = if square.rank != piece.color.home_rank() {
                    0
                } else if square.file == KINGSIDE_ROOK_FILE {
                    kingside_right(piece.color)
                } else if square.file == QUEENSIDE_ROOK_FILE {
                    queenside_right(piece.color)
                } else {
                    0
                };
                rights & needed == 0
            }
            _ => false,
        };
        game_state.board[index].has_moved = has_moved;
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
