//! Long algebraic move text (`e2e4`, `e7e8q`) in both directions.
//!
//! Parsing infers the special-move flags from the position exactly the way
//! the generator sets them, so a parsed move compares equal to its generated
//! counterpart.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveFlags};
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: Move) -> ChessResult<String> {
    if !mv.from.is_valid() || !mv.to.is_valid() {
        return Err(ChessError::InvalidMove(format!(
            "cannot write {mv:?} in long algebraic form"
        )));
    }
    Ok(mv.to_string())
}

pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMove(format!(
            "{long_algebraic:?} is not long algebraic"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let moving = game_state.piece_at(from);
    if moving.is_none() {
        return Err(ChessError::InvalidMove(format!("{text}: no piece on {from}")));
    }
    if moving.color != game_state.side_to_move {
        return Err(ChessError::InvalidMove(format!(
            "{text}: piece on {from} does not belong to the side to move"
        )));
    }

    let target = game_state.piece_at(to);
    if !target.is_none() && target.color == moving.color {
        return Err(ChessError::InvalidMove(format!("{text}: {to} holds an own piece")));
    }

    let mut flags = MoveFlags::NONE;
    if !target.is_none() {
        flags |= MoveFlags::CAPTURE;
    }

    match moving.kind {
        PieceKind::Pawn => {
            if (to.rank - from.rank).abs() == 2 {
                flags |= MoveFlags::PAWN_TWO_FORWARD;
            }
            if from.file != to.file
                && target.is_none()
                && game_state.en_passant_square == Some(to)
            {
                flags |= MoveFlags::EN_PASSANT | MoveFlags::CAPTURE;
            }
        }
        PieceKind::King if from.rank == to.rank => match to.file - from.file {
            2 => flags |= MoveFlags::CASTLE_KING_SIDE,
            -2 => flags |= MoveFlags::CASTLE_QUEEN_SIDE,
            _ => {}
        },
        _ => {}
    }

    let reaches_last_rank =
        moving.kind == PieceKind::Pawn && to.rank == promotion_rank(moving.color);

    match text.as_bytes().get(4) {
        Some(&suffix) => {
            if !reaches_last_rank {
                return Err(ChessError::InvalidMove(format!(
                    "{text}: only a pawn reaching the last rank may promote"
                )));
            }
            let kind = char_to_promotion(suffix as char)
                .ok_or_else(|| ChessError::InvalidMove(format!("{text}: bad promotion piece")))?;
            Ok(Move::promotion(from, to, flags, kind))
        }
        None if reaches_last_rank => Err(ChessError::InvalidMove(format!(
            "{text}: missing promotion piece"
        ))),
        None => Ok(Move::with_flags(from, to, flags)),
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
