//! Central game aggregate.
//!
//! `GameState` owns the authoritative board plus every piece of derived
//! state: side to move, castling rights, en-passant target, clocks, and the
//! append-only move history. It is only ever mutated through `apply_move`,
//! which swaps in a fully-built successor state, so a rejected move can
//! never leave a partial update behind. All read accessors hand out owned
//! copies.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{CastlingRights, Color, Move, Piece, Square};
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_filter;
use crate::move_generation::legal_move_generator;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    pub(crate) move_history: Vec<Move>,
}

impl GameState {
    /// Fresh game in the standard starting position.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Restore a position from FEN. The move history starts empty.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Serialize the current position to FEN.
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Owned copy of the board; mutating it never affects this game.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Piece on `square`, copied out by value.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Owned copy of the move history, oldest first.
    pub fn move_history(&self) -> Vec<Move> {
        self.move_history.clone()
    }

    /// Apply `mv` for the side to move, updating every derived field
    /// atomically. See [`legal_move_apply::apply_move`] for the rejection
    /// rules.
    pub fn apply_move(&mut self, mv: &Move) -> ChessResult<()> {
        let next = legal_move_apply::apply_move(self, mv)?;
        *self = next;
        Ok(())
    }

    /// Legal destination squares for the piece on `from`.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        legal_move_filter::legal_targets(self, from)
    }

    /// Every legal move for `color`; empty unless `color` is on move.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        legal_move_generator::all_legal_moves(self, color)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// Checkmate test for the side to move; `false` for the other color.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if color != self.side_to_move {
            return false;
        }
        self.is_in_check(color) && self.all_legal_moves(color).is_empty()
    }

    /// Stalemate test for the side to move; `false` for the other color.
    pub fn is_stalemate(&self, color: Color) -> bool {
        if color != self.side_to_move {
            return false;
        }
        !self.is_in_check(color) && self.all_legal_moves(color).is_empty()
    }
}
