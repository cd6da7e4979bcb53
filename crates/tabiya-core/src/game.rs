//! The game controller: turn ownership, full move legality, check and
//! terminal-state detection, draw rules, and the promotion hand-off.
//!
//! The controller owns the board plus the per-game state (whose turn it
//! is, the en passant target, a pending promotion). Legality that no
//! single piece rule can judge — self-check, castling through attacked
//! squares — lives here.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::board::Board;
use crate::color::Color;
use crate::error::GameError;
use crate::move_record::{MoveRecord, RepetitionKey};
use crate::piece_kind::PieceKind;
use crate::rules::{self, MoveContext};
use crate::square::Square;

/// A pawn that has reached its promotion row and is waiting for the
/// collaborator to choose a piece kind.
///
/// While one of these is outstanding the ply is incomplete: the turn has
/// not switched and new moves are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    /// Where the unpromoted pawn stands.
    pub square: Square,
    /// The promoting side.
    pub color: Color,
}

/// Result of proposing a move to [`Game::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is not legal; nothing changed.
    Rejected,
    /// The move was applied and the turn switched.
    Played,
    /// The move was applied but a pawn reached its promotion row; the ply
    /// completes when [`Game::complete_promotion`] is called.
    PromotionPending,
}

/// A two-player game: board, turn, and the state that outlives single
/// moves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    en_passant_target: Option<Square>,
    pending_promotion: Option<PendingPromotion>,
}

impl Game {
    /// Start a game from the standard setup, White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            turn: Color::White,
            en_passant_target: None,
            pending_promotion: None,
        }
    }

    /// Adopt an existing board with the given side to move.
    ///
    /// The en passant target is re-derived from the board's history.
    pub fn with_board(board: Board, turn: Color) -> Game {
        let mut game = Game {
            board,
            turn,
            en_passant_target: None,
            pending_promotion: None,
        };
        game.refresh_en_passant();
        game
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Return the current en passant target square, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Return the outstanding promotion hand-off, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    /// Hand the move to the other side.
    #[inline]
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.flip();
    }

    /// Parse algebraic notation (e.g. "e4") into a square. Malformed
    /// input yields `None`, never an error.
    #[inline]
    pub fn parse_position(text: &str) -> Option<Square> {
        Square::from_algebraic(text)
    }

    /// Format a square as algebraic notation.
    #[inline]
    pub fn to_notation(square: Square) -> String {
        square.to_string()
    }

    /// Propose a move for the side to move.
    ///
    /// Illegal moves are reported as [`MoveOutcome::Rejected`], not as
    /// errors; the only error is proposing a move while a promotion
    /// choice is still outstanding.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        if let Some(pending) = self.pending_promotion {
            return Err(GameError::PromotionPending {
                square: pending.square,
            });
        }
        if !self.is_legal_move(from, to, self.turn) {
            return Ok(MoveOutcome::Rejected);
        }
        let Some(piece) = self.board.piece_at(from) else {
            return Ok(MoveOutcome::Rejected);
        };
        let kind = piece.kind();
        let color = piece.color();

        // Castling: king and rook relocate together.
        if kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
            let (rook_from, rook_to) = if to.col() > from.col() {
                (Square::at(from.row(), 7), Square::at(from.row(), to.col() - 1))
            } else {
                (Square::at(from.row(), 0), Square::at(from.row(), to.col() + 1))
            };
            if self.board.apply_castle(from, to, rook_from, rook_to).is_none() {
                return Ok(MoveOutcome::Rejected);
            }
            self.en_passant_target = None;
            debug!(%from, %to, side = %color, "castled");
            self.switch_turn();
            return Ok(MoveOutcome::Played);
        }

        // En passant: diagonal pawn step onto the skipped square.
        if kind == PieceKind::Pawn
            && self.en_passant_target == Some(to)
            && from.col() != to.col()
            && self.board.piece_at(to).is_none()
        {
            let victim = Square::at(from.row(), to.col());
            if self.board.apply_en_passant(from, to, victim).is_none() {
                return Ok(MoveOutcome::Rejected);
            }
            self.en_passant_target = None;
            debug!(%from, %to, side = %color, "captured en passant");
            self.switch_turn();
            return Ok(MoveOutcome::Played);
        }

        if self.board.apply_move(from, to).is_none() {
            return Ok(MoveOutcome::Rejected);
        }

        // A double step exposes the skipped square for exactly one reply.
        self.en_passant_target = if kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Some(Square::at(from.row().min(to.row()) + 1, from.col()))
        } else {
            None
        };

        if kind == PieceKind::Pawn && to.row() == color.promotion_row() {
            self.pending_promotion = Some(PendingPromotion { square: to, color });
            debug!(square = %to, side = %color, "promotion pending");
            return Ok(MoveOutcome::PromotionPending);
        }

        debug!(%from, %to, side = %color, "move played");
        self.switch_turn();
        Ok(MoveOutcome::Played)
    }

    /// Finalize a pending promotion with the chosen piece kind and
    /// complete the ply.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<(), GameError> {
        let Some(pending) = self.pending_promotion else {
            return Err(GameError::NoPromotionPending);
        };
        if !kind.is_promotion_choice() {
            return Err(GameError::InvalidPromotionKind { kind });
        }
        if self.board.apply_promotion(pending.square, kind).is_none() {
            return Err(GameError::NoPromotionPending);
        }
        self.pending_promotion = None;
        debug!(square = %pending.square, %kind, side = %pending.color, "promotion finalized");
        self.switch_turn();
        Ok(())
    }

    /// Undo the most recent ply, handing the turn back.
    ///
    /// Undoing while a promotion is pending abandons the promotion and
    /// reverts the pawn's advance without flipping the turn (the ply
    /// never completed). No-op returning `None` on empty history.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let was_pending = self.pending_promotion.is_some();
        let record = self.board.undo()?;
        self.pending_promotion = None;
        if !was_pending {
            self.switch_turn();
        }
        self.refresh_en_passant();
        Some(record)
    }

    /// Reapply the most recently undone ply.
    ///
    /// Redoing a pawn advance whose promotion was never finalized
    /// re-enters the pending-promotion state instead of switching the
    /// turn. No-op returning `None` when nothing is redoable.
    pub fn redo_move(&mut self) -> Option<MoveRecord> {
        let record = self.board.redo()?;
        if let MoveRecord::Normal { piece, to, .. } = record {
            let p = self.board.piece(piece);
            if p.kind() == PieceKind::Pawn
                && to.row() == p.color().promotion_row()
                && p.promoted_into().is_none()
            {
                self.pending_promotion = Some(PendingPromotion {
                    square: to,
                    color: p.color(),
                });
                self.refresh_en_passant();
                return Some(record);
            }
        }
        self.switch_turn();
        self.refresh_en_passant();
        Some(record)
    }

    /// Full legality for `color`'s proposed move, including turn
    /// ownership.
    ///
    /// Takes `&mut self` because self-check rejection simulates the move
    /// on the board; every probe is rolled back before returning and no
    /// history, redo, or `has_moved` state is touched.
    pub fn is_legal_move(&mut self, from: Square, to: Square, color: Color) -> bool {
        if color != self.turn {
            return false;
        }
        self.is_legal_for(from, to, color)
    }

    /// Legality for `color` ignoring whose turn it is. Probing backbone
    /// for [`legal_move_exists`](Game::legal_move_exists) and friends.
    fn is_legal_for(&mut self, from: Square, to: Square, color: Color) -> bool {
        if from == to {
            return false;
        }
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        if piece.color() != color {
            return false;
        }

        // A king stepping two columns is a castling attempt and gets the
        // attacked-square treatment instead of the self-check simulation.
        if piece.kind() == PieceKind::King
            && from.row() == to.row()
            && from.col().abs_diff(to.col()) == 2
        {
            return self.castle_legal(from, to, color);
        }

        let ctx = MoveContext::with_en_passant(self.en_passant_target);
        if !rules::pseudo_legal(&self.board, from, to, ctx) {
            return false;
        }
        !self.move_would_expose_king(from, to, color)
    }

    /// Castling legality: mechanical precondition, king not currently in
    /// check, and no transited or landing square attacked.
    fn castle_legal(&self, from: Square, to: Square, color: Color) -> bool {
        if !rules::castle_precondition(&self.board, from, to) {
            return false;
        }
        if self.is_in_check(color) {
            return false;
        }
        let step: i8 = if to.col() > from.col() { 1 } else { -1 };
        let mut col = from.col() as i8;
        loop {
            col += step;
            if self.is_square_attacked(Square::at(from.row(), col as u8), color) {
                return false;
            }
            if col == to.col() as i8 {
                return true;
            }
        }
    }

    /// Simulate the move and report whether it leaves `color`'s king
    /// attacked. The board is restored exactly before returning.
    fn move_would_expose_king(&mut self, from: Square, to: Square, color: Color) -> bool {
        // An en passant simulation must also lift the victim: its
        // disappearance can open a rank against the king.
        let victim_square = (self.en_passant_target == Some(to)
            && from.col() != to.col()
            && self.board.piece_at(to).is_none()
            && self
                .board
                .piece_at(from)
                .is_some_and(|p| p.kind() == PieceKind::Pawn))
        .then(|| Square::at(from.row(), to.col()));

        let moving = self.board.lift(from);
        let captured = self.board.lift(to);
        let lifted_victim = victim_square.map(|sq| (sq, self.board.lift(sq)));
        self.board.put(to, moving);

        let exposed = self.is_in_check(color);

        self.board.put(to, captured);
        self.board.put(from, moving);
        if let Some((sq, occupant)) = lifted_victim {
            self.board.put(sq, occupant);
        }
        exposed
    }

    /// Return `true` if any piece opposing `defending_color` has a
    /// pseudo-legal move landing on `square`.
    ///
    /// En passant context is deliberately absent: an en passant capture
    /// can only ever land on an empty skipped square, never on a piece.
    pub fn is_square_attacked(&self, square: Square, defending_color: Color) -> bool {
        Square::all().any(|from| match self.board.piece_at(from) {
            Some(piece) if piece.color() != defending_color => {
                rules::pseudo_legal(&self.board, from, square, MoveContext::NONE)
            }
            _ => false,
        })
    }

    /// Return `true` if `color`'s king square is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color),
            None => false,
        }
    }

    /// Exhaustively search for any legal move for `color`.
    ///
    /// Every candidate is probed and rolled back; the board is unchanged
    /// when this returns.
    pub fn legal_move_exists(&mut self, color: Color) -> bool {
        for from in Square::all() {
            match self.board.piece_at(from) {
                Some(piece) if piece.color() == color => {}
                _ => continue,
            }
            for to in Square::all() {
                if self.is_legal_for(from, to, color) {
                    return true;
                }
            }
        }
        false
    }

    /// Checkmate: in check with no legal move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        let mate = self.is_in_check(color) && !self.legal_move_exists(color);
        if mate {
            info!(side = %color, "checkmate");
        }
        mate
    }

    /// Stalemate: not in check, but no legal move either.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        let stale = !self.is_in_check(color) && !self.legal_move_exists(color);
        if stale {
            info!(side = %color, "stalemate");
        }
        stale
    }

    /// Every legal destination for the piece on `from` (empty when the
    /// square is).
    pub fn enumerate_legal_destinations(&mut self, from: Square) -> Vec<Square> {
        let Some(color) = self.board.piece_at(from).map(|p| p.color()) else {
            return Vec::new();
        };
        Square::all()
            .filter(|&to| self.is_legal_for(from, to, color))
            .collect()
    }

    /// Threefold repetition over move-pair identity keys: true the moment
    /// any key occurs a third time in the history.
    ///
    /// Transpositions reaching the same position by different move orders
    /// are deliberately not merged.
    pub fn is_threefold_repetition(&self) -> bool {
        let mut counts: HashMap<RepetitionKey, u32> = HashMap::new();
        for record in self.board.history() {
            let count = counts.entry(record.repetition_key()).or_insert(0);
            *count += 1;
            if *count == 3 {
                return true;
            }
        }
        false
    }

    /// Fifty-move rule: true once the 50 most recent moves include no
    /// pawn move and no capture.
    ///
    /// Only a normal record that moves a pawn or captures stops the
    /// backward scan; castle and en passant records count toward the
    /// total without resetting it.
    pub fn is_fifty_move_rule(&self) -> bool {
        let mut count = 0u32;
        for record in self.board.history().iter().rev() {
            if let MoveRecord::Normal {
                piece, captured, ..
            } = record
            {
                if self.board.piece(*piece).kind() == PieceKind::Pawn || captured.is_some() {
                    break;
                }
            }
            count += 1;
            if count >= 50 {
                return true;
            }
        }
        false
    }

    /// Re-derive the en passant target from the last applied move, so the
    /// invariant survives undo and redo.
    fn refresh_en_passant(&mut self) {
        self.en_passant_target = match self.board.history().last() {
            Some(MoveRecord::Normal {
                piece, from, to, ..
            }) if self.board.piece(*piece).kind() == PieceKind::Pawn
                && from.row().abs_diff(to.row()) == 2 =>
            {
                Some(Square::at(from.row().min(to.row()) + 1, from.col()))
            }
            _ => None,
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
