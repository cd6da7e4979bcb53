//! The board: piece placement and the mechanical application and reversal
//! of moves.
//!
//! The board holds an 8×8 grid of piece ids over an arena of [`Piece`]
//! values, plus the move history and redo stack. Everything here is
//! mechanical: application is unconditional and legality is entirely the
//! game controller's problem.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::move_record::MoveRecord;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank setup order, a-file to h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement plus reversible move history.
///
/// The arena only grows: capture removes a piece from the grid while its
/// entry (and id) stay valid, which is what lets undo restore the exact
/// piece that was taken.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index`].
    grid: [Option<PieceId>; Square::COUNT],
    /// Arena of every piece ever created for this board.
    pieces: Vec<Piece>,
    /// Applied moves, chronological.
    history: Vec<MoveRecord>,
    /// Undone moves, most recently undone last.
    redoable: Vec<MoveRecord>,
}

impl Board {
    /// Create an empty board with no pieces and no history.
    pub fn new() -> Board {
        Board {
            grid: [None; Square::COUNT],
            pieces: Vec::new(),
            history: Vec::new(),
            redoable: Vec::new(),
        }
    }

    /// Create a board in the standard two-player starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::new();
        for color in Color::ALL {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.seed(Square::at(back, col as u8), kind, color);
                board.seed(Square::at(pawns, col as u8), PieceKind::Pawn, color);
            }
        }
        board
    }

    /// Create a new piece and place it on an empty square.
    pub fn place_new(
        &mut self,
        square: Square,
        kind: PieceKind,
        color: Color,
    ) -> Result<PieceId, BoardError> {
        if self.grid[square.index()].is_some() {
            return Err(BoardError::SquareOccupied { square });
        }
        Ok(self.seed(square, kind, color))
    }

    /// Remove and return the piece id on a square, if any.
    ///
    /// The piece stays in the arena; only the placement is cleared.
    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        self.grid[square.index()].take()
    }

    /// Return the piece id occupying a square, if any.
    #[inline]
    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.grid[square.index()]
    }

    /// Return the piece occupying a square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.index()].map(|id| self.piece(id))
    }

    /// Look up a piece by id.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// Return the applied-move history, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Return the undone moves available for redo, next-to-redo last.
    #[inline]
    pub fn redoable(&self) -> &[MoveRecord] {
        &self.redoable
    }

    /// Return the square of `color`'s king, if one is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.kind() == PieceKind::King && p.color() == color)
        })
    }

    /// Check that each side has exactly one king on the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = Square::all()
                .filter_map(|sq| self.piece_at(sq))
                .filter(|p| p.kind() == PieceKind::King && p.color() == color)
                .count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }

    /// Relocate the piece on `from` to `to`, capturing any occupant of
    /// `to` into the returned record, and append it to history.
    ///
    /// Unconditional: callers must have already established legality.
    /// Returns `None` (and changes nothing) when `from` is empty.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let piece = self.grid[from.index()]?;
        let had_moved_before = self.piece(piece).has_moved();
        let captured = self.grid[to.index()].take();
        self.grid[to.index()] = Some(piece);
        self.grid[from.index()] = None;
        self.piece_mut(piece).set_has_moved(true);

        let record = MoveRecord::Normal {
            piece,
            from,
            to,
            captured,
            had_moved_before,
        };
        self.commit(record);
        Some(record)
    }

    /// Relocate king and rook together and append a castle record.
    ///
    /// Unconditional; the destination squares must be empty (castling
    /// never captures).
    pub fn apply_castle(
        &mut self,
        king_from: Square,
        king_to: Square,
        rook_from: Square,
        rook_to: Square,
    ) -> Option<MoveRecord> {
        let king = self.grid[king_from.index()]?;
        let rook = self.grid[rook_from.index()]?;
        self.grid[king_from.index()] = None;
        self.grid[king_to.index()] = Some(king);
        self.grid[rook_from.index()] = None;
        self.grid[rook_to.index()] = Some(rook);
        self.piece_mut(king).set_has_moved(true);
        self.piece_mut(rook).set_has_moved(true);

        let record = MoveRecord::Castle {
            king,
            king_from,
            king_to,
            rook,
            rook_from,
            rook_to,
        };
        self.commit(record);
        Some(record)
    }

    /// Relocate the capturing pawn and remove the passed pawn from its own
    /// square, appending an en passant record.
    pub fn apply_en_passant(
        &mut self,
        from: Square,
        to: Square,
        captured_square: Square,
    ) -> Option<MoveRecord> {
        let piece = self.grid[from.index()]?;
        let victim = self.grid[captured_square.index()]?;
        let captured_pawn_color = self.piece(victim).color();

        self.grid[captured_square.index()] = None;
        self.grid[to.index()] = Some(piece);
        self.grid[from.index()] = None;
        self.piece_mut(piece).set_has_moved(true);

        let record = MoveRecord::EnPassant {
            piece,
            from,
            to,
            captured_pawn_square: captured_square,
            captured_pawn_color,
        };
        self.commit(record);
        Some(record)
    }

    /// Finalize a promotion: create the chosen piece, link the pawn's
    /// lineage, and replace the pawn on its square.
    ///
    /// The pawn's advance must already have been applied and recorded;
    /// this swaps the occupant without touching history, so undoing the
    /// recorded advance also undoes the promotion.
    pub fn apply_promotion(&mut self, square: Square, kind: PieceKind) -> Option<PieceId> {
        let pawn = self.grid[square.index()]?;
        let (color, pawn_kind) = {
            let p = self.piece(pawn);
            (p.color(), p.kind())
        };
        if pawn_kind != PieceKind::Pawn {
            return None;
        }
        let promoted = self.spawn(kind, color);
        self.piece_mut(pawn).set_promoted_into(Some(promoted));
        self.grid[square.index()] = Some(promoted);
        Some(promoted)
    }

    /// Reverse the most recent applied move and stage it for redo.
    ///
    /// No-op returning `None` when history is empty.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        match record {
            MoveRecord::Normal {
                piece,
                from,
                to,
                captured,
                had_moved_before,
            } => {
                self.grid[from.index()] = Some(piece);
                self.grid[to.index()] = captured;
                let p = self.piece_mut(piece);
                if p.kind() == PieceKind::King {
                    // Kings get their castling rights back unconditionally
                    // when undone past a move.
                    p.set_has_moved(false);
                } else {
                    p.set_has_moved(had_moved_before);
                }
            }
            MoveRecord::Castle {
                king,
                king_from,
                king_to,
                rook,
                rook_from,
                rook_to,
            } => {
                self.grid[king_from.index()] = Some(king);
                self.grid[king_to.index()] = None;
                self.grid[rook_from.index()] = Some(rook);
                self.grid[rook_to.index()] = None;
                self.piece_mut(king).set_has_moved(false);
                self.piece_mut(rook).set_has_moved(false);
            }
            MoveRecord::EnPassant {
                piece,
                from,
                to,
                captured_pawn_square,
                captured_pawn_color,
            } => {
                self.grid[from.index()] = Some(piece);
                self.grid[to.index()] = None;
                // An en passant capture is never a pawn's first move.
                self.piece_mut(piece).set_has_moved(true);
                let victim = self.spawn(PieceKind::Pawn, captured_pawn_color);
                self.grid[captured_pawn_square.index()] = Some(victim);
            }
        }
        self.redoable.push(record);
        Some(record)
    }

    /// Reapply the most recently undone move.
    ///
    /// A pawn advance that ended in a finalized promotion places the
    /// promoted piece again, re-derived from the pawn's lineage reference.
    /// No-op returning `None` when nothing is redoable.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        let record = self.redoable.pop()?;
        match record {
            MoveRecord::Normal {
                piece, from, to, ..
            } => {
                self.grid[from.index()] = None;
                let occupant = {
                    let p = self.piece(piece);
                    match p.promoted_into() {
                        Some(promoted)
                            if p.kind() == PieceKind::Pawn
                                && to.row() == p.color().promotion_row() =>
                        {
                            promoted
                        }
                        _ => piece,
                    }
                };
                self.grid[to.index()] = Some(occupant);
                self.piece_mut(piece).set_has_moved(true);
            }
            MoveRecord::Castle {
                king,
                king_from,
                king_to,
                rook,
                rook_from,
                rook_to,
            } => {
                self.grid[king_from.index()] = None;
                self.grid[king_to.index()] = Some(king);
                self.grid[rook_from.index()] = None;
                self.grid[rook_to.index()] = Some(rook);
                self.piece_mut(king).set_has_moved(true);
                self.piece_mut(rook).set_has_moved(true);
            }
            MoveRecord::EnPassant {
                piece,
                from,
                to,
                captured_pawn_square,
                ..
            } => {
                self.grid[from.index()] = None;
                self.grid[to.index()] = Some(piece);
                self.grid[captured_pawn_square.index()] = None;
                self.piece_mut(piece).set_has_moved(true);
            }
        }
        self.history.push(record);
        Some(record)
    }

    /// Wrapper for pretty-printing the grid as an 8×8 diagram.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    /// Take the occupant of a square without touching history or piece
    /// state. Probe primitive for legality simulation; pair with [`put`].
    ///
    /// [`put`]: Board::put
    #[inline]
    pub(crate) fn lift(&mut self, square: Square) -> Option<PieceId> {
        self.grid[square.index()].take()
    }

    /// Restore a probe's occupant. See [`lift`](Board::lift).
    #[inline]
    pub(crate) fn put(&mut self, square: Square, occupant: Option<PieceId>) {
        self.grid[square.index()] = occupant;
    }

    /// Append a record and invalidate the redo line.
    fn commit(&mut self, record: MoveRecord) {
        self.history.push(record);
        self.redoable.clear();
    }

    /// Create an arena piece and place it. Setup primitive; the square
    /// must be empty.
    fn seed(&mut self, square: Square, kind: PieceKind, color: Color) -> PieceId {
        debug_assert!(self.grid[square.index()].is_none());
        let id = self.spawn(kind, color);
        self.grid[square.index()] = Some(id);
        id
    }

    /// Create an arena piece without placing it.
    fn spawn(&mut self, kind: PieceKind, color: Color) -> PieceId {
        let id = PieceId::new(self.pieces.len());
        self.pieces.push(Piece::new(kind, color));
        id
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_board = self.grid.iter().flatten().count();
        write!(
            f,
            "Board({} pieces, {} played, {} redoable)",
            on_board,
            self.history.len(),
            self.redoable.len()
        )
    }
}

/// Wrapper for pretty-printing a board as an 8×8 grid with a rank and
/// file legend.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = match self.0.piece_at(Square::at(row, col)) {
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::move_record::MoveRecord;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    /// Full observable state of every square: occupant kind, color,
    /// `has_moved`, and promotion lineage presence.
    fn snapshot(board: &Board) -> Vec<Option<(PieceKind, Color, bool, bool)>> {
        Square::all()
            .map(|s| {
                board
                    .piece_at(s)
                    .map(|p| (p.kind(), p.color(), p.has_moved(), p.promoted_into().is_some()))
            })
            .collect()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        board.validate().unwrap();

        // Black back rank on row 0, White's on row 7, queens on the d-file.
        assert_eq!(board.piece_at(sq(0, 3)).unwrap().kind(), PieceKind::Queen);
        assert_eq!(board.piece_at(sq(0, 4)).unwrap().kind(), PieceKind::King);
        assert_eq!(board.piece_at(sq(7, 3)).unwrap().kind(), PieceKind::Queen);
        assert_eq!(board.piece_at(sq(7, 4)).unwrap().kind(), PieceKind::King);
        assert_eq!(board.piece_at(sq(0, 0)).unwrap().color(), Color::Black);
        assert_eq!(board.piece_at(sq(7, 7)).unwrap().color(), Color::White);
        for col in 0..8 {
            assert_eq!(board.piece_at(sq(1, col)).unwrap().kind(), PieceKind::Pawn);
            assert_eq!(board.piece_at(sq(6, col)).unwrap().kind(), PieceKind::Pawn);
        }
        // Middle of the board is empty.
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.piece_at(sq(row, col)).is_none());
            }
        }
    }

    #[test]
    fn validate_king_counts() {
        let mut board = Board::new();
        board.place_new(sq(7, 4), PieceKind::King, Color::White).unwrap();
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0,
            })
        );
        board.place_new(sq(0, 4), PieceKind::King, Color::Black).unwrap();
        assert!(board.validate().is_ok());
    }

    #[test]
    fn place_new_rejects_occupied() {
        let mut board = Board::new();
        board.place_new(sq(4, 4), PieceKind::Rook, Color::White).unwrap();
        assert_eq!(
            board.place_new(sq(4, 4), PieceKind::Queen, Color::Black),
            Err(BoardError::SquareOccupied { square: sq(4, 4) })
        );
    }

    #[test]
    fn apply_move_relocates_and_records() {
        let mut board = Board::starting_position();
        let record = board.apply_move(sq(6, 4), sq(4, 4)).unwrap();

        assert!(board.piece_at(sq(6, 4)).is_none());
        let pawn = board.piece_at(sq(4, 4)).unwrap();
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert!(pawn.has_moved());
        assert_eq!(board.history().len(), 1);
        match record {
            MoveRecord::Normal {
                from,
                to,
                captured,
                had_moved_before,
                ..
            } => {
                assert_eq!(from, sq(6, 4));
                assert_eq!(to, sq(4, 4));
                assert_eq!(captured, None);
                assert!(!had_moved_before);
            }
            other => panic!("expected Normal record, got {other:?}"),
        }
    }

    #[test]
    fn apply_move_empty_source_is_noop() {
        let mut board = Board::starting_position();
        let before = snapshot(&board);
        assert!(board.apply_move(sq(4, 4), sq(3, 4)).is_none());
        assert_eq!(snapshot(&board), before);
        assert!(board.history().is_empty());
    }

    #[test]
    fn undo_restores_exact_snapshot() {
        let mut board = Board::starting_position();
        let before = snapshot(&board);

        board.apply_move(sq(6, 4), sq(4, 4)).unwrap();
        assert_ne!(snapshot(&board), before);

        board.undo().unwrap();
        assert_eq!(snapshot(&board), before);
        assert!(board.history().is_empty());
        assert_eq!(board.redoable().len(), 1);
    }

    #[test]
    fn redo_restores_post_move_state() {
        let mut board = Board::starting_position();
        board.apply_move(sq(6, 4), sq(4, 4)).unwrap();
        let after = snapshot(&board);

        board.undo().unwrap();
        board.redo().unwrap();
        assert_eq!(snapshot(&board), after);
        assert_eq!(board.history().len(), 1);
        assert!(board.redoable().is_empty());
    }

    #[test]
    fn undo_redo_on_empty_stacks_are_noops() {
        let mut board = Board::starting_position();
        assert!(board.undo().is_none());
        assert!(board.redo().is_none());
    }

    #[test]
    fn new_move_clears_redo_line() {
        let mut board = Board::starting_position();
        board.apply_move(sq(6, 4), sq(4, 4)).unwrap();
        board.undo().unwrap();
        assert_eq!(board.redoable().len(), 1);

        board.apply_move(sq(6, 3), sq(4, 3)).unwrap();
        assert!(board.redoable().is_empty());
    }

    #[test]
    fn capture_restores_same_identity_on_undo() {
        let mut board = Board::new();
        board.place_new(sq(4, 4), PieceKind::Rook, Color::White).unwrap();
        let victim_id = board.place_new(sq(4, 0), PieceKind::Knight, Color::Black).unwrap();
        // Give the victim some history so a lookalike would differ.
        board.piece_mut(victim_id).set_has_moved(true);

        board.apply_move(sq(4, 4), sq(4, 0)).unwrap();
        assert!(board.piece_at(sq(4, 4)).is_none());
        assert_eq!(board.piece_at(sq(4, 0)).unwrap().kind(), PieceKind::Rook);

        board.undo().unwrap();
        assert_eq!(board.piece_id_at(sq(4, 0)), Some(victim_id));
        assert!(board.piece(victim_id).has_moved());
    }

    #[test]
    fn undo_always_resets_king_moved_flag() {
        let mut board = Board::new();
        let king_id = board.place_new(sq(7, 4), PieceKind::King, Color::White).unwrap();
        board.apply_move(sq(7, 4), sq(6, 4)).unwrap();
        board.apply_move(sq(6, 4), sq(5, 4)).unwrap();
        assert!(board.piece(king_id).has_moved());

        // The second move's record says the king had already moved, but a
        // king's flag resets unconditionally on undo.
        board.undo().unwrap();
        assert!(!board.piece(king_id).has_moved());
    }

    #[test]
    fn undo_restores_non_king_moved_flag() {
        let mut board = Board::new();
        let rook_id = board.place_new(sq(7, 0), PieceKind::Rook, Color::White).unwrap();
        board.apply_move(sq(7, 0), sq(5, 0)).unwrap();
        board.apply_move(sq(5, 0), sq(5, 3)).unwrap();

        board.undo().unwrap();
        assert!(board.piece(rook_id).has_moved());
        board.undo().unwrap();
        assert!(!board.piece(rook_id).has_moved());
    }

    #[test]
    fn castle_apply_undo_redo() {
        let mut board = Board::new();
        let king_id = board.place_new(sq(7, 4), PieceKind::King, Color::White).unwrap();
        let rook_id = board.place_new(sq(7, 7), PieceKind::Rook, Color::White).unwrap();

        board.apply_castle(sq(7, 4), sq(7, 6), sq(7, 7), sq(7, 5)).unwrap();
        assert_eq!(board.piece_id_at(sq(7, 6)), Some(king_id));
        assert_eq!(board.piece_id_at(sq(7, 5)), Some(rook_id));
        assert!(board.piece(king_id).has_moved());
        assert!(board.piece(rook_id).has_moved());

        board.undo().unwrap();
        assert_eq!(board.piece_id_at(sq(7, 4)), Some(king_id));
        assert_eq!(board.piece_id_at(sq(7, 7)), Some(rook_id));
        assert!(board.piece_at(sq(7, 5)).is_none());
        assert!(board.piece_at(sq(7, 6)).is_none());
        assert!(!board.piece(king_id).has_moved());
        assert!(!board.piece(rook_id).has_moved());

        board.redo().unwrap();
        assert_eq!(board.piece_id_at(sq(7, 6)), Some(king_id));
        assert_eq!(board.piece_id_at(sq(7, 5)), Some(rook_id));
        assert!(board.piece(king_id).has_moved());
    }

    #[test]
    fn en_passant_apply_and_undo() {
        let mut board = Board::new();
        let white_pawn = board.place_new(sq(3, 4), PieceKind::Pawn, Color::White).unwrap();
        board.piece_mut(white_pawn).set_has_moved(true);
        board.place_new(sq(3, 3), PieceKind::Pawn, Color::Black).unwrap();

        board.apply_en_passant(sq(3, 4), sq(2, 3), sq(3, 3)).unwrap();
        // The victim leaves its own square, not the destination.
        assert!(board.piece_at(sq(3, 3)).is_none());
        assert_eq!(board.piece_id_at(sq(2, 3)), Some(white_pawn));

        board.undo().unwrap();
        assert_eq!(board.piece_id_at(sq(3, 4)), Some(white_pawn));
        assert!(board.piece_at(sq(2, 3)).is_none());
        let restored = board.piece_at(sq(3, 3)).unwrap();
        assert_eq!(restored.kind(), PieceKind::Pawn);
        assert_eq!(restored.color(), Color::Black);
        assert!(board.piece(white_pawn).has_moved());

        board.redo().unwrap();
        assert!(board.piece_at(sq(3, 3)).is_none());
        assert_eq!(board.piece_id_at(sq(2, 3)), Some(white_pawn));
    }

    #[test]
    fn promotion_lineage_survives_undo_redo() {
        let mut board = Board::new();
        let pawn_id = board.place_new(sq(1, 0), PieceKind::Pawn, Color::White).unwrap();
        board.piece_mut(pawn_id).set_has_moved(true);

        board.apply_move(sq(1, 0), sq(0, 0)).unwrap();
        let queen_id = board.apply_promotion(sq(0, 0), PieceKind::Queen).unwrap();
        assert_eq!(board.piece_id_at(sq(0, 0)), Some(queen_id));
        assert_eq!(board.piece(queen_id).kind(), PieceKind::Queen);
        assert_eq!(board.piece(pawn_id).promoted_into(), Some(queen_id));

        board.undo().unwrap();
        assert_eq!(board.piece_id_at(sq(1, 0)), Some(pawn_id));
        assert!(board.piece_at(sq(0, 0)).is_none());

        // Redo re-derives the promoted piece from the pawn's lineage.
        board.redo().unwrap();
        assert_eq!(board.piece_id_at(sq(0, 0)), Some(queen_id));
        assert!(board.piece_at(sq(1, 0)).is_none());
    }

    #[test]
    fn apply_promotion_requires_a_pawn() {
        let mut board = Board::new();
        board.place_new(sq(0, 0), PieceKind::Rook, Color::White).unwrap();
        assert!(board.apply_promotion(sq(0, 0), PieceKind::Queen).is_none());
        assert!(board.apply_promotion(sq(0, 1), PieceKind::Queen).is_none());
    }

    #[test]
    fn full_undo_redo_roundtrip_matches_direct_play() {
        // 1.e4 e5 2.Nf3 Nc6 3.Bb5 a6 4.Bxc6 — captures included.
        let moves = [
            (sq(6, 4), sq(4, 4)),
            (sq(1, 4), sq(3, 4)),
            (sq(7, 6), sq(5, 5)),
            (sq(0, 1), sq(2, 2)),
            (sq(7, 5), sq(3, 1)),
            (sq(1, 0), sq(2, 0)),
            (sq(3, 1), sq(2, 2)),
        ];

        let mut direct = Board::starting_position();
        for (from, to) in moves {
            direct.apply_move(from, to).unwrap();
        }

        let mut replayed = Board::starting_position();
        for (from, to) in moves {
            replayed.apply_move(from, to).unwrap();
        }
        let initial = snapshot(&Board::starting_position());
        for _ in 0..moves.len() {
            replayed.undo().unwrap();
        }
        assert_eq!(snapshot(&replayed), initial);
        for _ in 0..moves.len() {
            replayed.redo().unwrap();
        }

        assert_eq!(snapshot(&replayed), snapshot(&direct));
        assert_eq!(replayed.history(), direct.history());
        assert!(replayed.redoable().is_empty());
    }

    #[test]
    fn history_and_redoable_stay_disjoint() {
        let mut board = Board::starting_position();
        board.apply_move(sq(6, 4), sq(4, 4)).unwrap();
        board.apply_move(sq(1, 4), sq(3, 4)).unwrap();
        board.undo().unwrap();

        assert_eq!(board.history().len(), 1);
        assert_eq!(board.redoable().len(), 1);
        assert_ne!(board.history()[0], board.redoable()[0]);
    }

    #[test]
    fn pretty_starting_position() {
        let board = Board::starting_position();
        let rendered = format!("{}", board.pretty());
        let expected = "\
8  r n b q k b n r
7  p p p p p p p p
6  . . . . . . . .
5  . . . . . . . .
4  . . . . . . . .
3  . . . . . . . .
2  P P P P P P P P
1  R N B Q K B N R
   a b c d e f g h";
        assert_eq!(rendered, expected);
    }
}
