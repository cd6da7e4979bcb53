//! Applied-move records: enough information to reverse and replay each kind.

use crate::color::Color;
use crate::piece::PieceId;
use crate::square::Square;

/// A record of one applied ply, tagged by how it must be reversed.
///
/// Records own the identity of everything they displaced: a `Normal`
/// capture holds the captured piece's id so undo restores the same piece,
/// and a `Castle` holds both king and rook ids. The en passant victim is
/// the one piece recorded by square and color instead — a pawn in its
/// default state, safe to recreate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRecord {
    /// A single-piece relocation, capturing whatever stood on `to`.
    Normal {
        piece: PieceId,
        from: Square,
        to: Square,
        captured: Option<PieceId>,
        had_moved_before: bool,
    },
    /// King and rook relocating together.
    Castle {
        king: PieceId,
        king_from: Square,
        king_to: Square,
        rook: PieceId,
        rook_from: Square,
        rook_to: Square,
    },
    /// A pawn capturing onto the skipped square; the victim stood beside it.
    EnPassant {
        piece: PieceId,
        from: Square,
        to: Square,
        captured_pawn_square: Square,
        captured_pawn_color: Color,
    },
}

impl MoveRecord {
    /// Return the square the moving piece (the king, for castles) left.
    #[inline]
    pub const fn from(&self) -> Square {
        match *self {
            MoveRecord::Normal { from, .. } => from,
            MoveRecord::Castle { king_from, .. } => king_from,
            MoveRecord::EnPassant { from, .. } => from,
        }
    }

    /// Return the square the moving piece (the king, for castles) reached.
    #[inline]
    pub const fn to(&self) -> Square {
        match *self {
            MoveRecord::Normal { to, .. } => to,
            MoveRecord::Castle { king_to, .. } => king_to,
            MoveRecord::EnPassant { to, .. } => to,
        }
    }

    /// Derive the key this record contributes to threefold-repetition
    /// counting.
    ///
    /// Keys compare move-pair identity, not resulting position: two
    /// different move orders transposing into the same position stay
    /// distinct. That draw timing is documented behavior.
    #[inline]
    pub fn repetition_key(&self) -> RepetitionKey {
        match *self {
            MoveRecord::Normal { from, to, .. } => RepetitionKey::Normal { from, to },
            MoveRecord::Castle {
                king_from,
                king_to,
                rook_from,
                rook_to,
                ..
            } => RepetitionKey::Castle {
                from: king_from,
                to: king_to,
                rook_from,
                rook_to,
            },
            MoveRecord::EnPassant {
                from,
                to,
                captured_pawn_square,
                ..
            } => RepetitionKey::EnPassant {
                from,
                to,
                captured_pawn_square,
            },
        }
    }
}

/// Comparison key for threefold-repetition counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepetitionKey {
    Normal {
        from: Square,
        to: Square,
    },
    Castle {
        from: Square,
        to: Square,
        rook_from: Square,
        rook_to: Square,
    },
    EnPassant {
        from: Square,
        to: Square,
        captured_pawn_square: Square,
    },
}
