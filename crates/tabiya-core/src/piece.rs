//! Pieces as arena entries with stable identity.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Stable handle to a piece in a board's arena.
///
/// A piece keeps its id for the whole game: capture removes it from the
/// grid but not from the arena, so undo can restore the very same piece —
/// `has_moved` state, promotion lineage and all — rather than a fresh
/// lookalike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u32);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: usize) -> PieceId {
        PieceId(index as u32)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A chess piece: color, kind, and the mutable state the rules depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    has_moved: bool,
    /// For pawns only: the piece this pawn promoted into, set when the
    /// promotion is finalized and consulted when the ply is redone.
    promoted_into: Option<PieceId>,
}

impl Piece {
    /// Create a piece in its setup state.
    #[inline]
    pub(crate) const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            color,
            kind,
            has_moved: false,
            promoted_into: None,
        }
    }

    /// Return the piece's color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Return the piece's kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Return `true` if the piece has moved at least once.
    ///
    /// Castling rights hang off this flag for kings and rooks. Undo
    /// restores it (see `Board::undo`).
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Return the promotion lineage reference, if this pawn has promoted.
    #[inline]
    pub const fn promoted_into(&self) -> Option<PieceId> {
        self.promoted_into
    }

    #[inline]
    pub(crate) fn set_has_moved(&mut self, moved: bool) {
        self.has_moved = moved;
    }

    #[inline]
    pub(crate) fn set_promoted_into(&mut self, id: Option<PieceId>) {
        self.promoted_into = id;
    }

    /// Return the display letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
