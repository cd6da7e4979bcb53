//! Error types for board construction and the promotion hand-off.
//!
//! The rules surface itself has no fatal error class: malformed notation
//! parses to `None`, illegal moves come back as a rejection value, and
//! undo/redo on empty stacks are no-ops. These enums cover the two places
//! where a caller can misuse the API rather than merely propose a bad move.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors from placing pieces or validating board structure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A piece was placed on a square that already holds one.
    #[error("square {square} is already occupied")]
    SquareOccupied {
        /// The contested square.
        square: Square,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
}

/// Errors from misusing the game controller's promotion hand-off.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A move was proposed while a promotion choice is still outstanding.
    #[error("promotion pending at {square}; choose a piece before moving")]
    PromotionPending {
        /// Where the unpromoted pawn stands.
        square: Square,
    },
    /// A promotion was supplied when no pawn is awaiting one.
    #[error("no promotion is pending")]
    NoPromotionPending,
    /// A pawn cannot promote into the supplied kind.
    #[error("cannot promote into {kind}")]
    InvalidPromotionKind {
        /// The rejected kind.
        kind: PieceKind,
    },
}
