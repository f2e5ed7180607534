//! Engine-level error type.
//!
//! Every fallible operation in the engine returns `Result<_, DomainError>`.
//! A rejected action never mutates state: the reducer returns the error and
//! the caller keeps its previous snapshot.

use thiserror::Error;

/// Why a bid was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidErrorKind {
    #[error("bid outside the valid range for this round")]
    OutOfRange,
    #[error("dealer may not bid the hook-rule forbidden value")]
    HookRule,
    #[error("not this player's turn to bid")]
    OutOfTurn,
    #[error("player has already bid this round")]
    AlreadyBid,
}

/// Why a card play was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayErrorKind {
    #[error("card is not in the player's hand")]
    NotInHand,
    #[error("must follow the lead suit")]
    MustFollowSuit,
    #[error("may not lead trump before trump is broken")]
    TrumpLeadForbidden,
    #[error("not this player's turn to play")]
    OutOfTurn,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("illegal bid: {0}")]
    IllegalBid(BidErrorKind),

    #[error("illegal card play: {0}")]
    IllegalCardPlay(PlayErrorKind),

    /// The requested round needs more cards than the deck holds. Fatal to
    /// starting that round; the configuration layer is expected to cap the
    /// round size before dealing.
    #[error("insufficient deck: need {needed} cards, have {available}")]
    InsufficientDeck { needed: usize, available: usize },

    /// Trick resolution was invoked on an empty trick. Unreachable through
    /// normal phase gating; a defect, not a recoverable condition.
    #[error("cannot resolve an empty trick")]
    EmptyTrick,

    /// Structurally invalid (phase, action) pair.
    #[error("action `{action}` is not valid in phase `{phase}`")]
    InvalidAction {
        action: &'static str,
        phase: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unrecognized card token: {0}")]
    ParseCard(String),
}
