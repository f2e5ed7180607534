//! Rule engine for a trick-taking bidding card game.
//!
//! The crate splits into a pure `domain` layer (state, rules, and the action
//! reducer) and an `ai` layer (per-difficulty CPU strategies plus the
//! coordinator that drives them through the reducer). Nothing here does I/O;
//! hosts own the event loop, persistence, and pacing.

pub mod ai;
pub mod domain;
pub mod errors;

pub use ai::{AiCoordinator, AiError, AiStrategy, BidRequest, PlayRequest};
pub use domain::{
    Action, Card, Difficulty, GameConfig, GameEngine, GameState, Phase, PlayerId, PlayerKind,
    PlayerSpec, Rank, RoundSchedule, Snapshot, Suit,
};
pub use errors::{BidErrorKind, DomainError, PlayErrorKind};
