//! Domain layer: pure game rules, state, and the action reducer.

pub mod bidding;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use cards::{card_beats, hand_has_suit, Card, Rank, Suit};
pub use config::{GameConfig, PlayerSpec};
pub use engine::{Action, GameEngine};
pub use rules::RoundSchedule;
pub use snapshot::Snapshot;
pub use state::{Difficulty, GameState, Phase, Player, PlayerId, PlayerKind};
