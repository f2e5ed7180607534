//! Redacted, serialisable view of the game for display layers.
//!
//! `GameState` itself is fully public for hosts that own the whole game; a
//! `Snapshot` is what gets handed to a single seat's UI, with the other
//! players' hands reduced to counts.

use serde::Serialize;

use crate::domain::cards::Card;
use crate::domain::state::{Difficulty, GameState, Phase, PlayerId, PlayerKind};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub id: PlayerId,
    pub kind: PlayerKind,
    pub difficulty: Option<Difficulty>,
    pub hand_size: usize,
    /// Present only for the viewing seat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<Card>>,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub round_no: u8,
    pub cards_in_round: u8,
    pub dealer: PlayerId,
    pub current_player: PlayerId,
    pub trump_card: Option<Card>,
    pub trump_broken: bool,
    pub current_trick: Vec<(PlayerId, Card)>,
    pub trick_winner: Option<PlayerId>,
    pub seats: Vec<SeatView>,
}

impl Snapshot {
    /// Project the state as seen from `viewer`; `None` redacts every hand
    /// (spectator view).
    pub fn for_viewer(state: &GameState, viewer: Option<PlayerId>) -> Self {
        let seats = state
            .players
            .iter()
            .map(|p| SeatView {
                id: p.id,
                kind: p.kind,
                difficulty: p.difficulty,
                hand_size: p.hand.len(),
                hand: (viewer == Some(p.id)).then(|| p.hand.clone()),
                bid: state.bids[p.id],
                tricks_won: state.tricks_won[p.id],
                score: state.scores[p.id],
            })
            .collect();
        Self {
            phase: state.phase,
            round_no: state.round_no,
            cards_in_round: state.cards_in_round(),
            dealer: state.dealer,
            current_player: state.current_player,
            trump_card: state.trump_card,
            trump_broken: state.trump_broken,
            current_trick: state.current_trick.clone(),
            trick_winner: state.trick_winner,
            seats,
        }
    }
}
