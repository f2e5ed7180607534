//! Game state aggregate and seat helpers.

use serde::Serialize;

use crate::domain::cards::{Card, Suit};
use crate::domain::config::GameConfig;
use crate::errors::DomainError;

/// Seat index into the roster.
pub type PlayerId = usize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerKind {
    Human,
    Cpu,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub kind: PlayerKind,
    pub difficulty: Option<Difficulty>,
    /// Exclusively owned by this player for the current round.
    pub hand: Vec<Card>,
}

/// Game progression phases; a strict path, see the transition table in
/// `domain::engine`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Roster known, game not yet started.
    Setup,
    /// Waiting for the dealer seat to be fixed.
    DealerSelection,
    /// Players bid in turn order starting left of the dealer.
    Bidding,
    /// Trick play within the round.
    Playing,
    /// A trick just completed; waiting for acknowledgement.
    TrickComplete,
    /// Round scored; waiting for the next deal.
    RoundEnd,
    /// Terminal.
    GameEnd,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::DealerSelection => "dealerSelection",
            Phase::Bidding => "bidding",
            Phase::Playing => "playing",
            Phase::TrickComplete => "trickComplete",
            Phase::RoundEnd => "roundEnd",
            Phase::GameEnd => "gameEnd",
        }
    }
}

/// The whole game in one aggregate. The reducer in `domain::engine` replaces
/// it wholesale on every accepted action; there is no hidden mutation.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,
    pub players: Vec<Player>,
    /// Undealt remainder of this round's deck.
    pub deck: Vec<Card>,
    /// Revealed trump card; Some from the first deal until exit.
    pub trump_card: Option<Card>,
    /// In-progress (or just-completed) trick as (seat, card) in play order.
    pub current_trick: Vec<(PlayerId, Card)>,
    /// Cumulative scores across rounds.
    pub scores: Vec<u32>,
    /// Current-round bids; None until the seat has bid.
    pub bids: Vec<Option<u8>>,
    /// Tricks won this round per seat.
    pub tricks_won: Vec<u8>,
    pub current_player: PlayerId,
    pub dealer: PlayerId,
    /// Winner of the last completed trick.
    pub trick_winner: Option<PlayerId>,
    /// 1-based round number; 0 before the first deal.
    pub round_no: u8,
    pub rounds_completed: u8,
    /// Round-scoped: once true, trump may be led freely for the rest of the
    /// round.
    pub trump_broken: bool,
}

impl GameState {
    /// Fresh state in `Setup` with the roster assembled and scores zeroed.
    pub fn new(config: GameConfig) -> Self {
        let players = config
            .roster
            .iter()
            .enumerate()
            .map(|(id, spec)| Player {
                id,
                kind: spec.kind,
                difficulty: spec.difficulty,
                hand: Vec::new(),
            })
            .collect::<Vec<_>>();
        let n = players.len();
        Self {
            config,
            phase: Phase::Setup,
            players,
            deck: Vec::new(),
            trump_card: None,
            current_trick: Vec::new(),
            scores: vec![0; n],
            bids: vec![None; n],
            tricks_won: vec![0; n],
            current_player: 0,
            dealer: 0,
            trick_winner: None,
            round_no: 0,
            rounds_completed: 0,
            trump_broken: false,
        }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Next seat clockwise.
    pub fn next_seat(&self, seat: PlayerId) -> PlayerId {
        (seat + 1) % self.num_players()
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_card.map(|c| c.suit)
    }

    /// Cards dealt per player this round.
    pub fn cards_in_round(&self) -> u8 {
        self.config.round_size_for(self.round_no).unwrap_or(0)
    }

    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }

    pub(crate) fn invalid_action(&self, action: &'static str) -> DomainError {
        DomainError::InvalidAction {
            action,
            phase: self.phase.name(),
        }
    }
}
