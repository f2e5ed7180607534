//! Drives CPU seats through the reducer.
//!
//! The coordinator owns one strategy per CPU seat and knows how to turn the
//! current state into a strategy request. Hosts call [`AiCoordinator::take_turn`]
//! whenever it might be a CPU's move; it returns `None` when it is not.

use thiserror::Error;
use tracing::{debug, warn};

use super::{strategy_for, AiError, AiStrategy, BidRequest, PlayRequest};
use crate::domain::bidding::forbidden_bid;
use crate::domain::config::GameConfig;
use crate::domain::engine::{Action, GameEngine};
use crate::domain::state::{GameState, Phase, PlayerKind};
use crate::domain::tricks::{legal_moves, may_lead_trump};
use crate::errors::DomainError;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// One strategy instance per seat, `None` for humans.
pub struct AiCoordinator {
    strategies: Vec<Option<Box<dyn AiStrategy>>>,
}

impl AiCoordinator {
    /// Build strategies for every CPU seat in the roster. A base seed makes
    /// the whole table reproducible; each seat gets its own stream.
    pub fn new(config: &GameConfig, seed: Option<u64>) -> Self {
        let strategies = config
            .roster
            .iter()
            .enumerate()
            .map(|(seat, spec)| match (spec.kind, spec.difficulty) {
                (PlayerKind::Cpu, Some(difficulty)) => Some(strategy_for(
                    difficulty,
                    seed.map(|s| s.wrapping_add(seat as u64)),
                )),
                _ => None,
            })
            .collect();
        Self { strategies }
    }

    /// Is the seat whose turn it is one of ours?
    pub fn is_cpu_turn(&self, state: &GameState) -> bool {
        matches!(state.phase, Phase::Bidding | Phase::Playing)
            && self.strategies[state.current_player].is_some()
    }

    /// Let the current CPU seat act once. Returns the successor state, or
    /// `None` when the turn belongs to a human or no seat is on turn.
    pub fn take_turn(
        &self,
        engine: &mut GameEngine,
        state: &GameState,
    ) -> Result<Option<GameState>, CoordinatorError> {
        let seat = state.current_player;
        let Some(strategy) = self
            .strategies
            .get(seat)
            .and_then(|s| s.as_ref())
            .filter(|_| matches!(state.phase, Phase::Bidding | Phase::Playing))
        else {
            return Ok(None);
        };

        match state.phase {
            Phase::Bidding => self.take_bid_turn(engine, state, seat, strategy.as_ref()),
            Phase::Playing => self.take_play_turn(engine, state, seat, strategy.as_ref()),
            _ => Ok(None),
        }
    }

    fn take_bid_turn(
        &self,
        engine: &mut GameEngine,
        state: &GameState,
        seat: usize,
        strategy: &dyn AiStrategy,
    ) -> Result<Option<GameState>, CoordinatorError> {
        let trump_suit = state
            .trump_suit()
            .ok_or_else(|| state.invalid_action("cpuBid"))?;
        let other_bids: Vec<u8> = state
            .bids
            .iter()
            .enumerate()
            .filter(|&(s, _)| s != seat)
            .filter_map(|(_, b)| *b)
            .collect();
        let request = BidRequest {
            hand: &state.players[seat].hand,
            trump_suit,
            cards_in_round: state.cards_in_round(),
            is_dealer: seat == state.dealer,
            forbidden_bid: forbidden_bid(state),
            other_bids,
        };
        let bid = strategy.choose_bid(&request)?;
        debug!(seat, bid, strategy = strategy.name(), "cpu bid chosen");

        match engine.apply(state, &Action::PlaceBid { player: seat, bid }) {
            Ok(next) => Ok(Some(next)),
            Err(err) => {
                // Strategies should not produce illegal bids; recover with the
                // first bid the rules accept
                warn!(seat, bid, %err, "cpu bid rejected, falling back");
                for fallback in 0..=state.cards_in_round() {
                    if let Ok(next) = engine.apply(
                        state,
                        &Action::PlaceBid {
                            player: seat,
                            bid: fallback,
                        },
                    ) {
                        return Ok(Some(next));
                    }
                }
                Err(AiError::NoLegalMoves.into())
            }
        }
    }

    fn take_play_turn(
        &self,
        engine: &mut GameEngine,
        state: &GameState,
        seat: usize,
        strategy: &dyn AiStrategy,
    ) -> Result<Option<GameState>, CoordinatorError> {
        let trump_suit = state
            .trump_suit()
            .ok_or_else(|| state.invalid_action("cpuPlay"))?;
        let request = PlayRequest {
            hand: &state.players[seat].hand,
            trick: &state.current_trick,
            trump_suit,
            bid: state.bids[seat].unwrap_or(0),
            tricks_won: state.tricks_won[seat],
            may_lead_trump: may_lead_trump(state),
        };
        let card = strategy.choose_card(&request)?;
        debug!(seat, ?card, strategy = strategy.name(), "cpu play chosen");

        match engine.apply(state, &Action::PlayCard { player: seat, card }) {
            Ok(next) => Ok(Some(next)),
            Err(err) => {
                warn!(seat, ?card, %err, "cpu play rejected, falling back");
                let fallback = *legal_moves(state, seat)
                    .first()
                    .ok_or(AiError::NoLegalMoves)?;
                let next = engine.apply(
                    state,
                    &Action::PlayCard {
                        player: seat,
                        card: fallback,
                    },
                )?;
                Ok(Some(next))
            }
        }
    }
}
