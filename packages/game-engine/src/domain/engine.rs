//! The action reducer driving the game's phase machine.
//!
//! `GameEngine::apply` takes the current state by reference and returns a new
//! state or an error; a rejected action leaves the caller's snapshot intact.
//! The engine owns the only RNG in the crate, so a seeded engine replays a
//! game deck-for-deck.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::bidding::place_bid;
use crate::domain::cards::Card;
use crate::domain::config::GameConfig;
use crate::domain::deck::{deal, shuffled_deck, sort_hand_for_display};
use crate::domain::scoring::apply_round_scoring;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::play_card;
use crate::errors::DomainError;

/// Every externally triggerable transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    StartGame,
    DealerSelected { dealer: PlayerId },
    PlaceBid { player: PlayerId, bid: u8 },
    PlayCard { player: PlayerId, card: Card },
    ContinueAfterTrick,
    NextRound,
    ExitGame,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartGame => "startGame",
            Action::DealerSelected { .. } => "dealerSelected",
            Action::PlaceBid { .. } => "placeBid",
            Action::PlayCard { .. } => "playCard",
            Action::ContinueAfterTrick => "continueAfterTrick",
            Action::NextRound => "nextRound",
            Action::ExitGame => "exitGame",
        }
    }
}

/// State-machine driver. Holds the RNG; all game data lives in `GameState`.
#[derive(Debug)]
pub struct GameEngine {
    rng: ChaCha8Rng,
}

impl GameEngine {
    /// A seeded engine replays identically; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }

    /// Fresh `Setup` state for a validated configuration.
    pub fn new_game(&self, config: GameConfig) -> GameState {
        GameState::new(config)
    }

    /// A uniformly random dealer seat, for hosts that do not let players pick.
    pub fn random_dealer(&mut self, state: &GameState) -> PlayerId {
        self.rng.random_range(0..state.num_players())
    }

    /// Apply one action, returning the successor state.
    pub fn apply(&mut self, state: &GameState, action: &Action) -> Result<GameState, DomainError> {
        let mut next = state.clone();
        match *action {
            Action::StartGame => self.start_game(&mut next)?,
            Action::DealerSelected { dealer } => self.dealer_selected(&mut next, dealer)?,
            Action::PlaceBid { player, bid } => place_bid(&mut next, player, bid)?,
            Action::PlayCard { player, card } => play_card(&mut next, player, card)?,
            Action::ContinueAfterTrick => self.continue_after_trick(&mut next)?,
            Action::NextRound => self.next_round(&mut next)?,
            Action::ExitGame => self.exit_game(&mut next),
        }
        Ok(next)
    }

    fn start_game(&mut self, state: &mut GameState) -> Result<(), DomainError> {
        if state.phase != Phase::Setup {
            return Err(state.invalid_action("startGame"));
        }
        state.phase = Phase::DealerSelection;
        info!(players = state.num_players(), "game started");
        Ok(())
    }

    fn dealer_selected(&mut self, state: &mut GameState, dealer: PlayerId) -> Result<(), DomainError> {
        if state.phase != Phase::DealerSelection {
            return Err(state.invalid_action("dealerSelected"));
        }
        if dealer >= state.num_players() {
            return Err(DomainError::InvalidConfig(format!(
                "dealer seat {dealer} out of range"
            )));
        }
        state.dealer = dealer;
        state.round_no = 1;
        self.deal_round(state)?;
        info!(dealer, "dealer selected, round 1 dealt");
        Ok(())
    }

    fn continue_after_trick(&mut self, state: &mut GameState) -> Result<(), DomainError> {
        if state.phase != Phase::TrickComplete {
            return Err(state.invalid_action("continueAfterTrick"));
        }
        state.current_trick.clear();
        if state.all_hands_empty() {
            apply_round_scoring(state);
            state.rounds_completed += 1;
            state.phase = Phase::RoundEnd;
            info!(
                round = state.round_no,
                scores = ?state.scores,
                "round complete"
            );
        } else {
            // Winner of the trick leads the next one
            state.phase = Phase::Playing;
        }
        Ok(())
    }

    fn next_round(&mut self, state: &mut GameState) -> Result<(), DomainError> {
        if state.phase != Phase::RoundEnd {
            return Err(state.invalid_action("nextRound"));
        }
        if state.rounds_completed >= state.config.total_rounds() {
            state.phase = Phase::GameEnd;
            info!(scores = ?state.scores, "game over");
            return Ok(());
        }
        state.round_no += 1;
        state.dealer = state.next_seat(state.dealer);
        self.deal_round(state)?;
        debug!(
            round = state.round_no,
            dealer = state.dealer,
            cards = state.cards_in_round(),
            "next round dealt"
        );
        Ok(())
    }

    fn exit_game(&mut self, state: &mut GameState) {
        // Abandon the game entirely; scores and round progress do not survive
        *state = GameState::new(state.config.clone());
        info!("game exited");
    }

    /// Shuffle a fresh deck, deal the scheduled hand size, reveal trump, and
    /// open bidding left of the dealer.
    fn deal_round(&mut self, state: &mut GameState) -> Result<(), DomainError> {
        let cards = state
            .config
            .round_size_for(state.round_no)
            .ok_or_else(|| state.invalid_action("dealRound"))?;

        let mut deck = shuffled_deck(&mut self.rng);
        let deal = deal(state.num_players(), cards, &mut deck)?;
        let trump = deal.trump_card.suit;
        for (seat, hand) in deal.hands.into_iter().enumerate() {
            state.players[seat].hand = sort_hand_for_display(&hand, trump, &mut self.rng);
        }
        state.deck = deck;
        state.trump_card = Some(deal.trump_card);

        let n = state.num_players();
        state.bids = vec![None; n];
        state.tricks_won = vec![0; n];
        state.current_trick.clear();
        state.trick_winner = None;
        state.trump_broken = false;
        state.phase = Phase::Bidding;
        state.current_player = state.next_seat(state.dealer);
        Ok(())
    }
}
