//! In-memory game runner: drives one CPU-only game to completion.

use oh_hell_engine::ai::coordinator::CoordinatorError;
use oh_hell_engine::domain::scoring::winners;
use oh_hell_engine::{Action, AiCoordinator, AiError, GameConfig, GameEngine, Phase, PlayerId};
use tracing::debug;

/// Outcome of one simulated game.
#[derive(Debug)]
pub struct GameResult {
    pub final_scores: Vec<u32>,
    pub winners: Vec<PlayerId>,
    pub rounds_played: u8,
}

pub struct Simulator {
    config: GameConfig,
    seed: u64,
}

impl Simulator {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Run the game front to back through the action API. Every seat must be
    /// a CPU; a human seat would stall the loop, so it surfaces as an error.
    pub fn simulate_game(&self) -> Result<GameResult, CoordinatorError> {
        let coordinator = AiCoordinator::new(&self.config, Some(self.seed));
        let mut engine = GameEngine::new(Some(self.seed));
        let mut state = engine.new_game(self.config.clone());

        state = engine.apply(&state, &Action::StartGame)?;
        let dealer = engine.random_dealer(&state);
        state = engine.apply(&state, &Action::DealerSelected { dealer })?;
        debug!(seed = self.seed, dealer, "simulation started");

        loop {
            match state.phase {
                Phase::Bidding | Phase::Playing => {
                    state = coordinator.take_turn(&mut engine, &state)?.ok_or_else(|| {
                        CoordinatorError::Ai(AiError::Internal(format!(
                            "seat {} is not a cpu",
                            state.current_player
                        )))
                    })?;
                }
                Phase::TrickComplete => {
                    state = engine.apply(&state, &Action::ContinueAfterTrick)?;
                }
                Phase::RoundEnd => {
                    debug!(
                        round = state.round_no,
                        scores = ?state.scores,
                        "round finished"
                    );
                    state = engine.apply(&state, &Action::NextRound)?;
                }
                Phase::GameEnd => {
                    return Ok(GameResult {
                        winners: winners(&state),
                        final_scores: state.scores,
                        rounds_played: state.rounds_completed,
                    });
                }
                Phase::Setup | Phase::DealerSelection => {
                    return Err(CoordinatorError::Ai(AiError::Internal(format!(
                        "unexpected phase {:?} mid-game",
                        state.phase
                    ))));
                }
            }
        }
    }
}
