//! Read-only game configuration supplied by the hosting layer.

use serde::Serialize;

use crate::domain::rules::{
    max_dealable_round_size, total_rounds, RoundSchedule, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::domain::state::{Difficulty, PlayerKind};
use crate::errors::DomainError;

/// One seat in the roster. CPU seats carry a difficulty tier.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct PlayerSpec {
    pub kind: PlayerKind,
    pub difficulty: Option<Difficulty>,
}

impl PlayerSpec {
    pub fn human() -> Self {
        Self {
            kind: PlayerKind::Human,
            difficulty: None,
        }
    }

    pub fn cpu(difficulty: Difficulty) -> Self {
        Self {
            kind: PlayerKind::Cpu,
            difficulty: Some(difficulty),
        }
    }
}

/// Immutable configuration for one game. Built once, validated once; the
/// state machine only reads it.
#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub roster: Vec<PlayerSpec>,
    /// When false, leading trump is forbidden until trump is broken.
    pub can_lead_with_trump: bool,
    pub schedule: RoundSchedule,
    pub max_round_size: u8,
    /// Pacing hint for drivers dispatching CPU turns. The engine never sleeps.
    pub cpu_delay_ms: u64,
}

impl GameConfig {
    /// Validate a configuration. `max_round_size` is clamped so every
    /// scheduled round can deal `players * size` cards plus a trump card.
    pub fn new(
        roster: Vec<PlayerSpec>,
        can_lead_with_trump: bool,
        schedule: RoundSchedule,
        max_round_size: u8,
        cpu_delay_ms: u64,
    ) -> Result<Self, DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
            return Err(DomainError::InvalidConfig(format!(
                "player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                roster.len()
            )));
        }
        for (seat, spec) in roster.iter().enumerate() {
            if spec.kind == PlayerKind::Cpu && spec.difficulty.is_none() {
                return Err(DomainError::InvalidConfig(format!(
                    "cpu seat {seat} has no difficulty tier"
                )));
            }
        }
        if max_round_size == 0 {
            return Err(DomainError::InvalidConfig(
                "max round size must be at least 1".into(),
            ));
        }
        let max_round_size = max_round_size.min(max_dealable_round_size(roster.len()));

        Ok(Self {
            roster,
            can_lead_with_trump,
            schedule,
            max_round_size,
            cpu_delay_ms,
        })
    }

    pub fn num_players(&self) -> usize {
        self.roster.len()
    }

    pub fn total_rounds(&self) -> u8 {
        total_rounds(self.schedule, self.max_round_size)
    }

    pub fn round_size_for(&self, round_no: u8) -> Option<u8> {
        crate::domain::rules::round_size_for(self.schedule, self.max_round_size, round_no)
    }
}
