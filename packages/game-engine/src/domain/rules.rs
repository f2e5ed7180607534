//! Round-size schedules and bid-range rules.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::deck::DECK_SIZE;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// How round sizes progress across the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundSchedule {
    /// Sizes 1, 2, ..., max; the game plays exactly `max` rounds.
    Flat,
    /// Sizes ascend 1..=max then descend max-1..=1; `2*max - 1` rounds.
    Ladder,
}

/// Total number of scheduled rounds for a schedule.
pub fn total_rounds(schedule: RoundSchedule, max_round_size: u8) -> u8 {
    match schedule {
        RoundSchedule::Flat => max_round_size,
        RoundSchedule::Ladder => 2 * max_round_size - 1,
    }
}

/// Cards dealt per player in a 1-based round, or None past the schedule.
pub fn round_size_for(schedule: RoundSchedule, max_round_size: u8, round_no: u8) -> Option<u8> {
    if round_no == 0 || round_no > total_rounds(schedule, max_round_size) {
        return None;
    }
    match schedule {
        RoundSchedule::Flat => Some(round_no),
        RoundSchedule::Ladder => {
            if round_no <= max_round_size {
                Some(round_no)
            } else {
                Some(2 * max_round_size - round_no)
            }
        }
    }
}

/// Largest round size dealable to `num_players` seats while leaving a card to
/// reveal as trump.
pub fn max_dealable_round_size(num_players: usize) -> u8 {
    ((DECK_SIZE - 1) / num_players) as u8
}

pub fn valid_bid_range(cards_in_round: u8) -> RangeInclusive<u8> {
    0..=cards_in_round
}
