//! Exact-bid round scoring and final standings.

use tracing::debug;

use crate::domain::state::{GameState, PlayerId};

/// Points for one seat's round: 10 plus the bid when the bid was hit exactly,
/// nothing otherwise.
pub fn round_points(bid: u8, tricks_won: u8) -> u32 {
    if bid == tricks_won {
        10 + bid as u32
    } else {
        0
    }
}

/// Fold the just-finished round into the cumulative scores.
pub fn apply_round_scoring(state: &mut GameState) {
    for seat in 0..state.num_players() {
        let bid = state.bids[seat].unwrap_or(0);
        let points = round_points(bid, state.tricks_won[seat]);
        state.scores[seat] += points;
        debug!(
            seat,
            bid,
            tricks = state.tricks_won[seat],
            points,
            total = state.scores[seat],
            round = state.round_no,
            "round scored"
        );
    }
}

/// Every seat holding the top score. More than one entry means a tie.
pub fn winners(state: &GameState) -> Vec<PlayerId> {
    let top = state.scores.iter().copied().max().unwrap_or(0);
    state
        .scores
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == top)
        .map(|(seat, _)| seat)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{GameConfig, PlayerSpec};
    use crate::domain::rules::RoundSchedule;
    use crate::domain::state::Difficulty;

    fn state(n: usize) -> GameState {
        let mut roster = vec![PlayerSpec::human()];
        roster.extend(vec![PlayerSpec::cpu(Difficulty::Easy); n - 1]);
        let cfg = GameConfig::new(roster, true, RoundSchedule::Flat, 7, 0).unwrap();
        GameState::new(cfg)
    }

    #[test]
    fn exact_bids_score_ten_plus_bid() {
        assert_eq!(round_points(0, 0), 10);
        assert_eq!(round_points(3, 3), 13);
        assert_eq!(round_points(3, 2), 0);
        assert_eq!(round_points(0, 1), 0);
    }

    #[test]
    fn round_scoring_accumulates_per_seat() {
        let mut s = state(4);
        s.bids = vec![Some(1), Some(1), Some(1), Some(0)];
        s.tricks_won = vec![1, 1, 1, 0];
        apply_round_scoring(&mut s);
        assert_eq!(s.scores, vec![11, 11, 11, 10]);

        s.bids = vec![Some(2), Some(0), Some(1), Some(1)];
        s.tricks_won = vec![1, 0, 2, 1];
        apply_round_scoring(&mut s);
        assert_eq!(s.scores, vec![11, 21, 11, 21]);
    }

    #[test]
    fn winners_reports_all_tied_leaders() {
        let mut s = state(3);
        s.scores = vec![30, 42, 42];
        assert_eq!(winners(&s), vec![1, 2]);
        s.scores = vec![50, 42, 42];
        assert_eq!(winners(&s), vec![0]);
    }
}
