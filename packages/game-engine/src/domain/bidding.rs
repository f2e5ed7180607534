//! Bid validation, the dealer hook rule, and the bidding -> playing handoff.

use tracing::debug;

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::errors::{BidErrorKind, DomainError};

/// The hook-rule forbidden bid, if any.
///
/// Applies only to the dealer, and only once every other seat has bid: the
/// dealer may not bid the value that would make total bids equal the number
/// of tricks in the round. Returns None when that value falls outside the
/// valid bid range (every bid is then allowed).
pub fn forbidden_bid(state: &GameState) -> Option<u8> {
    if state.current_player != state.dealer {
        return None;
    }
    let mut sum: u8 = 0;
    for (seat, bid) in state.bids.iter().enumerate() {
        if seat == state.dealer {
            continue;
        }
        sum += (*bid)?;
    }
    let cards = state.cards_in_round();
    let forbidden = cards.checked_sub(sum)?;
    valid_bid_range(cards).contains(&forbidden).then_some(forbidden)
}

/// Record `bid` for `player`, enforcing turn order, range, and the hook rule.
/// When the dealer's bid lands, play begins with the seat left of the dealer.
pub fn place_bid(state: &mut GameState, player: PlayerId, bid: u8) -> Result<(), DomainError> {
    if state.phase != Phase::Bidding {
        return Err(state.invalid_action("placeBid"));
    }
    if player != state.current_player {
        return Err(DomainError::IllegalBid(BidErrorKind::OutOfTurn));
    }
    if state.bids[player].is_some() {
        return Err(DomainError::IllegalBid(BidErrorKind::AlreadyBid));
    }
    if !valid_bid_range(state.cards_in_round()).contains(&bid) {
        return Err(DomainError::IllegalBid(BidErrorKind::OutOfRange));
    }
    if forbidden_bid(state) == Some(bid) {
        return Err(DomainError::IllegalBid(BidErrorKind::HookRule));
    }

    state.bids[player] = Some(bid);
    debug!(player, bid, round = state.round_no, "bid placed");

    if state.bids.iter().all(|b| b.is_some()) {
        state.phase = Phase::Playing;
        state.current_player = state.next_seat(state.dealer);
        debug!(
            leader = state.current_player,
            "all bids in, play begins"
        );
    } else {
        state.current_player = state.next_seat(player);
    }
    Ok(())
}
