//! Card-play legality, trump breaking, and trick resolution.

use tracing::debug;

use crate::domain::cards::{card_beats, hand_has_suit, Card, Suit};
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::errors::{DomainError, PlayErrorKind};

/// May the current round's leader open a trick with trump?
pub fn may_lead_trump(state: &GameState) -> bool {
    state.config.can_lead_with_trump || state.trump_broken
}

/// The cards `player` may legally play right now.
///
/// Leading: the whole hand, minus trump while leading trump is forbidden.
/// A hand holding nothing but trump may always lead it. Following: every
/// card of the lead suit, or the whole hand when void in it.
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Card> {
    let hand = &state.players[player].hand;
    let trump = match state.trump_suit() {
        Some(s) => s,
        None => return Vec::new(),
    };

    match state.current_trick.first() {
        None => {
            if may_lead_trump(state) {
                return hand.clone();
            }
            let non_trump: Vec<Card> = hand.iter().copied().filter(|c| c.suit != trump).collect();
            if non_trump.is_empty() {
                hand.clone()
            } else {
                non_trump
            }
        }
        Some(&(_, lead)) => {
            if hand_has_suit(hand, lead.suit) {
                hand.iter().copied().filter(|c| c.suit == lead.suit).collect()
            } else {
                hand.clone()
            }
        }
    }
}

/// Winner of a completed (or partial) trick.
pub fn trick_winner(trick: &[(PlayerId, Card)], trump: Suit) -> Result<PlayerId, DomainError> {
    winning_play(trick, trump)
        .map(|(seat, _)| seat)
        .ok_or(DomainError::EmptyTrick)
}

/// The play currently ahead in a partial trick, if any card is down.
pub fn winning_play(trick: &[(PlayerId, Card)], trump: Suit) -> Option<(PlayerId, Card)> {
    let (mut winner, mut best) = *trick.first()?;
    let lead = best.suit;
    for &(seat, card) in &trick[1..] {
        if card_beats(card, best, lead, trump) {
            winner = seat;
            best = card;
        }
    }
    Some((winner, best))
}

/// The play currently winning the in-progress trick, if any.
pub fn current_winning_play(state: &GameState) -> Option<(PlayerId, Card)> {
    winning_play(&state.current_trick, state.trump_suit()?)
}

/// Play `card` for `player`, enforcing turn order and follow-suit rules.
///
/// Completing the trick resolves the winner, credits them a trick, and moves
/// to `TrickComplete` with the cards still on the table for the host to show.
pub fn play_card(state: &mut GameState, player: PlayerId, card: Card) -> Result<(), DomainError> {
    if state.phase != Phase::Playing {
        return Err(state.invalid_action("playCard"));
    }
    if player != state.current_player {
        return Err(DomainError::IllegalCardPlay(PlayErrorKind::OutOfTurn));
    }
    let trump = state
        .trump_suit()
        .ok_or_else(|| state.invalid_action("playCard"))?;

    let hand = &state.players[player].hand;
    let pos = hand
        .iter()
        .position(|&c| c == card)
        .ok_or(DomainError::IllegalCardPlay(PlayErrorKind::NotInHand))?;

    let leading = state.current_trick.is_empty();
    let hand_all_trump = hand.iter().all(|c| c.suit == trump);
    if leading {
        if card.suit == trump && !may_lead_trump(state) && !hand_all_trump {
            return Err(DomainError::IllegalCardPlay(PlayErrorKind::TrumpLeadForbidden));
        }
    } else {
        let lead = state.current_trick[0].1.suit;
        if card.suit != lead && hand_has_suit(hand, lead) {
            return Err(DomainError::IllegalCardPlay(PlayErrorKind::MustFollowSuit));
        }
    }

    state.players[player].hand.remove(pos);
    state.current_trick.push((player, card));

    // Trump breaks when it lands on a non-trump lead, or when a leader is
    // forced to open with it.
    if card.suit == trump {
        let broke = if leading {
            hand_all_trump
        } else {
            state.current_trick[0].1.suit != trump
        };
        if broke && !state.trump_broken {
            state.trump_broken = true;
            debug!(player, round = state.round_no, "trump broken");
        }
    }

    if state.current_trick.len() == state.num_players() {
        let winner = trick_winner(&state.current_trick, trump)?;
        state.tricks_won[winner] += 1;
        state.trick_winner = Some(winner);
        state.current_player = winner;
        state.phase = Phase::TrickComplete;
        debug!(winner, round = state.round_no, "trick complete");
    } else {
        state.current_player = state.next_seat(player);
    }
    Ok(())
}
