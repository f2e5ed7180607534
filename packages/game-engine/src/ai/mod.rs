//! CPU strategies, one per difficulty tier, behind a common trait.

use thiserror::Error;

use crate::domain::cards::{Card, Suit};
use crate::domain::state::{Difficulty, PlayerId};

pub mod coordinator;
pub mod easy;
pub mod hard;
pub mod medium;

pub use coordinator::AiCoordinator;
pub use easy::EasyPlayer;
pub use hard::HardPlayer;
pub use medium::MediumPlayer;

/// Errors from AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("ai internal error: {0}")]
    Internal(String),
}

/// Everything a strategy may consult when bidding.
#[derive(Debug)]
pub struct BidRequest<'a> {
    pub hand: &'a [Card],
    pub trump_suit: Suit,
    pub cards_in_round: u8,
    pub is_dealer: bool,
    /// The hook-rule value this seat must dodge, when it is the dealer.
    pub forbidden_bid: Option<u8>,
    /// Bids already placed by the other seats, in no particular order.
    pub other_bids: Vec<u8>,
}

/// Everything a strategy may consult when playing a card.
#[derive(Debug)]
pub struct PlayRequest<'a> {
    pub hand: &'a [Card],
    pub trick: &'a [(PlayerId, Card)],
    pub trump_suit: Suit,
    pub bid: u8,
    pub tricks_won: u8,
    pub may_lead_trump: bool,
}

/// A difficulty tier's decision logic. Implementations take `&self` so one
/// instance can serve concurrent games; mutable state (RNG) goes behind a
/// `Mutex`.
pub trait AiStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn choose_bid(&self, req: &BidRequest<'_>) -> Result<u8, AiError>;

    fn choose_card(&self, req: &PlayRequest<'_>) -> Result<Card, AiError>;
}

/// Strategy instance for a difficulty tier. `seed` makes the easy tier's
/// randomness reproducible; the other tiers are deterministic.
pub fn strategy_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn AiStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyPlayer::new(seed)),
        Difficulty::Medium => Box::new(MediumPlayer::new()),
        Difficulty::Hard => Box::new(HardPlayer::new()),
    }
}

// ---------- Shared hand-evaluation helpers ----------

/// Trump-aware card strength: any trump outranks any non-trump.
pub(crate) fn card_strength(card: Card, trump: Suit) -> u16 {
    let base = u16::from(card.rank.value());
    if card.suit == trump {
        base + 100
    } else {
        base
    }
}

/// Fraction of the hand that is J, Q, K, or A.
pub(crate) fn high_card_fraction(hand: &[Card]) -> f32 {
    if hand.is_empty() {
        return 0.0;
    }
    let high = hand.iter().filter(|c| c.rank.value() >= 11).count();
    high as f32 / hand.len() as f32
}

pub(crate) fn trump_fraction(hand: &[Card], trump: Suit) -> f32 {
    if hand.is_empty() {
        return 0.0;
    }
    let trumps = hand.iter().filter(|c| c.suit == trump).count();
    trumps as f32 / hand.len() as f32
}

/// Cards held per suit, indexed like `Suit::ALL`.
pub(crate) fn suit_counts(hand: &[Card]) -> [u8; 4] {
    let mut counts = [0u8; 4];
    for c in hand {
        counts[c.suit as usize] += 1;
    }
    counts
}

/// Point-count strength normalized to 0..=1: A=4, K=3, Q=2, J=1, and half a
/// point for ten through eight.
pub(crate) fn raw_point_strength(hand: &[Card]) -> f32 {
    if hand.is_empty() {
        return 0.0;
    }
    let points: f32 = hand
        .iter()
        .map(|c| match c.rank.value() {
            14 => 4.0,
            13 => 3.0,
            12 => 2.0,
            11 => 1.0,
            8..=10 => 0.5,
            _ => 0.0,
        })
        .sum();
    points / (hand.len() as f32 * 4.0)
}

/// Convert a 0..=1 strength estimate into a bid. The +0.99 skews rounding so
/// a full-strength hand bids the whole round.
pub(crate) fn bid_from_strength(strength: f32, hand_len: usize) -> u8 {
    let bid = (strength * (hand_len as f32 + 0.99)).floor() as i64;
    bid.clamp(0, hand_len as i64) as u8
}

/// Nudge a bid off the dealer's forbidden value: away from the edges when the
/// forbidden bid sits on one, otherwise up for strong hands and down for weak.
pub(crate) fn repair_forbidden_bid(hand: &[Card], forbidden: u8, cards_in_round: u8) -> u8 {
    if forbidden == 0 {
        return 1;
    }
    if forbidden == cards_in_round {
        return cards_in_round - 1;
    }
    if raw_point_strength(hand) > 0.5 {
        (forbidden + 1).min(cards_in_round)
    } else {
        forbidden - 1
    }
}

/// The card currently winning the trick, if any card is down.
pub(crate) fn winning_card(trick: &[(PlayerId, Card)], trump: Suit) -> Option<Card> {
    crate::domain::tricks::winning_play(trick, trump).map(|(_, card)| card)
}

/// What a leader may put down: the whole hand, minus trump while leading
/// trump is off the table. An all-trump hand leads trump regardless.
pub(crate) fn playable_leads(hand: &[Card], trump: Suit, may_lead_trump: bool) -> Vec<Card> {
    if may_lead_trump {
        return hand.to_vec();
    }
    let non_trump: Vec<Card> = hand.iter().copied().filter(|c| c.suit != trump).collect();
    if non_trump.is_empty() {
        hand.to_vec()
    } else {
        non_trump
    }
}

pub(crate) fn lowest_by_value(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min_by_key(|c| c.rank.value())
}

pub(crate) fn highest_by_value(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().max_by_key(|c| c.rank.value())
}

pub(crate) fn cards_in_suit(hand: &[Card], suit: Suit) -> Vec<Card> {
    hand.iter().copied().filter(|c| c.suit == suit).collect()
}
