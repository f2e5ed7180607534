//! Deck construction, dealing, and the display-only hand sort.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::cards::{Card, Rank, Suit};
use crate::errors::DomainError;

pub const DECK_SIZE: usize = 52;

/// The 52 distinct cards in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A fresh Fisher-Yates-shuffled deck, consumed as a stack (deal from the back).
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Result of dealing one round: hands per seat plus the revealed trump card.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub trump_card: Card,
}

/// Deal `cards_per_player` cards to each of `num_players` seats, one card at a
/// time in round-robin order, then reveal the next card as trump.
///
/// The deck must hold at least `num_players * cards_per_player + 1` cards.
pub fn deal(
    num_players: usize,
    cards_per_player: u8,
    deck: &mut Vec<Card>,
) -> Result<Deal, DomainError> {
    let needed = num_players * cards_per_player as usize + 1;
    if deck.len() < needed {
        return Err(DomainError::InsufficientDeck {
            needed,
            available: deck.len(),
        });
    }

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(cards_per_player as usize); num_players];
    for _ in 0..cards_per_player {
        for hand in hands.iter_mut() {
            // Length checked above; pop cannot fail here
            if let Some(card) = deck.pop() {
                hand.push(card);
            }
        }
    }

    let trump_card = deck.pop().ok_or(DomainError::InsufficientDeck {
        needed,
        available: 0,
    })?;

    Ok(Deal { hands, trump_card })
}

/// Display-only hand ordering: group by suit with trump last, the trump's
/// same-color suit between the two off-color suits, and the off-color pair's
/// left/right order decided by one coin flip per call. Each group ascends by
/// rank.
///
/// Purely cosmetic; legality and strategy code never consult this ordering.
pub fn sort_hand_for_display<R: Rng + ?Sized>(
    hand: &[Card],
    trump_suit: Suit,
    rng: &mut R,
) -> Vec<Card> {
    let same_color = trump_suit.same_color_partner();
    let mut off_color: Vec<Suit> = Suit::ALL
        .into_iter()
        .filter(|&s| s != trump_suit && s != same_color)
        .collect();
    if rng.random_bool(0.5) {
        off_color.swap(0, 1);
    }

    let order = [off_color[0], same_color, off_color[1], trump_suit];
    let mut sorted = Vec::with_capacity(hand.len());
    for suit in order {
        let mut group: Vec<Card> = hand.iter().copied().filter(|c| c.suit == suit).collect();
        group.sort_by(|a, b| a.rank.cmp(&b.rank));
        sorted.extend(group);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let a = shuffled_deck(&mut ChaCha8Rng::seed_from_u64(7));
        let b = shuffled_deck(&mut ChaCha8Rng::seed_from_u64(7));
        let c = shuffled_deck(&mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn deal_partitions_the_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut deck = shuffled_deck(&mut rng);
        let deal = deal(4, 7, &mut deck).unwrap();

        let mut seen: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(deck.len(), 52 - 4 * 7 - 1);
        for hand in &deal.hands {
            assert_eq!(hand.len(), 7);
            for &c in hand {
                assert!(seen.insert(c), "duplicate card {c:?}");
            }
        }
        assert!(seen.insert(deal.trump_card));
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn deal_is_round_robin_not_blocks() {
        // With an unshuffled deck the back of the deck alternates between
        // seats: seat 0 gets positions 51, 49, ... when two players are dealt.
        let mut deck = full_deck();
        let top = deck[51];
        let second = deck[50];
        let deal = deal(2, 2, &mut deck).unwrap();
        assert_eq!(deal.hands[0][0], top);
        assert_eq!(deal.hands[1][0], second);
    }

    #[test]
    fn deal_rejects_short_deck() {
        let mut deck = full_deck();
        let err = deal(4, 13, &mut deck).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InsufficientDeck {
                needed: 53,
                available: 52
            }
        ));
        // Rejection leaves the deck untouched
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn display_sort_groups_by_suit_with_trump_last() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let hand = crate::domain::cards::parse_cards(&["2H", "AH", "5S", "9C", "3C", "KD"]);
        let sorted = sort_hand_for_display(&hand, Suit::Hearts, &mut rng);

        assert_eq!(sorted.len(), hand.len());
        // Trump group is last and ascending
        assert_eq!(sorted[4].suit, Suit::Hearts);
        assert_eq!(sorted[5].suit, Suit::Hearts);
        assert!(sorted[4].rank < sorted[5].rank);
        // Same-color partner (diamonds) sits between the two black suits
        let d_pos = sorted.iter().position(|c| c.suit == Suit::Diamonds).unwrap();
        let c_pos = sorted.iter().position(|c| c.suit == Suit::Clubs).unwrap();
        let s_pos = sorted.iter().position(|c| c.suit == Suit::Spades).unwrap();
        assert!((c_pos < d_pos && d_pos < s_pos) || (s_pos < d_pos && d_pos < c_pos));
        // Same multiset of cards
        let mut a = hand.clone();
        let mut b = sorted.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
