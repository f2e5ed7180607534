//! Property tests over dealing, trick resolution, and bid legality.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use crate::domain::bidding::{forbidden_bid, place_bid};
use crate::domain::cards::{card_beats, Card, Suit};
use crate::domain::config::{GameConfig, PlayerSpec};
use crate::domain::deck::{deal, shuffled_deck, DECK_SIZE};
use crate::domain::rules::{max_dealable_round_size, RoundSchedule};
use crate::domain::state::{Difficulty, GameState, Phase, PlayerId};
use crate::domain::tricks::{legal_moves, trick_winner};

fn arb_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// A trick of 2..=6 distinct cards drawn from a seeded shuffle.
fn arb_trick() -> impl Strategy<Value = (Vec<(PlayerId, Card)>, Suit)> {
    (2usize..=6, any::<u64>(), arb_suit()).prop_map(|(n, seed, trump)| {
        let deck = shuffled_deck(&mut ChaCha8Rng::seed_from_u64(seed));
        let trick = deck[..n]
            .iter()
            .enumerate()
            .map(|(seat, &card)| (seat, card))
            .collect();
        (trick, trump)
    })
}

fn bidding_state(n: usize, cards: u8, dealer: PlayerId) -> GameState {
    let mut roster = vec![PlayerSpec::human()];
    roster.extend(vec![PlayerSpec::cpu(Difficulty::Easy); n - 1]);
    let cfg = GameConfig::new(roster, true, RoundSchedule::Flat, 12, 0).unwrap();
    let mut s = GameState::new(cfg);
    s.phase = Phase::Bidding;
    s.round_no = cards;
    s.dealer = dealer;
    s.current_player = s.next_seat(dealer);
    s
}

proptest! {
    #[test]
    fn deal_partitions_the_deck(
        n in 2usize..=6,
        cards_frac in 0.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let max = max_dealable_round_size(n);
        let cards = 1 + (cards_frac * f64::from(max - 1)) as u8;
        let mut deck = shuffled_deck(&mut ChaCha8Rng::seed_from_u64(seed));
        let deal = deal(n, cards, &mut deck).unwrap();

        let mut seen: HashSet<Card> = deck.iter().copied().collect();
        prop_assert_eq!(seen.len(), deck.len());
        for hand in &deal.hands {
            prop_assert_eq!(hand.len(), cards as usize);
            for &c in hand {
                prop_assert!(seen.insert(c));
            }
        }
        prop_assert!(seen.insert(deal.trump_card));
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn trick_winner_beats_every_other_card((trick, trump) in arb_trick()) {
        let winner = trick_winner(&trick, trump).unwrap();
        let lead = trick[0].1.suit;
        let winning_card = trick
            .iter()
            .find(|&&(seat, _)| seat == winner)
            .map(|&(_, c)| c)
            .unwrap();
        for &(seat, card) in &trick {
            if seat != winner {
                prop_assert!(!card_beats(card, winning_card, lead, trump));
            }
        }
    }

    #[test]
    fn trump_in_trick_means_trump_wins((trick, trump) in arb_trick()) {
        let winner = trick_winner(&trick, trump).unwrap();
        let winning_card = trick
            .iter()
            .find(|&&(seat, _)| seat == winner)
            .map(|&(_, c)| c)
            .unwrap();
        if trick.iter().any(|&(_, c)| c.suit == trump) {
            prop_assert_eq!(winning_card.suit, trump);
        } else {
            prop_assert_eq!(winning_card.suit, trick[0].1.suit);
        }
    }

    #[test]
    fn completed_bidding_never_sums_to_round_size_when_hooked(
        n in 2usize..=6,
        cards in 1u8..=8,
        dealer_frac in 0.0f64..1.0,
        picks in prop::collection::vec(0.0f64..1.0, 6),
    ) {
        let dealer = (dealer_frac * n as f64) as usize % n;
        let mut s = bidding_state(n, cards, dealer);
        let mut hooked = false;
        for pick in picks.iter().take(n) {
            let player = s.current_player;
            if player == s.dealer {
                hooked = forbidden_bid(&s).is_some();
            }
            // Walk the legal bids starting from a random offset
            let start = (pick * f64::from(cards + 1)) as u8 % (cards + 1);
            let mut placed = false;
            for offset in 0..=cards {
                let bid = (start + offset) % (cards + 1);
                if place_bid(&mut s, player, bid).is_ok() {
                    placed = true;
                    break;
                }
            }
            prop_assert!(placed, "no legal bid for seat {}", player);
        }
        prop_assert_eq!(s.phase, Phase::Playing);
        let total: u8 = s.bids.iter().map(|b| b.unwrap()).sum();
        if hooked {
            prop_assert_ne!(total, cards);
        }
    }

    #[test]
    fn follow_suit_legality(
        seed in any::<u64>(),
        n in 2usize..=6,
        cards in 2u8..=8,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = shuffled_deck(&mut rng);
        let dealt = deal(n, cards, &mut deck).unwrap();

        let mut s = bidding_state(n, cards, 0);
        s.phase = Phase::Playing;
        for (seat, hand) in dealt.hands.into_iter().enumerate() {
            s.players[seat].hand = hand;
        }
        s.trump_card = Some(dealt.trump_card);
        s.current_player = 1;

        // Leader may always play; with can_lead_with_trump the options are the
        // whole hand.
        prop_assert_eq!(legal_moves(&s, 1).len(), cards as usize);

        // Put a lead on the table and check each seat's options
        let lead = s.players[1].hand[0];
        s.current_trick.push((1, lead));
        for seat in 0..n {
            if seat == 1 {
                continue;
            }
            let moves = legal_moves(&s, seat);
            prop_assert!(!moves.is_empty());
            let holds_lead = s.players[seat].hand.iter().any(|c| c.suit == lead.suit);
            if holds_lead {
                prop_assert!(moves.iter().all(|c| c.suit == lead.suit));
            } else {
                prop_assert_eq!(moves.len(), s.players[seat].hand.len());
            }
        }
    }
}
