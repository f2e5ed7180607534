//! Hard tier: shape-aware bidding and bid-aware play.

use super::{
    bid_from_strength, card_strength, cards_in_suit, high_card_fraction, highest_by_value,
    lowest_by_value, playable_leads, repair_forbidden_bid, suit_counts, trump_fraction,
    winning_card, AiError, AiStrategy, BidRequest, PlayRequest,
};
use crate::domain::cards::{Card, Suit};

/// The strongest tier. Bidding folds in suit shape and what the table has
/// already bid; play chases the bid and then gets out of the way.
#[derive(Default)]
pub struct HardPlayer;

impl HardPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Discard target when off the bid: the highest card of the shortest
    /// non-trump suit, keeping trumps back as long as possible.
    fn discard(hand: &[Card], trump: Suit) -> Option<Card> {
        let counts = suit_counts(hand);
        let shortest = Suit::ALL
            .into_iter()
            .filter(|&s| s != trump && counts[s as usize] > 0)
            .min_by_key(|&s| counts[s as usize]);
        if let Some(suit) = shortest {
            return highest_by_value(&cards_in_suit(hand, suit));
        }
        lowest_by_value(hand)
    }
}

impl AiStrategy for HardPlayer {
    fn name(&self) -> &'static str {
        "hard"
    }

    fn choose_bid(&self, req: &BidRequest<'_>) -> Result<u8, AiError> {
        let counts = suit_counts(req.hand);
        let has_singleton = counts.iter().any(|&c| c == 1);
        let suits_present = counts.iter().filter(|&&c| c > 0).count();

        let mut strength = high_card_fraction(req.hand) * 0.3
            + trump_fraction(req.hand, req.trump_suit) * 0.4
            + if has_singleton { 0.1 } else { 0.0 }
            + if suits_present < 4 { 0.2 } else { 0.0 };

        // Temper the bid when the table is already claiming most of the tricks
        if !req.other_bids.is_empty() && req.cards_in_round > 0 {
            let avg = req.other_bids.iter().map(|&b| f32::from(b)).sum::<f32>()
                / req.other_bids.len() as f32;
            if avg / f32::from(req.cards_in_round) > 0.5 {
                strength *= 0.9;
            }
        }

        let bid = bid_from_strength(strength, req.hand.len());
        if req.is_dealer && req.forbidden_bid == Some(bid) {
            return Ok(repair_forbidden_bid(req.hand, bid, req.cards_in_round));
        }
        Ok(bid)
    }

    fn choose_card(&self, req: &PlayRequest<'_>) -> Result<Card, AiError> {
        let trump = req.trump_suit;
        let needs_tricks = req.tricks_won < req.bid;

        // Leading: strong card while chasing the bid, weakest once it is made
        let Some(&(_, lead)) = req.trick.first() else {
            let options = playable_leads(req.hand, trump, req.may_lead_trump);
            let pick = if needs_tricks {
                options.iter().copied().max_by_key(|&c| card_strength(c, trump))
            } else {
                options.iter().copied().min_by_key(|&c| card_strength(c, trump))
            };
            return pick.ok_or(AiError::NoLegalMoves);
        };

        let in_suit = cards_in_suit(req.hand, lead.suit);
        let best = winning_card(req.trick, trump);

        if !in_suit.is_empty() {
            if needs_tricks {
                if let Some(best) = best {
                    let winners: Vec<Card> = in_suit
                        .iter()
                        .copied()
                        .filter(|&c| card_strength(c, trump) > card_strength(best, trump))
                        .collect();
                    if let Some(cheap) = lowest_by_value(&winners) {
                        return Ok(cheap);
                    }
                }
            }
            return lowest_by_value(&in_suit).ok_or(AiError::NoLegalMoves);
        }

        // Void in the lead suit
        let trumps = cards_in_suit(req.hand, trump);
        if needs_tricks && !trumps.is_empty() {
            let winning_trumps: Vec<Card> = match best {
                Some(best) if best.suit == trump => trumps
                    .iter()
                    .copied()
                    .filter(|c| c.rank > best.rank)
                    .collect(),
                _ => trumps.clone(),
            };
            if let Some(cheap) = lowest_by_value(&winning_trumps) {
                return Ok(cheap);
            }
        }
        Self::discard(req.hand, trump).ok_or(AiError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::parse_cards;

    fn bid(hand: &[&str], trump: Suit, cards: u8, others: Vec<u8>) -> u8 {
        let hand = parse_cards(hand);
        HardPlayer::new()
            .choose_bid(&BidRequest {
                hand: &hand,
                trump_suit: trump,
                cards_in_round: cards,
                is_dealer: false,
                forbidden_bid: None,
                other_bids: others,
            })
            .unwrap()
    }

    fn play(hand: &[&str], trick_toks: &[&str], trump: Suit, bid: u8, won: u8) -> Card {
        let hand = parse_cards(hand);
        let trick: Vec<(usize, Card)> = parse_cards(trick_toks)
            .into_iter()
            .enumerate()
            .collect();
        HardPlayer::new()
            .choose_card(&PlayRequest {
                hand: &hand,
                trick: &trick,
                trump_suit: trump,
                bid,
                tricks_won: won,
                may_lead_trump: true,
            })
            .unwrap()
    }

    #[test]
    fn shape_raises_the_bid() {
        // Same face cards, but the second hand is void in two suits
        let flat = bid(&["AH", "2C", "3D", "4S"], Suit::Spades, 4, vec![]);
        let shapely = bid(&["AH", "2H", "3H", "4S"], Suit::Spades, 4, vec![]);
        assert!(shapely > flat);
    }

    #[test]
    fn heavy_table_bidding_tempers_the_bid() {
        let hand = ["AS", "KS", "QH", "JH"];
        let quiet = bid(&hand, Suit::Spades, 4, vec![0, 0]);
        let noisy = bid(&hand, Suit::Spades, 4, vec![3, 3]);
        assert!(noisy <= quiet);
    }

    #[test]
    fn chases_the_bid_on_lead() {
        // Needs tricks: leads the ace. Bid made: dumps the deuce.
        assert_eq!(
            play(&["AH", "2C"], &[], Suit::Spades, 1, 0),
            parse_cards(&["AH"])[0]
        );
        assert_eq!(
            play(&["AH", "2C"], &[], Suit::Spades, 1, 1),
            parse_cards(&["2C"])[0]
        );
    }

    #[test]
    fn declines_to_win_once_bid_is_made() {
        // Could beat the king, but already has its tricks
        assert_eq!(
            play(&["AH", "3H"], &["KH"], Suit::Spades, 0, 0),
            parse_cards(&["3H"])[0]
        );
        // Still chasing: wins with the ace
        assert_eq!(
            play(&["AH", "3H"], &["KH"], Suit::Spades, 2, 0),
            parse_cards(&["AH"])[0]
        );
    }

    #[test]
    fn overtrumps_only_when_it_helps() {
        // Void in hearts, a trump already down: must go over it
        assert_eq!(
            play(&["QS", "2S", "4C"], &["KH", "JS"], Suit::Spades, 2, 0),
            parse_cards(&["QS"])[0]
        );
        // Cannot beat the ace of trump: discard from the short suit instead
        assert_eq!(
            play(&["QS", "2S", "4C"], &["KH", "AS"], Suit::Spades, 2, 0),
            parse_cards(&["4C"])[0]
        );
    }

    #[test]
    fn discards_high_from_shortest_suit_when_done() {
        // Bid made, void in lead: sheds the high card of the shortest side suit
        assert_eq!(
            play(&["KD", "2C", "3C", "5S"], &["AH"], Suit::Spades, 0, 0),
            parse_cards(&["KD"])[0]
        );
    }
}
