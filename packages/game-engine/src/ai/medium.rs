//! Medium tier: deterministic, trump-aware, but not bid-aware.

use super::{
    bid_from_strength, card_strength, cards_in_suit, high_card_fraction, highest_by_value,
    lowest_by_value, playable_leads, repair_forbidden_bid, trump_fraction, winning_card, AiError,
    AiStrategy, BidRequest, PlayRequest,
};
use crate::domain::cards::Card;

/// Weighs face cards and trump length when bidding; when playing it wins as
/// cheaply as it can and sheds low otherwise.
#[derive(Default)]
pub struct MediumPlayer;

impl MediumPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl AiStrategy for MediumPlayer {
    fn name(&self) -> &'static str {
        "medium"
    }

    fn choose_bid(&self, req: &BidRequest<'_>) -> Result<u8, AiError> {
        let strength =
            high_card_fraction(req.hand) * 0.4 + trump_fraction(req.hand, req.trump_suit) * 0.6;
        let bid = bid_from_strength(strength, req.hand.len());
        if req.is_dealer && req.forbidden_bid == Some(bid) {
            return Ok(repair_forbidden_bid(req.hand, bid, req.cards_in_round));
        }
        Ok(bid)
    }

    fn choose_card(&self, req: &PlayRequest<'_>) -> Result<Card, AiError> {
        let trump = req.trump_suit;

        // Leading: put the highest allowed card down
        let Some(&(_, lead)) = req.trick.first() else {
            let options = playable_leads(req.hand, trump, req.may_lead_trump);
            return highest_by_value(&options).ok_or(AiError::NoLegalMoves);
        };

        let in_suit = cards_in_suit(req.hand, lead.suit);
        if !in_suit.is_empty() {
            // Following: cheapest card that still wins, else the lowest
            if let Some(best) = winning_card(req.trick, trump) {
                let winners: Vec<Card> = in_suit
                    .iter()
                    .copied()
                    .filter(|&c| card_strength(c, trump) > card_strength(best, trump))
                    .collect();
                if let Some(cheap) = lowest_by_value(&winners) {
                    return Ok(cheap);
                }
            }
            return lowest_by_value(&in_suit).ok_or(AiError::NoLegalMoves);
        }

        // Void in the lead suit: ruff low if nobody has trumped yet
        let trumps = cards_in_suit(req.hand, trump);
        let trump_played = req.trick.iter().any(|&(_, c)| c.suit == trump);
        if !trumps.is_empty() && !trump_played {
            return lowest_by_value(&trumps).ok_or(AiError::NoLegalMoves);
        }
        lowest_by_value(req.hand).ok_or(AiError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::{parse_cards, Suit};

    fn play(hand: &[&str], trick_toks: &[&str], trump: Suit) -> Card {
        let hand = parse_cards(hand);
        let trick: Vec<(usize, Card)> = parse_cards(trick_toks)
            .into_iter()
            .enumerate()
            .collect();
        MediumPlayer::new()
            .choose_card(&PlayRequest {
                hand: &hand,
                trick: &trick,
                trump_suit: trump,
                bid: 1,
                tricks_won: 0,
                may_lead_trump: true,
            })
            .unwrap()
    }

    #[test]
    fn bids_scale_with_trump_and_face_cards() {
        let player = MediumPlayer::new();
        let strong = parse_cards(&["AS", "KS", "QS", "JS"]);
        let weak = parse_cards(&["2H", "3D", "4C", "5H"]);
        let req = |hand| BidRequest {
            hand,
            trump_suit: Suit::Spades,
            cards_in_round: 4,
            is_dealer: false,
            forbidden_bid: None,
            other_bids: vec![],
        };
        assert_eq!(player.choose_bid(&req(&strong)).unwrap(), 4);
        assert_eq!(player.choose_bid(&req(&weak)).unwrap(), 0);
    }

    #[test]
    fn leads_highest_playable() {
        assert_eq!(play(&["2H", "KH", "9C"], &[], Suit::Spades), parse_cards(&["KH"])[0]);
    }

    #[test]
    fn wins_as_cheaply_as_possible() {
        // QH beats the 9H lead; AH would be a waste
        assert_eq!(
            play(&["QH", "AH", "2H"], &["9H"], Suit::Spades),
            parse_cards(&["QH"])[0]
        );
    }

    #[test]
    fn sheds_lowest_when_it_cannot_win() {
        assert_eq!(
            play(&["3H", "5H"], &["AH"], Suit::Spades),
            parse_cards(&["3H"])[0]
        );
    }

    #[test]
    fn ruffs_low_when_void_and_untrumped() {
        assert_eq!(
            play(&["2S", "AS", "9C"], &["KH"], Suit::Spades),
            parse_cards(&["2S"])[0]
        );
        // Once a trump is down, shed the lowest card instead
        assert_eq!(
            play(&["5S", "2C"], &["KH", "QS"], Suit::Spades),
            parse_cards(&["2C"])[0]
        );
    }
}
