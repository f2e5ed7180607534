//! Easy tier: mostly random, with a light high-card bias when bidding.

use std::sync::Mutex;

use rand::prelude::*;

use super::{
    bid_from_strength, cards_in_suit, high_card_fraction, playable_leads, repair_forbidden_bid,
    AiError, AiStrategy, BidRequest, PlayRequest,
};
use crate::domain::cards::{hand_has_suit, Card};

/// The weakest CPU. Bids half on luck, half on face cards, and plays a
/// uniformly random legal card.
pub struct EasyPlayer {
    /// `AiStrategy` methods take `&self`, so the RNG sits behind a mutex.
    rng: Mutex<StdRng>,
}

impl EasyPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("rng lock poisoned: {e}")))?;
        Ok(f(&mut rng))
    }
}

impl AiStrategy for EasyPlayer {
    fn name(&self) -> &'static str {
        "easy"
    }

    fn choose_bid(&self, req: &BidRequest<'_>) -> Result<u8, AiError> {
        let luck: f32 = self.with_rng(|rng| rng.random())?;
        let strength = luck * 0.5 + high_card_fraction(req.hand) * 0.5;
        let bid = bid_from_strength(strength, req.hand.len());
        if req.is_dealer && req.forbidden_bid == Some(bid) {
            return Ok(repair_forbidden_bid(req.hand, bid, req.cards_in_round));
        }
        Ok(bid)
    }

    fn choose_card(&self, req: &PlayRequest<'_>) -> Result<Card, AiError> {
        let options: Vec<Card> = match req.trick.first() {
            None => playable_leads(req.hand, req.trump_suit, req.may_lead_trump),
            Some(&(_, lead)) if hand_has_suit(req.hand, lead.suit) => {
                cards_in_suit(req.hand, lead.suit)
            }
            Some(_) => req.hand.to_vec(),
        };
        self.with_rng(|rng| options.choose(rng).copied())?
            .ok_or(AiError::NoLegalMoves)
    }
}
