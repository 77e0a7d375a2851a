use rand::{rngs::StdRng, seq::SliceRandom};
use strum::IntoEnumIterator;

use crate::{
    card::{ActionKind, Card, CardColor, WildKind},
    constants::*,
};

/// Builds the full 108-card set: per color one 0, two of each 1-9 and two of
/// each action kind, plus 4 Wild and 4 Wild Draw Four.
pub(crate) fn standard_card_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

    for color in CardColor::iter() {
        for number in NUMBER_CARDS_PER_COLOR {
            cards.push(Card::number(color, *number));
        }

        for kind in ActionKind::iter() {
            for _ in 0..ACTION_CARDS_PER_KIND_PER_COLOR {
                cards.push(Card::action(color, kind));
            }
        }
    }

    for kind in WildKind::iter() {
        for _ in 0..WILD_CARDS_PER_KIND {
            cards.push(Card::wild(kind));
        }
    }

    cards
}

/// The face-down stock. The front of the vector is the next card drawn.
#[derive(Debug, Default)]
pub struct DrawPile(pub(crate) Vec<Card>);

impl DrawPile {
    pub(crate) fn replace(&mut self, cards: Vec<Card>) {
        self.0 = cards;
    }

    pub(crate) fn shuffle(&mut self, rng: &mut StdRng) {
        self.0.shuffle(rng);
    }

    /// Removes and returns the front card, `None` when the pile is empty.
    /// Callers are responsible for recycling first; the pile never refills
    /// itself.
    pub(crate) fn draw(&mut self) -> Option<Card> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}

/// The face-up pile of played cards. The back of the vector is the active
/// top card.
#[derive(Debug, Default)]
pub struct DiscardPile(pub(crate) Vec<Card>);

impl DiscardPile {
    pub(crate) fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.0.last_mut()
    }

    /// Drains every card below the top, leaving only the top card behind.
    pub(crate) fn take_below_top(&mut self) -> Vec<Card> {
        if self.0.is_empty() {
            return Vec::new();
        }
        let keep_from = self.0.len() - 1;
        self.0.drain(..keep_from).collect()
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}
