use core::fmt;
use std::fmt::Display;

use crate::card::Card;

/// Opaque handle identifying a player; an index into the controller's
/// player arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub(crate) usize);

impl PlayerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            hand: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::card::CardColor;

    use super::*;

    #[test]
    fn card_index_finds_matching_card() {
        let mut player = Player::new(PlayerId(0), "Player 1".to_string());
        player.add_card(Card::number(CardColor::Red, 3));
        player.add_card(Card::number(CardColor::Blue, 5));

        assert_eq!(player.card_index(&Card::number(CardColor::Blue, 5)), Some(1));
        assert_eq!(player.card_index(&Card::number(CardColor::Green, 5)), None);
    }

    #[test]
    fn remove_card_returns_the_removed_card() {
        let mut player = Player::new(PlayerId(0), "Player 1".to_string());
        player.add_card(Card::number(CardColor::Red, 3));
        player.add_card(Card::number(CardColor::Blue, 5));

        let removed = player.remove_card(0);

        assert_eq!(removed, Card::number(CardColor::Red, 3));
        assert_eq!(player.cards_count(), 1);
    }
}
