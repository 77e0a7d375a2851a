use strum::IntoEnumIterator;

use crate::card::{Card, CardColor};
use crate::player::Player;

/// The decisions a game needs from the outside: which legal card to play,
/// which color a Wild card resolves to, and whether the player announces the
/// one-card-left call. All calls are synchronous; the engine blocks until
/// each returns.
pub trait Strategy {
    /// Must return a member of `legal`, which is never empty. Anything else
    /// is rejected by the turn loop and the same player is asked again.
    fn choose_card(&mut self, player: &Player, top_card: &Card, legal: &[Card]) -> Card;

    fn choose_color(&mut self) -> CardColor;

    /// Whether `player` announces the call after being left with one card.
    /// Returning `false` costs the player a two-card penalty.
    fn confirm_call(&mut self, player: &Player) -> bool;
}

/// Fire-and-forget state-change notifications. All methods default to no-ops
/// so drivers implement only what they care about.
pub trait EventHandler {
    fn on_turn_changed(&mut self, _player: &Player) {}
    fn on_card_played(&mut self, _player: &Player, _card: &Card) {}
    fn on_call_violation(&mut self, _player: &Player) {}
    fn on_game_ended(&mut self, _winner: &Player) {}
}

/// Event handler for drivers that do not observe the game.
#[derive(Debug, Default)]
pub struct NullEvents;

impl EventHandler for NullEvents {}

/// Deterministic reference strategy: plays the first legal card, resolves
/// wilds to the first color, and always announces the call.
#[derive(Debug, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn choose_card(&mut self, _player: &Player, _top_card: &Card, legal: &[Card]) -> Card {
        legal
            .first()
            .cloned()
            .expect("choose_card is only invoked with a non-empty legal set")
    }

    fn choose_color(&mut self) -> CardColor {
        CardColor::iter()
            .next()
            .expect("There is always at least one color.")
    }

    fn confirm_call(&mut self, _player: &Player) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::player::PlayerId;

    use super::*;

    #[test]
    fn first_legal_picks_the_first_card() {
        let player = Player::new(PlayerId(0), "Player 1".to_string());
        let top_card = Card::number(CardColor::Red, 4);
        let legal = vec![
            Card::number(CardColor::Red, 7),
            Card::number(CardColor::Red, 2),
        ];

        let chosen = FirstLegal.choose_card(&player, &top_card, &legal);

        assert_eq!(chosen, Card::number(CardColor::Red, 7));
    }

    #[test]
    fn first_legal_always_confirms_the_call() {
        let player = Player::new(PlayerId(0), "Player 1".to_string());
        assert!(FirstLegal.confirm_call(&player));
    }
}
