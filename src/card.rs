use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum ActionKind {
    Skip,
    Reverse,
    #[strum(serialize = "Draw Two")]
    DrawTwo,
}

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum WildKind {
    Wild,
    #[strum(serialize = "Wild Draw Four")]
    WildDrawFour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Number(u8),
    Action(ActionKind),
    Wild(WildKind),
}

/// A single card. Number and Action cards always carry a color; a Wild card
/// carries `None` until a player resolves it, and that assigned color is
/// transient: it is cleared again when the card is recycled into the draw
/// pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    kind: CardKind,
    color: Option<CardColor>,
}

impl Card {
    pub fn number(color: CardColor, number: u8) -> Self {
        Self {
            kind: CardKind::Number(number),
            color: Some(color),
        }
    }

    pub fn action(color: CardColor, kind: ActionKind) -> Self {
        Self {
            kind: CardKind::Action(kind),
            color: Some(color),
        }
    }

    pub fn wild(kind: WildKind) -> Self {
        Self {
            kind: CardKind::Wild(kind),
            color: None,
        }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn color(&self) -> Option<CardColor> {
        self.color
    }

    pub fn number_value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn wild_kind(&self) -> Option<WildKind> {
        match self.kind {
            CardKind::Wild(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self.kind, CardKind::Wild(_))
    }

    /// Assigns or clears the transient color of a Wild card. Meaningless for
    /// Number and Action cards, whose color is part of their identity.
    pub fn set_color(&mut self, color: Option<CardColor>) {
        self.color = color;
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.color) {
            (CardKind::Number(number), Some(color)) => write!(f, "{} {}", color, number),
            (CardKind::Action(kind), Some(color)) => write!(f, "{} {}", color, kind),
            (CardKind::Wild(kind), Some(color)) => write!(f, "{} ({})", kind, color),
            (kind, None) => match kind {
                CardKind::Number(number) => write!(f, "{}", number),
                CardKind::Action(kind) => write!(f, "{}", kind),
                CardKind::Wild(kind) => write!(f, "{}", kind),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::number(CardColor::Red, 3);
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::number(CardColor::Yellow, 5);
        assert_eq!(yellow_5.to_string(), "Yellow 5");

        let blue_9 = Card::number(CardColor::Blue, 9);
        assert_eq!(blue_9.to_string(), "Blue 9");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let red_skip = Card::action(CardColor::Red, ActionKind::Skip);
        assert_eq!(red_skip.to_string(), "Red Skip");

        let green_reverse = Card::action(CardColor::Green, ActionKind::Reverse);
        assert_eq!(green_reverse.to_string(), "Green Reverse");

        let blue_draw_two = Card::action(CardColor::Blue, ActionKind::DrawTwo);
        assert_eq!(blue_draw_two.to_string(), "Blue Draw Two");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        let wild = Card::wild(WildKind::Wild);
        assert_eq!(wild.to_string(), "Wild");

        let wild_draw_four = Card::wild(WildKind::WildDrawFour);
        assert_eq!(wild_draw_four.to_string(), "Wild Draw Four");
    }

    #[test]
    fn return_correct_string_for_resolved_wild_card() {
        let mut wild = Card::wild(WildKind::Wild);
        wild.set_color(Some(CardColor::Yellow));
        assert_eq!(wild.to_string(), "Wild (Yellow)");
    }

    #[test]
    fn accessors_match_kind() {
        let card = Card::number(CardColor::Red, 7);
        assert_eq!(card.number_value(), Some(7));
        assert_eq!(card.action_kind(), None);
        assert_eq!(card.wild_kind(), None);
        assert!(!card.is_wild());

        let card = Card::action(CardColor::Blue, ActionKind::Skip);
        assert_eq!(card.number_value(), None);
        assert_eq!(card.action_kind(), Some(ActionKind::Skip));

        let card = Card::wild(WildKind::WildDrawFour);
        assert_eq!(card.wild_kind(), Some(WildKind::WildDrawFour));
        assert_eq!(card.color(), None);
        assert!(card.is_wild());
    }

    #[test]
    fn wild_color_can_be_assigned_and_cleared() {
        let mut wild = Card::wild(WildKind::Wild);
        assert_eq!(wild.color(), None);

        wild.set_color(Some(CardColor::Green));
        assert_eq!(wild.color(), Some(CardColor::Green));

        wild.set_color(None);
        assert_eq!(wild.color(), None);
    }
}
