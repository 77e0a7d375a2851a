use strum::EnumCount;

use crate::card::{ActionKind, CardColor, WildKind};

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const ACTION_CARDS_PER_KIND_PER_COLOR: u8 = 2;
pub(crate) const WILD_CARDS_PER_KIND: u8 = 4;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub(crate) const ACTION_CARDS_IN_DECK: u8 =
    ACTION_CARDS_PER_KIND_PER_COLOR * ActionKind::COUNT as u8 * CardColor::COUNT as u8;
pub(crate) const WILD_CARDS_IN_DECK: u8 = WILD_CARDS_PER_KIND * WildKind::COUNT as u8;

pub(crate) const TOTAL_CARDS_IN_DECK: u8 =
    NUMBER_CARDS_IN_DECK + ACTION_CARDS_IN_DECK + WILD_CARDS_IN_DECK;

pub(crate) const MIN_PLAYERS: usize = 2;
pub(crate) const MAX_PLAYERS: usize = 10;
pub(crate) const INITIAL_HAND_SIZE: usize = 7;

pub(crate) const CALL_PENALTY_CARDS: usize = 2;
pub(crate) const DRAW_TWO_CARDS: usize = 2;
pub(crate) const WILD_DRAW_CARDS: usize = 4;
