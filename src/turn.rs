use crate::card::Card;
use crate::player::PlayerId;

/// Reports whether effect resolution already moved the turn index. The turn
/// loop performs its single normal advance only on `Pending`; a `Done`
/// effect owns the advance and the loop must not move again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAdvance {
    Pending,
    Done,
}

/// What a single iteration of the turn loop did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player played a card; its effect has been resolved and the turn
    /// has advanced.
    Played { player: PlayerId, card: Card },
    /// No legal card, even after drawing one; the turn was consumed without
    /// a play.
    Passed { player: PlayerId, drawn: Card },
    /// The strategy returned a card that is not held or not legal. No state
    /// changed; the same player is still up.
    Rejected { player: PlayerId, card: Card },
    /// A hand is already empty; nothing happened.
    Finished { winner: PlayerId },
}
