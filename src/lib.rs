//! A synchronous Uno-style rule engine: deck and discard lifecycle, hand
//! management, card legality, special-card effects, turn order and the
//! must-call penalty. Decisions and notifications are pluggable through the
//! traits in [`strategy`].

pub mod card;
mod constants;
pub mod deck;
pub mod engine;
pub mod error;
pub mod player;
pub mod strategy;
pub mod turn;
