//! Runs one full game with the reference strategy and logs every state
//! change. Stands in for a real presentation layer.

use color_eyre::eyre::Result;
use tracing::info;

use uno_engine::card::Card;
use uno_engine::engine::GameController;
use uno_engine::player::Player;
use uno_engine::strategy::{EventHandler, FirstLegal};

struct LogEvents;

impl EventHandler for LogEvents {
    fn on_turn_changed(&mut self, player: &Player) {
        info!(player = %player.name(), cards = player.cards_count(), "turn changed");
    }

    fn on_card_played(&mut self, player: &Player, card: &Card) {
        info!(player = %player.name(), card = %card, "played");
    }

    fn on_call_violation(&mut self, player: &Player) {
        info!(player = %player.name(), "call violation");
    }

    fn on_game_ended(&mut self, winner: &Player) {
        info!(winner = %winner.name(), "game ended");
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let mut game = GameController::new(FirstLegal, LogEvents);
    for name in ["Player 1", "Player 2", "Player 3", "Player 4"] {
        game.add_player(name)?;
    }

    let winner = game.run()?;
    let winner = game
        .player(winner)
        .expect("The winner returned by the engine always exists.");
    info!(winner = %winner.name(), "simulation finished");

    Ok(())
}
