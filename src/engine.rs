use std::time::{Duration, Instant};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::card::{ActionKind, Card, CardColor, CardKind, WildKind};
use crate::constants::*;
use crate::deck::{standard_card_set, DiscardPile, DrawPile};
use crate::error::{GameError, Result};
use crate::player::{Player, PlayerId};
use crate::strategy::{EventHandler, Strategy};
use crate::turn::{TurnAdvance, TurnOutcome};

/// Strategy calls block the turn loop; anything slower than this is logged
/// so a stuck driver can be spotted.
const SLOW_STRATEGY_CALL: Duration = Duration::from_secs(5);

/// The rule engine. Owns the draw pile, the discard pile and every hand
/// exclusively; it calls out through [`Strategy`] when it needs a decision
/// and through [`EventHandler`] when state changes, and never receives
/// unsolicited input.
pub struct GameController<S, E> {
    players: Vec<Player>,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    current_player: usize,
    clockwise: bool,
    override_color: Option<CardColor>,
    started: bool,
    rng: StdRng,
    strategy: S,
    events: E,
}

impl<S: Strategy, E: EventHandler> GameController<S, E> {
    pub fn new(strategy: S, events: E) -> Self {
        Self::with_rng(StdRng::from_entropy(), strategy, events)
    }

    /// Deterministic construction for reproducible games and tests.
    pub fn with_seed(seed: u64, strategy: S, events: E) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), strategy, events)
    }

    fn with_rng(rng: StdRng, strategy: S, events: E) -> Self {
        Self {
            players: Vec::new(),
            draw_pile: DrawPile::default(),
            discard_pile: DiscardPile::default(),
            current_player: 0,
            clockwise: true,
            override_color: None,
            started: false,
            rng,
            strategy,
            events,
        }
    }

    /// Registers a player. Only possible before the game starts.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        let id = PlayerId(self.players.len());
        self.players.push(Player::new(id, name.into()));
        Ok(id)
    }

    /// Builds and shuffles the full card set, deals 7 cards to each player
    /// round-robin and flips one card onto the discard pile to seed play.
    /// If the seed card is Wild, the color-choice strategy resolves it
    /// before the first turn.
    pub fn start_game(&mut self) -> Result<()> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::InsufficientPlayers);
        }

        self.draw_pile.replace(standard_card_set());
        self.draw_pile.shuffle(&mut self.rng);

        for _ in 0..INITIAL_HAND_SIZE {
            for index in 0..self.players.len() {
                let card = self
                    .draw_pile
                    .draw()
                    .expect("A fresh pile always covers the initial deal.");
                self.players[index].add_card(card);
            }
        }

        let seed_card = self
            .draw_pile
            .draw()
            .expect("A fresh pile always has a card left after dealing.");
        let seed_is_wild = seed_card.is_wild();
        self.discard_pile.push(seed_card);
        self.started = true;

        info!(players = self.players.len(), top_card = %self.top_card(), "game started");

        if seed_is_wild {
            let color = self.choose_color();
            self.set_override_color(color);
        }

        Ok(())
    }

    /// Runs the game to completion, starting it first if necessary, and
    /// returns the winner.
    pub fn run(&mut self) -> Result<PlayerId> {
        if !self.started {
            self.start_game()?;
        }

        loop {
            if let TurnOutcome::Finished { winner } = self.play_turn() {
                return Ok(winner);
            }
        }
    }

    /// Executes one iteration of the turn loop.
    pub fn play_turn(&mut self) -> TurnOutcome {
        if let Some(winner) = self.winner() {
            return TurnOutcome::Finished {
                winner: winner.id(),
            };
        }

        let player = self.current_player_id();
        self.events.on_turn_changed(&self.players[player.0]);

        let mut legal = self.legal_cards(player);
        if legal.is_empty() {
            let drawn = self.draw_card(player);
            debug!(player = %self.players[player.0].name(), card = %drawn, "no legal card, drew one");

            // The top card is unchanged; the freshly drawn card is offered
            // on the same turn if it happens to be legal.
            legal = self.legal_cards(player);
            if legal.is_empty() {
                self.advance_turn(1);
                return TurnOutcome::Passed { player, drawn };
            }
        }

        let chosen = self.choose_card(player, &legal);
        if !self.play_card(player, &chosen) {
            warn!(
                player = %self.players[player.0].name(),
                card = %chosen,
                "strategy chose a card that cannot be played"
            );
            return TurnOutcome::Rejected {
                player,
                card: chosen,
            };
        }

        self.events.on_card_played(&self.players[player.0], &chosen);
        info!(player = %self.players[player.0].name(), card = %chosen, "card played");

        if self.players[player.0].cards_count() == 1 {
            self.check_call(player);
        }

        if self.resolve_effect(&chosen) == TurnAdvance::Pending {
            self.advance_turn(1);
        }

        if let Some(winner_index) = self.players.iter().position(|p| p.hand.is_empty()) {
            info!(winner = %self.players[winner_index].name(), "game over");
            self.events.on_game_ended(&self.players[winner_index]);
        }

        TurnOutcome::Played {
            player,
            card: chosen,
        }
    }

    /// Moves `card` from the player's hand onto the discard pile if the
    /// player holds it and it is legal against the current top card.
    /// Returns `false` without touching any state otherwise.
    pub fn play_card(&mut self, player: PlayerId, card: &Card) -> bool {
        let top_card = self.top_card().clone();

        let Some(index) = self.players[player.0].card_index(card) else {
            return false;
        };
        if !self.can_play(card, &top_card) {
            return false;
        }

        if !card.is_wild() {
            self.override_color = None;
        }

        let card = self.players[player.0].remove_card(index);
        self.discard_pile.push(card);
        true
    }

    /// The legality test, in strict priority order: wilds are always legal;
    /// an active override color beats every other match; then color, equal
    /// number, equal action kind.
    pub fn can_play(&self, card: &Card, top_card: &Card) -> bool {
        if card.is_wild() {
            return true;
        }

        if let Some(override_color) = self.override_color {
            return card.color() == Some(override_color);
        }

        if card.color() == top_card.color() {
            return true;
        }

        match (card.kind(), top_card.kind()) {
            (CardKind::Number(a), CardKind::Number(b)) => a == b,
            (CardKind::Action(a), CardKind::Action(b)) => a == b,
            _ => false,
        }
    }

    /// Every card in the player's hand that is legal against the current
    /// top card.
    pub fn legal_cards(&self, player: PlayerId) -> Vec<Card> {
        let top_card = self.top_card();
        self.players[player.0]
            .hand
            .iter()
            .filter(|card| self.can_play(card, top_card))
            .cloned()
            .collect()
    }

    fn resolve_effect(&mut self, card: &Card) -> TurnAdvance {
        match card.kind() {
            CardKind::Number(_) => TurnAdvance::Pending,
            CardKind::Action(ActionKind::Skip) => {
                self.advance_turn(2);
                debug!("next player skipped");
                TurnAdvance::Done
            }
            CardKind::Action(ActionKind::Reverse) => {
                self.clockwise = !self.clockwise;
                debug!(clockwise = self.clockwise, "direction reversed");
                // With two players a reverse degenerates to a skip.
                if self.players.len() == 2 {
                    self.advance_turn(2);
                    TurnAdvance::Done
                } else {
                    TurnAdvance::Pending
                }
            }
            CardKind::Action(ActionKind::DrawTwo) => {
                self.advance_turn(1);
                let target = self.current_player_id();
                debug!(target = %self.players[target.0].name(), "draws 2 cards and is skipped");
                self.draw_cards(target, DRAW_TWO_CARDS);
                self.advance_turn(1);
                TurnAdvance::Done
            }
            CardKind::Wild(kind) => {
                let color = self.choose_color();
                self.set_override_color(color);
                match kind {
                    WildKind::Wild => TurnAdvance::Pending,
                    WildKind::WildDrawFour => {
                        self.advance_turn(1);
                        let target = self.current_player_id();
                        debug!(target = %self.players[target.0].name(), "draws 4 cards and is skipped");
                        self.draw_cards(target, WILD_DRAW_CARDS);
                        self.advance_turn(1);
                        TurnAdvance::Done
                    }
                }
            }
        }
    }

    /// Runs once, at the instant a play leaves the hand at exactly one card.
    fn check_call(&mut self, player: PlayerId) {
        let start = Instant::now();
        let called = self.strategy.confirm_call(&self.players[player.0]);
        warn_if_slow("confirm_call", start.elapsed());

        if !called {
            info!(player = %self.players[player.0].name(), "missed the call, 2 penalty cards");
            self.events.on_call_violation(&self.players[player.0]);
            self.draw_cards(player, CALL_PENALTY_CARDS);
        }
    }

    /// Takes the front card of the draw pile into the player's hand,
    /// recycling the discard pile first when the draw pile is empty.
    fn draw_card(&mut self, player: PlayerId) -> Card {
        if self.draw_pile.is_empty() {
            self.recycle_discard_pile();
        }

        let card = self
            .draw_pile
            .draw()
            .expect("The draw pile cannot be empty right after recycling.");
        self.players[player.0].add_card(card.clone());
        card
    }

    fn draw_cards(&mut self, player: PlayerId, count: usize) {
        for _ in 0..count {
            self.draw_card(player);
        }
    }

    /// Moves every discard card except the top into the draw pile and
    /// shuffles it. Recycled wild cards lose the color they were resolved
    /// to.
    fn recycle_discard_pile(&mut self) {
        let mut recycled = self.discard_pile.take_below_top();
        for card in &mut recycled {
            if card.is_wild() {
                card.set_color(None);
            }
        }

        debug!(count = recycled.len(), "draw pile exhausted, recycling the discard pile");

        self.draw_pile.replace(recycled);
        self.draw_pile.shuffle(&mut self.rng);
    }

    fn choose_card(&mut self, player: PlayerId, legal: &[Card]) -> Card {
        let top_card = self.top_card().clone();

        let start = Instant::now();
        let card = self
            .strategy
            .choose_card(&self.players[player.0], &top_card, legal);
        warn_if_slow("choose_card", start.elapsed());
        card
    }

    fn choose_color(&mut self) -> CardColor {
        let start = Instant::now();
        let color = self.strategy.choose_color();
        warn_if_slow("choose_color", start.elapsed());

        debug!(%color, "wild color chosen");
        color
    }

    /// Records the chosen color and assigns it to the wild card on top of
    /// the discard pile.
    fn set_override_color(&mut self, color: CardColor) {
        self.override_color = Some(color);
        if let Some(top_card) = self.discard_pile.top_mut() {
            if top_card.is_wild() {
                top_card.set_color(Some(color));
            }
        }
    }

    fn advance_turn(&mut self, steps: usize) {
        for _ in 0..steps {
            self.current_player = if self.clockwise {
                (self.current_player + 1) % self.players.len()
            } else {
                (self.current_player + self.players.len() - 1) % self.players.len()
            };
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(|player| player.hand.is_empty())
    }

    /// At most one hand can be empty before the loop checks, so the first
    /// match is the winner.
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|player| player.hand.is_empty())
    }

    pub fn current_player_id(&self) -> PlayerId {
        PlayerId(self.current_player)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The active card on top of the discard pile. Only valid once the game
    /// has started.
    pub fn top_card(&self) -> &Card {
        self.discard_pile
            .top()
            .expect("The discard pile is never empty once the game has started.")
    }

    pub fn override_color(&self) -> Option<CardColor> {
        self.override_color
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.cards_count()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile.cards_count()
    }
}

fn warn_if_slow(call: &str, elapsed: Duration) {
    if elapsed > SLOW_STRATEGY_CALL {
        warn!(call, ?elapsed, "strategy call took unusually long");
    }
}
