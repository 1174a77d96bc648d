//! Game state.
//!
//! `GameState` owns every card in the match. A card is always in exactly one
//! place: the draw pile, the discard pile, or one seat's hand, bank or field.
//! At most one interrupt sub-protocol (targeting, counter-war, payment) is
//! in flight, stored as plain data so a snapshot taken mid-protocol restores
//! to the same point.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Command, CommandRecord};
use super::config::GameConfig;
use super::error::SnapshotError;
use super::phase::Phase;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, DeckBuilder};
use crate::effects::{Interrupt, PaymentRequest, PendingAction};
use crate::stack::CounterWar;
use crate::zones::DrawPile;

/// Complete state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Draw pile.
    pub deck: DrawPile,

    /// Discard pile, reshuffled into the deck when it runs out.
    pub discard: Vec<Card>,

    /// Both seats.
    pub players: PlayerMap<Player>,

    /// Seat whose turn it is.
    pub current: PlayerId,

    /// Current phase.
    pub phase: Phase,

    /// Set once the match is over.
    pub winner: Option<PlayerId>,

    /// In-flight sub-protocol, if any.
    pub interrupt: Option<Interrupt>,

    /// Cards a human will draw on `Draw`, fixed when the turn starts.
    pub pending_draw: usize,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Accepted-command counter.
    pub sequence: u32,

    /// Every accepted command, in order.
    pub history: Vector<CommandRecord>,

    /// Shuffle stream.
    pub rng: GameRng,
}

impl GameState {
    /// Fresh match: shuffled standard deck, empty seats, phase START.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let cards = DeckBuilder::new().build(&mut rng);
        Self::with_deck(config, cards, rng)
    }

    /// Match over a caller-supplied pile. The last card is drawn first.
    #[must_use]
    pub fn with_deck(config: &GameConfig, cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            deck: DrawPile::new(cards),
            discard: Vec::new(),
            players: PlayerMap::new(|p| Player::new(config.is_ai(p))),
            current: PlayerId::new(0),
            phase: Phase::Start,
            winner: None,
            interrupt: None,
            pending_draw: 0,
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
            rng,
        }
    }

    /// A seat's containers.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// A seat's containers, or `None` if `id` names no seat.
    #[must_use]
    pub fn try_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.try_get(id)
    }

    /// A seat's containers, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The seat whose turn it is, mutably.
    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// The seat expected to issue the next command.
    ///
    /// During a counter-war this is the seat holding the veto; during a
    /// payment it is the debtor; otherwise it is the current player.
    #[must_use]
    pub fn acting_player(&self) -> PlayerId {
        match &self.interrupt {
            Some(Interrupt::Counter(war)) => war.active_player(),
            Some(Interrupt::Payment(request)) => request.debtor,
            _ => self.current,
        }
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Draw up to `count` cards, reshuffling the discard pile if needed.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        self.deck.draw(count, &mut self.discard, &mut self.rng)
    }

    /// The pending targeted action, if targeting is in progress.
    #[must_use]
    pub fn pending_action(&self) -> Option<&PendingAction> {
        match &self.interrupt {
            Some(Interrupt::Targeting(pending)) => Some(pending),
            _ => None,
        }
    }

    /// The running counter-war, if any.
    #[must_use]
    pub fn counter_war(&self) -> Option<&CounterWar> {
        match &self.interrupt {
            Some(Interrupt::Counter(war)) => Some(war),
            _ => None,
        }
    }

    /// The outstanding payment, if any.
    #[must_use]
    pub fn payment_request(&self) -> Option<&PaymentRequest> {
        match &self.interrupt {
            Some(Interrupt::Payment(request)) => Some(request),
            _ => None,
        }
    }

    /// Append an accepted command to the history.
    pub fn record(&mut self, player: PlayerId, command: Command) {
        self.sequence += 1;
        self.history
            .push_back(CommandRecord::new(player, command, self.turn_number, self.sequence));
    }

    /// Cards across every container.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let seats: usize = self
            .players
            .iter()
            .map(|(_, p)| p.hand.len() + p.bank.len() + p.field.len())
            .sum();
        self.deck.len() + self.discard.len() + seats
    }

    /// Encode a snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::STANDARD_DECK_SIZE;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.phase, Phase::Start);
        assert_eq!(state.deck.len(), STANDARD_DECK_SIZE);
        assert_eq!(state.card_count(), STANDARD_DECK_SIZE);
        assert!(!state.player(PlayerId::new(0)).is_ai);
        assert!(state.player(PlayerId::new(1)).is_ai);
        assert_eq!(state.acting_player(), PlayerId::new(0));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let config = GameConfig::default().with_seed(11);
        assert_eq!(GameState::new(&config).deck, GameState::new(&config).deck);

        let other = GameConfig::default().with_seed(12);
        assert_ne!(GameState::new(&config).deck, GameState::new(&other).deck);
    }

    #[test]
    fn test_draw_conserves_cards() {
        let mut state = GameState::new(&GameConfig::default());
        let drawn = state.draw_cards(5);
        state.player_mut(PlayerId::new(0)).add_to_hand(drawn);

        assert_eq!(state.player(PlayerId::new(0)).hand.len(), 5);
        assert_eq!(state.card_count(), STANDARD_DECK_SIZE);
    }

    #[test]
    fn test_record_history() {
        let mut state = GameState::new(&GameConfig::default());
        state.record(PlayerId::new(0), Command::Start);
        state.record(PlayerId::new(0), Command::Draw);

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1].sequence, 2);
        assert_eq!(state.history[1].command, Command::Draw);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut state = GameState::new(&GameConfig::default());
        let drawn = state.draw_cards(7);
        state.player_mut(PlayerId::new(1)).add_to_hand(drawn);

        let bytes = state.to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(state, restored);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(GameState::from_bytes(&[1, 2, 3]).is_err());
    }
}
