//! AI integration tests.
//!
//! These tests drive AI seats through the task queue: full self-play,
//! determinism, hand-limit discards and swapping in another policy.

use rust_deal::ai::{Plan, Policy};
use rust_deal::cards::{ActionKind, Card, CardId, STANDARD_DECK_SIZE};
use rust_deal::core::{GameConfig, GameState, Phase, PlayerId};
use rust_deal::effects::{AssetRef, PaymentRequest};
use rust_deal::games::deal::{AiTask, DealGame};
use rust_deal::rules::GameResult;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// Never plays a card, never counters, pays with its whole bank.
struct Passive;

impl Policy for Passive {
    fn next_move(&self, _state: &GameState, _me: PlayerId) -> Option<Plan> {
        None
    }

    fn use_counter(&self, _state: &GameState, _me: PlayerId) -> bool {
        false
    }

    fn select_payment(&self, state: &GameState, request: &PaymentRequest) -> Vec<AssetRef> {
        (0..state.player(request.debtor).bank.len())
            .map(|index| AssetRef::Bank { index })
            .collect()
    }

    fn select_discard(&self, _state: &GameState, _me: PlayerId) -> usize {
        0
    }
}

fn stacked(count: u32, make: impl Fn(CardId) -> Card) -> Vec<Card> {
    (1..=count).map(|i| make(CardId::new(i))).collect()
}

// =============================================================================
// Self-Play
// =============================================================================

/// Two greedy seats play to a result without losing a card.
#[test]
fn test_self_play_finishes() {
    for seed in [1, 7, 42] {
        let mut game = DealGame::new(GameConfig::default().all_ai().with_seed(seed));
        game.start().unwrap();
        let result = game.play_out(400);

        let state = game.state();
        assert_eq!(state.card_count(), STANDARD_DECK_SIZE);
        match result {
            GameResult::Winner(winner) => {
                assert_eq!(state.phase, Phase::GameOver);
                assert!(state.player(winner).complete_sets() >= 3);
                assert!(game.pending_task().is_none());
            }
            GameResult::Draw => assert!(state.turn_number > 400),
        }
    }
}

/// Same seed, same match.
#[test]
fn test_self_play_is_deterministic() {
    let run = || {
        let mut game = DealGame::new(GameConfig::default().all_ai().with_seed(99));
        game.start().unwrap();
        game.play_out(200);
        game.state().clone()
    };

    let first = run();
    let second = run();
    assert_eq!(first.history, second.history);
    assert_eq!(first, second);
}

/// A passive pair never finishes; the turn bound makes it a draw.
#[test]
fn test_play_out_turn_bound() {
    let mut game = DealGame::builder()
        .config(GameConfig::default().all_ai())
        .policy(Passive)
        .build();
    game.start().unwrap();

    assert_eq!(game.play_out(10), GameResult::Draw);
    assert_eq!(game.state().turn_number, 11);
    let waiting = game.state().current.opponent();
    assert!(game.state().player(waiting).hand.len() <= 7);
}

// =============================================================================
// Scheduling
// =============================================================================

/// The AI banks its money, runs out of moves and hands the turn back.
#[test]
fn test_ai_turn_banks_and_ends() {
    let mut game = DealGame::builder()
        .deck(stacked(40, |id| Card::money(id, 1)))
        .build();
    game.start().unwrap();
    game.perform_draw().unwrap();
    game.end_turn().unwrap();

    assert_eq!(game.state().current, P1);
    assert_eq!(game.pending_task(), Some(AiTask::Turn));
    game.run_pending();

    let state = game.state();
    assert_eq!(state.player(P1).bank_total(), 3);
    assert_eq!(state.player(P1).hand.len(), 4);
    assert_eq!(state.current, P0);
    assert_eq!(state.phase, Phase::Draw);
    assert_eq!(state.turn_number, 3);
    assert_eq!(state.card_count(), 40);
}

/// An AI over the hand limit discards from the end of its hand.
#[test]
fn test_ai_discards_to_limit() {
    let mut game = DealGame::builder()
        .deck(stacked(40, |id| {
            Card::action(id, "Just Say No", 4, ActionKind::JustSayNo)
        }))
        .build();
    game.start().unwrap();
    game.perform_draw().unwrap();
    let extra: Vec<Card> = game.state_mut().player_mut(P0).hand.drain(..3).collect();
    game.state_mut().player_mut(P1).add_to_hand(extra);

    game.end_turn().unwrap();
    let hand: Vec<CardId> = game.state().player(P1).hand.iter().map(|c| c.id).collect();
    assert_eq!(hand.len(), 10);

    game.run_pending();

    let state = game.state();
    assert_eq!(state.player(P1).hand.len(), 7);
    assert_eq!(
        state.player(P1).hand.iter().map(|c| c.id).collect::<Vec<_>>(),
        hand[..7]
    );
    assert_eq!(state.discard.len(), 3);
    assert_eq!(state.current, P0);
}

/// The policy decides whether to counter.
#[test]
fn test_policy_can_decline_counter() {
    let mut game = DealGame::builder().policy(Passive).build();
    game.start().unwrap();
    game.perform_draw().unwrap();

    let state = game.state_mut();
    state.player_mut(P0).hand = vec![Card::action(
        CardId::new(1000),
        "It's My Birthday",
        2,
        ActionKind::Birthday,
    )];
    let bot = state.player_mut(P1);
    bot.hand = vec![Card::action(CardId::new(1001), "Just Say No", 4, ActionKind::JustSayNo)];
    bot.add_to_bank(Card::money(CardId::new(1002), 2));

    game.play_action(0).unwrap();
    assert_eq!(game.pending_task(), Some(AiTask::Counter));
    assert_eq!(game.run_pending(), 2);

    let state = game.state();
    assert_eq!(state.phase, Phase::Action);
    assert_eq!(state.player(P1).hand.len(), 1);
    assert_eq!(state.player(P0).bank_total(), 2);
}

/// Listeners see AI moves too.
#[test]
fn test_listener_sees_ai_moves() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let mut game = DealGame::builder()
        .config(GameConfig::default().all_ai())
        .listener(move |_: &GameState| {
            counter.fetch_add(1, Ordering::Relaxed);
        })
        .build();
    game.start().unwrap();
    game.play_out(3);

    assert_eq!(seen.load(Ordering::Relaxed), game.state().history.len());
}
