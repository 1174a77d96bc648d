//! Turn flow integration tests.
//!
//! These tests drive the public command surface through opening, drawing,
//! moves, discarding and the win condition.

use proptest::prelude::*;
use rust_deal::cards::{ActionKind, Card, CardId, PropertyColor, STANDARD_DECK_SIZE};
use rust_deal::core::{Command, ErrorCategory, GameConfig, GameError, GameState, Phase, PlayerId};
use rust_deal::games::deal::{DealGame, DealRules};
use rust_deal::rules::{GameResult, RulesEngine};
use rustc_hash::FxHashSet;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn human_game() -> DealGame {
    let mut game = DealGame::new(GameConfig::default().all_human());
    game.start().unwrap();
    game.perform_draw().unwrap();
    game
}

fn prop(id: u32, color: PropertyColor) -> Card {
    Card::property(CardId::new(id), color.name(), 1, color)
}

// =============================================================================
// Opening and Drawing
// =============================================================================

/// Fresh game: five each, then the human draws two and banks three money cards.
#[test]
fn test_opening_turn_banks_three_money_cards() {
    let mut game = DealGame::builder().seed(11).build();
    game.start().unwrap();

    assert_eq!(game.state().phase, Phase::Draw);
    assert_eq!(game.state().player(P0).hand.len(), 5);
    assert_eq!(game.state().player(P1).hand.len(), 5);

    game.perform_draw().unwrap();
    assert_eq!(game.state().player(P0).hand.len(), 7);
    assert_eq!(game.state().player(P0).moves_left, 3);

    let hand = &mut game.state_mut().player_mut(P0).hand;
    hand.truncate(4);
    for (i, value) in [1, 2, 3].into_iter().enumerate() {
        hand.push(Card::money(CardId::new(1000 + i as u32), value));
    }
    let before = game.state().player(P0).bank_total();

    for index in [6, 5, 4] {
        game.play_card_to_bank(index).unwrap();
    }

    let player = game.state().player(P0);
    assert_eq!(player.moves_left, 0);
    assert_eq!(player.bank_total(), before + 6);
    assert_eq!(player.hand.len(), 4);
    assert_eq!(game.play_card_to_bank(0), Err(GameError::NoMovesLeft));
}

/// A turn that starts with an empty hand draws five.
#[test]
fn test_empty_hand_draws_five() {
    let mut game = human_game();
    game.state_mut().player_mut(P0).hand.truncate(2);
    game.state_mut().player_mut(P1).hand.clear();

    game.end_turn().unwrap();
    assert_eq!(game.state().current, P1);
    assert_eq!(game.state().phase, Phase::Draw);
    assert_eq!(game.state().pending_draw, 5);

    game.perform_draw().unwrap();
    assert_eq!(game.state().player(P1).hand.len(), 5);
    assert_eq!(game.state().turn_number, 2);
}

/// An AI seat skips the draw phase.
#[test]
fn test_ai_seat_draws_automatically() {
    let mut game = DealGame::new(GameConfig::default().all_ai());
    game.start().unwrap();

    assert_eq!(game.state().phase, Phase::Action);
    assert_eq!(game.state().player(P0).hand.len(), 7);
    assert_eq!(game.state().player(P0).moves_left, 3);
}

// =============================================================================
// Moves
// =============================================================================

/// Rearranging a wildcard moves it between stacks for free.
#[test]
fn test_wildcard_switch_costs_no_move() {
    let mut game = human_game();
    let wild = Card::wildcard(
        CardId::new(1000),
        "Wild",
        3,
        &[PropertyColor::Red, PropertyColor::Yellow],
    );
    game.state_mut().player_mut(P0).hand.push(wild);
    let index = game.state().player(P0).hand.len() - 1;

    game.play_property_to_field(index, Some(PropertyColor::Red)).unwrap();
    assert_eq!(game.state().player(P0).field.stack(PropertyColor::Red).len(), 1);
    let moves = game.state().player(P0).moves_left;

    game.switch_property_color(PropertyColor::Red, 0, PropertyColor::Yellow)
        .unwrap();

    let field = &game.state().player(P0).field;
    assert!(field.stack(PropertyColor::Red).is_empty());
    assert_eq!(field.stack(PropertyColor::Yellow).len(), 1);
    assert_eq!(field.stack(PropertyColor::Yellow)[0].field_color(), Some(PropertyColor::Yellow));
    assert_eq!(game.state().player(P0).moves_left, moves);

    let err = game
        .switch_property_color(PropertyColor::Yellow, 0, PropertyColor::Green)
        .unwrap_err();
    assert_eq!(err, GameError::ColorNotAllowed { color: PropertyColor::Green });
}

/// Properties cannot be banked and money cannot be placed.
#[test]
fn test_card_kind_checks() {
    let mut game = human_game();
    let hand = &mut game.state_mut().player_mut(P0).hand;
    hand.clear();
    hand.push(prop(1000, PropertyColor::Green));
    hand.push(Card::money(CardId::new(1001), 2));

    assert_eq!(game.play_card_to_bank(0), Err(GameError::WrongCardKind));
    assert_eq!(game.play_property_to_field(1, None), Err(GameError::WrongCardKind));
    assert_eq!(
        game.play_property_to_field(0, Some(PropertyColor::Red)),
        Err(GameError::ColorNotAllowed { color: PropertyColor::Red })
    );
    assert_eq!(game.play_card_to_bank(5), Err(GameError::InvalidCard { index: 5 }));
    assert_eq!(game.state().player(P0).moves_left, 3);
}

/// Pass Go draws two and costs a move.
#[test]
fn test_pass_go() {
    let mut game = human_game();
    let hand = &mut game.state_mut().player_mut(P0).hand;
    hand.clear();
    hand.push(Card::action(CardId::new(1000), "Pass Go", 1, ActionKind::PassGo));

    game.play_action(0).unwrap();

    let state = game.state();
    assert_eq!(state.player(P0).hand.len(), 2);
    assert_eq!(state.player(P0).moves_left, 2);
    assert_eq!(state.discard.last().map(|c| c.id), Some(CardId::new(1000)));
}

/// Houses need a complete set; hotels need a house.
#[test]
fn test_improvements() {
    let mut game = human_game();
    let state = game.state_mut();
    let player = state.player_mut(P0);
    player.hand.clear();
    player.hand.push(Card::action(CardId::new(1000), "Hotel", 4, ActionKind::Hotel));
    player.hand.push(Card::action(CardId::new(1001), "House", 3, ActionKind::House));
    player.field.push(PropertyColor::Brown, prop(1002, PropertyColor::Brown));

    assert_eq!(
        game.play_action(1),
        Err(GameError::NoSetForImprovement { kind: ActionKind::House })
    );
    assert_eq!(
        game.play_action_on(1, PropertyColor::Brown),
        Err(GameError::SetNotComplete { color: PropertyColor::Brown })
    );

    game.state_mut()
        .player_mut(P0)
        .field
        .push(PropertyColor::Brown, prop(1003, PropertyColor::Brown));
    assert_eq!(
        game.play_action(0),
        Err(GameError::NoSetForImprovement { kind: ActionKind::Hotel })
    );

    game.play_action_on(1, PropertyColor::Brown).unwrap();
    game.play_action(0).unwrap();

    let field = &game.state().player(P0).field;
    assert_eq!(field.stack(PropertyColor::Brown).len(), 4);
    assert_eq!(field.property_count(PropertyColor::Brown), 2);
    assert!(field.has_improvement(PropertyColor::Brown, ActionKind::House));
    assert!(field.has_improvement(PropertyColor::Brown, ActionKind::Hotel));
}

// =============================================================================
// Phase Discipline
// =============================================================================

/// Commands outside their phase fail and change nothing.
#[test]
fn test_wrong_phase_is_a_no_op() {
    let mut game = DealGame::new(GameConfig::default().all_human());
    game.start().unwrap();
    let before = game.state().clone();

    let err = game.play_card_to_bank(0).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::PhaseViolation);
    assert!(game.end_turn().is_err());
    assert!(game.resolve_counter(true).is_err());
    assert!(game.resolve_payment(Vec::new()).is_err());
    assert!(game.cancel_targeting().is_err());
    assert!(game.start().is_err());

    assert_eq!(game.state(), &before);
}

/// Ending a turn over the hand limit forces discards, then the turn passes.
#[test]
fn test_discard_down_to_limit() {
    let mut game = human_game();
    let hand = &mut game.state_mut().player_mut(P0).hand;
    for i in 0..2 {
        hand.push(Card::money(CardId::new(1000 + i), 1));
    }
    assert_eq!(game.state().player(P0).hand.len(), 9);

    game.end_turn().unwrap();
    assert_eq!(game.state().phase, Phase::Discard);
    assert_eq!(game.state().current, P0);

    game.discard_excess_card(0).unwrap();
    assert_eq!(game.state().phase, Phase::Discard);

    game.discard_excess_card(0).unwrap();
    assert_eq!(game.state().player(P0).hand.len(), 7);
    assert_eq!(game.state().current, P1);
    assert_eq!(game.state().phase, Phase::Draw);
    assert_eq!(game.state().discard.len(), 2);
}

// =============================================================================
// Win Condition
// =============================================================================

/// Completing a third set ends the match and freezes it.
#[test]
fn test_third_set_wins() {
    let mut game = human_game();
    let player = game.state_mut().player_mut(P0);
    for (i, color) in [PropertyColor::Brown, PropertyColor::DarkBlue].into_iter().enumerate() {
        player.field.push(color, prop(1000 + 2 * i as u32, color));
        player.field.push(color, prop(1001 + 2 * i as u32, color));
    }
    player.field.push(PropertyColor::Utility, prop(1010, PropertyColor::Utility));
    player.hand.push(prop(1011, PropertyColor::Utility));
    let index = player.hand.len() - 1;

    game.play_property_to_field(index, None).unwrap();

    assert!(game.is_over());
    assert_eq!(game.state().phase, Phase::GameOver);
    assert_eq!(game.result(), Some(GameResult::Winner(P0)));
    assert_eq!(game.end_turn(), Err(GameError::GameOver));
}

/// Improvements do not count toward set size.
#[test]
fn test_improvements_do_not_complete_sets() {
    let mut game = human_game();
    let player = game.state_mut().player_mut(P0);
    player.field.push(PropertyColor::Brown, prop(1000, PropertyColor::Brown));
    player
        .field
        .push(PropertyColor::Brown, Card::action(CardId::new(1001), "House", 3, ActionKind::House));

    assert!(!game.state().player(P0).field.is_complete(PropertyColor::Brown));
    assert_eq!(game.state().player(P0).complete_sets(), 0);
}

// =============================================================================
// Properties
// =============================================================================

fn assert_conserved(state: &GameState) {
    assert_eq!(state.card_count(), STANDARD_DECK_SIZE);

    let mut seen = FxHashSet::default();
    let mut check = |card: &Card| assert!(seen.insert(card.id), "{} seen twice", card.id);
    state.deck.cards().iter().for_each(&mut check);
    state.discard.iter().for_each(&mut check);
    for seat in PlayerId::all() {
        let player = state.player(seat);
        player.hand.iter().for_each(&mut check);
        player.bank.iter().for_each(&mut check);
        for (_, stack) in player.field.iter() {
            stack.iter().for_each(&mut check);
        }
        let field_value: u32 = player.field.iter().flat_map(|(_, s)| s).map(|c| c.value).sum();
        assert_eq!(player.assets_value(), player.bank_total() + field_value);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Any sequence of legal commands keeps every card in exactly one place.
    #[test]
    fn prop_legal_play_conserves_cards(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..150),
    ) {
        let rules = DealRules::new(GameConfig::default().all_human().with_seed(seed));
        let mut state = rules.new_state();
        rules.apply(&mut state, &Command::Start).unwrap();

        for pick in picks {
            if state.is_over() {
                break;
            }
            let legal = rules.legal_commands(&state);
            prop_assert!(!legal.is_empty(), "no legal command in {}", state.phase);
            let command = &legal[pick % legal.len()];
            rules.apply(&mut state, command).unwrap();
            assert_conserved(&state);
        }
    }
}
