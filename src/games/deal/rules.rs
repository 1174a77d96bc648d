//! Rules of the property-trading card game.
//!
//! Every command handler validates before it mutates, so a rejected command
//! leaves the state untouched. Effects that can be countered open a
//! `CounterWar`; when the war finishes, `finish_counter` applies or drops the
//! suspended effect.

use tracing::{debug, info, warn};

use crate::cards::{ActionKind, Card, CardKind, PropertyColor};
use crate::core::{Command, GameConfig, GameError, GameState, Phase, PlayerId};
use crate::effects::payment::{self, AssetRef};
use crate::effects::targeting::{self, FieldRef, PendingAction, TargetRef, TargetedAction};
use crate::effects::{Interrupt, PaymentRequest, PendingEffect};
use crate::rules::{find_winner, quote_rent, GameResult, RulesEngine};
use crate::stack::{CounterOutcome, CounterWar};

/// Rules engine for a two-seat match.
#[derive(Clone, Debug, Default)]
pub struct DealRules {
    config: GameConfig,
}

impl DealRules {
    /// Create rules from a configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// A fresh state for this configuration.
    #[must_use]
    pub fn new_state(&self) -> GameState {
        GameState::new(&self.config)
    }

    // === Turn flow ===

    fn start(&self, state: &mut GameState) {
        for seat in PlayerId::all() {
            let cards = state.draw_cards(self.config.opening_hand);
            state.player_mut(seat).add_to_hand(cards);
        }
        state.current = PlayerId::new(0);
        info!(opening_hand = self.config.opening_hand, "match started");
        self.start_turn(state);
    }

    fn start_turn(&self, state: &mut GameState) {
        state.phase = Phase::Start;
        let current = state.current;
        let count = if state.current_player().hand.is_empty() {
            self.config.empty_hand_draw
        } else {
            self.config.turn_draw
        };
        info!(player = %current, turn = state.turn_number, "turn started");

        if state.current_player().is_ai {
            let cards = state.draw_cards(count);
            debug!(player = %current, drawn = cards.len(), "drew");
            let player = state.current_player_mut();
            player.add_to_hand(cards);
            player.moves_left = self.config.moves_per_turn;
            state.phase = Phase::Action;
        } else {
            state.pending_draw = count;
            state.phase = Phase::Draw;
        }
    }

    fn draw(&self, state: &mut GameState) {
        let cards = state.draw_cards(state.pending_draw);
        debug!(player = %state.current, drawn = cards.len(), "drew");
        state.pending_draw = 0;
        let player = state.current_player_mut();
        player.add_to_hand(cards);
        player.moves_left = self.config.moves_per_turn;
        state.phase = Phase::Action;
    }

    fn end_turn(&self, state: &mut GameState) {
        let hand = state.current_player().hand.len();
        if hand > self.config.hand_limit {
            debug!(player = %state.current, hand, "over hand limit");
            state.phase = Phase::Discard;
            return;
        }
        self.advance_turn(state);
    }

    fn advance_turn(&self, state: &mut GameState) {
        state.current = state.current.opponent();
        state.turn_number += 1;
        self.start_turn(state);
    }

    fn discard(&self, state: &mut GameState, index: usize) -> Result<(), GameError> {
        let card = state
            .current_player_mut()
            .take_from_hand(index)
            .ok_or(GameError::InvalidCard { index })?;
        debug!(player = %state.current, card = %card.id, "discarded");
        state.discard.push(card);
        if state.current_player().hand.len() <= self.config.hand_limit {
            self.advance_turn(state);
        }
        Ok(())
    }

    fn check_win(&self, state: &mut GameState) {
        if let Some(winner) = find_winner(state, state.current, self.config.sets_to_win) {
            info!(player = %winner, "game over");
            state.winner = Some(winner);
            state.interrupt = None;
            state.phase = Phase::GameOver;
        }
    }

    // === Validation helpers ===

    fn require_move(state: &GameState) -> Result<(), GameError> {
        if state.current_player().moves_left == 0 {
            return Err(GameError::NoMovesLeft);
        }
        Ok(())
    }

    fn hand_card(state: &GameState, index: usize) -> Result<&Card, GameError> {
        state
            .current_player()
            .hand
            .get(index)
            .ok_or(GameError::InvalidCard { index })
    }

    fn pending(state: &GameState) -> Result<PendingAction, GameError> {
        state.pending_action().cloned().ok_or(GameError::InvalidTarget)
    }

    // === Moves ===

    fn bank(&self, state: &mut GameState, index: usize) -> Result<(), GameError> {
        Self::require_move(state)?;
        if !Self::hand_card(state, index)?.is_bankable() {
            return Err(GameError::WrongCardKind);
        }

        let player = state.current_player_mut();
        if let Some(card) = player.take_from_hand(index) {
            debug!(card = %card.id, value = card.value, "banked");
            player.add_to_bank(card);
            player.spend_move();
        }
        Ok(())
    }

    fn place_property(
        &self,
        state: &mut GameState,
        index: usize,
        color: Option<PropertyColor>,
    ) -> Result<(), GameError> {
        Self::require_move(state)?;
        let card = Self::hand_card(state, index)?;
        let color = match (color, card.field_color()) {
            (_, None) => return Err(GameError::WrongCardKind),
            (Some(chosen), Some(_)) => chosen,
            (None, Some(own)) => own,
        };
        if !card.allows(color) {
            return Err(GameError::ColorNotAllowed { color });
        }

        let player = state.current_player_mut();
        if let Some(mut card) = player.take_from_hand(index) {
            card.set_wildcard_color(color);
            debug!(card = %card.id, %color, "placed property");
            player.field.push(color, card);
            player.spend_move();
        }
        self.check_win(state);
        Ok(())
    }

    fn play_action(
        &self,
        state: &mut GameState,
        index: usize,
        color: Option<PropertyColor>,
    ) -> Result<(), GameError> {
        Self::require_move(state)?;
        let card = Self::hand_card(state, index)?;
        let kind = card.action_kind().ok_or(GameError::WrongCardKind)?;
        let card_id = card.id;
        let me = state.current;
        let them = me.opponent();

        match kind {
            ActionKind::PassGo => {
                self.discard_from_hand(state, index);
                let cards = state.draw_cards(ActionKind::PASS_GO_DRAW);
                let player = state.current_player_mut();
                player.add_to_hand(cards);
                player.spend_move();
                debug!(player = %me, "pass go");
            }
            ActionKind::Birthday | ActionKind::DebtCollector => {
                let amount = kind.demand_amount().unwrap_or(0);
                self.discard_from_hand(state, index);
                state.current_player_mut().spend_move();
                debug!(player = %me, %kind, amount, "demand played");
                self.open_counter(
                    state,
                    CounterWar::new(PendingEffect::Payment {
                        amount,
                        debtor: them,
                        creditor: me,
                    }),
                );
            }
            ActionKind::SlyDeal | ActionKind::DealBreaker | ActionKind::ForcedDeal => {
                let Some(action) = TargetedAction::from_kind(kind) else {
                    return Err(GameError::WrongCardKind);
                };
                let pending = PendingAction::new(card_id, action, me);
                state.phase = if pending.needs_source() {
                    Phase::ForcedDealSource
                } else {
                    Phase::Targeting
                };
                debug!(player = %me, %kind, phase = %state.phase, "targeting started");
                state.interrupt = Some(Interrupt::Targeting(pending));
            }
            ActionKind::House | ActionKind::Hotel => {
                let field = &state.current_player().field;
                let chosen = match color {
                    Some(color) if field.improvement_targets(kind).any(|c| c == color) => color,
                    Some(color) if !field.is_complete(color) => {
                        return Err(GameError::SetNotComplete { color })
                    }
                    Some(_) => return Err(GameError::NoSetForImprovement { kind }),
                    None => field
                        .improvement_targets(kind)
                        .next()
                        .ok_or(GameError::NoSetForImprovement { kind })?,
                };

                let player = state.current_player_mut();
                if let Some(card) = player.take_from_hand(index) {
                    player.field.push(chosen, card);
                    player.spend_move();
                }
                debug!(player = %me, %kind, color = %chosen, "improvement built");
            }
            ActionKind::JustSayNo | ActionKind::DoubleRent => {
                return Err(GameError::NotTargetable { kind });
            }
        }
        Ok(())
    }

    fn play_rent(
        &self,
        state: &mut GameState,
        index: usize,
        color: PropertyColor,
        double_rent: bool,
    ) -> Result<(), GameError> {
        Self::require_move(state)?;
        let card = Self::hand_card(state, index)?;
        if !matches!(card.kind, CardKind::Rent { .. }) {
            return Err(GameError::WrongCardKind);
        }
        if !card.allows(color) {
            return Err(GameError::ColorNotAllowed { color });
        }
        let rent_id = card.id;

        let player = state.current_player();
        if player.field.property_count(color) == 0 {
            return Err(GameError::NoPropertiesOfColor { color });
        }
        let doubler = if double_rent {
            let index = player
                .find_in_hand(ActionKind::DoubleRent)
                .ok_or(GameError::MissingCard {
                    kind: ActionKind::DoubleRent,
                })?;
            Some(player.hand[index].id)
        } else {
            None
        };

        let mut quote = quote_rent(player, color);
        let me = state.current;
        let them = me.opponent();

        if let Some(doubler) = doubler {
            quote = quote.doubled();
            let player = state.current_player_mut();
            let extra_move = player.moves_left > 1;
            if let Some(card) = player.take_by_id(doubler) {
                if extra_move {
                    player.spend_move();
                }
                state.discard.push(card);
            }
        }
        let player = state.current_player_mut();
        if let Some(card) = player.take_by_id(rent_id) {
            player.spend_move();
            state.discard.push(card);
        }

        debug!(
            player = %me,
            %color,
            amount = quote.total(),
            doubled = quote.doubled,
            "rent charged"
        );
        self.open_counter(
            state,
            CounterWar::new(PendingEffect::Payment {
                amount: quote.total(),
                debtor: them,
                creditor: me,
            }),
        );
        Ok(())
    }

    fn switch_color(
        &self,
        state: &mut GameState,
        color: PropertyColor,
        index: usize,
        new_color: PropertyColor,
    ) -> Result<(), GameError> {
        let card = state
            .current_player()
            .field
            .get(color, index)
            .ok_or(GameError::InvalidTarget)?;
        if !matches!(card.kind, CardKind::Wildcard { .. }) {
            return Err(GameError::WrongCardKind);
        }
        if !card.allows(new_color) {
            return Err(GameError::ColorNotAllowed { color: new_color });
        }
        if card.field_color() == Some(new_color) {
            return Ok(());
        }

        let field = &mut state.current_player_mut().field;
        if let Some(mut card) = field.remove(color, index) {
            card.set_wildcard_color(new_color);
            field.push(new_color, card);
        }
        debug!(from = %color, to = %new_color, "wildcard moved");
        self.check_win(state);
        Ok(())
    }

    fn discard_from_hand(&self, state: &mut GameState, index: usize) {
        if let Some(card) = state.current_player_mut().take_from_hand(index) {
            state.discard.push(card);
        }
    }

    // === Targeting ===

    fn select_source(
        &self,
        state: &mut GameState,
        source: FieldRef,
    ) -> Result<(), GameError> {
        let mut pending = Self::pending(state)?;
        targeting::validate_source(&state.current_player().field, source)?;

        pending.offered = Some(source);
        state.interrupt = Some(Interrupt::Targeting(pending));
        state.phase = Phase::Targeting;
        debug!(color = %source.color, index = source.index, "forced deal offer selected");
        Ok(())
    }

    fn resolve_target(&self, state: &mut GameState, target: TargetRef) -> Result<(), GameError> {
        let pending = Self::pending(state)?;
        if pending.needs_source() {
            return Err(GameError::InvalidTarget);
        }
        targeting::validate_target(state, &pending, target)?;

        debug!(action = ?pending.action, ?target, "target chosen");
        self.open_counter(
            state,
            CounterWar::new(PendingEffect::Targeted {
                action: pending,
                target,
            }),
        );
        Ok(())
    }

    fn cancel_targeting(&self, state: &mut GameState) {
        debug!(player = %state.current, "targeting cancelled");
        state.interrupt = None;
        state.phase = Phase::Action;
    }

    /// Discard a targeted action card and charge its move, win or lose.
    fn finish_targeted(&self, state: &mut GameState, pending: &PendingAction) {
        let player = state.player_mut(pending.source);
        match player.take_by_id(pending.card) {
            Some(card) => {
                player.spend_move();
                state.discard.push(card);
            }
            None => warn!(card = %pending.card, "targeted action card left the hand"),
        }
        state.phase = Phase::Action;
    }

    // === Counter-war ===

    /// Offer the veto to the active seat, or finish the war if they cannot use it.
    fn open_counter(&self, state: &mut GameState, war: CounterWar) {
        let active = war.active_player();
        if state.player(active).holds(ActionKind::JustSayNo) {
            debug!(player = %active, no_count = war.no_count, "counter opportunity");
            state.interrupt = Some(Interrupt::Counter(war));
            state.phase = Phase::CounterOpportunity;
        } else {
            state.interrupt = None;
            self.finish_counter(state, war);
        }
    }

    fn resolve_counter(&self, state: &mut GameState, use_card: bool) -> Result<(), GameError> {
        let mut war = state.counter_war().cloned().ok_or(GameError::PhaseViolation {
            command: "resolve_counter",
            phase: state.phase,
        })?;
        let active = war.active_player();

        if !use_card {
            debug!(player = %active, no_count = war.no_count, "declined to counter");
            state.interrupt = None;
            self.finish_counter(state, war);
            return Ok(());
        }

        let player = state.player_mut(active);
        let index = player
            .find_in_hand(ActionKind::JustSayNo)
            .ok_or(GameError::MissingCard {
                kind: ActionKind::JustSayNo,
            })?;
        if let Some(card) = player.take_from_hand(index) {
            state.discard.push(card);
        }
        war.escalate();
        info!(player = %active, no_count = war.no_count, "just say no");
        self.open_counter(state, war);
        Ok(())
    }

    fn finish_counter(&self, state: &mut GameState, war: CounterWar) {
        let outcome = war.outcome();
        info!(no_count = war.no_count, ?outcome, "counter-war finished");

        match (outcome, war.effect) {
            (
                CounterOutcome::Proceed,
                PendingEffect::Payment {
                    amount,
                    debtor,
                    creditor,
                },
            ) => {
                info!(%debtor, %creditor, amount, "payment requested");
                state.interrupt = Some(Interrupt::Payment(PaymentRequest::new(
                    amount, debtor, creditor,
                )));
                state.phase = Phase::Payment;
            }
            (CounterOutcome::Cancelled, PendingEffect::Payment { .. }) => {
                state.phase = Phase::Action;
            }
            (CounterOutcome::Proceed, PendingEffect::Targeted { action, target }) => {
                targeting::execute(state, &action, target);
                info!(action = %action.action.kind(), ?target, "targeted action executed");
                self.finish_targeted(state, &action);
                self.check_win(state);
            }
            (CounterOutcome::Cancelled, PendingEffect::Targeted { action, .. }) => {
                self.finish_targeted(state, &action);
            }
        }
    }

    // === Payment ===

    fn resolve_payment(&self, state: &mut GameState, assets: &[AssetRef]) -> Result<(), GameError> {
        let request = state.payment_request().cloned().ok_or(GameError::PhaseViolation {
            command: "resolve_payment",
            phase: state.phase,
        })?;
        let settlement = payment::settle(state.player(request.debtor), &request, assets)?;

        let moved = payment::transfer(state, &request, &settlement, self.config.wildcard_payment);
        info!(
            debtor = %request.debtor,
            creditor = %request.creditor,
            owed = request.amount,
            paid = settlement.total,
            cards = moved,
            "payment settled"
        );
        state.interrupt = None;
        state.phase = Phase::Action;
        self.check_win(state);
        Ok(())
    }

    // === Enumeration ===

    fn candidate_commands(&self, state: &GameState) -> Vec<Command> {
        let mut out = Vec::new();
        let player = state.player(state.acting_player());

        match state.phase {
            Phase::Start => out.push(Command::Start),
            Phase::Draw => out.push(Command::Draw),
            Phase::Action => {
                for (card_index, card) in player.hand.iter().enumerate() {
                    out.push(Command::Bank { card_index });
                    for &color in card.valid_colors() {
                        out.push(Command::PlaceProperty {
                            card_index,
                            color: Some(color),
                        });
                        for double_rent in [false, true] {
                            out.push(Command::PlayRent {
                                card_index,
                                color,
                                double_rent,
                            });
                        }
                    }
                    if card.action_kind().is_some_and(|kind| !kind.is_reactive()) {
                        out.push(Command::PlayAction {
                            card_index,
                            color: None,
                        });
                    }
                    if matches!(card.action_kind(), Some(ActionKind::House | ActionKind::Hotel)) {
                        for color in PropertyColor::ALL {
                            out.push(Command::PlayAction {
                                card_index,
                                color: Some(color),
                            });
                        }
                    }
                }
                for (color, stack) in player.field.iter() {
                    for (index, card) in stack.iter().enumerate() {
                        if let CardKind::Wildcard { valid, current } = &card.kind {
                            for &new_color in valid.iter().filter(|&&c| c != *current) {
                                out.push(Command::SwitchColor {
                                    color,
                                    index,
                                    new_color,
                                });
                            }
                        }
                    }
                }
                out.push(Command::EndTurn);
            }
            Phase::ForcedDealSource => {
                for (color, stack) in player.field.iter() {
                    for index in 0..stack.len() {
                        out.push(Command::SelectForcedDealSource { color, index });
                    }
                }
                out.push(Command::CancelTargeting);
            }
            Phase::Targeting => {
                let opponent = state.current.opponent();
                for (color, stack) in state.player(opponent).field.iter() {
                    for index in 0..stack.len() {
                        out.push(Command::ResolveTarget(TargetRef::new(opponent, color, index)));
                    }
                }
                out.push(Command::CancelTargeting);
            }
            Phase::CounterOpportunity => {
                out.push(Command::ResolveCounter { use_card: true });
                out.push(Command::ResolveCounter { use_card: false });
            }
            Phase::Payment => {
                let mut everything: Vec<AssetRef> =
                    (0..player.bank.len()).map(|index| AssetRef::Bank { index }).collect();
                for (color, stack) in player.field.iter() {
                    everything
                        .extend((0..stack.len()).map(|index| AssetRef::Field { color, index }));
                }
                out.push(Command::ResolvePayment(everything));
            }
            Phase::Discard => {
                out.extend(
                    (0..player.hand.len()).map(|card_index| Command::Discard { card_index }),
                );
            }
            Phase::GameOver => {}
        }
        out
    }
}

impl RulesEngine for DealRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Commands the acting seat may issue.
    ///
    /// Payment offers a single choice: every asset the debtor holds, which
    /// is always accepted. Other selections are legal too but not listed.
    fn legal_commands(&self, state: &GameState) -> Vec<Command> {
        self.candidate_commands(state)
            .into_iter()
            .filter(|command| self.is_legal(state, command))
            .collect()
    }

    fn apply(&self, state: &mut GameState, command: &Command) -> Result<(), GameError> {
        if state.is_over() {
            return Err(GameError::GameOver);
        }
        if !state.phase.accepts(command) {
            return Err(GameError::PhaseViolation {
                command: command.name(),
                phase: state.phase,
            });
        }
        let actor = state.acting_player();

        match command {
            Command::Start => self.start(state),
            Command::Draw => self.draw(state),
            Command::Bank { card_index } => self.bank(state, *card_index)?,
            Command::PlaceProperty { card_index, color } => {
                self.place_property(state, *card_index, *color)?;
            }
            Command::PlayAction { card_index, color } => {
                self.play_action(state, *card_index, *color)?;
            }
            Command::PlayRent {
                card_index,
                color,
                double_rent,
            } => self.play_rent(state, *card_index, *color, *double_rent)?,
            Command::SwitchColor {
                color,
                index,
                new_color,
            } => self.switch_color(state, *color, *index, *new_color)?,
            Command::SelectForcedDealSource { color, index } => {
                self.select_source(state, FieldRef::new(*color, *index))?;
            }
            Command::ResolveTarget(target) => self.resolve_target(state, *target)?,
            Command::CancelTargeting => self.cancel_targeting(state),
            Command::ResolveCounter { use_card } => self.resolve_counter(state, *use_card)?,
            Command::ResolvePayment(assets) => self.resolve_payment(state, assets)?,
            Command::Discard { card_index } => self.discard(state, *card_index)?,
            Command::EndTurn => self.end_turn(state),
        }

        state.record(actor, command.clone());
        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner.map(GameResult::Winner)
    }
}
