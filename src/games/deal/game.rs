//! The match driver: command surface, AI scheduling and notifications.

use tracing::{debug, warn};

use super::listener::StateListener;
use super::rules::DealRules;
use super::tasks::{AiTask, TaskQueue};
use crate::ai::{GreedyPolicy, Plan, Policy};
use crate::cards::{Card, PropertyColor};
use crate::core::{Command, GameConfig, GameError, GameRng, GameState, Phase};
use crate::effects::{AssetRef, TargetRef};
use crate::rules::{GameResult, RulesEngine};

/// A match between two seats, each driven by commands or by a policy.
///
/// Commands issued through this type act for whichever seat currently holds
/// the active role. After each accepted command the game notifies listeners
/// and, if an AI seat now has to act, schedules one `AiTask`. Tasks run only
/// when the caller drives them with `step` or `run_pending`.
///
/// ## Example
///
/// ```
/// use rust_deal::games::deal::DealGame;
/// use rust_deal::core::Phase;
///
/// let mut game = DealGame::builder().seed(3).build();
/// game.start().unwrap();
/// assert_eq!(game.state().phase, Phase::Draw);
///
/// game.perform_draw().unwrap();
/// assert_eq!(game.state().current_player().moves_left, 3);
/// ```
pub struct DealGame {
    rules: DealRules,
    state: GameState,
    policy: Box<dyn Policy>,
    tasks: TaskQueue,
    listeners: Vec<Box<dyn StateListener>>,
}

/// Builder for creating a `DealGame`.
pub struct DealGameBuilder {
    config: GameConfig,
    policy: Box<dyn Policy>,
    deck: Option<Vec<Card>>,
    listeners: Vec<Box<dyn StateListener>>,
}

impl Default for DealGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            policy: Box::new(GreedyPolicy::new()),
            deck: None,
            listeners: Vec::new(),
        }
    }
}

impl DealGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn policy(mut self, policy: impl Policy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Use a prepared draw pile instead of the shuffled standard deck.
    /// The last card is drawn first.
    pub fn deck(mut self, cards: Vec<Card>) -> Self {
        self.deck = Some(cards);
        self
    }

    pub fn listener(mut self, listener: impl StateListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Build the game in phase START.
    pub fn build(self) -> DealGame {
        let state = match self.deck {
            Some(cards) => {
                GameState::with_deck(&self.config, cards, GameRng::new(self.config.seed))
            }
            None => GameState::new(&self.config),
        };
        DealGame {
            rules: DealRules::new(self.config),
            state,
            policy: self.policy,
            tasks: TaskQueue::new(),
            listeners: self.listeners,
        }
    }
}

impl DealGame {
    /// A game with default settings and the greedy policy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        DealGameBuilder::new().config(config).build()
    }

    #[must_use]
    pub fn builder() -> DealGameBuilder {
        DealGameBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for setting up positions.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn rules(&self) -> &DealRules {
        &self.rules
    }

    /// The task waiting to run, if any.
    pub fn pending_task(&self) -> Option<AiTask> {
        self.tasks.peek()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    pub fn add_listener(&mut self, listener: impl StateListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Command surface ===

    pub fn start(&mut self) -> Result<(), GameError> {
        self.execute(Command::Start)
    }

    pub fn perform_draw(&mut self) -> Result<(), GameError> {
        self.execute(Command::Draw)
    }

    pub fn play_card_to_bank(&mut self, card_index: usize) -> Result<(), GameError> {
        self.execute(Command::Bank { card_index })
    }

    pub fn play_property_to_field(
        &mut self,
        card_index: usize,
        color: Option<PropertyColor>,
    ) -> Result<(), GameError> {
        self.execute(Command::PlaceProperty { card_index, color })
    }

    /// Play an action card. House and Hotel go on the first set that can take them.
    pub fn play_action(&mut self, card_index: usize) -> Result<(), GameError> {
        self.execute(Command::PlayAction {
            card_index,
            color: None,
        })
    }

    /// Play an action card onto a chosen set (House and Hotel).
    pub fn play_action_on(
        &mut self,
        card_index: usize,
        color: PropertyColor,
    ) -> Result<(), GameError> {
        self.execute(Command::PlayAction {
            card_index,
            color: Some(color),
        })
    }

    pub fn play_rent(
        &mut self,
        card_index: usize,
        color: PropertyColor,
        double_rent: bool,
    ) -> Result<(), GameError> {
        self.execute(Command::PlayRent {
            card_index,
            color,
            double_rent,
        })
    }

    pub fn switch_property_color(
        &mut self,
        color: PropertyColor,
        index: usize,
        new_color: PropertyColor,
    ) -> Result<(), GameError> {
        self.execute(Command::SwitchColor {
            color,
            index,
            new_color,
        })
    }

    pub fn select_my_forced_deal_property(
        &mut self,
        color: PropertyColor,
        index: usize,
    ) -> Result<(), GameError> {
        self.execute(Command::SelectForcedDealSource { color, index })
    }

    pub fn resolve_targeted_action(&mut self, target: TargetRef) -> Result<(), GameError> {
        self.execute(Command::ResolveTarget(target))
    }

    pub fn cancel_targeting(&mut self) -> Result<(), GameError> {
        self.execute(Command::CancelTargeting)
    }

    pub fn resolve_counter(&mut self, use_card: bool) -> Result<(), GameError> {
        self.execute(Command::ResolveCounter { use_card })
    }

    pub fn resolve_payment(&mut self, assets: Vec<AssetRef>) -> Result<(), GameError> {
        self.execute(Command::ResolvePayment(assets))
    }

    pub fn discard_excess_card(&mut self, card_index: usize) -> Result<(), GameError> {
        self.execute(Command::Discard { card_index })
    }

    pub fn end_turn(&mut self) -> Result<(), GameError> {
        self.execute(Command::EndTurn)
    }

    /// Apply any command, then notify and schedule AI follow-up.
    pub fn execute(&mut self, command: Command) -> Result<(), GameError> {
        self.apply(&command)?;
        self.schedule_follow_up();
        Ok(())
    }

    // === AI scheduling ===

    /// Run the pending task, if any. Returns whether one ran.
    pub fn step(&mut self) -> bool {
        match self.tasks.pop() {
            Some(task) => {
                self.run_task(task);
                true
            }
            None => false,
        }
    }

    /// Run tasks until none is pending. Returns how many ran.
    ///
    /// With two AI seats this plays until the match ends; use `play_out`
    /// to bound it.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while self.step() {
            ran += 1;
        }
        ran
    }

    /// Run tasks until the match ends, no task is pending, or `max_turns`
    /// turns have been played.
    pub fn play_out(&mut self, max_turns: u32) -> GameResult {
        while !self.is_over() && self.state.turn_number <= max_turns {
            if !self.step() {
                break;
            }
        }
        self.result().unwrap_or(GameResult::Draw)
    }

    fn apply(&mut self, command: &Command) -> Result<(), GameError> {
        self.rules.apply(&mut self.state, command)?;
        for listener in &mut self.listeners {
            listener.on_state_changed(&self.state);
        }
        Ok(())
    }

    fn schedule_follow_up(&mut self) {
        if self.state.is_over() {
            self.tasks.clear();
            return;
        }
        let actor = self.state.acting_player();
        if !self.state.player(actor).is_ai {
            return;
        }
        if let Some(task) = AiTask::for_phase(self.state.phase) {
            if self.tasks.schedule(task) {
                debug!(?task, player = %actor, "ai task scheduled");
            }
        }
    }

    fn run_task(&mut self, task: AiTask) {
        let actor = self.state.acting_player();
        if self.state.phase != task.phase() || !self.state.player(actor).is_ai {
            debug!(?task, phase = %self.state.phase, "stale ai task skipped");
            self.schedule_follow_up();
            return;
        }

        match task {
            AiTask::Turn => self.play_turn(),
            AiTask::Counter => {
                let use_card = self.policy.use_counter(&self.state, actor);
                self.ai_apply(&Command::ResolveCounter { use_card });
            }
            AiTask::Payment => self.pay(),
            AiTask::Discard => {
                while self.state.phase == Phase::Discard && self.state.current == actor {
                    let card_index = self.policy.select_discard(&self.state, actor);
                    if !self.ai_apply(&Command::Discard { card_index }) {
                        break;
                    }
                }
            }
        }
        self.schedule_follow_up();
    }

    fn ai_apply(&mut self, command: &Command) -> bool {
        match self.apply(command) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, %command, "ai command rejected");
                false
            }
        }
    }

    /// Play the AI's action phase.
    ///
    /// Stops early if a move suspends play (payment, counter-war); the turn
    /// then resumes from a later `Turn` task. Otherwise ends the turn.
    fn play_turn(&mut self) {
        let me = self.state.current;
        for _ in 0..self.rules.config().ai_max_attempts {
            if self.state.phase != Phase::Action || self.state.current != me {
                return;
            }
            if self.state.player(me).moves_left == 0 {
                break;
            }
            let Some(plan) = self.policy.next_move(&self.state, me) else {
                break;
            };
            if !self.run_plan(&plan) {
                break;
            }
        }
        if self.state.phase == Phase::Action && self.state.current == me {
            self.ai_apply(&Command::EndTurn);
        }
    }

    fn run_plan(&mut self, plan: &Plan) -> bool {
        for command in plan {
            if !self.ai_apply(command) {
                if matches!(self.state.phase, Phase::Targeting | Phase::ForcedDealSource) {
                    self.ai_apply(&Command::CancelTargeting);
                }
                return false;
            }
        }
        true
    }

    fn pay(&mut self) {
        let Some(request) = self.state.payment_request().cloned() else {
            return;
        };
        let assets = self.policy.select_payment(&self.state, &request);
        if self.ai_apply(&Command::ResolvePayment(assets)) {
            return;
        }
        if let Some(everything) = self.rules.legal_commands(&self.state).into_iter().next() {
            self.ai_apply(&everything);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, CardId};
    use crate::core::PlayerId;
    use std::cell::Cell;
    use std::rc::Rc;

    const HUMAN: PlayerId = PlayerId(0);
    const BOT: PlayerId = PlayerId(1);

    #[test]
    fn test_listener_sees_every_command() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut game = DealGame::builder()
            .listener(move |_: &GameState| seen.set(seen.get() + 1))
            .build();

        game.start().unwrap();
        game.perform_draw().unwrap();
        assert!(game.perform_draw().is_err());

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_end_turn_hands_over_to_ai() {
        let mut game = DealGame::builder().seed(5).build();
        game.start().unwrap();
        game.perform_draw().unwrap();
        game.state_mut().player_mut(HUMAN).hand.truncate(3);

        game.end_turn().unwrap();
        assert_eq!(game.state().current, BOT);
        assert_eq!(game.state().phase, Phase::Action);
        assert_eq!(game.pending_task(), Some(AiTask::Turn));

        game.run_pending();
        assert!(game.pending_task().is_none());
        assert!(game.is_over() || game.state().acting_player() == HUMAN);
    }

    #[test]
    fn test_stale_task_is_skipped() {
        let mut game = DealGame::builder().build();
        game.start().unwrap();
        game.perform_draw().unwrap();
        game.state_mut().player_mut(HUMAN).hand.clear();
        game.state_mut()
            .player_mut(HUMAN)
            .hand
            .push(Card::action(CardId::new(900), "Birthday", 2, ActionKind::Birthday));
        game.state_mut().player_mut(BOT).hand.clear();

        game.play_action(0).unwrap();
        assert_eq!(game.state().phase, Phase::Payment);
        assert_eq!(game.pending_task(), Some(AiTask::Payment));

        game.state_mut().phase = Phase::Action;
        game.state_mut().interrupt = None;
        assert!(game.step());
        assert!(game.pending_task().is_none());
        assert_eq!(game.state().phase, Phase::Action);
    }
}
