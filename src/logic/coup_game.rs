use rand::seq::SliceRandom;
use tracing::info;

use super::{
    action::ActionType,
    card::{Card, CardState, CardType},
    coup_constants::{
        ASSASSINATE_COST, CARDS_PER_PLAYER, COPIES_PER_ROLE, COUP_COST, MAX_PLAYERS,
        STEAL_AMOUNT, TREASURY_COINS,
    },
    game_error::GameError,
    player::Player,
    turn::{Turn, TurnState},
};

/// The current status of the game.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameState {
    Pending,
    Playing,
    Finished,
}

/// State of a single Coup game. Everything runs synchronously on the
/// caller's thread: a blockable turn stays in `Submitted` until the host
/// either resolves it or another player blocks or calls it.
pub struct CoupGame {
    pub state: GameState,
    pub players: Vec<Player>,
    pub turns: Vec<Turn>,
    pub current_turn: Option<Turn>,
    pub treasury: u32,
    pub deck: Vec<Card>,
}

impl CoupGame {
    pub fn new() -> Self {
        let mut deck = Vec::with_capacity(CardType::count() * COPIES_PER_ROLE);
        for card_type in CardType::iter() {
            for _ in 0..COPIES_PER_ROLE {
                deck.push(Card::new(card_type));
            }
        }
        deck.shuffle(&mut rand::thread_rng());

        Self {
            state: GameState::Pending,
            players: Vec::with_capacity(MAX_PLAYERS),
            turns: Vec::new(),
            current_turn: None,
            treasury: TREASURY_COINS,
            deck,
        }
    }

    /// Seats a new player. Only allowed before the game starts.
    pub fn add_player(&mut self, name: &str) -> Result<usize, GameError> {
        if self.state != GameState::Pending {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() == MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        self.players.push(Player::new(name));
        Ok(self.players.len() - 1)
    }

    /// Deals two cards to every player and opens the first turn.
    pub fn start_game(&mut self) {
        for seat in 0..self.players.len() {
            for _ in 0..CARDS_PER_PLAYER {
                self.deal_card(seat);
            }
        }

        self.current_turn = Some(Turn::new(0));
        self.state = GameState::Playing;
    }

    /// Submits the action for the current turn. Non-blockable actions
    /// resolve immediately; blockable ones wait for a block, a call, or an
    /// explicit `resolve_turn`.
    pub fn take_turn(
        &mut self,
        seat: usize,
        action: ActionType,
        target: Option<usize>,
    ) -> Result<(), GameError> {
        let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;

        if seat != turn.player {
            return Err(GameError::NotYourTurn);
        }
        if turn.state != TurnState::Pending {
            return Err(GameError::TurnAlreadySubmitted);
        }
        if matches!(action, ActionType::Block | ActionType::Call) {
            return Err(GameError::ActionMismatch);
        }
        if action.targeted() && target.is_none() {
            return Err(GameError::MissingTarget(action));
        }
        if let Some(target) = target {
            if target >= self.players.len() {
                return Err(GameError::UnknownPlayer(target));
            }
        }

        // reject unaffordable actions before the turn is marked submitted,
        // otherwise the seat could never resubmit
        let cost = match action {
            ActionType::Assassinate => ASSASSINATE_COST,
            ActionType::Coup => COUP_COST,
            _ => 0,
        };
        if self.players[seat].coins < cost {
            return Err(GameError::NotEnoughCoins(action));
        }

        let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;
        turn.action = Some(action);
        turn.target = target;
        turn.state = TurnState::Submitted;

        if action.blockable() {
            // Leave the turn open so other players get a chance to react.
            return Ok(());
        }

        self.resolve_turn()
    }

    /// A player claims to block the submitted action with the given role.
    pub fn block_turn(&mut self, seat: usize, block_with: CardType) -> Result<(), GameError> {
        self.check_seat(seat)?;
        let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;
        let action = turn.action.ok_or(GameError::ActionMismatch)?;

        if seat == turn.player {
            return Err(GameError::CannotBlockOwnTurn);
        }
        if !action.blockable() {
            return Err(GameError::NotBlockable(action));
        }
        if turn.state != TurnState::Submitted {
            return Err(GameError::InvalidTurnState {
                expected: TurnState::Submitted,
                actual: turn.state,
            });
        }

        turn.state = TurnState::Blocking;
        turn.blocker = Some(seat);
        turn.blocked_with = Some(block_with);

        Ok(())
    }

    /// A player calls the current turn's claimed action as a bluff.
    pub fn call_turn(&mut self, seat: usize) -> Result<(), GameError> {
        self.check_seat(seat)?;
        let turn = self.current_turn.as_ref().ok_or(GameError::GameNotStarted)?;
        let action = turn.action.ok_or(GameError::ActionMismatch)?;
        let turn_player = turn.player;

        if seat == turn_player {
            return Err(GameError::CannotCallOwnTurn);
        }
        if turn.state != TurnState::Submitted {
            return Err(GameError::InvalidTurnState {
                expected: TurnState::Submitted,
                actual: turn.state,
            });
        }
        if !action.blockable() {
            return Err(GameError::NotBlockable(action));
        }

        let shown = self.players[turn_player]
            .get_card_for_action(action)
            .map(|card| card.card_type);

        let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;
        turn.caller = Some(seat);

        match shown {
            Some(card_type) => {
                // The claim was honest. The shown card goes back to the
                // deck, the player draws a replacement and the caller must
                // pick a card to lose via resolve_failed_call.
                turn.state = TurnState::CallFailed;
                info!(player = %self.players[turn_player].name, card = %card_type, "call failed, card shown");
                if let Some(card) = self.players[turn_player].remove_card(card_type) {
                    self.return_to_deck(card);
                    self.deal_card(turn_player);
                }
            }
            None => {
                // Caught bluffing. The player picks a card to lose via
                // resolve_called_bluff and the action never happens.
                turn.state = TurnState::Called;
                info!(player = %self.players[turn_player].name, "caught bluffing");
            }
        }

        Ok(())
    }

    /// A player calls the blocker's claimed role.
    pub fn call_block(&mut self, seat: usize) -> Result<(), GameError> {
        self.check_seat(seat)?;
        let turn = self.current_turn.as_ref().ok_or(GameError::GameNotStarted)?;
        let action = turn.action.ok_or(GameError::ActionMismatch)?;

        if turn.state != TurnState::Blocking {
            return Err(GameError::InvalidTurnState {
                expected: TurnState::Blocking,
                actual: turn.state,
            });
        }

        let blocker = turn.blocker.ok_or(GameError::ActionMismatch)?;
        let blocked_with = turn.blocked_with.ok_or(GameError::ActionMismatch)?;

        if seat == blocker {
            return Err(GameError::CannotCallOwnBlock);
        }

        let block_stands = self.players[blocker]
            .get_card(blocked_with)
            .map(|card| card.card_type.can_block(action))
            .unwrap_or(false);

        let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;
        if block_stands {
            turn.state = TurnState::Blocked;
            self.resolve_turn()
        } else {
            // The block was a bluff; the action goes through after all.
            turn.state = TurnState::BlockFailed;
            self.resolve_turn()
        }
    }

    /// After an ambassador exchange, swap at most one card: keep one of the
    /// two offered deck cards and return one from the hand.
    pub fn resolve_ambassador(
        &mut self,
        seat: usize,
        card_to_keep: Option<CardType>,
        card_to_return: CardType,
    ) -> Result<(), GameError> {
        self.check_seat(seat)?;
        self.validate_for_turn(seat, ActionType::Ambassador, TurnState::AwaitingTarget)?;

        if let Some(keep) = card_to_keep {
            if keep != card_to_return {
                if !self.players[seat].traded_cards.contains(&keep) {
                    return Err(GameError::CardNotOffered(keep));
                }
                if !self.players[seat].has_card(card_to_return) {
                    return Err(GameError::CardNotHeld(card_to_return));
                }
                let drawn_index = self.deck.iter().position(|card| card.card_type == keep);
                if let Some(index) = drawn_index {
                    let drawn = self.deck.remove(index);
                    self.players[seat].cards.push(drawn);
                    if let Some(card) = self.players[seat].remove_card(card_to_return) {
                        self.return_to_deck(card);
                    }
                }
            }
        }

        self.resolve_turn()
    }

    /// The caller of a failed call picks which card they lose; the claimed
    /// action then goes through.
    pub fn resolve_failed_call(
        &mut self,
        seat: usize,
        card_to_lose: CardType,
    ) -> Result<(), GameError> {
        self.check_seat(seat)?;
        let turn = self.current_turn.as_ref().ok_or(GameError::GameNotStarted)?;

        if turn.state != TurnState::CallFailed {
            return Err(GameError::InvalidTurnState {
                expected: TurnState::CallFailed,
                actual: turn.state,
            });
        }
        if turn.caller != Some(seat) {
            return Err(GameError::NotYourTurn);
        }

        self.players[seat].kill_card(card_to_lose)?;

        self.resolve_turn()
    }

    /// A player caught bluffing picks which card they lose; the turn ends
    /// with no effect.
    pub fn resolve_called_bluff(
        &mut self,
        seat: usize,
        card_to_lose: CardType,
    ) -> Result<(), GameError> {
        self.check_seat(seat)?;
        let turn = self.current_turn.as_ref().ok_or(GameError::GameNotStarted)?;

        if turn.state != TurnState::Called {
            return Err(GameError::InvalidTurnState {
                expected: TurnState::Called,
                actual: turn.state,
            });
        }
        if turn.player != seat {
            return Err(GameError::NotYourTurn);
        }

        self.players[seat].kill_card(card_to_lose)?;

        let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;
        turn.state = TurnState::Complete;
        self.finish_turn();
        Ok(())
    }

    /// The target of a coup or assassination picks which card dies.
    pub fn resolve_lose_card(
        &mut self,
        seat: usize,
        card_to_lose: CardType,
    ) -> Result<(), GameError> {
        self.check_seat(seat)?;
        let turn = self.current_turn.as_ref().ok_or(GameError::GameNotStarted)?;
        let action = turn.action.ok_or(GameError::ActionMismatch)?;

        if turn.state != TurnState::AwaitingTarget {
            return Err(GameError::InvalidTurnState {
                expected: TurnState::AwaitingTarget,
                actual: turn.state,
            });
        }
        if !matches!(action, ActionType::Coup | ActionType::Assassinate) {
            return Err(GameError::ActionMismatch);
        }
        if turn.target != Some(seat) {
            return Err(GameError::NotYourTurn);
        }

        self.players[seat].kill_card(card_to_lose)?;

        let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;
        turn.state = TurnState::Complete;
        self.finish_turn();
        Ok(())
    }

    /// Applies the submitted action. Called directly by the host when no
    /// one blocked or called a blockable action.
    pub fn resolve_turn(&mut self) -> Result<(), GameError> {
        let turn = self.current_turn.as_ref().ok_or(GameError::GameNotStarted)?;
        let state = turn.state;
        let seat = turn.player;
        let target = turn.target;
        let action = turn.action.ok_or(GameError::ActionMismatch)?;

        // A standing block means the action fizzles.
        if matches!(state, TurnState::Blocking | TurnState::Blocked) {
            let turn = self.current_turn.as_mut().ok_or(GameError::GameNotStarted)?;
            turn.state = TurnState::Complete;
            info!(player = %self.players[seat].name, action = %action, "turn blocked");
            self.finish_turn();
            return Ok(());
        }

        match action {
            ActionType::Ambassador => {
                if state == TurnState::AwaitingTarget {
                    self.set_turn_state(TurnState::Complete);
                } else {
                    self.players[seat].traded_cards = self.peek_two();
                    self.set_turn_state(TurnState::AwaitingTarget);
                }
            }
            ActionType::Assassinate => {
                // the cost was paid on the way into AwaitingTarget; only
                // resolve_lose_card moves the turn on from there
                if state == TurnState::AwaitingTarget {
                    return Err(GameError::InvalidTurnState {
                        expected: TurnState::Submitted,
                        actual: state,
                    });
                }
                if self.players[seat].coins < ASSASSINATE_COST {
                    return Err(GameError::NotEnoughCoins(action));
                }
                self.players[seat].coins -= ASSASSINATE_COST;
                self.treasury += ASSASSINATE_COST;
                self.set_turn_state(TurnState::AwaitingTarget);
                info!(player = %self.players[seat].name, "assassination attempt");
            }
            ActionType::Coup => {
                if state == TurnState::AwaitingTarget {
                    return Err(GameError::InvalidTurnState {
                        expected: TurnState::Submitted,
                        actual: state,
                    });
                }
                if self.players[seat].coins < COUP_COST {
                    return Err(GameError::NotEnoughCoins(action));
                }
                self.players[seat].coins -= COUP_COST;
                self.treasury += COUP_COST;
                self.set_turn_state(TurnState::AwaitingTarget);
                info!(player = %self.players[seat].name, "coup launched");
            }
            ActionType::ForeignAid => {
                self.take_from_treasury(seat, 2);
                self.set_turn_state(TurnState::Complete);
                info!(player = %self.players[seat].name, "took foreign aid");
            }
            ActionType::Duke => {
                self.take_from_treasury(seat, 3);
                self.set_turn_state(TurnState::Complete);
                info!(player = %self.players[seat].name, "taxed as the duke");
            }
            ActionType::TakeOne => {
                self.take_from_treasury(seat, 1);
                self.set_turn_state(TurnState::Complete);
                info!(player = %self.players[seat].name, "took one coin");
            }
            ActionType::Steal => {
                let target = target.ok_or(GameError::MissingTarget(action))?;
                let stolen = STEAL_AMOUNT.min(self.players[target].coins);
                self.players[target].coins -= stolen;
                self.players[seat].coins += stolen;
                self.set_turn_state(TurnState::Complete);
                info!(
                    player = %self.players[seat].name,
                    target = %self.players[target].name,
                    stolen,
                    "steal resolved"
                );
            }
            ActionType::Block | ActionType::Call => return Err(GameError::ActionMismatch),
        }

        if self
            .current_turn
            .as_ref()
            .is_some_and(|turn| turn.state == TurnState::Complete)
        {
            self.finish_turn();
        }

        Ok(())
    }

    /// Seat of the player whose turn it is, if the game is running.
    pub fn current_seat(&self) -> Option<usize> {
        self.current_turn.as_ref().map(|turn| turn.player)
    }

    fn check_seat(&self, seat: usize) -> Result<(), GameError> {
        if seat >= self.players.len() {
            return Err(GameError::UnknownPlayer(seat));
        }
        Ok(())
    }

    fn validate_for_turn(
        &self,
        seat: usize,
        action: ActionType,
        expected_state: TurnState,
    ) -> Result<(), GameError> {
        let turn = self.current_turn.as_ref().ok_or(GameError::GameNotStarted)?;

        if seat != turn.player {
            return Err(GameError::NotYourTurn);
        }
        if turn.action != Some(action) {
            return Err(GameError::ActionMismatch);
        }
        if turn.state != expected_state {
            return Err(GameError::InvalidTurnState {
                expected: expected_state,
                actual: turn.state,
            });
        }

        Ok(())
    }

    fn set_turn_state(&mut self, state: TurnState) {
        if let Some(turn) = self.current_turn.as_mut() {
            turn.state = state;
        }
    }

    fn take_from_treasury(&mut self, seat: usize, amount: u32) {
        let taken = amount.min(self.treasury);
        self.treasury -= taken;
        self.players[seat].coins += taken;
    }

    /// Archives the completed turn and hands play to the next living
    /// player, finishing the game if only one remains.
    fn finish_turn(&mut self) {
        let Some(mut turn) = self.current_turn.take() else {
            return;
        };

        self.players[turn.player].traded_cards.clear();
        turn.state = TurnState::Complete;
        let previous = turn.player;
        self.turns.push(turn);

        let alive: Vec<usize> = (0..self.players.len())
            .filter(|&seat| !self.players[seat].out_of_game)
            .collect();

        if alive.len() <= 1 {
            self.state = GameState::Finished;
            if let Some(&winner) = alive.first() {
                info!(winner = %self.players[winner].name, "game over");
            }
            return;
        }

        let mut next = (previous + 1) % self.players.len();
        while self.players[next].out_of_game {
            next = (next + 1) % self.players.len();
        }

        self.current_turn = Some(Turn::new(next));
        info!(player = %self.players[next].name, "next turn");
    }

    fn deal_card(&mut self, seat: usize) {
        if self.deck.is_empty() {
            return;
        }
        let mut card = self.deck.remove(0);
        card.state = CardState::Alive;
        self.players[seat].cards.push(card);
    }

    fn return_to_deck(&mut self, mut card: Card) {
        card.state = CardState::Alive;
        self.deck.push(card);
        self.deck.shuffle(&mut rand::thread_rng());
    }

    fn peek_two(&self) -> Vec<CardType> {
        self.deck.iter().take(2).map(|card| card.card_type).collect()
    }
}

impl Default for CoupGame {
    fn default() -> Self {
        Self::new()
    }
}
