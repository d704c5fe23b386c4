use super::{action::ActionType, card::CardType};

/// Where a multipart turn currently stands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TurnState {
    /// Waiting for the seated player to pick an action.
    Pending,
    /// An action was submitted and may still be blocked or called.
    Submitted,
    /// The action needs a follow-up choice from a player.
    AwaitingTarget,
    /// Another player claims to block; the block may itself be called.
    Blocking,
    /// The block stood and the action fizzles.
    Blocked,
    /// The block was called and the blocker could not show the card.
    BlockFailed,
    /// The action was called and the player could not show the card.
    Called,
    /// The action was called but the player showed the card.
    CallFailed,
    /// The turn is fully resolved.
    Complete,
}

/// A single turn. Players are addressed by seat index into the game's
/// player list.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Turn {
    pub player: usize,
    pub target: Option<usize>,
    pub action: Option<ActionType>,
    pub state: TurnState,
    pub blocker: Option<usize>,
    pub caller: Option<usize>,
    pub blocked_with: Option<CardType>,
}

impl Turn {
    pub fn new(player: usize) -> Self {
        Self {
            player,
            target: None,
            action: None,
            state: TurnState::Pending,
            blocker: None,
            caller: None,
            blocked_with: None,
        }
    }
}
