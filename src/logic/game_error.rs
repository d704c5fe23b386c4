use super::{action::ActionType, card::CardType, turn::TurnState};

/// Everything that can go wrong while driving a game forward.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game has not been started")]
    GameNotStarted,
    #[error("game has already been started")]
    GameAlreadyStarted,
    #[error("game already has the maximum number of players")]
    TooManyPlayers,
    #[error("no player is seated at index {0}")]
    UnknownPlayer(usize),
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("turn has already been submitted")]
    TurnAlreadySubmitted,
    #[error("turn is in state {actual:?}, expected {expected:?}")]
    InvalidTurnState {
        expected: TurnState,
        actual: TurnState,
    },
    #[error("action does not match the current turn")]
    ActionMismatch,
    #[error("{0} requires a target player")]
    MissingTarget(ActionType),
    #[error("{0} is not blockable")]
    NotBlockable(ActionType),
    #[error("cannot block own turn")]
    CannotBlockOwnTurn,
    #[error("cannot call own turn")]
    CannotCallOwnTurn,
    #[error("cannot call own block")]
    CannotCallOwnBlock,
    #[error("not enough coins to {0}")]
    NotEnoughCoins(ActionType),
    #[error("player does not hold a living {0}")]
    CardNotHeld(CardType),
    #[error("{0} was not offered in the exchange")]
    CardNotOffered(CardType),
}

/// Failures while building the display roster. Construction of the literal
/// records cannot fail; only the coin-array derivation can.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("invalid coin count {coins} for player {name}")]
    InvalidCoinCount { name: String, coins: i64 },
}
