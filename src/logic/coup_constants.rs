/// Coins a player joins the game with.
pub const STARTING_COINS: u32 = 2;

/// Coins sitting in the treasury when a game begins.
pub const TREASURY_COINS: u32 = 50;

/// Copies of each role in the deck.
pub const COPIES_PER_ROLE: usize = 3;

/// Influence cards dealt to each player.
pub const CARDS_PER_PLAYER: usize = 2;

pub const MAX_PLAYERS: usize = 6;

pub const ASSASSINATE_COST: u32 = 3;
pub const COUP_COST: u32 = 7;
pub const STEAL_AMOUNT: u32 = 2;
