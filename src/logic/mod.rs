
pub mod action;
pub mod card;
pub mod coup_constants;
pub mod coup_game;
pub mod game_error;
pub mod player;
pub mod roster;
pub mod turn;
