use std::error::Error;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;
use visuals::{tui, tui_app::TuiApp};

use crate::logic::{
    action::ActionType, coup_game::CoupGame, game_error::GameError, roster::PlayerRoster,
    turn::TurnState,
};

pub mod logic;
pub mod visuals;

#[derive(Debug, structopt::StructOpt)]
struct Opt {
    /// Play a short scripted game and show its snapshot instead of the
    /// built-in placeholder roster.
    #[structopt(short = "-s", long)]
    simulate: bool,

    /// The minimum width of each roster panel.
    #[structopt(short = "-w", long, default_value = "24")]
    panel_width: u16,
}

fn main() -> Result<(), Box<dyn Error>> {
    let Opt { simulate, panel_width } = Opt::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let roster = match simulate {
        true => PlayerRoster::from_game(&simulated_game()?),
        false => PlayerRoster::mock(),
    }
    .init()?;

    let mut terminal = tui::init()?;
    let mut tui_app = TuiApp::builder()
        .panel_width(panel_width)
        .roster(roster)
        .exit(false)
        .build();

    let app_result = tui_app.run(&mut terminal);
    tui::restore()?;

    Ok(app_result?)
}

/// A few scripted turns: an ambassador exchange, two treasury grabs and a
/// called claim.
fn simulated_game() -> Result<CoupGame, GameError> {
    let mut game = CoupGame::new();

    let michael = game.add_player("Michael")?;
    let john = game.add_player("John")?;
    let alex = game.add_player("Alex")?;
    game.add_player("Eddy")?;

    game.start_game();

    game.take_turn(michael, ActionType::Ambassador, None)?;
    game.resolve_turn()?;
    let card_to_keep = game.players[michael].traded_cards.first().copied();
    if let Some(card_to_return) = game.players[michael].cards.first().map(|card| card.card_type) {
        game.resolve_ambassador(michael, card_to_keep, card_to_return)?;
    }

    game.take_turn(john, ActionType::TakeOne, None)?;

    game.take_turn(alex, ActionType::Duke, None)?;
    game.call_turn(john)?;
    match game.current_turn.as_ref().map(|turn| turn.state) {
        Some(TurnState::CallFailed) => {
            if let Some(card_to_lose) = game.players[john].cards.first().map(|card| card.card_type) {
                game.resolve_failed_call(john, card_to_lose)?;
            }
        }
        Some(TurnState::Called) => {
            if let Some(card_to_lose) = game.players[alex].cards.first().map(|card| card.card_type) {
                game.resolve_called_bluff(alex, card_to_lose)?;
            }
        }
        _ => {}
    }

    Ok(game)
}
