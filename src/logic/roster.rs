use super::{
    card::{Card, CardState, CardType},
    coup_game::CoupGame,
    game_error::RosterError,
};

/// A card as the display layer sees it. Role and label are optional: mock
/// and snapshot data may only know that a slot is alive or dead.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RosterCard {
    pub card_type: Option<CardType>,
    pub label: Option<String>,
    pub state: CardState,
}

impl RosterCard {
    pub fn hidden(state: CardState) -> Self {
        Self {
            card_type: None,
            label: None,
            state,
        }
    }

    pub fn known(card_type: CardType, state: CardState) -> Self {
        Self {
            card_type: Some(card_type),
            label: Some(card_type.to_string()),
            state,
        }
    }
}

impl From<&Card> for RosterCard {
    fn from(card: &Card) -> Self {
        Self::known(card.card_type, card.state)
    }
}

/// One entry of the derived coin array. Carries no data; only the array's
/// length matters, one entry per coin icon to draw.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Coin;

/// A player as the display layer sees it. `coins` is signed because the
/// record may come from an untyped source; out-of-range values are caught
/// by the derivation, not silently clamped.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RosterPlayer {
    pub name: String,
    /// Absent means zero.
    pub coins: Option<i64>,
    pub cards: Vec<RosterCard>,
    /// Derived by `with_coins_array`; empty until then.
    pub coins_array: Vec<Coin>,
}

impl RosterPlayer {
    pub fn new(name: &str, coins: Option<i64>, cards: Vec<RosterCard>) -> Self {
        Self {
            name: name.to_string(),
            coins,
            cards,
            coins_array: Vec::new(),
        }
    }

    /// Derives the coin array: one `Coin` per held coin, none when the
    /// count is absent. A negative count is rejected outright. Pure with
    /// respect to every other field, and idempotent for a fixed count.
    pub fn with_coins_array(self) -> Result<Self, RosterError> {
        let coins = self.coins.unwrap_or(0);
        if coins < 0 {
            return Err(RosterError::InvalidCoinCount {
                name: self.name,
                coins,
            });
        }

        Ok(Self {
            coins_array: vec![Coin; coins as usize],
            ..self
        })
    }
}

/// The static view the front end reads: one current player plus everyone
/// else in display order. Construction cannot fail; only `init` can, and
/// only on a negative coin count.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PlayerRoster {
    pub current_player: RosterPlayer,
    pub players: Vec<RosterPlayer>,
}

impl PlayerRoster {
    /// Placeholder table data. Deliberately inconsistent (Alex's cards are
    /// all dead yet he stays in the roster) — it exercises the display,
    /// not the game rules.
    pub fn mock() -> Self {
        Self {
            current_player: RosterPlayer::new(
                "Michael",
                Some(7),
                vec![
                    RosterCard::known(CardType::Duke, CardState::Alive),
                    RosterCard::known(CardType::Captain, CardState::Dead),
                ],
            ),
            players: vec![
                RosterPlayer::new(
                    "John",
                    Some(3),
                    vec![
                        RosterCard::hidden(CardState::Alive),
                        RosterCard::hidden(CardState::Alive),
                    ],
                ),
                RosterPlayer::new(
                    "Kyle",
                    Some(8),
                    vec![
                        RosterCard::hidden(CardState::Alive),
                        RosterCard::known(CardType::Duke, CardState::Dead),
                    ],
                ),
                RosterPlayer::new(
                    "Alex",
                    Some(8),
                    vec![
                        RosterCard::known(CardType::Captain, CardState::Dead),
                        RosterCard::known(CardType::Duke, CardState::Dead),
                    ],
                ),
            ],
        }
    }

    /// Snapshot of a running game: the seat on turn becomes the current
    /// player, everyone else stays in seating order.
    pub fn from_game(game: &CoupGame) -> Self {
        let current_seat = game.current_seat().unwrap_or(0);

        let as_roster_player = |seat: usize| {
            let player = &game.players[seat];
            RosterPlayer::new(
                &player.name,
                Some(i64::from(player.coins)),
                player.cards.iter().map(RosterCard::from).collect(),
            )
        };

        Self {
            current_player: as_roster_player(current_seat),
            players: (0..game.players.len())
                .filter(|&seat| seat != current_seat)
                .map(as_roster_player)
                .collect(),
        }
    }

    /// The one-shot initialization hook: derives the coin array for the
    /// current player first, then each roster player in order. Never
    /// recomputed afterwards.
    pub fn init(self) -> Result<Self, RosterError> {
        Ok(Self {
            current_player: self.current_player.with_coins_array()?,
            players: self
                .players
                .into_iter()
                .map(RosterPlayer::with_coins_array)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with_coins(coins: Option<i64>) -> RosterPlayer {
        RosterPlayer::new("Kyle", coins, Vec::new())
    }

    #[test]
    fn test_coins_array_matches_coin_count() {
        for coins in [0, 1, 5, 100] {
            let player = player_with_coins(Some(coins)).with_coins_array().unwrap();
            assert_eq!(player.coins_array.len(), coins as usize);
        }
    }

    #[test]
    fn test_absent_coins_derive_empty_array() {
        let player = player_with_coins(None).with_coins_array().unwrap();
        assert!(player.coins_array.is_empty());
        assert_eq!(player.coins, None);
    }

    #[test]
    fn test_explicit_zero_derives_empty_array() {
        let player = player_with_coins(Some(0)).with_coins_array().unwrap();
        assert!(player.coins_array.is_empty());
    }

    #[test]
    fn test_negative_coins_rejected() {
        let result = player_with_coins(Some(-1)).with_coins_array();
        assert_eq!(
            result,
            Err(RosterError::InvalidCoinCount {
                name: "Kyle".to_string(),
                coins: -1,
            })
        );
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let once = player_with_coins(Some(8)).with_coins_array().unwrap();
        let twice = once.clone().with_coins_array().unwrap();
        assert_eq!(once.coins_array.len(), twice.coins_array.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_derivation_leaves_other_fields_alone() {
        let cards = vec![
            RosterCard::hidden(CardState::Alive),
            RosterCard::known(CardType::Duke, CardState::Dead),
        ];
        let player = RosterPlayer::new("Kyle", Some(8), cards.clone())
            .with_coins_array()
            .unwrap();

        assert_eq!(player.coins_array.len(), 8);
        assert_eq!(player.name, "Kyle");
        assert_eq!(player.coins, Some(8));
        assert_eq!(player.cards, cards);
    }

    #[test]
    fn test_mock_roster_init() {
        let roster = PlayerRoster::mock().init().unwrap();

        assert_eq!(roster.current_player.name, "Michael");
        assert_eq!(roster.current_player.coins_array.len(), 7);
        assert_eq!(roster.current_player.cards.len(), 2);

        assert_eq!(roster.players.len(), 3);
        let john = &roster.players[0];
        assert_eq!(john.name, "John");
        assert_eq!(john.coins_array.len(), 3);

        let kyle = &roster.players[1];
        assert_eq!(kyle.name, "Kyle");
        assert_eq!(kyle.coins_array.len(), 8);
        assert_eq!(kyle.cards.len(), 2);
    }

    #[test]
    fn test_init_derives_every_roster_entry() {
        let roster = PlayerRoster {
            current_player: player_with_coins(Some(2)),
            players: (0..5)
                .map(|coins| player_with_coins(Some(coins)))
                .collect(),
        }
        .init()
        .unwrap();

        assert_eq!(roster.players.len(), 5);
        for (coins, player) in roster.players.iter().enumerate() {
            assert_eq!(player.coins_array.len(), coins);
        }
    }

    #[test]
    fn test_init_surfaces_a_bad_entry() {
        let roster = PlayerRoster {
            current_player: player_with_coins(Some(2)),
            players: vec![player_with_coins(Some(3)), player_with_coins(Some(-4))],
        };
        assert!(roster.init().is_err());
    }

    #[test]
    fn test_from_game_snapshot() {
        let mut game = CoupGame::new();
        game.add_player("Michael").unwrap();
        game.add_player("John").unwrap();
        game.add_player("Alex").unwrap();
        game.start_game();

        let roster = PlayerRoster::from_game(&game).init().unwrap();

        assert_eq!(roster.current_player.name, "Michael");
        assert_eq!(roster.current_player.coins, Some(2));
        assert_eq!(roster.current_player.coins_array.len(), 2);
        assert_eq!(roster.players.len(), 2);
        for player in &roster.players {
            assert_eq!(player.cards.len(), 2);
            assert!(player.cards.iter().all(|card| card.card_type.is_some()));
        }
    }
}
