use super::{
    action::ActionType,
    card::{Card, CardState, CardType},
    coup_constants::STARTING_COINS,
    game_error::GameError,
};

/// A single seated player in a Coup game.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Player {
    pub name: String,
    pub coins: u32,
    pub cards: Vec<Card>,
    /// Cards offered to this player during an ambassador exchange.
    pub traded_cards: Vec<CardType>,
    pub out_of_game: bool,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            coins: STARTING_COINS,
            cards: Vec::with_capacity(2),
            traded_cards: Vec::new(),
            out_of_game: false,
        }
    }

    /// Finds the player's living card of the given type.
    pub fn get_card(&self, card_type: CardType) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.card_type == card_type && card.is_alive())
    }

    pub fn has_card(&self, card_type: CardType) -> bool {
        self.get_card(card_type).is_some()
    }

    /// Finds a living card whose role actually backs the given action.
    pub fn get_card_for_action(&self, action: ActionType) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.is_alive() && card.card_type.can_perform(action))
    }

    pub fn can_perform(&self, action: ActionType) -> bool {
        self.get_card_for_action(action).is_some()
    }

    /// Flips the player's living card of the given type face up. The player
    /// is out of the game once no living card remains.
    pub fn kill_card(&mut self, card_type: CardType) -> Result<(), GameError> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.card_type == card_type && card.is_alive())
            .ok_or(GameError::CardNotHeld(card_type))?;

        card.state = CardState::Dead;

        if !self.cards.iter().any(|card| card.is_alive()) {
            self.out_of_game = true;
        }

        Ok(())
    }

    /// Takes the player's living card of the given type out of their hand.
    pub fn remove_card(&mut self, card_type: CardType) -> Option<Card> {
        let index = self
            .cards
            .iter()
            .position(|card| card.card_type == card_type && card.is_alive())?;
        Some(self.cards.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(cards: &[Card]) -> Player {
        let mut player = Player::new("Michael");
        player.cards = cards.to_vec();
        player
    }

    #[test]
    fn test_new_player() {
        let player = Player::new("Michael");
        assert_eq!(player.name, "Michael");
        assert_eq!(player.coins, STARTING_COINS);
        assert!(player.cards.is_empty());
        assert!(!player.out_of_game);
    }

    #[test]
    fn test_get_card_skips_dead_cards() {
        let mut dead_duke = Card::new(CardType::Duke);
        dead_duke.state = CardState::Dead;
        let player = player_with(&[dead_duke, Card::new(CardType::Captain)]);

        assert!(player.get_card(CardType::Duke).is_none());
        assert!(player.has_card(CardType::Captain));
    }

    #[test]
    fn test_get_card_for_action() {
        let player = player_with(&[Card::new(CardType::Duke), Card::new(CardType::Contessa)]);

        assert!(player.can_perform(ActionType::Duke));
        assert!(!player.can_perform(ActionType::Steal));
        assert_eq!(
            player
                .get_card_for_action(ActionType::Duke)
                .map(|card| card.card_type),
            Some(CardType::Duke)
        );
    }

    #[test]
    fn test_kill_card() {
        let mut player = player_with(&[Card::new(CardType::Duke), Card::new(CardType::Captain)]);

        player.kill_card(CardType::Duke).unwrap();
        assert!(!player.has_card(CardType::Duke));
        assert!(!player.out_of_game);

        player.kill_card(CardType::Captain).unwrap();
        assert!(player.out_of_game);
    }

    #[test]
    fn test_kill_card_not_held() {
        let mut player = player_with(&[Card::new(CardType::Duke)]);
        assert!(matches!(
            player.kill_card(CardType::Contessa),
            Err(GameError::CardNotHeld(CardType::Contessa))
        ));
    }

    #[test]
    fn test_remove_card() {
        let mut player = player_with(&[Card::new(CardType::Duke), Card::new(CardType::Captain)]);

        let removed = player.remove_card(CardType::Duke).unwrap();
        assert_eq!(removed.card_type, CardType::Duke);
        assert_eq!(player.cards.len(), 1);
        assert!(player.remove_card(CardType::Duke).is_none());
    }
}
