use std::fmt;

use super::action::ActionType;

/// One of the five Coup roles.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardType {
    Ambassador,
    Assassin,
    Captain,
    Contessa,
    Duke,
}

impl CardType {
    pub const fn count() -> usize {
        5
    }

    /// True if this role can block the given action.
    pub fn can_block(&self, action: ActionType) -> bool {
        match action {
            ActionType::Ambassador => *self == CardType::Ambassador,
            ActionType::Assassinate => *self == CardType::Contessa,
            ActionType::ForeignAid => *self == CardType::Duke,
            ActionType::Steal => *self == CardType::Captain,
            _ => false,
        }
    }

    /// True if this role can perform the given action as its claimed power.
    pub fn can_perform(&self, action: ActionType) -> bool {
        match action {
            ActionType::Ambassador => *self == CardType::Ambassador,
            ActionType::Assassinate => *self == CardType::Assassin,
            ActionType::Duke => *self == CardType::Duke,
            ActionType::Steal => *self == CardType::Captain,
            _ => false,
        }
    }

    pub fn iter() -> CardTypeIter {
        CardTypeIter { index: 0 }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardType::Ambassador => "Ambassador",
            CardType::Assassin => "Assassin",
            CardType::Captain => "Captain",
            CardType::Contessa => "Contessa",
            CardType::Duke => "Duke",
        };
        write!(f, "{}", name)
    }
}

pub struct CardTypeIter {
    index: usize,
}

impl Iterator for CardTypeIter {
    type Item = CardType;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.index {
            0 => Some(CardType::Ambassador),
            1 => Some(CardType::Assassin),
            2 => Some(CardType::Captain),
            3 => Some(CardType::Contessa),
            4 => Some(CardType::Duke),
            _ => None,
        };
        self.index += 1;
        result
    }
}

/// Whether an influence card is still in play.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardState {
    Alive,
    Dead,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Card {
    pub card_type: CardType,
    pub state: CardState,
}

impl Card {
    pub fn new(card_type: CardType) -> Self {
        Self {
            card_type,
            state: CardState::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == CardState::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_block() {
        assert!(CardType::Contessa.can_block(ActionType::Assassinate));
        assert!(CardType::Duke.can_block(ActionType::ForeignAid));
        assert!(CardType::Captain.can_block(ActionType::Steal));
        assert!(CardType::Ambassador.can_block(ActionType::Ambassador));

        assert!(!CardType::Duke.can_block(ActionType::Steal));
        assert!(!CardType::Contessa.can_block(ActionType::Coup));
        assert!(!CardType::Assassin.can_block(ActionType::Assassinate));
    }

    #[test]
    fn test_can_perform() {
        assert!(CardType::Duke.can_perform(ActionType::Duke));
        assert!(CardType::Assassin.can_perform(ActionType::Assassinate));
        assert!(CardType::Captain.can_perform(ActionType::Steal));
        assert!(CardType::Ambassador.can_perform(ActionType::Ambassador));

        assert!(!CardType::Duke.can_perform(ActionType::Steal));
        assert!(!CardType::Contessa.can_perform(ActionType::Assassinate));
        // TakeOne belongs to no role
        for card_type in CardType::iter() {
            assert!(!card_type.can_perform(ActionType::TakeOne));
        }
    }

    #[test]
    fn test_iter_covers_all_types() {
        assert_eq!(CardType::iter().count(), CardType::count());
    }

    #[test]
    fn test_new_card_is_alive() {
        let card = Card::new(CardType::Duke);
        assert_eq!(card.state, CardState::Alive);
        assert!(card.is_alive());
    }
}
