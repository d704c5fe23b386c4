use std::fmt;

/// Everything a player can do on (or to) a turn.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ActionType {
    Block,
    Call,
    Coup,
    Duke,
    Steal,
    ForeignAid,
    Assassinate,
    Ambassador,
    TakeOne,
}

impl ActionType {
    /// True if the action can be blocked (and therefore also called).
    pub fn blockable(&self) -> bool {
        !matches!(
            self,
            ActionType::Call | ActionType::Block | ActionType::TakeOne | ActionType::Coup
        )
    }

    /// True if the action needs another player as its target.
    pub fn targeted(&self) -> bool {
        matches!(
            self,
            ActionType::Coup | ActionType::Steal | ActionType::Assassinate
        )
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Block => "Block",
            ActionType::Call => "Call",
            ActionType::Coup => "Coup",
            ActionType::Duke => "Duke",
            ActionType::Steal => "Steal",
            ActionType::ForeignAid => "ForeignAid",
            ActionType::Assassinate => "Assassinate",
            ActionType::Ambassador => "Ambassador",
            ActionType::TakeOne => "TakeOne",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blockable() {
        for action in [
            ActionType::Duke,
            ActionType::Steal,
            ActionType::ForeignAid,
            ActionType::Assassinate,
            ActionType::Ambassador,
        ] {
            assert!(action.blockable(), "{} should be blockable", action);
        }

        for action in [
            ActionType::Call,
            ActionType::Block,
            ActionType::TakeOne,
            ActionType::Coup,
        ] {
            assert!(!action.blockable(), "{} should not be blockable", action);
        }
    }

    #[test]
    fn test_targeted() {
        assert!(ActionType::Coup.targeted());
        assert!(ActionType::Steal.targeted());
        assert!(ActionType::Assassinate.targeted());
        assert!(!ActionType::Duke.targeted());
        assert!(!ActionType::TakeOne.targeted());
    }
}
