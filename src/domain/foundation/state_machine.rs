//! Transition checking for dialog status enums.

use super::ValidationError;

/// A status enum whose changes must follow an allowed-transition table.
///
/// Implementors only state which moves are legal; `transition_to` turns an
/// illegal move into a validation error naming both states.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("{:?} -> {:?} is not allowed", self, target),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Open,
        Closed,
    }

    impl StateMachine for Door {
        fn can_transition_to(&self, target: &Self) -> bool {
            self != target
        }
    }

    #[test]
    fn legal_move_returns_target() {
        assert_eq!(Door::Open.transition_to(Door::Closed), Ok(Door::Closed));
    }

    #[test]
    fn illegal_move_names_both_states() {
        let err = Door::Open.transition_to(Door::Open).unwrap_err();
        assert!(err.to_string().contains("Open -> Open"));
    }
}
