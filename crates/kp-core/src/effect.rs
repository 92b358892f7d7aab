use serde::Serialize;

use crate::action::Action;

/// A game action: runs once each time its state is entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SideEffect {
    /// Set a player flag.
    SetFlag {
        /// Flag key.
        key: String,
        /// Value to set.
        value: bool,
    },
    /// Put an action in the bag for later use.
    AddToBag(Action),
}

impl SideEffect {
    /// Set `key` to `true`.
    pub fn set_flag(key: impl Into<String>) -> Self {
        SideEffect::SetFlag {
            key: key.into(),
            value: true,
        }
    }

    /// Add `action` to the bag.
    pub fn add_to_bag(action: Action) -> Self {
        SideEffect::AddToBag(action)
    }
}
