use crate::bag::DEFAULT_PLACEHOLDER;
use crate::story::STARTING_STATE;
use crate::table::StateId;

/// Placeholder label of the action menu when none is configured.
pub const DEFAULT_ACTION_PLACEHOLDER: &str = "Choose an action:";

/// Text shown for the bag before anything is in it.
pub const DEFAULT_EMPTY_BAG: &str = "No Items";

/// Settings for a new [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// State entered when the engine starts, and target of "Start again".
    pub start: StateId,
    /// Label of the first entry of the action menu.
    pub action_placeholder: String,
    /// Label of the first entry of the bag.
    pub bag_placeholder: String,
    /// What frontends show for an empty bag.
    pub empty_bag_text: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start: StateId::from(STARTING_STATE),
            action_placeholder: DEFAULT_ACTION_PLACEHOLDER.to_string(),
            bag_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            empty_bag_text: DEFAULT_EMPTY_BAG.to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the starting state.
    pub fn with_start(mut self, start: impl Into<StateId>) -> Self {
        self.start = start.into();
        self
    }

    /// Set the action menu placeholder label.
    pub fn with_action_placeholder(mut self, label: impl Into<String>) -> Self {
        self.action_placeholder = label.into();
        self
    }

    /// Set the bag placeholder label.
    pub fn with_bag_placeholder(mut self, label: impl Into<String>) -> Self {
        self.bag_placeholder = label.into();
        self
    }

    /// Set the empty bag text.
    pub fn with_empty_bag_text(mut self, text: impl Into<String>) -> Self {
        self.empty_bag_text = text.into();
        self
    }
}
