//! The bag holds actions the player picked up along the way.
//!
//! Once anything is in it, the first visible entry is a placeholder that
//! leads back to the current state, so "selecting nothing" is a no-op
//! transition. The engine re-points the placeholder after every transition.

use crate::action::{Action, Target};
use crate::table::StateId;

/// Label of the placeholder entry when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Select an item to use:";

/// The player's inventory of deferred actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Bag {
    entries: Vec<Action>,
    placeholder_label: String,
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl Bag {
    /// Create an empty bag whose placeholder will carry `placeholder_label`.
    pub fn new(placeholder_label: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            placeholder_label: placeholder_label.into(),
        }
    }

    /// Append an item. The first item also creates the placeholder,
    /// pointing at `current_state`.
    pub fn add_item(&mut self, action: Action, current_state: &StateId) {
        if self.entries.is_empty() {
            self.entries.push(Action::new(
                self.placeholder_label.clone(),
                Target::Fixed(current_state.clone()),
            ));
        }
        self.entries.push(action);
    }

    /// Point the placeholder at `current_state`.
    /// Returns `false` (and does nothing) when the bag is empty.
    pub fn resync(&mut self, current_state: &StateId) -> bool {
        match self.entries.first_mut() {
            Some(placeholder) => {
                placeholder.target = Target::Fixed(current_state.clone());
                true
            }
            None => false,
        }
    }

    /// All visible entries, placeholder first.
    pub fn entries(&self) -> &[Action] {
        &self.entries
    }

    /// The items without the placeholder.
    pub fn items(&self) -> &[Action] {
        self.entries.get(1..).unwrap_or_default()
    }

    /// The placeholder entry, if the bag has been used.
    pub fn placeholder(&self) -> Option<&Action> {
        self.entries.first()
    }

    /// Visible entry at `index` (0 is the placeholder).
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.entries.get(index)
    }

    /// Index of the selected entry. The placeholder stays selected between
    /// transitions, so this is `Some(0)` once the bag has been used.
    pub fn selected(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(0)
    }

    /// Number of visible entries, placeholder included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
