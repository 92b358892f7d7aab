use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::action::Action;
use crate::effect::SideEffect;

/// Key of one state in a [`StateTable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a state id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One node of the story: what the player sees and can do there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateDefinition {
    /// Location header. States without one are events, not places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Text shown to the player.
    pub description: String,
    /// Choices offered to the player, in display order.
    pub player_actions: Vec<Action>,
    /// Game actions run once, in order, every time the state is entered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub game_actions: Vec<SideEffect>,
}

impl StateDefinition {
    /// Create an event state with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            location: None,
            description: description.into(),
            player_actions: Vec::new(),
            game_actions: Vec::new(),
        }
    }

    /// Mark this state as a location with the given header.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add a player action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.player_actions.push(action);
        self
    }

    /// Add a game action.
    pub fn with_effect(mut self, effect: SideEffect) -> Self {
        self.game_actions.push(effect);
        self
    }

    /// Whether entering this state updates the current location.
    pub fn is_location(&self) -> bool {
        self.location.is_some()
    }
}

/// The static story graph. Keeps states in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct StateTable {
    states: Vec<(StateId, StateDefinition)>,
    index: HashMap<StateId, usize>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state, builder style.
    pub fn with_state(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.insert(id, definition);
        self
    }

    /// Insert a state. Replacing an existing id keeps its position and
    /// returns the previous definition.
    pub fn insert(
        &mut self,
        id: impl Into<StateId>,
        definition: StateDefinition,
    ) -> Option<StateDefinition> {
        let id = id.into();
        if let Some(&pos) = self.index.get(&id) {
            return Some(std::mem::replace(&mut self.states[pos].1, definition));
        }
        self.index.insert(id.clone(), self.states.len());
        self.states.push((id, definition));
        None
    }

    /// Look up a state definition.
    pub fn get(&self, id: &str) -> Option<&StateDefinition> {
        self.index.get(id).map(|&pos| &self.states[pos].1)
    }

    /// Whether the table defines `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> {
        self.states.iter().map(|(id, def)| (id, def))
    }

    /// Iterate over the states that carry a location header.
    pub fn locations(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> {
        self.iter().filter(|(_, def)| def.is_location())
    }
}
