use tracing::trace;

use crate::bag::Bag;
use crate::effect::SideEffect;
use crate::player::PlayerState;
use crate::table::StateId;

/// Everything that changes while the story is played.
///
/// Owned by the [`Engine`](crate::Engine). Nothing here survives the
/// process, and returning to the starting state does not reset it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    starting_state: StateId,
    current_state: StateId,
    current_location: StateId,
    player: PlayerState,
    bag: Bag,
}

impl Session {
    /// Create a session positioned at `starting_state` with an empty bag.
    ///
    /// The current location also starts out as `starting_state`, so
    /// "Continue" has somewhere to go even before a location is entered.
    pub fn new(starting_state: StateId) -> Self {
        Self::with_bag(starting_state, Bag::default())
    }

    /// Create a session with a pre-configured (empty) bag.
    pub fn with_bag(starting_state: StateId, bag: Bag) -> Self {
        Self {
            current_state: starting_state.clone(),
            current_location: starting_state.clone(),
            starting_state,
            player: PlayerState::new(),
            bag,
        }
    }

    /// The state the session began in.
    pub fn starting_state(&self) -> &StateId {
        &self.starting_state
    }

    /// The most recently entered state.
    pub fn current_state(&self) -> &StateId {
        &self.current_state
    }

    /// The most recently entered state that had a location header.
    pub fn current_location(&self) -> &StateId {
        &self.current_location
    }

    /// Player flags.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable player flags.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// The inventory.
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub(crate) fn set_current_state(&mut self, id: StateId) {
        self.current_state = id;
    }

    pub(crate) fn set_current_location(&mut self, id: StateId) {
        self.current_location = id;
    }

    pub(crate) fn resync_bag(&mut self) -> bool {
        self.bag.resync(&self.current_state)
    }

    /// Run one game action. Returns `true` if the bag changed.
    pub fn apply(&mut self, effect: &SideEffect) -> bool {
        match effect {
            SideEffect::SetFlag { key, value } => {
                trace!(flag = %key, value, "set player flag");
                self.player.set_flag(key.clone(), *value);
                false
            }
            SideEffect::AddToBag(action) => {
                trace!(item = %action.description, "added to bag");
                self.bag.add_item(action.clone(), &self.current_state);
                true
            }
        }
    }
}
