//! The transition engine.
//!
//! [`Engine::enter`] is the only way state changes. It looks the state up,
//! records it, pushes the new location, description and action menu to the
//! renderer, runs the state's game actions and finally re-points the bag
//! placeholder. The lookup happens first, so an unknown id changes nothing.
//!
//! Menu entries keep their [`Target`] unresolved until
//! [`Engine::select`] is called, so targets that depend on the session see
//! it as it is at selection time.

use std::fmt;

use tracing::{debug, trace};

use crate::action::{Action, Target};
use crate::bag::Bag;
use crate::config::EngineConfig;
use crate::error::{StoryError, StoryResult};
use crate::render::Renderer;
use crate::session::Session;
use crate::table::{StateDefinition, StateId, StateTable};

/// The two menus a player can select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    /// Actions offered by the current state.
    Actions,
    /// Items in the bag.
    Bag,
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuKind::Actions => write!(f, "action"),
            MenuKind::Bag => write!(f, "bag"),
        }
    }
}

/// A player's pick: a menu and the index of a visible entry in it.
/// Index 0 is the menu's placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Entry of the action menu.
    Action(usize),
    /// Entry of the bag.
    Bag(usize),
}

impl Selection {
    /// The menu this selection refers to.
    pub fn menu(self) -> MenuKind {
        match self {
            Selection::Action(_) => MenuKind::Actions,
            Selection::Bag(_) => MenuKind::Bag,
        }
    }

    /// The entry index.
    pub fn index(self) -> usize {
        match self {
            Selection::Action(i) | Selection::Bag(i) => i,
        }
    }
}

/// Drives a [`StateTable`] and reports every change to a [`Renderer`].
#[derive(Debug)]
pub struct Engine<R> {
    table: StateTable,
    config: EngineConfig,
    session: Session,
    actions: Vec<Action>,
    renderer: R,
}

impl<R: Renderer> Engine<R> {
    /// Build an engine without entering any state.
    pub fn new(table: StateTable, config: EngineConfig, renderer: R) -> Self {
        let bag = Bag::new(config.bag_placeholder.clone());
        let session = Session::with_bag(config.start.clone(), bag);
        Self {
            table,
            config,
            session,
            actions: Vec::new(),
            renderer,
        }
    }

    /// Build an engine and enter the configured starting state.
    pub fn start(table: StateTable, config: EngineConfig, renderer: R) -> StoryResult<Self> {
        let mut engine = Self::new(table, config, renderer);
        let start = engine.session.starting_state().clone();
        engine.enter(&start)?;
        Ok(engine)
    }

    /// Transition to `id`.
    pub fn enter(&mut self, id: &StateId) -> StoryResult<()> {
        let definition = self
            .table
            .get(id.as_str())
            .ok_or_else(|| StoryError::UnknownState(id.clone()))?;

        self.session.set_current_state(id.clone());

        if let Some(label) = &definition.location {
            self.session.set_current_location(id.clone());
            self.renderer.set_location(label);
        }

        self.renderer.set_description(&definition.description);

        self.actions.clear();
        self.actions.push(Action::new(
            self.config.action_placeholder.clone(),
            Target::Fixed(id.clone()),
        ));
        self.actions.extend(definition.player_actions.iter().cloned());
        self.renderer.set_actions(&self.actions);

        for effect in &definition.game_actions {
            if self.session.apply(effect) {
                self.renderer.set_bag(self.session.bag().entries());
            }
        }

        if self.session.resync_bag() {
            self.renderer.select_bag_placeholder();
        }

        debug!(
            state = %id,
            location = %self.session.current_location(),
            effects = definition.game_actions.len(),
            "entered state"
        );
        Ok(())
    }

    /// Resolve a menu entry to a state id without entering it.
    pub fn resolve(&self, selection: Selection) -> StoryResult<StateId> {
        let entries = match selection {
            Selection::Action(_) => self.actions.as_slice(),
            Selection::Bag(_) => self.session.bag().entries(),
        };
        let index = selection.index();
        let action = entries.get(index).ok_or(StoryError::InvalidSelection {
            menu: selection.menu(),
            index,
            len: entries.len(),
        })?;

        let target = action.target.resolve(&self.session);
        trace!(
            menu = %selection.menu(),
            index,
            action = %action.description,
            %target,
            "resolved selection"
        );
        Ok(target)
    }

    /// Resolve a menu entry and enter the resulting state.
    pub fn select(&mut self, selection: Selection) -> StoryResult<StateId> {
        let target = self.resolve(selection)?;
        self.enter(&target)?;
        Ok(target)
    }

    /// The story being played.
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Definition of the current state.
    pub fn current_definition(&self) -> Option<&StateDefinition> {
        self.table.get(self.session.current_state().as_str())
    }

    /// The action menu as last rendered, placeholder first.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
