//! Core engine for Kaffeepause, a small menu-driven text adventure.
//!
//! A story is a [`StateTable`]: named states, each with a description, the
//! actions a player may choose and the game actions that run on entry. The
//! [`Engine`] walks that table, keeps the [`Session`] (current state, last
//! location, player flags and the [`Bag`]) and pushes every change to a
//! [`Renderer`]. Nothing in this crate prints; frontends supply the renderer.

/// Player actions and their lazily resolved targets.
pub mod action;
/// The inventory of deferred actions.
pub mod bag;
/// Authoring checks over a state table.
pub mod check;
/// Predicates over player state.
pub mod condition;
/// Engine configuration.
pub mod config;
/// Game actions run when a state is entered.
pub mod effect;
/// The transition engine.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Player flags.
pub mod player;
/// The presentation seam and a headless screen model.
pub mod render;
/// Transient session state.
pub mod session;
/// The built-in kitchen story.
pub mod story;
/// State identifiers, definitions, and the state table.
pub mod table;

pub use action::{Action, Target};
pub use bag::Bag;
pub use check::{Severity, TableIssue, check_table};
pub use condition::Condition;
pub use config::EngineConfig;
pub use effect::SideEffect;
pub use engine::{Engine, MenuKind, Selection};
pub use error::{StoryError, StoryResult};
pub use player::PlayerState;
pub use render::{Renderer, Screen};
pub use session::Session;
pub use table::{StateDefinition, StateId, StateTable};
