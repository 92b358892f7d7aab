use serde::Serialize;

use crate::condition::Condition;
use crate::session::Session;
use crate::table::StateId;

/// Where an action leads. Resolved against the session only when the
/// action is selected, never when the menu is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Always the same state.
    Fixed(StateId),
    /// The last state entered that had a location header.
    CurrentLocation,
    /// The state the session started in.
    StartingState,
    /// One of two states depending on the player.
    Conditional {
        /// Predicate checked at selection time.
        condition: Condition,
        /// Target when the condition holds.
        if_true: StateId,
        /// Target otherwise.
        if_false: StateId,
    },
}

impl Target {
    /// Shorthand for [`Target::Fixed`].
    pub fn to(id: impl Into<StateId>) -> Self {
        Target::Fixed(id.into())
    }

    /// Shorthand for [`Target::Conditional`].
    pub fn when(
        condition: Condition,
        if_true: impl Into<StateId>,
        if_false: impl Into<StateId>,
    ) -> Self {
        Target::Conditional {
            condition,
            if_true: if_true.into(),
            if_false: if_false.into(),
        }
    }

    /// Resolve to a state id using the session as it is right now.
    pub fn resolve(&self, session: &Session) -> StateId {
        match self {
            Target::Fixed(id) => id.clone(),
            Target::CurrentLocation => session.current_location().clone(),
            Target::StartingState => session.starting_state().clone(),
            Target::Conditional {
                condition,
                if_true,
                if_false,
            } => {
                if condition.evaluate(session.player()) {
                    if_true.clone()
                } else {
                    if_false.clone()
                }
            }
        }
    }

    /// State ids named literally by this target. Session-relative targets
    /// name none.
    pub fn references(&self) -> Vec<&StateId> {
        match self {
            Target::Fixed(id) => vec![id],
            Target::Conditional {
                if_true, if_false, ..
            } => vec![if_true, if_false],
            Target::CurrentLocation | Target::StartingState => Vec::new(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Fixed(id) => write!(f, "{id}"),
            Target::CurrentLocation => write!(f, "<current location>"),
            Target::StartingState => write!(f, "<starting state>"),
            Target::Conditional {
                condition,
                if_true,
                if_false,
            } => write!(f, "{if_true} if {condition} else {if_false}"),
        }
    }
}

/// A choice shown to the player: a label and a lazily resolved target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    /// Text shown in the menu.
    pub description: String,
    /// Where selecting the action leads.
    pub target: Target,
}

impl Action {
    /// Create an action.
    pub fn new(description: impl Into<String>, target: Target) -> Self {
        Self {
            description: description.into(),
            target,
        }
    }

    /// An action that always leads to `id`.
    pub fn go(description: impl Into<String>, id: impl Into<StateId>) -> Self {
        Self::new(description, Target::to(id))
    }

    /// "Continue": back to the last location the player was in.
    pub fn continue_on() -> Self {
        Self::new("Continue", Target::CurrentLocation)
    }

    /// "Start again": back to the starting state.
    pub fn start_again() -> Self {
        Self::new("Start again", Target::StartingState)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_resolves_to_itself() {
        let session = Session::new("kitchen".into());
        assert_eq!(Target::to("bedroom").resolve(&session), StateId::from("bedroom"));
    }

    #[test]
    fn current_location_reads_session_at_resolve_time() {
        let mut session = Session::new("kitchen".into());
        let target = Action::continue_on().target;
        assert_eq!(target.resolve(&session), StateId::from("kitchen"));

        session.set_current_location("bedroom".into());
        assert_eq!(target.resolve(&session), StateId::from("bedroom"));
    }

    #[test]
    fn starting_state_ignores_current_state() {
        let mut session = Session::new("kitchen".into());
        session.set_current_state("outside".into());
        session.set_current_location("outside".into());

        assert_eq!(
            Action::start_again().target.resolve(&session),
            StateId::from("kitchen")
        );
    }

    #[test]
    fn conditional_follows_player_flags() {
        let mut session = Session::new("bedroom".into());
        let target = Target::when(Condition::flag("hasDrunkCoffee"), "cantSleep", "sleeping");
        assert_eq!(target.resolve(&session), StateId::from("sleeping"));

        session.player_mut().set_flag("hasDrunkCoffee", true);
        assert_eq!(target.resolve(&session), StateId::from("cantSleep"));
    }

    #[test]
    fn references() {
        assert_eq!(Target::to("a").references(), [&StateId::from("a")]);
        assert!(Target::CurrentLocation.references().is_empty());
        assert!(Target::StartingState.references().is_empty());
        assert_eq!(
            Target::when(Condition::Always, "x", "y").references(),
            [&StateId::from("x"), &StateId::from("y")]
        );
    }

    #[test]
    fn serializes_as_tagged_variants() {
        let value = serde_json::to_value(Target::to("bedroom")).unwrap();
        assert_eq!(value, serde_json::json!({ "fixed": "bedroom" }));

        let value = serde_json::to_value(Target::CurrentLocation).unwrap();
        assert_eq!(value, serde_json::json!("current_location"));
    }

    #[test]
    fn display() {
        let target = Target::when(Condition::flag("hasDrunkCoffee"), "cantSleep", "sleeping");
        assert_eq!(target.to_string(), "cantSleep if hasDrunkCoffee else sleeping");
        assert_eq!(Target::CurrentLocation.to_string(), "<current location>");
    }
}
