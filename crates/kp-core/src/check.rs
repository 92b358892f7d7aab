//! Authoring checks over a state table.
//!
//! The engine trusts its table during play. These checks find the defects
//! that would otherwise only show up as a failed lookup mid-game: targets
//! naming missing states, a missing starting state, and states a player
//! could not read or leave.

use std::fmt;

use crate::action::Action;
use crate::effect::SideEffect;
use crate::table::{StateId, StateTable};

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Playable, but probably not intended.
    Warning,
    /// Will fail at runtime if reached.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A defect found in a state table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    /// The starting state is not in the table.
    UnknownStart(StateId),
    /// An action names a state that is not in the table.
    UnknownTarget {
        /// State that owns the action.
        state: StateId,
        /// The action's label.
        action: String,
        /// The missing state.
        target: StateId,
    },
    /// A state has no description.
    EmptyDescription(StateId),
    /// A state offers no way out.
    NoActions(StateId),
}

impl TableIssue {
    /// How serious this issue is.
    pub fn severity(&self) -> Severity {
        match self {
            TableIssue::NoActions(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this issue is an error.
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.severity())?;
        match self {
            TableIssue::UnknownStart(id) => write!(f, "starting state \"{id}\" is not defined"),
            TableIssue::UnknownTarget {
                state,
                action,
                target,
            } => write!(
                f,
                "{state}: action \"{action}\" leads to undefined state \"{target}\""
            ),
            TableIssue::EmptyDescription(id) => write!(f, "{id}: description is empty"),
            TableIssue::NoActions(id) => write!(f, "{id}: no player actions"),
        }
    }
}

/// Check `table` for authoring defects, assuming play begins at `start`.
pub fn check_table(table: &StateTable, start: &StateId) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    if !table.contains(start.as_str()) {
        issues.push(TableIssue::UnknownStart(start.clone()));
    }

    for (id, def) in table.iter() {
        if def.description.trim().is_empty() {
            issues.push(TableIssue::EmptyDescription(id.clone()));
        }
        if def.player_actions.is_empty() {
            issues.push(TableIssue::NoActions(id.clone()));
        }

        let bag_items = def.game_actions.iter().filter_map(|effect| match effect {
            SideEffect::AddToBag(action) => Some(action),
            SideEffect::SetFlag { .. } => None,
        });
        for action in def.player_actions.iter().chain(bag_items) {
            check_action(table, id, action, &mut issues);
        }
    }

    issues
}

fn check_action(table: &StateTable, state: &StateId, action: &Action, issues: &mut Vec<TableIssue>) {
    for target in action.target.references() {
        if !table.contains(target.as_str()) {
            issues.push(TableIssue::UnknownTarget {
                state: state.clone(),
                action: action.description.clone(),
                target: target.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Target;
    use crate::condition::Condition;
    use crate::story::{STARTING_STATE, kitchen_story};
    use crate::table::StateDefinition;

    #[test]
    fn kitchen_story_is_clean() {
        let issues = check_table(&kitchen_story(), &STARTING_STATE.into());
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn unknown_start() {
        let issues = check_table(&kitchen_story(), &"attic".into());
        assert_eq!(issues, [TableIssue::UnknownStart("attic".into())]);
        assert!(issues[0].is_error());
    }

    #[test]
    fn dangling_targets_are_errors() {
        let table = StateTable::new().with_state(
            "hall",
            StateDefinition::new("A hall.")
                .at("Hall")
                .with_action(Action::go("Go down", "cellar"))
                .with_action(Action::new(
                    "Wait",
                    Target::when(Condition::flag("late"), "hall", "dawn"),
                ))
                .with_effect(SideEffect::add_to_bag(Action::go("Lamp", "lit"))),
        );

        let issues = check_table(&table, &"hall".into());
        let missing: Vec<_> = issues
            .iter()
            .filter_map(|i| match i {
                TableIssue::UnknownTarget { target, .. } => Some(target.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(missing, ["cellar", "dawn", "lit"]);
        assert!(issues.iter().all(TableIssue::is_error));
    }

    #[test]
    fn empty_description_and_dead_end() {
        let table = StateTable::new().with_state("void", StateDefinition::new("  "));
        let issues = check_table(&table, &"void".into());

        assert_eq!(
            issues,
            [
                TableIssue::EmptyDescription("void".into()),
                TableIssue::NoActions("void".into()),
            ]
        );
        assert_eq!(issues[1].severity(), Severity::Warning);
    }

    #[test]
    fn session_relative_targets_are_not_checked() {
        let table = StateTable::new().with_state(
            "event",
            StateDefinition::new("Something happens.")
                .with_action(Action::continue_on())
                .with_action(Action::start_again()),
        );
        assert!(check_table(&table, &"event".into()).is_empty());
    }

    #[test]
    fn display() {
        let issue = TableIssue::UnknownTarget {
            state: "hall".into(),
            action: "Go down".into(),
            target: "cellar".into(),
        };
        assert_eq!(
            issue.to_string(),
            "error: hall: action \"Go down\" leads to undefined state \"cellar\""
        );
        assert_eq!(
            TableIssue::NoActions("void".into()).to_string(),
            "warning: void: no player actions"
        );
    }
}
