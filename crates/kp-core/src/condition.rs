use serde::Serialize;

use crate::player::PlayerState;

/// A predicate evaluated against the player when a target is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// The named flag is set to `true`.
    Flag(String),
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Shorthand for [`Condition::Flag`].
    pub fn flag(key: impl Into<String>) -> Self {
        Condition::Flag(key.into())
    }

    /// Evaluate against the current player state.
    pub fn evaluate(&self, player: &PlayerState) -> bool {
        match self {
            Condition::Flag(key) => player.flag(key),
            Condition::Not(inner) => !inner.evaluate(player),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(player)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(player)),
            Condition::Always => true,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Flag(key) => write!(f, "{key}"),
            Condition::Not(inner) => write!(f, "not {inner}"),
            Condition::And(conditions) => write_joined(f, conditions, " and "),
            Condition::Or(conditions) => write_joined(f, conditions, " or "),
            Condition::Always => write!(f, "always"),
        }
    }
}

fn write_joined(
    f: &mut std::fmt::Formatter<'_>,
    conditions: &[Condition],
    separator: &str,
) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, c) in conditions.iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, ")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_condition() {
        let mut player = PlayerState::new();
        let cond = Condition::flag("hasDrunkCoffee");
        assert!(!cond.evaluate(&player));

        player.set_flag("hasDrunkCoffee", true);
        assert!(cond.evaluate(&player));
    }

    #[test]
    fn logical_not() {
        let player = PlayerState::new();
        let cond = Condition::Not(Box::new(Condition::flag("awake")));
        assert!(cond.evaluate(&player));
    }

    #[test]
    fn logical_and_or() {
        let mut player = PlayerState::new();
        player.set_flag("a", true);

        let both = Condition::And(vec![Condition::flag("a"), Condition::flag("b")]);
        let either = Condition::Or(vec![Condition::flag("a"), Condition::flag("b")]);
        assert!(!both.evaluate(&player));
        assert!(either.evaluate(&player));

        player.set_flag("b", true);
        assert!(both.evaluate(&player));
    }

    #[test]
    fn empty_and_is_true() {
        assert!(Condition::And(Vec::new()).evaluate(&PlayerState::new()));
        assert!(!Condition::Or(Vec::new()).evaluate(&PlayerState::new()));
    }

    #[test]
    fn display() {
        let cond = Condition::And(vec![
            Condition::flag("a"),
            Condition::Not(Box::new(Condition::flag("b"))),
        ]);
        assert_eq!(cond.to_string(), "(a and not b)");
    }
}
