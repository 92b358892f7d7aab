use std::collections::BTreeMap;

/// Flags the story sets on the player as it goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    flags: BTreeMap<String, bool>,
}

impl PlayerState {
    /// Create a player with no flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a flag. Flags that were never set read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Set a flag.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.flags.insert(key.into(), value);
    }

    /// All flags that have been set, sorted by key.
    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
