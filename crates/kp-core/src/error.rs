use crate::engine::MenuKind;
use crate::table::StateId;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors raised while driving the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryError {
    /// A state id was entered that the table does not define.
    #[error("unknown state: \"{0}\"")]
    UnknownState(StateId),

    /// A menu entry was selected that does not exist.
    #[error("invalid {menu} selection: {index} (menu has {len} entries)")]
    InvalidSelection {
        /// The menu the selection was made from.
        menu: MenuKind,
        /// The requested entry index.
        index: usize,
        /// The number of visible entries in that menu.
        len: usize,
    },
}
