use crate::action::Action;

/// Receives every presentation change the engine makes.
///
/// Menus are passed as whole lists of visible entries, placeholder first.
/// Implementations show the labels and report selections back to the
/// engine by index; they never resolve targets themselves.
pub trait Renderer {
    /// The player moved to a place with this header.
    fn set_location(&mut self, label: &str);

    /// Replace the description text.
    fn set_description(&mut self, text: &str);

    /// Replace the action menu.
    fn set_actions(&mut self, entries: &[Action]);

    /// Replace the bag menu.
    fn set_bag(&mut self, entries: &[Action]);

    /// Show the bag placeholder as the selected bag entry.
    fn select_bag_placeholder(&mut self);
}

/// Headless renderer that keeps the latest frame as plain data.
///
/// Both terminal frontends draw from this; tests inspect it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    /// Last location header, if any location has been entered.
    pub location: Option<String>,
    /// Current description text.
    pub description: String,
    /// Action menu labels, placeholder first.
    pub actions: Vec<String>,
    /// Bag labels, placeholder first. Empty until the first item.
    pub bag: Vec<String>,
    /// Selected bag entry.
    pub bag_selected: Option<usize>,
    /// Number of renderer calls received.
    pub updates: usize,
}

impl Screen {
    /// Create a blank screen.
    pub fn new() -> Self {
        Self::default()
    }
}

fn labels(entries: &[Action]) -> Vec<String> {
    entries.iter().map(|a| a.description.clone()).collect()
}

impl Renderer for Screen {
    fn set_location(&mut self, label: &str) {
        self.location = Some(label.to_string());
        self.updates += 1;
    }

    fn set_description(&mut self, text: &str) {
        self.description = text.to_string();
        self.updates += 1;
    }

    fn set_actions(&mut self, entries: &[Action]) {
        self.actions = labels(entries);
        self.updates += 1;
    }

    fn set_bag(&mut self, entries: &[Action]) {
        self.bag = labels(entries);
        self.updates += 1;
    }

    fn select_bag_placeholder(&mut self) {
        self.bag_selected = Some(0);
        self.updates += 1;
    }
}
