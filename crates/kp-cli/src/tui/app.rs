use kp_core::{Engine, Screen, Selection};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Actions,
    Bag,
}

pub struct App {
    pub engine: Engine<Screen>,
    pub focus: Focus,
    pub show_help: bool,
    pub action_cursor: usize,
    pub bag_cursor: usize,
    /// Last selection error, shown in the status bar until the next move.
    pub message: Option<String>,
}

impl App {
    pub fn new(engine: Engine<Screen>) -> Self {
        let mut app = Self {
            engine,
            focus: Focus::Actions,
            show_help: false,
            action_cursor: 0,
            bag_cursor: 0,
            message: None,
        };
        app.reset_cursors();
        app
    }

    fn reset_cursors(&mut self) {
        // Entry 0 of each menu is the placeholder; start on the first real entry.
        let screen = self.engine.renderer();
        self.action_cursor = usize::from(screen.actions.len() > 1);
        self.bag_cursor = usize::from(screen.bag.len() > 1);
    }

    fn focused_len(&self) -> usize {
        let screen = self.engine.renderer();
        match self.focus {
            Focus::Actions => screen.actions.len(),
            Focus::Bag => screen.bag.len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Actions => &mut self.action_cursor,
            Focus::Bag => &mut self.bag_cursor,
        }
    }

    pub fn move_down(&mut self) {
        let len = self.focused_len();
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Actions if !self.engine.renderer().bag.is_empty() => Focus::Bag,
            _ => Focus::Actions,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn select(&mut self) {
        let selection = match self.focus {
            Focus::Actions => Selection::Action(self.action_cursor),
            Focus::Bag => Selection::Bag(self.bag_cursor),
        };

        match self.engine.select(selection) {
            Ok(_) => {
                self.message = None;
                self.focus = Focus::Actions;
                self.reset_cursors();
            }
            Err(e) => {
                warn!(state = %self.engine.session().current_state(), "selection rejected: {e}");
                self.message = Some(e.to_string());
            }
        }
    }
}
