pub mod check;
pub mod export;
pub mod graph;
pub mod list;
pub mod play;

use clap::Args;

use kp_core::story::kitchen_story;
use kp_core::{Engine, EngineConfig, Renderer};

/// Options shared by the commands that play the story.
#[derive(Debug, Clone, Default, Args)]
pub struct StoryOptions {
    /// State to start in (default: kitchen)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Label of the first entry of the action menu
    #[arg(long, value_name = "TEXT")]
    pub action_prompt: Option<String>,

    /// Label of the first entry of the bag
    #[arg(long, value_name = "TEXT")]
    pub bag_prompt: Option<String>,

    /// Text shown while the bag is empty
    #[arg(long, value_name = "TEXT")]
    pub empty_bag: Option<String>,
}

impl StoryOptions {
    /// Options that only override the starting state.
    pub fn starting_at(start: Option<&str>) -> Self {
        Self {
            start: start.map(String::from),
            ..Self::default()
        }
    }

    /// Engine settings with every given override applied.
    pub fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if let Some(start) = &self.start {
            config = config.with_start(start.as_str());
        }
        if let Some(label) = &self.action_prompt {
            config = config.with_action_placeholder(label);
        }
        if let Some(label) = &self.bag_prompt {
            config = config.with_bag_placeholder(label);
        }
        if let Some(text) = &self.empty_bag {
            config = config.with_empty_bag_text(text);
        }
        config
    }
}

/// Start the built-in story with the given renderer.
pub fn start_engine<R: Renderer>(options: &StoryOptions, renderer: R) -> Result<Engine<R>, String> {
    Engine::start(kitchen_story(), options.config(), renderer)
        .map_err(|e| format!("failed to start story: {e}"))
}
