use std::io::{self, BufRead, Write};

use colored::Colorize;

use kp_core::{Engine, Screen, Selection};
use tracing::warn;

use super::StoryOptions;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Select(Selection),
    Label(String),
    Look,
    Help,
    Quit,
}

fn parse_input(input: &str) -> Input {
    let lower = input.trim().to_lowercase();
    match lower.as_str() {
        "q" | "quit" | "exit" => return Input::Quit,
        "h" | "help" | "?" => return Input::Help,
        "l" | "look" => return Input::Look,
        _ => {}
    }

    if let Ok(n) = lower.parse::<usize>() {
        return Input::Select(Selection::Action(n));
    }
    if let Some(rest) = lower.strip_prefix('b')
        && let Ok(n) = rest.trim().parse::<usize>()
    {
        return Input::Select(Selection::Bag(n));
    }

    Input::Label(input.trim().to_string())
}

/// Find an action or bag entry by its label (case-insensitive).
fn find_label(engine: &Engine<Screen>, label: &str) -> Option<Selection> {
    let matches = |desc: &String| desc.eq_ignore_ascii_case(label);
    let screen = engine.renderer();
    // Skip the placeholders: they are selected by number only.
    screen
        .actions
        .iter()
        .skip(1)
        .position(matches)
        .map(|i| Selection::Action(i + 1))
        .or_else(|| {
            screen
                .bag
                .iter()
                .skip(1)
                .position(matches)
                .map(|i| Selection::Bag(i + 1))
        })
}

/// Render the current frame as terminal text.
fn frame(engine: &Engine<Screen>) -> String {
    let screen = engine.renderer();
    let mut out = String::new();

    if let Some(location) = &screen.location {
        out.push_str(&format!("  {}\n", format!("== {location} ==").bold()));
    }
    out.push_str(&format!("  {}\n\n", screen.description));

    if let Some((placeholder, actions)) = screen.actions.split_first() {
        out.push_str(&format!("  {}\n", placeholder.dimmed()));
        for (i, action) in actions.iter().enumerate() {
            out.push_str(&format!("    {}) {action}\n", (i + 1).to_string().cyan()));
        }
    }

    match screen.bag.split_first() {
        Some((placeholder, items)) => {
            out.push_str(&format!("  {}\n", placeholder.dimmed()));
            for (i, item) in items.iter().enumerate() {
                out.push_str(&format!("    {}) {item}\n", format!("b{}", i + 1).cyan()));
            }
        }
        None => {
            let empty = &engine.config().empty_bag_text;
            out.push_str(&format!("  Bag: {}\n", empty.dimmed()));
        }
    }

    out
}

const HELP: &str = "  Type a number to take that action, or b<number> to use a bag item.\n  \
     0 and b0 stay where you are. You can also type an action's name.\n  \
     look - show the current scene again\n  \
     help - show this help\n  \
     quit - leave the game";

pub fn run(options: &StoryOptions) -> Result<(), String> {
    let mut engine = super::start_engine(options, Screen::new())?;

    println!("  {} Kaffeepause", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}", frame(&engine));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        if line.trim().is_empty() {
            continue;
        }

        let selection = match parse_input(&line) {
            Input::Quit => break,
            Input::Help => {
                println!("{HELP}\n");
                continue;
            }
            Input::Look => {
                println!("{}", frame(&engine));
                continue;
            }
            Input::Select(selection) => selection,
            Input::Label(label) => match find_label(&engine, &label) {
                Some(selection) => selection,
                None => {
                    println!("{}\n", format!("No action called \"{label}\".").yellow());
                    continue;
                }
            },
        };

        match engine.select(selection) {
            Ok(_) => println!("{}", frame(&engine)),
            Err(e) => {
                warn!(state = %engine.session().current_state(), "selection rejected: {e}");
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
