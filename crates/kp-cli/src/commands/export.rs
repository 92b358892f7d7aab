use std::path::Path;

use kp_core::story::{STARTING_STATE, kitchen_story};
use kp_core::{SideEffect, StateTable};

pub fn run(format: &str, output: Option<&Path>) -> Result<(), String> {
    let table = kitchen_story();

    let content = match format {
        "json" => export_json(&table)?,
        "markdown" | "md" => export_markdown(&table),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(table: &StateTable) -> Result<String, String> {
    let states: Vec<_> = table
        .iter()
        .map(|(id, def)| serde_json::json!({ "id": id, "state": def }))
        .collect();

    let export = serde_json::json!({
        "start": STARTING_STATE,
        "states": states,
    });

    serde_json::to_string_pretty(&export)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization error: {e}"))
}

fn export_markdown(table: &StateTable) -> String {
    let mut out = String::new();

    out.push_str("# Kaffeepause\n\n");
    out.push_str(&format!("Play starts in `{STARTING_STATE}`.\n\n"));

    for (heading, locations) in [("Locations", true), ("Events", false)] {
        let states: Vec<_> = table
            .iter()
            .filter(|(_, def)| def.is_location() == locations)
            .collect();
        if states.is_empty() {
            continue;
        }

        out.push_str(&format!("## {heading}\n\n"));

        for (id, def) in states {
            match &def.location {
                Some(label) => out.push_str(&format!("### {label} (`{id}`)\n\n")),
                None => out.push_str(&format!("### `{id}`\n\n")),
            }
            out.push_str(&format!("{}\n\n", def.description));

            for action in &def.player_actions {
                out.push_str(&format!("- **{}** → {}\n", action.description, action.target));
            }
            for effect in &def.game_actions {
                match effect {
                    SideEffect::SetFlag { key, value } => {
                        out.push_str(&format!("- *sets* `{key}` = {value}\n"));
                    }
                    SideEffect::AddToBag(action) => out.push_str(&format!(
                        "- *adds to bag* **{}** → {}\n",
                        action.description, action.target
                    )),
                }
            }
            out.push('\n');
        }
    }

    out
}
