use comfy_table::{ContentArrangement, Table};

use kp_core::story::kitchen_story;

pub fn run(locations_only: bool) -> Result<(), String> {
    let table = kitchen_story();

    let states: Vec<_> = if locations_only {
        table.locations().collect()
    } else {
        table.iter().collect()
    };

    if states.is_empty() {
        println!("  No states found.");
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["State", "Location", "Description", "Actions", "Effects"]);

    for (id, def) in &states {
        let desc = if def.description.chars().count() > 60 {
            let cut: String = def.description.chars().take(57).collect();
            format!("{cut}...")
        } else {
            def.description.clone()
        };

        out.add_row(vec![
            id.to_string(),
            def.location.clone().unwrap_or_else(|| "-".to_string()),
            desc,
            def.player_actions.len().to_string(),
            def.game_actions.len().to_string(),
        ]);
    }

    println!("{out}");
    println!();
    println!("  {} states", states.len());

    Ok(())
}
