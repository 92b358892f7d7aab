use kp_core::story::kitchen_story;
use kp_core::{Action, SideEffect, StateId, StateTable};

/// One arrow in the graph.
struct Edge<'a> {
    from: &'a StateId,
    action: &'a Action,
    /// Reached through a bag item rather than the action menu.
    via_bag: bool,
}

impl Edge<'_> {
    fn touches(&self, id: &str) -> bool {
        self.from.as_str() == id || self.action.target.references().iter().any(|t| t.as_str() == id)
    }

    fn render(&self) -> String {
        let arrow = if self.via_bag { "~~>" } else { "-->" };
        let label = if self.via_bag {
            format!("{} (bag)", self.action.description)
        } else {
            self.action.description.clone()
        };
        format!("  [{}] {arrow} {label} {arrow} [{}]", self.from, self.action.target)
    }
}

fn edges(table: &StateTable) -> Vec<Edge<'_>> {
    let mut edges = Vec::new();
    for (id, def) in table.iter() {
        for action in &def.player_actions {
            edges.push(Edge {
                from: id,
                action,
                via_bag: false,
            });
        }
        for effect in &def.game_actions {
            if let SideEffect::AddToBag(action) = effect {
                edges.push(Edge {
                    from: id,
                    action,
                    via_bag: true,
                });
            }
        }
    }
    edges
}

pub fn run(focus: Option<&str>) -> Result<(), String> {
    let table = kitchen_story();
    let all = edges(&table);

    if let Some(id) = focus {
        if !table.contains(id) {
            return Err(format!("state not found: \"{id}\""));
        }
        println!("  Graph for: {id}");
        println!();
        let focused: Vec<_> = all.iter().filter(|e| e.touches(id)).collect();
        if focused.is_empty() {
            println!("  [{id}]");
            println!("    (no transitions)");
        }
        for edge in focused {
            println!("{}", edge.render());
        }
        return Ok(());
    }

    println!("  Transition graph");
    println!();
    for edge in &all {
        println!("{}", edge.render());
    }

    for (id, def) in table.iter() {
        for effect in &def.game_actions {
            if let SideEffect::SetFlag { key, value } = effect {
                println!("  [{id}] sets {key} = {value}");
            }
        }
    }

    println!();
    println!(
        "  {} states, {} transitions",
        table.len(),
        all.len()
    );

    Ok(())
}
