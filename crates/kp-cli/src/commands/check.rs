use colored::Colorize;

use kp_core::story::kitchen_story;
use kp_core::{Severity, check_table};
use tracing::debug;

use super::StoryOptions;

pub fn run(start: Option<&str>) -> Result<(), String> {
    let table = kitchen_story();
    let config = StoryOptions::starting_at(start).config();
    let issues = check_table(&table, &config.start);
    debug!(states = table.len(), issues = issues.len(), start = %config.start, "checked story");

    for issue in &issues {
        debug!(severity = ?issue.severity(), "{issue}");
        let line = issue.to_string();
        match issue.severity() {
            Severity::Error => eprintln!("  {}", line.red()),
            Severity::Warning => eprintln!("  {}", line.yellow()),
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed (starting at '{}').", config.start);
    println!(
        "  {} states, {} locations",
        table.len(),
        table.locations().count()
    );
    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
