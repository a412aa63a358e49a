use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tav_core::{BuildSubmission, CatalogState, CharacterSnapshot};
use tav_mechanics::{MechError, check_submission};

pub fn run(submission: &Path, catalog: &Path, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let text = std::fs::read_to_string(submission)
        .map_err(|e| format!("cannot read {}: {e}", submission.display()))?;
    let build = BuildSubmission::from_json(&text)
        .map_err(|e| format!("{}: {e}", submission.display()))?;

    let snapshot = match check_submission(&build, &catalog) {
        Ok(snapshot) => snapshot,
        Err(MechError::BuildInvalid(invalid)) => {
            for violation in &invalid.violations {
                eprintln!("  {} {violation}", "✗".red());
            }
            let n = invalid.violations.len();
            return Err(format!(
                "build is invalid ({n} violation{})",
                if n == 1 { "" } else { "s" }
            ));
        }
        Err(e) => return Err(e.to_string()),
    };

    if json {
        let out = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_snapshot(&snapshot, &catalog);
    Ok(())
}

fn print_snapshot(snapshot: &CharacterSnapshot, catalog: &CatalogState) {
    let race = catalog
        .race(&snapshot.race)
        .map(|r| r.name.clone())
        .unwrap_or_else(|_| snapshot.race.clone());
    let class = catalog
        .class(&snapshot.character_class)
        .map(|c| c.name.clone())
        .unwrap_or_else(|_| snapshot.character_class.clone());

    println!("  {} [{race} {class}]", snapshot.name.bold());
    if !snapshot.background.is_empty() {
        println!();
        for line in snapshot.background.lines() {
            println!("  {}", line.trim());
        }
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Points", "Racial", "Score"]);
    for derived in &snapshot.attributes {
        table.add_row(vec![
            derived.attribute.to_string(),
            derived.points.to_string(),
            format!("{:+}", derived.racial),
            derived.total.to_string(),
        ]);
    }
    println!("{table}");

    if !snapshot.advantages.is_empty() {
        println!("  advantages:    {}", snapshot.advantages.join(", "));
    }
    if !snapshot.disadvantages.is_empty() {
        println!("  disadvantages: {}", snapshot.disadvantages.join(", "));
    }
    println!();
    println!("  {} build is valid", "✓".green());
}
