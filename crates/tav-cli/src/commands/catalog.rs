use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tav_core::{Attribute, RaceDefinition};

pub fn run(file: &Path) -> Result<(), String> {
    let state = super::load_catalog(file)?;
    let catalog = state
        .catalog()
        .ok_or_else(|| "catalog is not loaded".to_string())?;

    println!("  {}", "Races".bold());
    let mut races = table(vec!["Id", "Name", "Modifiers", "Traits"]);
    for race in catalog.races() {
        races.add_row(vec![
            race.id.clone(),
            race.name.clone(),
            modifiers(race),
            traits(race),
        ]);
    }
    println!("{races}");
    println!();

    println!("  {}", "Classes".bold());
    let mut classes = table(vec!["Id", "Name", "Description"]);
    for class in catalog.classes() {
        classes.add_row(vec![
            class.id.clone(),
            class.name.clone(),
            or_dash(&class.description),
        ]);
    }
    println!("{classes}");
    println!();

    println!("  {}", "Advantages".bold());
    let mut advantages = table(vec!["Id", "Name", "Cost"]);
    for adv in catalog.advantages() {
        advantages.add_row(vec![adv.id.clone(), adv.name.clone(), adv.cost.to_string()]);
    }
    println!("{advantages}");
    println!();

    println!("  {}", "Disadvantages".bold());
    let mut disadvantages = table(vec!["Id", "Name", "Points"]);
    for dis in catalog.disadvantages() {
        disadvantages.add_row(vec![dis.id.clone(), dis.name.clone(), dis.points.to_string()]);
    }
    println!("{disadvantages}");
    println!();

    println!(
        "  {} races, {} classes, {} advantages, {} disadvantages",
        catalog.races().count(),
        catalog.classes().count(),
        catalog.advantages().count(),
        catalog.disadvantages().count(),
    );
    Ok(())
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn modifiers(race: &RaceDefinition) -> String {
    let parts: Vec<String> = Attribute::ALL
        .into_iter()
        .filter_map(|attr| match race.modifier(attr) {
            0 => None,
            m => Some(format!("{} {m:+}", attr.abbrev())),
        })
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(", ")
    }
}

fn traits(race: &RaceDefinition) -> String {
    let all: Vec<&str> = race
        .advantages
        .iter()
        .chain(&race.disadvantages)
        .map(|racial| racial.name.as_str())
        .collect();
    if all.is_empty() {
        "—".to_string()
    } else {
        all.join(", ")
    }
}

fn or_dash(text: &str) -> String {
    if text.is_empty() {
        "—".to_string()
    } else {
        text.to_string()
    }
}
