use colored::Colorize;
use tav_mechanics::dice::preset;
use tav_mechanics::{DiceRoller, RollResponse, RollResult, RollerConfig};

use super::paint;

pub fn run(
    notation: &str,
    description: Option<&str>,
    times: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    if times == 0 {
        return Err("--times must be at least 1".into());
    }

    // A preset name rolls its notation, labelled with the preset name
    // unless a description was given.
    let preset = preset::find(notation);
    let (notation, description) = match &preset {
        Some(found) => {
            tracing::debug!(preset = %found.name, notation = %found.notation, "rolling preset");
            (
                found.notation.as_str(),
                description.or(Some(found.name.as_str())),
            )
        }
        None => (notation, description),
    };

    let mut config = RollerConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut roller = DiceRoller::new(config);

    for _ in 0..times {
        roller
            .roll(notation, description)
            .map_err(|e| e.to_string())?;
    }

    // History is newest first; print in roll order.
    let entries: Vec<_> = roller.history().list().collect();
    if json {
        let responses: Vec<RollResponse> = entries
            .iter()
            .rev()
            .map(|entry| RollResponse::from(&entry.result))
            .collect();
        let out = if responses.len() == 1 {
            serde_json::to_string_pretty(&responses[0])
        } else {
            serde_json::to_string_pretty(&responses)
        }
        .map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for entry in entries.iter().rev() {
        print_result(&entry.result);
    }
    if times as usize > entries.len() {
        println!();
        println!(
            "  {}",
            format!("showing the last {} of {times} rolls", entries.len()).dimmed()
        );
    }
    Ok(())
}

fn print_result(result: &RollResult) {
    let dice: Vec<String> = result
        .dice
        .iter()
        .map(|d| paint(&d.value.to_string(), d.quality()).to_string())
        .collect();

    let label = match &result.description {
        Some(d) => format!("{} ", d.bold()),
        None => String::new(),
    };
    let modifier = match result.spec.modifier() {
        0 => String::new(),
        m if m > 0 => format!(" + {m}"),
        m => format!(" - {}", i64::from(m).abs()),
    };
    println!(
        "  {label}{} [{}]{modifier} = {}  ({}, max {})",
        result.spec.to_string().dimmed(),
        dice.join(", "),
        paint(&result.total().to_string(), result.quality()),
        result.quality(),
        result.spec.max_dice_total(),
    );
}
