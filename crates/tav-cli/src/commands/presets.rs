use comfy_table::{ContentArrangement, Table};
use tav_mechanics::dice::preset;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Preset", "Notation", "Range"]);

    let mut count = 0;
    for group in preset::standard() {
        for p in &group.presets {
            let spec = p.spec().map_err(|e| format!("preset {}: {e}", p.name))?;
            table.add_row(vec![
                group.category.clone(),
                p.name.clone(),
                p.notation.clone(),
                format!("{}-{}", spec.min_total(), spec.max_total()),
            ]);
            count += 1;
        }
    }

    println!("{table}");
    println!();
    println!("  {count} presets");
    Ok(())
}
