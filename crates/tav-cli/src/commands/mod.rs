pub mod build;
pub mod catalog;
pub mod presets;
pub mod roll;

use std::path::Path;

use colored::{ColoredString, Colorize};
use tav_core::{CatalogState, ReferenceCatalog};
use tav_mechanics::RollQuality;

/// Read and parse a reference catalog file.
fn load_catalog(path: &Path) -> Result<CatalogState, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let catalog = ReferenceCatalog::from_json(&json)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        races = catalog.races().count(),
        classes = catalog.classes().count(),
        "loaded catalog"
    );
    Ok(catalog.into())
}

/// Color text by roll quality.
fn paint(text: &str, quality: RollQuality) -> ColoredString {
    match quality {
        RollQuality::Critical => text.green().bold(),
        RollQuality::Good => text.cyan(),
        RollQuality::Normal => text.normal(),
        RollQuality::Poor => text.red(),
    }
}
