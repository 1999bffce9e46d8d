use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Listing;

/// Overwrite `path` with `listings` as a pretty-printed JSON array.
pub fn save_to_file(listings: &[Listing], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(listings)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved {} listings to {}", listings.len(), path.display());
    Ok(())
}

/// Read back a file written by [`save_to_file`].
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Listing>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let listings = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("{} is not a listing array", path.display()))?;
    Ok(listings)
}
