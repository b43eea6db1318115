use anyhow::{Context, Result};
use std::fs;

use crate::Site;

/// Remove the generated public directory.
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)
            .with_context(|| format!("removing {:?}", site.public_dir))?;
        println!("Removed {:?}", site.public_dir);
    } else {
        println!("Nothing to clean.");
    }
    Ok(())
}
