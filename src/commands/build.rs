use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Generate the static site into the public directory.
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let repo = site.repository();
    let generator = Generator::new(site)?;
    generator.generate(&repo)?;

    tracing::info!("Site generated in {:?}", start.elapsed());
    Ok(())
}
