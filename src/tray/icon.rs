use anyhow::{Context, Result};
use std::path::Path;
use tray_icon::Icon;

pub fn load_icon(path: &Path) -> Result<Icon> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load icon {}", path.display()))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height).context("Invalid icon data")
}
