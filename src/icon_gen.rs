use crate::{png, shader};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Sizes rendered when no explicit list is given.
pub const DEFAULT_SIZES: [u32; 5] = [128, 96, 48, 32, 16];

#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
}

/// Render one `size`×`size` icon and encode it as PNG.
pub fn render_icon(size: u32) -> Result<Vec<u8>> {
    let rows: Vec<Vec<u8>> = (0..size).map(|y| shader::scanline(y, size)).collect();
    png::encode(size, size, &rows).with_context(|| format!("Failed to encode {size}px icon"))
}

pub fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(format!("{size}.png"))
}

pub fn generate_icons(args: Args) -> Result<()> {
    // Ensure the output directory exists
    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;

    for &size in &args.sizes {
        let data = render_icon(size)?;
        let output_path = icon_path(&args.output, size);
        std::fs::write(&output_path, &data)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        log::debug!("{size}px icon: {} bytes", data.len());
        println!("wrote {}", output_path.display());
    }

    Ok(())
}
