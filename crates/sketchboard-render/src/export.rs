//! PNG export of committed raster snapshots.

use crate::raster::{RasterSnapshot, RenderResult};
use std::path::Path;

/// Encode a snapshot as an 8-bit RGBA PNG.
pub fn encode_png(snapshot: &RasterSnapshot) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, snapshot.width(), snapshot.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(snapshot.as_raw())?;
    }
    Ok(png_data)
}

/// Encode a snapshot and write it to `path`.
pub fn export_png_file(snapshot: &RasterSnapshot, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let png_data = encode_png(snapshot)?;
    std::fs::write(path, &png_data)?;
    log::info!(
        "Exported {}x{} PNG ({} bytes) to {}",
        snapshot.width(),
        snapshot.height(),
        png_data.len(),
        path.display()
    );
    Ok(())
}
