//! Composite image rendering and PNG output.

use std::path::Path;

use image::{imageops, RgbaImage};

use crate::error::{Result, SpriteError};
use crate::files::ensure_parent;

use super::{Layout, SheetStyle, SpritePiece};

/// Copy every piece into a canvas sized to the layout.
pub fn composite(pieces: &[SpritePiece], layout: &Layout, style: &SheetStyle) -> Result<RgbaImage> {
    let mut canvas = RgbaImage::new(layout.width, layout.height);

    for (piece, placement) in pieces.iter().zip(&layout.placements) {
        let path = piece.source_path(&style.pieces_root);
        let img = image::open(&path)
            .map_err(|e| SpriteError::Image {
                sheet: style.name.clone(),
                path: path.clone(),
                message: format!("Failed to decode sprite piece: {}", e),
            })?
            .to_rgba8();

        imageops::replace(&mut canvas, &img, placement.x as i64, placement.y as i64);
    }

    Ok(canvas)
}

/// Write a sheet's image to a PNG file, creating the parent directory if needed.
pub fn write_png(sheet: &str, img: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(sheet, path)?;

    img.save(path).map_err(|e| SpriteError::Write {
        sheet: sheet.to_string(),
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
