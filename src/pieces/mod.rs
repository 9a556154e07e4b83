//! Sprite pieces and the layout engine.
//!
//! A `SpritePieces` collection owns the ordered pieces of one sheet. It lays
//! them out, composites them into a single image, and renders the CSS and
//! SCSS that point each selector at its slice of that image.
//!
//! Every render takes a `SheetStyle` snapshot of the owning sheet, so output
//! always reflects the sheet's orientation, prefix and URL at call time.

mod css;
mod layout;
mod png;

use std::path::{Path, PathBuf};

use crate::error::{Result, SpriteError};
use crate::sheet::Orientation;

pub use layout::{stack, Layout, PieceSize, Placement};
pub use png::write_png;

/// Per-piece options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceOptions {
    /// Empty pixels left after this piece along the stacking axis.
    pub padding: u32,
}

/// One image merged into a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePiece {
    /// Path relative to the configured pieces directory.
    pub path: String,
    /// CSS selector the piece is exposed as.
    pub css_class: String,
    pub options: PieceOptions,
}

impl SpritePiece {
    /// Resolve the piece's file against the pieces directory.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

/// Snapshot of the sheet state that rendering depends on.
#[derive(Debug, Clone)]
pub struct SheetStyle {
    pub name: String,
    pub orientation: Orientation,
    pub css_prefix: String,
    pub url: String,
    pub pieces_root: PathBuf,
}

/// The ordered, append-only set of pieces belonging to one sheet.
#[derive(Debug, Clone, Default)]
pub struct SpritePieces {
    pieces: Vec<SpritePiece>,
}

impl SpritePieces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one piece.
    pub fn add(
        &mut self,
        path: impl Into<String>,
        css_class: impl Into<String>,
        options: PieceOptions,
    ) -> &SpritePiece {
        self.pieces.push(SpritePiece {
            path: path.into(),
            css_class: css_class.into(),
            options,
        });
        &self.pieces[self.pieces.len() - 1]
    }

    /// All pieces in declaration order.
    pub fn all(&self) -> &[SpritePiece] {
        &self.pieces
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpritePiece> {
        self.pieces.iter()
    }

    /// Resolved source file of every piece.
    pub fn files(&self, root: &Path) -> Vec<PathBuf> {
        self.pieces.iter().map(|p| p.source_path(root)).collect()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Lay out all pieces, reading each image's dimensions from disk.
    ///
    /// This is the only step that touches the piece files' headers; the
    /// renderers below all work from the returned layout.
    pub fn layout(&self, style: &SheetStyle) -> Result<Layout> {
        let mut sizes = Vec::with_capacity(self.pieces.len());

        for piece in &self.pieces {
            let path = piece.source_path(&style.pieces_root);
            let (width, height) =
                image::image_dimensions(&path).map_err(|e| SpriteError::Image {
                    sheet: style.name.clone(),
                    path: path.clone(),
                    message: format!("Failed to read sprite piece: {}", e),
                })?;
            sizes.push(PieceSize {
                width,
                height,
                padding: piece.options.padding,
            });
        }

        stack(&sizes, style.orientation).ok_or_else(|| SpriteError::LayoutOverflow {
            sheet: style.name.clone(),
        })
    }

    /// Composite all pieces into one image.
    pub fn render_image(&self, layout: &Layout, style: &SheetStyle) -> Result<image::RgbaImage> {
        png::composite(&self.pieces, layout, style)
    }

    /// Render the stylesheet for all pieces.
    pub fn render_css(&self, layout: &Layout, style: &SheetStyle) -> String {
        css::render_css(&self.pieces, layout, style)
    }

    /// Render the SCSS companion for all pieces.
    pub fn render_scss(&self, layout: &Layout, style: &SheetStyle) -> String {
        css::render_scss(&self.pieces, layout, style)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::write_piece;
    use super::*;
    use tempfile::tempdir;

    fn style(root: &Path, orientation: Orientation) -> SheetStyle {
        SheetStyle {
            name: "buttons".to_string(),
            orientation,
            css_prefix: String::new(),
            url: "/images/sprites/buttons.png".to_string(),
            pieces_root: root.to_path_buf(),
        }
    }

    #[test]
    fn test_add_preserves_order() {
        let mut pieces = SpritePieces::new();
        pieces.add("a.png", ".a", PieceOptions::default());
        pieces.add("b.png", ".b", PieceOptions::default());

        let classes: Vec<&str> = pieces.iter().map(|p| p.css_class.as_str()).collect();
        assert_eq!(classes, vec![".a", ".b"]);
        assert_eq!(pieces.len(), 2);
    }

    #[test]
    fn test_files_resolved_against_root() {
        let mut pieces = SpritePieces::new();
        pieces.add("buttons/ok.png", ".ok", PieceOptions::default());

        assert_eq!(
            pieces.files(Path::new("/pieces")),
            vec![PathBuf::from("/pieces/buttons/ok.png")]
        );
    }

    #[test]
    fn test_layout_reads_dimensions() {
        let dir = tempdir().unwrap();
        write_piece(&dir.path().join("buttons/ok.png"), 10, 4, [255, 0, 0, 255]);
        write_piece(&dir.path().join("buttons/cancel.png"), 8, 6, [0, 0, 255, 255]);

        let mut pieces = SpritePieces::new();
        pieces.add("buttons/ok.png", ".ok", PieceOptions::default());
        pieces.add("buttons/cancel.png", ".cancel", PieceOptions::default());

        let layout = pieces.layout(&style(dir.path(), Orientation::Vertical)).unwrap();
        assert_eq!((layout.width, layout.height), (10, 10));
        assert_eq!(layout.placements[1].y, 4);
    }

    #[test]
    fn test_layout_missing_piece() {
        let dir = tempdir().unwrap();
        let mut pieces = SpritePieces::new();
        pieces.add("nope.png", ".nope", PieceOptions::default());

        let err = pieces
            .layout(&style(dir.path(), Orientation::Vertical))
            .unwrap_err();
        match err {
            SpriteError::Image { path, .. } => assert!(path.ends_with("nope.png")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_layout_padding_overflow_names_sheet() {
        let dir = tempdir().unwrap();
        write_piece(&dir.path().join("a.png"), 4, 4, [0, 0, 0, 255]);
        write_piece(&dir.path().join("b.png"), 4, 4, [0, 0, 0, 255]);

        let mut pieces = SpritePieces::new();
        pieces.add("a.png", ".a", PieceOptions { padding: u32::MAX });
        pieces.add("b.png", ".b", PieceOptions::default());

        let err = pieces
            .layout(&style(dir.path(), Orientation::Vertical))
            .unwrap_err();
        assert!(matches!(err, SpriteError::LayoutOverflow { ref sheet } if sheet == "buttons"));
    }

    #[test]
    fn test_render_css_tracks_orientation() {
        let dir = tempdir().unwrap();
        write_piece(&dir.path().join("a.png"), 5, 3, [0, 0, 0, 255]);
        write_piece(&dir.path().join("b.png"), 5, 3, [0, 0, 0, 255]);

        let mut pieces = SpritePieces::new();
        pieces.add("a.png", ".a", PieceOptions::default());
        pieces.add("b.png", ".b", PieceOptions::default());

        let vertical_style = style(dir.path(), Orientation::Vertical);
        let horizontal_style = style(dir.path(), Orientation::Horizontal);
        let vertical = pieces.render_css(&pieces.layout(&vertical_style).unwrap(), &vertical_style);
        let horizontal = pieces.render_css(
            &pieces.layout(&horizontal_style).unwrap(),
            &horizontal_style,
        );

        assert!(vertical.contains("no-repeat 0 -3px;"));
        assert!(horizontal.contains("no-repeat -5px 0;"));
    }

    #[test]
    fn test_renderers_work_from_layout_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.png");
        write_piece(&path, 5, 3, [0, 0, 0, 255]);

        let mut pieces = SpritePieces::new();
        pieces.add("a.png", ".a", PieceOptions::default());

        let style = style(dir.path(), Orientation::Vertical);
        let layout = pieces.layout(&style).unwrap();
        std::fs::remove_file(&path).unwrap();

        // Stylesheets need no further reads once the layout exists
        assert!(pieces.render_css(&layout, &style).contains("width: 5px;"));
        assert!(pieces.render_scss(&layout, &style).contains("@mixin buttons-a {"));
    }
}
