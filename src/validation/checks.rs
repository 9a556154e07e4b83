//! Validation checks for declared sheets.
//!
//! Each check takes a `&Sheet` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::sheet::Sheet;

use super::diagnostic::{Diagnostic, ValidationResult};

/// Every piece file must exist and decode as an image.
pub fn check_piece_files(sheet: &Sheet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (piece, path) in sheet
        .all_sprite_pieces()
        .iter()
        .zip(sheet.all_sprite_piece_files())
    {
        if !path.exists() {
            result.push(
                Diagnostic::error(
                    "sprites::validate::missing-piece",
                    sheet.name(),
                    format!("Piece '{}' not found at {}", piece.path, path.display()),
                )
                .with_help("Paths are relative to sprite_pieces_path"),
            );
        } else if let Err(e) = image::image_dimensions(&path) {
            result.push(Diagnostic::error(
                "sprites::validate::unreadable-piece",
                sheet.name(),
                format!("Piece '{}' could not be read: {}", piece.path, e),
            ));
        }
    }

    result
}

/// A sheet with no pieces produces an empty stylesheet and no image.
pub fn check_empty_sheet(sheet: &Sheet) -> ValidationResult {
    let mut result = ValidationResult::new();

    if sheet.pieces().is_empty() {
        let help = if sheet.autoload() == Some(false) || !sheet.config().autoload {
            "Declare pieces or enable autoload"
        } else {
            "Add PNG files to the sprite's pieces directory"
        };
        result.push(
            Diagnostic::warning(
                "sprites::validate::empty-sheet",
                sheet.name(),
                format!("Sprite '{}' has no pieces", sheet.name()),
            )
            .with_help(help),
        );
    }

    result
}

/// Two pieces with the same selector make the first one unreachable.
pub fn check_duplicate_classes(sheet: &Sheet) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for piece in sheet.all_sprite_pieces() {
        if !seen.insert(piece.css_class.as_str()) {
            result.push(Diagnostic::warning(
                "sprites::validate::duplicate-class",
                sheet.name(),
                format!(
                    "Selector '{}' is used by more than one piece",
                    piece.css_class
                ),
            ));
        }
    }

    result
}
