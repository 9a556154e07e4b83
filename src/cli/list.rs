//! List command implementation.
//!
//! Declares the manifest's sheets and prints where each one's outputs go.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};
use crate::registry::SheetRegistry;
use crate::sheet::Sheet;

use super::ManifestArgs;

/// List declared sprites and where their outputs go
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Print a JSON listing to stdout
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable description of one sheet.
#[derive(Debug, Serialize)]
pub struct SheetListing {
    pub name: String,
    pub orientation: String,
    pub image: PathBuf,
    pub stylesheet: PathBuf,
    pub scss: PathBuf,
    pub url: String,
    pub pieces: Vec<PieceListing>,
}

#[derive(Debug, Serialize)]
pub struct PieceListing {
    pub path: PathBuf,
    pub class: String,
}

impl SheetListing {
    pub fn from_sheet(sheet: &Sheet) -> Self {
        let pieces = sheet
            .all_sprite_pieces()
            .iter()
            .zip(sheet.all_sprite_piece_files())
            .map(|(piece, path)| PieceListing {
                path,
                class: format!("{}{}", sheet.css_prefix(), piece.css_class),
            })
            .collect();

        Self {
            name: sheet.name().to_string(),
            orientation: sheet.orientation().to_string(),
            image: sheet.path(),
            stylesheet: sheet.stylesheet_path(),
            scss: sheet.scss_path(),
            url: sheet.background_url(),
            pieces,
        }
    }
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let registry = args.manifest.load_registry()?;

    if args.json {
        println!("{}", to_json(&registry)?);
    } else {
        print_inventory(&registry, printer);
    }

    Ok(())
}

fn to_json(registry: &SheetRegistry) -> Result<String> {
    let listings: Vec<SheetListing> = registry
        .sheets()
        .into_iter()
        .map(SheetListing::from_sheet)
        .collect();

    serde_json::to_string_pretty(&listings).map_err(|e| SpriteError::Build {
        message: format!("Failed to serialize listing: {}", e),
        help: None,
    })
}

fn print_inventory(registry: &SheetRegistry, printer: &Printer) {
    for sheet in registry.sheets() {
        printer.info(
            sheet.name(),
            &format!(
                "{} {} {}, {}",
                plural(sheet.pieces().len(), "piece", "pieces"),
                printer.dim("->"),
                printer.cyan(&display_path(&sheet.path())),
                printer.cyan(&display_path(&sheet.stylesheet_path())),
            ),
        );
    }
}
