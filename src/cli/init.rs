//! Init command implementation.
//!
//! Generates a `sprites.yaml` manifest with one autoloaded sheet per
//! directory of PNGs found under the pieces directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, plural, Printer};
use crate::sheet::autoload::discover_sheet_dirs;

/// Initialize a sprites project by generating a sprites.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Pieces directory, relative to the project directory
    #[arg(long, default_value = "sprite_pieces")]
    pub pieces: PathBuf,

    /// Overwrite existing sprites.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SpriteError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let pieces_root = args.path.join(&args.pieces);
    printer.status("Scanning", &display_path(&pieces_root));
    let sheets = discover_sheet_dirs(&pieces_root);

    let yaml = render_manifest(&args.pieces, &sheets);

    fs::write(&manifest_path, &yaml).map_err(|e| SpriteError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !sheets.is_empty() {
        printer.info("Discovered", &sheets.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(sheets.len(), "sprite", "sprites")
        ),
    );

    Ok(())
}

// Written by hand rather than serialized so the file reads like an example
fn render_manifest(pieces: &std::path::Path, sheets: &[String]) -> String {
    let mut yaml = String::new();

    yaml.push_str("sprites:\n");
    yaml.push_str(&format!("  sprite_pieces_path: \"{}\"\n", pieces.display()));
    yaml.push_str("  autoload: true\n");

    if sheets.is_empty() {
        yaml.push_str("sheets: []\n");
    } else {
        yaml.push_str("sheets:\n");
        for sheet in sheets {
            yaml.push_str(&format!("  - sheet: \"{}\"\n", sheet));
        }
    }

    yaml
}
