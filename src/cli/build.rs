//! Build command implementation.
//!
//! Declares every sheet in the manifest, then writes each sheet's image,
//! stylesheet and SCSS companion.

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};
use crate::registry::SheetRegistry;
use crate::sheet::Sheet;

use super::ManifestArgs;

/// Write sprite images and stylesheets
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Only build the named sprite (repeatable)
    #[arg(long = "sheet", short = 's')]
    pub sheets: Vec<String>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    printer.status("Loading", &display_path(&args.manifest.manifest));
    let registry = args.manifest.load_registry()?;

    let selected = select_sheets(&registry, &args.sheets)?;

    for sheet in &selected {
        build_sheet(sheet, printer)?;
    }

    printer.status(
        "Finished",
        &plural(selected.len(), "sprite", "sprites"),
    );

    Ok(())
}

/// Pick the requested sheets, or all of them when none are named.
fn select_sheets<'a>(registry: &'a SheetRegistry, names: &[String]) -> Result<Vec<&'a Sheet>> {
    if names.is_empty() {
        return Ok(registry.sheets());
    }

    names
        .iter()
        .map(|name| {
            registry.find(name).ok_or_else(|| SpriteError::Build {
                message: format!("Unknown sprite: {}", name),
                help: Some(format!(
                    "Declared sprites: {}",
                    registry.names().join(", ")
                )),
            })
        })
        .collect()
}

fn build_sheet(sheet: &Sheet, printer: &Printer) -> Result<()> {
    printer.status(
        "Building",
        &format!(
            "{} ({})",
            sheet.name(),
            plural(sheet.pieces().len(), "piece", "pieces")
        ),
    );

    if sheet.write_all()? {
        printer.info("Writing", &display_path(&sheet.path()));
    } else {
        printer.warning(
            "Skipping",
            &format!("{} has no pieces, no image written", sheet.name()),
        );
    }

    printer.info("Writing", &display_path(&sheet.stylesheet_path()));
    printer.info("Writing", &display_path(&sheet.scss_path()));

    Ok(())
}
