//! Validate command implementation.
//!
//! Declares every sheet (so option and declaration errors surface) and
//! checks the pieces, without writing any output.

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_registry};

use super::ManifestArgs;

/// Check the manifest and every sprite piece without writing anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    printer.status("Checking", &display_path(&args.manifest.manifest));
    let registry = args.manifest.load_registry()?;
    printer.info("Declared", &plural(registry.count(), "sprite", "sprites"));

    let result = validate_registry(&registry);
    print_diagnostics(&result, printer);

    let failed = result.has_errors() || (args.strict && result.warning_count() > 0);
    if failed {
        return Err(SpriteError::Build {
            message: "Validation failed".to_string(),
            help: if args.strict && !result.has_errors() {
                Some("Warnings are errors with --strict".to_string())
            } else {
                None
            },
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::test_support::write_piece;
    use std::fs;
    use tempfile::tempdir;

    fn args(path: &std::path::Path, strict: bool) -> ValidateArgs {
        ValidateArgs {
            manifest: ManifestArgs {
                manifest: path.to_path_buf(),
            },
            strict,
        }
    }

    #[test]
    fn test_validate_passes() {
        let dir = tempdir().unwrap();
        write_piece(
            &dir.path().join("sprite_pieces/buttons/ok.png"),
            2,
            2,
            [0, 0, 0, 255],
        );
        let manifest = dir.path().join("sprites.yaml");
        fs::write(
            &manifest,
            "sheets:\n  - sheet: buttons\n    pieces:\n      - path: buttons/ok.png",
        )
        .unwrap();

        run(args(&manifest, true), &Printer::new(true)).unwrap();
    }

    #[test]
    fn test_validate_fails_on_missing_piece() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("sprites.yaml");
        fs::write(
            &manifest,
            "sheets:\n  - sheet: buttons\n    pieces:\n      - path: buttons/ok.png",
        )
        .unwrap();

        let result = run(args(&manifest, false), &Printer::new(true));
        assert!(matches!(result, Err(SpriteError::Build { .. })));
    }

    #[test]
    fn test_validate_strict_fails_on_warning() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("sprites.yaml");
        fs::write(&manifest, "sheets:\n  - sheet: empty").unwrap();

        run(args(&manifest, false), &Printer::new(true)).unwrap();
        assert!(run(args(&manifest, true), &Printer::new(true)).is_err());
    }

    #[test]
    fn test_validate_reports_bad_option() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("sprites.yaml");
        fs::write(
            &manifest,
            "sheets:\n  - sheet: buttons\n    options:\n      orientation: diagonal",
        )
        .unwrap();

        let result = run(args(&manifest, false), &Printer::new(true));
        assert!(matches!(result, Err(SpriteError::InvalidOrientation { .. })));
    }
}
