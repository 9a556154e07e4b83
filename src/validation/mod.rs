//! Validation for declared sprite sheets.
//!
//! Runs a suite of checks against every sheet in a registry and reports
//! errors and warnings. Used by `sprites validate`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::registry::SheetRegistry;

/// Run all validation checks against every sheet.
pub fn validate_registry(registry: &SheetRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for sheet in registry.sheets() {
        result.merge(checks::check_empty_sheet(sheet));
        result.merge(checks::check_piece_files(sheet));
        result.merge(checks::check_duplicate_classes(sheet));
    }

    result
}

/// Print diagnostics and a summary line.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let line = format!("{} {}", printer.dim(&format!("[{}]", d.code)), d.message);
        match d.severity {
            Severity::Error => printer.error(&d.sheet, &line),
            Severity::Warning => printer.warning(&d.sheet, &line),
        }
        if let Some(help) = &d.help {
            printer.info("help", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("{} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("{} warning(s)", warnings));
    } else {
        printer.status("Passed", "no problems found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::pieces::PieceOptions;

    #[test]
    fn test_validate_empty_registry() {
        let registry = SheetRegistry::default();
        assert!(validate_registry(&registry).is_ok());
    }

    #[test]
    fn test_validate_catches_missing_piece() {
        let mut registry = SheetRegistry::new(Configuration {
            sprite_pieces_path: "/nonexistent/pieces".into(),
            ..Default::default()
        });
        registry
            .get("buttons")
            .sprite_piece("buttons/ok.png", None, PieceOptions::default());

        let result = validate_registry(&registry);
        assert!(result.has_errors());
    }
}
