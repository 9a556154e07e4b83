//! sprites - CSS sprite sheet generator
//!
//! A library for declaring named sprite sheets, configuring them from
//! untyped option maps, and writing each sheet's composite image,
//! stylesheet and SCSS companion.

pub mod cli;
pub mod config;
pub mod error;
mod files;
pub mod manifest;
pub mod output;
pub mod pieces;
pub mod registry;
pub mod sheet;
pub mod validation;

pub use config::Configuration;
pub use error::{Result, SpriteError};
pub use manifest::{Manifest, PieceEntry, SheetEntry, MANIFEST_FILENAME};
pub use pieces::{stack, Layout, PieceOptions, PieceSize, Placement, SpritePiece, SpritePieces};
pub use registry::{Declaration, DeclarationKey, SheetRegistry};
pub use sheet::{options, OptionValue, Options, Orientation, Sheet, SheetOption};
pub use validation::{validate_registry, Diagnostic, Severity, ValidationResult};
