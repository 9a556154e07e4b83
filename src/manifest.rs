//! Project manifest (sprites.yaml) parsing.
//!
//! The manifest is the declarative build surface: global configuration
//! under `sprites:` and one entry per sheet under `sheets:`.
//!
//! ```yaml
//! sprites:
//!   sprite_pieces_path: assets/pieces
//!   autoload: true
//! sheets:
//!   - sheet: buttons
//!     options:
//!       orientation: horizontal
//!     pieces:
//!       - path: buttons/ok.png
//!         class: .ok
//!         padding: 2
//!   - sheet: { "icons/icons.png": "icons/icons.css" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::error::{Result, SpriteError};
use crate::pieces::PieceOptions;
use crate::registry::{Declaration, SheetRegistry};
use crate::sheet::Options;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "sprites.yaml";

/// Project manifest loaded from sprites.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Global configuration shared by every sheet.
    pub sprites: Configuration,

    /// Sheet declarations, in order.
    pub sheets: Vec<SheetEntry>,
}

/// One sheet declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetEntry {
    /// Name, path, or `{source: stylesheet}` mapping.
    pub sheet: serde_yaml::Value,

    #[serde(default)]
    pub options: Options,

    #[serde(default)]
    pub pieces: Vec<PieceEntry>,
}

/// One explicitly declared piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PieceEntry {
    /// Path relative to `sprite_pieces_path`.
    pub path: String,

    /// CSS selector; derived from the file name when omitted.
    #[serde(default)]
    pub class: Option<String>,

    #[serde(default)]
    pub padding: u32,
}

impl PieceEntry {
    pub fn piece_options(&self) -> PieceOptions {
        PieceOptions {
            padding: self.padding,
        }
    }
}

impl Manifest {
    /// Load manifest from a sprites.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SpriteError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check sprites.yaml syntax".to_string()),
        })
    }

    /// Declare every sheet into a fresh registry.
    ///
    /// Relative directories in the configuration are resolved against `root`.
    /// Fails on the first sheet that cannot be declared or configured.
    pub fn into_registry(self, root: &Path) -> Result<SheetRegistry> {
        let mut registry = SheetRegistry::new(self.sprites.with_root(root));

        for entry in &self.sheets {
            let declaration = Declaration::from_yaml(&entry.sheet)?;
            registry.declare_with(declaration, &entry.options, |sheet| {
                for piece in &entry.pieces {
                    sheet.sprite_piece(
                        piece.path.clone(),
                        piece.class.as_deref(),
                        piece.piece_options(),
                    );
                }
                Ok(())
            })?;
        }

        Ok(registry)
    }
}
