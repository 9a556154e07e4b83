//! Sprite sheet descriptors.
//!
//! A `Sheet` holds one named sheet's options, resolves where its outputs go,
//! and drives the piece collection it owns to produce them.
//!
//! # Example
//!
//! ```ignore
//! use sprites::sheet::{options, Orientation};
//!
//! let sheet = registry.get("buttons");
//! sheet.configure_with(&options([("orientation", Orientation::Horizontal)]), |s| {
//!     s.sprite_piece("buttons/ok.png", Some(".ok"), Default::default());
//!     Ok(())
//! })?;
//! sheet.write_outputs()?;
//! ```

pub mod autoload;
mod options;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{join_url, Configuration};
use crate::error::{Result, SpriteError};
use crate::files::write_text;
use crate::pieces::{write_png, Layout, PieceOptions, SheetStyle, SpritePiece, SpritePieces};

pub use options::{
    options, parse_option, parse_options, supported_options, OptionValue, Options, Orientation,
    SheetOption, OPTION_TABLE,
};

/// One named sprite sheet.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    config: Arc<Configuration>,
    orientation: Option<Orientation>,
    path: Option<PathBuf>,
    stylesheet_path: Option<PathBuf>,
    url: Option<String>,
    autoload: Option<bool>,
    css_prefix: Option<String>,
    pieces: SpritePieces,
}

impl Sheet {
    /// Create a sheet with default options.
    pub fn new(name: impl Into<String>, config: Arc<Configuration>) -> Self {
        Self {
            name: name.into(),
            config,
            orientation: None,
            path: None,
            stylesheet_path: None,
            url: None,
            autoload: None,
            css_prefix: None,
            pieces: SpritePieces::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn pieces(&self) -> &SpritePieces {
        &self.pieces
    }

    // --- options ---

    pub fn orientation(&self) -> Orientation {
        self.orientation.unwrap_or_default()
    }

    /// Set the orientation from an untyped value.
    ///
    /// Leaves the current orientation untouched if the value is invalid.
    pub fn set_orientation(&mut self, value: &OptionValue) -> Result<()> {
        let orientation =
            Orientation::from_value(value).ok_or_else(|| SpriteError::InvalidOrientation {
                sheet: self.name.clone(),
                value: value.to_string(),
            })?;
        self.orientation = Some(orientation);
        Ok(())
    }

    pub fn set_orientation_value(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }

    pub fn css_prefix(&self) -> &str {
        self.css_prefix.as_deref().unwrap_or("")
    }

    pub fn set_css_prefix(&mut self, prefix: impl Into<String>) {
        self.css_prefix = Some(prefix.into());
    }

    /// The explicit autoload setting, if any.
    pub fn autoload(&self) -> Option<bool> {
        self.autoload
    }

    pub fn set_autoload(&mut self, autoload: bool) {
        self.autoload = Some(autoload);
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn set_stylesheet_path(&mut self, path: impl Into<PathBuf>) {
        self.stylesheet_path = Some(path.into());
    }

    /// Apply one already-validated option.
    pub fn apply(&mut self, option: SheetOption) {
        match option {
            SheetOption::Orientation(o) => self.set_orientation_value(o),
            SheetOption::Path(p) => self.set_path(p),
            SheetOption::StylesheetPath(p) => self.set_stylesheet_path(p),
            SheetOption::Url(u) => self.set_url(u),
            SheetOption::Autoload(a) => self.set_autoload(a),
            SheetOption::CssPrefix(p) => self.set_css_prefix(p),
        }
    }

    // --- derived names and paths ---

    pub fn sprite_file_name(&self) -> String {
        format!("{}.png", self.name)
    }

    pub fn stylesheet_file_name(&self) -> String {
        replace_png_suffix(&self.sprite_file_name(), "css")
    }

    pub fn scss_file_name(&self) -> String {
        replace_png_suffix(&self.sprite_file_name(), "css.scss")
    }

    /// Output file for the sprite image.
    pub fn path(&self) -> PathBuf {
        let file = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.sprite_file_name()));
        self.config.sprites_path.join(file)
    }

    /// Output file for the stylesheet.
    pub fn stylesheet_path(&self) -> PathBuf {
        let file = self
            .stylesheet_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.stylesheet_file_name()));
        self.config.sprite_stylesheets_path.join(file)
    }

    /// Output file for the SCSS companion, relative to the working directory.
    pub fn scss_path(&self) -> PathBuf {
        PathBuf::from(self.scss_file_name())
    }

    /// URL the stylesheet uses for `background`.
    pub fn background_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => join_url(&self.config.sprite_asset_path, &self.sprite_file_name()),
        }
    }

    /// Whether `configure` should discover pieces.
    ///
    /// An explicit `false` always wins; otherwise the global default decides.
    pub fn should_autoload(&self) -> bool {
        if self.autoload == Some(false) {
            false
        } else {
            self.config.autoload
        }
    }

    /// Snapshot of the state the piece renderer needs.
    pub fn style(&self) -> SheetStyle {
        SheetStyle {
            name: self.name.clone(),
            orientation: self.orientation(),
            css_prefix: self.css_prefix().to_string(),
            url: self.background_url(),
            pieces_root: self.config.sprite_pieces_path.clone(),
        }
    }

    // --- configuration ---

    /// Validate and apply options, then autoload if enabled.
    ///
    /// Nothing is applied unless every option is valid.
    pub fn configure(&mut self, options: &Options) -> Result<&mut Self> {
        self.configure_with(options, |_| Ok(()))
    }

    /// Like `configure`, then hand the sheet to `f` to declare pieces or
    /// further options.
    pub fn configure_with<F>(&mut self, options: &Options, f: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Sheet) -> Result<()>,
    {
        let parsed = parse_options(&self.name, options)?;
        for option in parsed {
            self.apply(option);
        }

        if self.should_autoload() {
            self.autoload_pieces();
        }

        f(&mut *self)?;

        Ok(self)
    }

    // --- pieces ---

    /// Add a piece to the sheet.
    ///
    /// Without a CSS class, the class is the file's base name with the
    /// extension stripped, e.g. `buttons/btn-black.png` becomes `btn-black`.
    pub fn sprite_piece(
        &mut self,
        path: impl Into<String>,
        css_class: Option<&str>,
        options: PieceOptions,
    ) -> &SpritePiece {
        let path = path.into();
        let css_class = match css_class {
            Some(class) => class.to_string(),
            None => default_css_class(&path),
        };
        self.pieces.add(path, css_class, options)
    }

    /// Declare every PNG under `<sprite_pieces_path>/<name>/` as a piece.
    ///
    /// Returns the number of pieces added.
    pub fn autoload_pieces(&mut self) -> usize {
        let dir = self.config.sprite_pieces_path.join(&self.name);
        let mut added = 0;

        for file in autoload::discover_pieces(&dir) {
            let (Some(file_name), Some(stem)) = (
                file.file_name().and_then(|n| n.to_str()),
                file.file_stem().and_then(|s| s.to_str()),
            ) else {
                continue;
            };

            let path = format!("{}/{}", self.name, file_name);
            let class = format!(".{}", stem);
            self.sprite_piece(path, Some(&class), PieceOptions::default());
            added += 1;
        }

        added
    }

    pub fn all_sprite_pieces(&self) -> &[SpritePiece] {
        self.pieces.all()
    }

    /// Source files of every piece, resolved against the pieces directory.
    pub fn all_sprite_piece_files(&self) -> Vec<PathBuf> {
        self.pieces.files(&self.config.sprite_pieces_path)
    }

    // --- output ---

    /// Write the stylesheet and its SCSS companion.
    ///
    /// Both files are fully overwritten. The sprite image itself is written
    /// by `write_image`.
    pub fn write_outputs(&self) -> Result<()> {
        let style = self.style();
        let layout = self.pieces.layout(&style)?;
        self.write_stylesheets(&layout, &style)
    }

    /// Composite the pieces and write the sprite image.
    ///
    /// Returns `false` without writing anything when the sheet has no pieces.
    pub fn write_image(&self) -> Result<bool> {
        if self.pieces.is_empty() {
            return Ok(false);
        }

        let style = self.style();
        let layout = self.pieces.layout(&style)?;
        self.write_composite(&layout, &style)?;
        Ok(true)
    }

    /// `write_image` followed by `write_outputs`, laying the pieces out once.
    ///
    /// Returns whether an image was written.
    pub fn write_all(&self) -> Result<bool> {
        let style = self.style();
        let layout = self.pieces.layout(&style)?;

        let wrote_image = !layout.is_empty();
        if wrote_image {
            self.write_composite(&layout, &style)?;
        }
        self.write_stylesheets(&layout, &style)?;

        Ok(wrote_image)
    }

    fn write_composite(&self, layout: &Layout, style: &SheetStyle) -> Result<()> {
        let img = self.pieces.render_image(layout, style)?;
        write_png(&self.name, &img, &self.path())
    }

    fn write_stylesheets(&self, layout: &Layout, style: &SheetStyle) -> Result<()> {
        let css = self.pieces.render_css(layout, style);
        write_text(&self.name, &self.stylesheet_path(), &css)?;

        let scss = self.pieces.render_scss(layout, style);
        write_text(&self.name, &self.scss_path(), &scss)
    }
}

fn replace_png_suffix(file_name: &str, replacement: &str) -> String {
    match file_name.strip_suffix("png") {
        Some(stem) => format!("{}{}", stem, replacement),
        None => file_name.to_string(),
    }
}

fn default_css_class(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
        .replace(['/', '\\'], "-")
}
