//! Sheet registry.
//!
//! The registry is the single store of named sheets for one build. Looking up
//! a name that has not been seen yet creates the sheet, so there is exactly
//! one `Sheet` per name for the registry's lifetime.
//!
//! # Example
//!
//! ```ignore
//! use sprites::registry::SheetRegistry;
//! use sprites::sheet::options;
//!
//! let mut registry = SheetRegistry::new(config);
//! registry.declare_with("images/buttons.png", &options([("css_prefix", "div")]), |sheet| {
//!     sheet.sprite_piece("buttons/ok.png", Some(".ok"), Default::default());
//!     Ok(())
//! })?;
//!
//! for sheet in registry.sheets() {
//!     sheet.write_outputs()?;
//! }
//! ```

mod declaration;

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Configuration;
use crate::error::Result;
use crate::sheet::{Options, Sheet};

pub use declaration::{Declaration, DeclarationKey};

/// Name-keyed store of sprite sheets.
///
/// Sheets are handed out as `&mut Sheet`. Callers that want to configure
/// sheets from several threads must put the registry behind their own lock.
#[derive(Debug)]
pub struct SheetRegistry {
    config: Arc<Configuration>,
    sheets: HashMap<String, Sheet>,
}

impl Default for SheetRegistry {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl SheetRegistry {
    /// Create an empty registry sharing `config` with every sheet.
    pub fn new(config: Configuration) -> Self {
        Self {
            config: Arc::new(config),
            sheets: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get the sheet called `name`, creating it with defaults if needed.
    pub fn get(&mut self, name: &str) -> &mut Sheet {
        let config = &self.config;
        self.sheets
            .entry(name.to_string())
            .or_insert_with(|| Sheet::new(name, Arc::clone(config)))
    }

    /// Look up a sheet without creating it.
    pub fn find(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    /// Declare a sheet and apply options to it.
    ///
    /// Options carried by a mapping declaration are applied together with
    /// `options`; on conflicts `options` wins.
    pub fn declare(
        &mut self,
        declaration: impl Into<Declaration>,
        options: &Options,
    ) -> Result<&mut Sheet> {
        self.declare_with(declaration, options, |_| Ok(()))
    }

    /// Declare a sheet, apply options, then hand it to `f`.
    pub fn declare_with<F>(
        &mut self,
        declaration: impl Into<Declaration>,
        options: &Options,
        f: F,
    ) -> Result<&mut Sheet>
    where
        F: FnOnce(&mut Sheet) -> Result<()>,
    {
        let declaration = declaration.into();
        let name = declaration.name()?;

        let mut merged = declaration.options();
        merged.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));

        self.get(&name).configure_with(&merged, f)
    }

    /// Drop every sheet. Files already written are left alone.
    pub fn clear(&mut self) {
        self.sheets.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn count(&self) -> usize {
        self.sheets.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// All sheet names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sheets.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// All sheets, sorted by name.
    pub fn sheets(&self) -> Vec<&Sheet> {
        let mut sheets: Vec<&Sheet> = self.sheets.values().collect();
        sheets.sort_by(|a, b| a.name().cmp(b.name()));
        sheets
    }

    /// All sheets, mutably, sorted by name.
    pub fn sheets_mut(&mut self) -> Vec<&mut Sheet> {
        let mut sheets: Vec<&mut Sheet> = self.sheets.values_mut().collect();
        sheets.sort_by(|a, b| a.name().cmp(b.name()));
        sheets
    }
}
