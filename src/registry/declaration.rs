//! Sheet declaration shapes.
//!
//! A sheet can be declared by bare name (`buttons`), by path
//! (`images/buttons.png`), or by a mapping whose path key names the sheet
//! (`{"images/buttons.png": "buttons.css"}`). Each shape has one naming rule.

use std::path::Path;

use serde_yaml::Value;

use crate::error::{Result, SpriteError};
use crate::sheet::{supported_options, OptionValue, Options};

/// Key of a mapping-style declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKey {
    /// A source path. The first one names the sheet.
    Path(String),
    /// An option name.
    Name(String),
}

/// The first argument of a sheet declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Name(String),
    Path(String),
    Mapping(Vec<(DeclarationKey, OptionValue)>),
}

impl Declaration {
    /// Classify a string: identifiers are names, anything else is a path.
    pub fn parse(s: &str) -> Self {
        if is_identifier(s) {
            Declaration::Name(s.to_string())
        } else {
            Declaration::Path(s.to_string())
        }
    }

    /// Classify a manifest value.
    ///
    /// Mapping keys that name a sheet option are option keys; every other
    /// key is a source path, so `{ buttons: buttons.css }` names `buttons`.
    pub fn from_yaml(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Declaration::parse(s)),
            Value::Mapping(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let key = key.as_str().ok_or_else(|| SpriteError::InvalidDeclarationShape {
                        message: format!("mapping key {:?} is not a string", key),
                    })?;
                    let value: OptionValue = serde_yaml::from_value(value.clone()).map_err(|_| {
                        SpriteError::InvalidDeclarationShape {
                            message: format!("value for '{}' must be a string, number or boolean", key),
                        }
                    })?;
                    let key = if is_option_name(key) {
                        DeclarationKey::Name(key.to_string())
                    } else {
                        DeclarationKey::Path(key.to_string())
                    };
                    entries.push((key, value));
                }
                Ok(Declaration::Mapping(entries))
            }
            other => Err(SpriteError::InvalidDeclarationShape {
                message: format!("expected a name, path or mapping, found {:?}", other),
            }),
        }
    }

    /// Derive the canonical sheet name.
    pub fn name(&self) -> Result<String> {
        let name = match self {
            Declaration::Name(name) => name.clone(),
            Declaration::Path(path) => base_name(path),
            Declaration::Mapping(entries) => {
                let path = entries
                    .iter()
                    .find_map(|(key, _)| match key {
                        DeclarationKey::Path(path) => Some(path),
                        DeclarationKey::Name(_) => None,
                    })
                    .ok_or_else(|| SpriteError::InvalidDeclarationShape {
                        message: "mapping has no source path key".to_string(),
                    })?;
                base_name(path)
            }
        };

        if name.is_empty() {
            return Err(SpriteError::InvalidDeclarationShape {
                message: format!("cannot derive a sprite name from {:?}", self),
            });
        }

        Ok(name)
    }

    /// Options carried by the declaration itself.
    ///
    /// In a mapping, the source path's value becomes `stylesheet_path` and
    /// every name key is passed through as an option.
    pub fn options(&self) -> Options {
        let Declaration::Mapping(entries) = self else {
            return Options::new();
        };

        let mut options = Options::new();
        let mut seen_path = false;
        for (key, value) in entries {
            match key {
                DeclarationKey::Path(_) if !seen_path => {
                    seen_path = true;
                    if let OptionValue::Str(stylesheet) = value {
                        options.insert(
                            "stylesheet_path".to_string(),
                            OptionValue::Str(stylesheet.clone()),
                        );
                    }
                }
                DeclarationKey::Path(_) => {}
                DeclarationKey::Name(name) => {
                    options.insert(name.clone(), value.clone());
                }
            }
        }
        options
    }
}

impl From<&str> for Declaration {
    fn from(s: &str) -> Self {
        Declaration::parse(s)
    }
}

impl From<String> for Declaration {
    fn from(s: String) -> Self {
        Declaration::parse(&s)
    }
}

impl From<&Path> for Declaration {
    fn from(path: &Path) -> Self {
        Declaration::Path(path.to_string_lossy().into_owned())
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn is_option_name(key: &str) -> bool {
    supported_options().any(|name| name == key)
}

/// File base name with the extension stripped.
fn base_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
