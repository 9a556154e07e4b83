//! Sheet options and the option table.
//!
//! `configure` receives untyped `Options`. Each entry is parsed through
//! `OPTION_TABLE` into a typed `SheetOption` before anything is applied.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteError};

/// Stacking axis for the pieces of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }

    /// Interpret an option value as an orientation.
    ///
    /// Accepts the names (any case) or the numeric codes 1 and 2.
    pub fn from_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Str(s) => match s.trim().to_lowercase().as_str() {
                "vertical" => Some(Orientation::Vertical),
                "horizontal" => Some(Orientation::Horizontal),
                _ => None,
            },
            OptionValue::Int(1) => Some(Orientation::Vertical),
            OptionValue::Int(2) => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An untyped option value, as written in a manifest or passed in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Str(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<Orientation> for OptionValue {
    fn from(value: Orientation) -> Self {
        OptionValue::Str(value.as_str().to_string())
    }
}

/// Untyped options keyed by option name.
pub type Options = BTreeMap<String, OptionValue>;

/// Build an `Options` map from key/value pairs.
pub fn options<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Options
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// A validated, typed sheet option.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetOption {
    Orientation(Orientation),
    Path(PathBuf),
    StylesheetPath(PathBuf),
    Url(String),
    Autoload(bool),
    CssPrefix(String),
}

type OptionParser = fn(&str, &str, &OptionValue) -> Result<SheetOption>;

/// Recognised option names and how each one is parsed.
pub const OPTION_TABLE: &[(&str, OptionParser)] = &[
    ("orientation", parse_orientation),
    ("path", parse_path),
    ("stylesheet_path", parse_stylesheet_path),
    ("url", parse_url),
    ("autoload", parse_autoload),
    ("css_prefix", parse_css_prefix),
];

/// Names of all recognised options.
pub fn supported_options() -> impl Iterator<Item = &'static str> {
    OPTION_TABLE.iter().map(|(name, _)| *name)
}

/// Parse one option for the named sheet.
pub fn parse_option(sheet: &str, key: &str, value: &OptionValue) -> Result<SheetOption> {
    let (_, parser) = OPTION_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .ok_or_else(|| SpriteError::InvalidConfigurationKey {
            sheet: sheet.to_string(),
            key: key.to_string(),
        })?;
    parser(sheet, key, value)
}

/// Parse a whole options map. Fails on the first bad entry.
pub fn parse_options(sheet: &str, options: &Options) -> Result<Vec<SheetOption>> {
    // Unknown keys are reported before any value errors
    if let Some(key) = options
        .keys()
        .find(|key| !supported_options().any(|name| name == key.as_str()))
    {
        return Err(SpriteError::InvalidConfigurationKey {
            sheet: sheet.to_string(),
            key: key.clone(),
        });
    }

    options
        .iter()
        .map(|(key, value)| parse_option(sheet, key, value))
        .collect()
}

fn parse_orientation(sheet: &str, _key: &str, value: &OptionValue) -> Result<SheetOption> {
    Orientation::from_value(value)
        .map(SheetOption::Orientation)
        .ok_or_else(|| SpriteError::InvalidOrientation {
            sheet: sheet.to_string(),
            value: value.to_string(),
        })
}

fn parse_path(sheet: &str, key: &str, value: &OptionValue) -> Result<SheetOption> {
    expect_str(sheet, key, value).map(|s| SheetOption::Path(PathBuf::from(s)))
}

fn parse_stylesheet_path(sheet: &str, key: &str, value: &OptionValue) -> Result<SheetOption> {
    expect_str(sheet, key, value).map(|s| SheetOption::StylesheetPath(PathBuf::from(s)))
}

fn parse_url(sheet: &str, key: &str, value: &OptionValue) -> Result<SheetOption> {
    expect_str(sheet, key, value).map(SheetOption::Url)
}

fn parse_css_prefix(sheet: &str, key: &str, value: &OptionValue) -> Result<SheetOption> {
    expect_str(sheet, key, value).map(SheetOption::CssPrefix)
}

fn parse_autoload(sheet: &str, key: &str, value: &OptionValue) -> Result<SheetOption> {
    match value {
        OptionValue::Bool(b) => Ok(SheetOption::Autoload(*b)),
        _ => Err(SpriteError::InvalidOptionValue {
            sheet: sheet.to_string(),
            key: key.to_string(),
            expected: "a boolean",
        }),
    }
}

fn expect_str(sheet: &str, key: &str, value: &OptionValue) -> Result<String> {
    match value {
        OptionValue::Str(s) => Ok(s.clone()),
        _ => Err(SpriteError::InvalidOptionValue {
            sheet: sheet.to_string(),
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_value() {
        assert_eq!(
            Orientation::from_value(&"vertical".into()),
            Some(Orientation::Vertical)
        );
        assert_eq!(
            Orientation::from_value(&"Horizontal".into()),
            Some(Orientation::Horizontal)
        );
        assert_eq!(Orientation::from_value(&OptionValue::Int(1)), Some(Orientation::Vertical));
        assert_eq!(Orientation::from_value(&OptionValue::Int(2)), Some(Orientation::Horizontal));
        assert_eq!(Orientation::from_value(&OptionValue::Int(3)), None);
        assert_eq!(Orientation::from_value(&"diagonal".into()), None);
        assert_eq!(Orientation::from_value(&true.into()), None);
    }

    #[test]
    fn test_supported_options() {
        let names: Vec<&str> = supported_options().collect();
        assert_eq!(
            names,
            vec!["orientation", "path", "stylesheet_path", "url", "autoload", "css_prefix"]
        );
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(
            parse_option("foo", "autoload", &false.into()).unwrap(),
            SheetOption::Autoload(false)
        );
        assert_eq!(
            parse_option("foo", "path", &"out/foo.png".into()).unwrap(),
            SheetOption::Path(PathBuf::from("out/foo.png"))
        );
    }

    #[test]
    fn test_parse_option_unknown_key() {
        let err = parse_option("foo", "colour", &"red".into()).unwrap_err();
        match err {
            SpriteError::InvalidConfigurationKey { sheet, key } => {
                assert_eq!(sheet, "foo");
                assert_eq!(key, "colour");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_option_wrong_type() {
        let err = parse_option("foo", "url", &OptionValue::Int(3)).unwrap_err();
        assert!(matches!(
            err,
            SpriteError::InvalidOptionValue { expected: "a string", .. }
        ));

        let err = parse_option("foo", "autoload", &"yes".into()).unwrap_err();
        assert!(matches!(
            err,
            SpriteError::InvalidOptionValue { expected: "a boolean", .. }
        ));
    }

    #[test]
    fn test_parse_options_reports_unknown_key_first() {
        let opts = options([
            ("orientation", OptionValue::from("sideways")),
            ("zzz", OptionValue::from(1i64)),
        ]);
        let err = parse_options("foo", &opts).unwrap_err();
        assert!(matches!(err, SpriteError::InvalidConfigurationKey { key, .. } if key == "zzz"));
    }

    #[test]
    fn test_option_value_yaml() {
        let opts: Options =
            serde_yaml::from_str("orientation: horizontal\nautoload: false\nx: 2").unwrap();
        assert_eq!(opts["orientation"], OptionValue::from("horizontal"));
        assert_eq!(opts["autoload"], OptionValue::Bool(false));
        assert_eq!(opts["x"], OptionValue::Int(2));
    }
}
