//! Global build configuration.
//!
//! Holds the filesystem roots and defaults every sprite sheet consults.
//! Sheets only ever read it; the registry shares one instance across all
//! of its sheets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Filesystem roots and global defaults for a sprite build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Directory the composite sprite images are written to.
    pub sprites_path: PathBuf,

    /// Directory the generated stylesheets are written to.
    pub sprite_stylesheets_path: PathBuf,

    /// URL prefix under which the sprite images are served.
    pub sprite_asset_path: String,

    /// Directory sprite piece paths are relative to.
    pub sprite_pieces_path: PathBuf,

    /// Whether sheets without an explicit `autoload` option discover pieces.
    pub autoload: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            sprites_path: PathBuf::from("public/images/sprites"),
            sprite_stylesheets_path: PathBuf::from("public/stylesheets"),
            sprite_asset_path: "/images/sprites".to_string(),
            sprite_pieces_path: PathBuf::from("sprite_pieces"),
            autoload: false,
        }
    }
}

impl Configuration {
    /// Resolve relative directories against a project root.
    ///
    /// Absolute paths are kept as they are. The asset path is a URL and
    /// is never touched.
    pub fn with_root(mut self, root: &Path) -> Self {
        self.sprites_path = resolve(root, &self.sprites_path);
        self.sprite_stylesheets_path = resolve(root, &self.sprite_stylesheets_path);
        self.sprite_pieces_path = resolve(root, &self.sprite_pieces_path);
        self
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Join a URL prefix and a file name with exactly one `/` between them.
pub fn join_url(base: &str, file: &str) -> String {
    if base.is_empty() {
        return file.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();

        assert_eq!(config.sprites_path, PathBuf::from("public/images/sprites"));
        assert_eq!(config.sprite_stylesheets_path, PathBuf::from("public/stylesheets"));
        assert_eq!(config.sprite_asset_path, "/images/sprites");
        assert_eq!(config.sprite_pieces_path, PathBuf::from("sprite_pieces"));
        assert!(!config.autoload);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Configuration = serde_yaml::from_str("autoload: true").unwrap();

        assert!(config.autoload);
        assert_eq!(config.sprite_asset_path, "/images/sprites");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Configuration, _> =
            serde_yaml::from_str("sprite_path: nope");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_root() {
        let config = Configuration {
            sprites_path: PathBuf::from("/abs/sprites"),
            ..Default::default()
        }
        .with_root(Path::new("/project"));

        assert_eq!(config.sprites_path, PathBuf::from("/abs/sprites"));
        assert_eq!(
            config.sprite_stylesheets_path,
            PathBuf::from("/project/public/stylesheets")
        );
        assert_eq!(config.sprite_pieces_path, PathBuf::from("/project/sprite_pieces"));
        assert_eq!(config.sprite_asset_path, "/images/sprites");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/images/sprites", "foo.png"), "/images/sprites/foo.png");
        assert_eq!(join_url("/images/sprites/", "foo.png"), "/images/sprites/foo.png");
        assert_eq!(join_url("", "foo.png"), "foo.png");
        assert_eq!(
            join_url("https://cdn.example.com/s", "foo.png"),
            "https://cdn.example.com/s/foo.png"
        );
    }
}
