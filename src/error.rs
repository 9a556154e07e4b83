use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sprites operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    #[diagnostic(code(sprites::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sprites::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error in sprite '{sheet}' with {path}: {message}")]
    #[diagnostic(code(sprites::image))]
    Image {
        sheet: String,
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to write output of sprite '{sheet}' to {path}: {message}")]
    #[diagnostic(code(sprites::write))]
    Write {
        sheet: String,
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Sprite '{sheet}' is too large to lay out")]
    #[diagnostic(
        code(sprites::layout),
        help("The stacked pieces and their padding must fit in 4294967295 pixels")
    )]
    LayoutOverflow { sheet: String },

    #[error("Invalid orientation for sprite '{sheet}': {value}")]
    #[diagnostic(
        code(sprites::orientation),
        help("Use 'vertical' or 'horizontal'")
    )]
    InvalidOrientation { sheet: String, value: String },

    #[error("Unknown option '{key}' for sprite '{sheet}'")]
    #[diagnostic(
        code(sprites::option),
        help("Valid options: orientation, path, stylesheet_path, url, autoload, css_prefix")
    )]
    InvalidConfigurationKey { sheet: String, key: String },

    #[error("Invalid value for option '{key}' of sprite '{sheet}': expected {expected}")]
    #[diagnostic(code(sprites::option))]
    InvalidOptionValue {
        sheet: String,
        key: String,
        expected: &'static str,
    },

    #[error("Invalid sprite declaration: {message}")]
    #[diagnostic(
        code(sprites::declaration),
        help("Declare a sprite by name, by path, or as a mapping of 'source path' => 'stylesheet path'")
    )]
    InvalidDeclarationShape { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(sprites::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(sprites::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
