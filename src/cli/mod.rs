pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::registry::SheetRegistry;

/// sprites - CSS sprite sheet generator
#[derive(Parser, Debug)]
#[command(name = "sprites")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write sprite images and stylesheets
    Build(build::BuildArgs),

    /// Check the manifest and every sprite piece without writing anything
    Validate(validate::ValidateArgs),

    /// List declared sprites and where their outputs go
    List(list::ListArgs),

    /// Initialize a sprites project (generates sprites.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Manifest location shared by the commands that read one.
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Path to the manifest
    #[arg(long, short, default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,
}

impl ManifestArgs {
    /// Directory relative output paths are resolved against.
    pub fn root(&self) -> PathBuf {
        match self.manifest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Load the manifest and declare all of its sheets.
    pub fn load_registry(&self) -> Result<SheetRegistry> {
        Manifest::load(&self.manifest)?.into_registry(&self.root())
    }
}
