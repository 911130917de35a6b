use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use strum::IntoEnumIterator;

use crate::targets::Target;

#[derive(Debug, Clone, PartialEq)]
pub struct Configurations {
    pub anchor: PathBuf,
    pub targets: Vec<PathBuf>,
}

impl Configurations {
    fn retrieve_executable_directory() -> Result<PathBuf> {
        let executable = env::current_exe().context("Failed to locate the running executable")?;
        let executable = executable
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", executable.display()))?;

        executable
            .parent()
            .map(Path::to_path_buf)
            .with_context(|| format!("{} has no parent directory", executable.display()))
    }

    pub fn new(anchor: impl Into<PathBuf>) -> Configurations {
        let anchor = anchor.into();
        let targets = Target::iter()
            .map(|target| target.resolve(&anchor))
            .collect();

        Configurations { anchor, targets }
    }

    /// Anchors on the directory holding the running binary, symlinks resolved.
    pub fn from_executable() -> Result<Configurations> {
        Ok(Configurations::new(
            Configurations::retrieve_executable_directory()?,
        ))
    }
}
