use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::configurations::Configurations;

fn remove_entry(entry: &DirEntry) -> Result<()> {
    let path = entry.path();
    let removal = if entry.file_type().is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };

    removal.with_context(|| format!("Failed to remove {}", path.display()))
}

/// Deletes what it can under `path`, children before parents, never
/// following links. Entries that resist removal are skipped.
fn remove_tree(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to inspect {}", path.display()))?;

    // Links and plain files are never followed or unlinked.
    if !metadata.is_dir() {
        bail!("{} is not a directory", path.display());
    }

    let mut failures = 0;

    for entry in WalkDir::new(path).contents_first(true) {
        let removal = entry
            .map_err(anyhow::Error::from)
            .and_then(|entry| remove_entry(&entry));

        if let Err(error) = removal {
            failures += 1;
            let error = format!("{error:#}");
            debug!(error = %error, "Left in place");
        }
    }

    if failures > 0 {
        bail!("{failures} entries under {} were left in place", path.display());
    }

    Ok(())
}

fn delete_path(path: &Path) {
    match remove_tree(path) {
        Ok(_) => debug!(path = %path.display(), "Removed"),
        Err(error) => {
            let error = format!("{error:#}");
            debug!(path = %path.display(), error = %error, "Skipped");
        }
    }
}

/// Removes every configured target, one attempt each, ignoring failures.
pub fn clean_with(configurations: &Configurations) {
    debug!(anchor = %configurations.anchor.display(), "Cleaning");

    for path in &configurations.targets {
        delete_path(path);
    }
}

pub fn clean() {
    match Configurations::from_executable() {
        Ok(configurations) => clean_with(&configurations),
        Err(error) => {
            let error = format!("{error:#}");
            debug!(error = %error, "Failed to resolve anchor");
        }
    }
}
