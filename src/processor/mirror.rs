use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::writer::write_file;

/// Copy `from` to `to` verbatim, creating `to`'s parent directories.
pub fn mirror(from: &Path, to: &Path) -> Result<()> {
    let content =
        std::fs::read(from).with_context(|| format!("Reading {}", from.display()))?;
    write_file(to, &content)?;
    debug!("Mirrored {} -> {}", from.display(), to.display());
    Ok(())
}
