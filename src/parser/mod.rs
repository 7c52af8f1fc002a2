//! Pulls structured values out of the files forge and suave-std give us.
//!
//! The `parse_*` / `scan_*` functions are pure; the `load_*` wrappers add the
//! file read and the path to the error.
pub mod artifact;
pub mod precompiles;

pub use artifact::{ArtifactError, parse_deployed_bytecode};
pub use precompiles::scan_precompile_names;

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::model::PrecompileNames;

pub fn load_deployed_bytecode(path: &Path) -> Result<String> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading artifact {}", path.display()))?;
    let bytecode = parse_deployed_bytecode(&json)
        .with_context(|| format!("Decoding artifact {}", path.display()))?;
    info!(
        "Extracted {} bytes of deployed bytecode from {}",
        bytecode.len() / 2,
        path.display()
    );
    Ok(bytecode)
}

pub fn load_precompile_names(path: &Path) -> Result<PrecompileNames> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    let names = scan_precompile_names(&source);
    info!("Found {} precompiles in {}", names.len(), path.display());
    Ok(names)
}
