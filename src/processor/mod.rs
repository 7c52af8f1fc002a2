//! Compiles the helper contracts and reads their bytecode back.
pub mod mirror;

use anyhow::{Context, Result};
use log::info;

use crate::model::{BytecodePair, Layout};
use crate::parser;
use crate::toolchain::{self, Toolchain};

/// Mirror the sources, run `forge build`, and extract both bytecodes.
pub fn run(layout: &Layout, tool: &dyn Toolchain) -> Result<BytecodePair> {
    for (from, to) in layout.mirrored_sources() {
        mirror::mirror(&from, &to)?;
    }

    let config = layout.foundry_config();
    info!("Building helper contracts with {}", config.display());
    toolchain::build(tool, &config).with_context(|| "Compiling helper contracts")?;

    Ok(BytecodePair {
        connector: parser::load_deployed_bytecode(&layout.connector_artifact())?,
        confidential: parser::load_deployed_bytecode(&layout.confidential_artifact())?,
    })
}
