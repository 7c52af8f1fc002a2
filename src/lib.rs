pub mod cli;
pub mod model;
pub mod parser;
pub mod processor;
pub mod toolchain;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use log::info;

use model::{Layout, RenderContext};
use toolchain::{Forge, Toolchain};
use writer::Sink;

pub fn run() -> anyhow::Result<()> {
    run_with(cli::Cli::parse())
}

/// Resolve forge first so a missing toolchain fails before any file is touched.
pub fn run_with(args: cli::Cli) -> anyhow::Result<()> {
    let forge = Forge::locate(&args.forge)?;
    info!("Using {}", forge.program().display());

    let layout = Layout::new(args.root.clone());
    let sink = if args.apply {
        Sink::File(layout.registry_out())
    } else {
        Sink::Stdout
    };

    generate(&layout, &forge, !args.no_fmt, &sink)
}

/// The whole pipeline against an arbitrary toolchain.
pub fn generate(
    layout: &Layout,
    tool: &dyn Toolchain,
    format: bool,
    sink: &Sink,
) -> anyhow::Result<()> {
    // 1. ── Compile helpers, read bytecode ─────────────────────────────
    let bytecodes =
        processor::run(layout, tool).with_context(|| "Getting forge wrapper bytecode")?;

    // 2. ── Scan precompiles ───────────────────────────────────────────
    let precompiles = parser::load_precompile_names(&layout.suave_lib())
        .with_context(|| "Getting precompile names")?;

    // 3. ── Render + format ────────────────────────────────────────────
    let rendered = writer::registry::render(&RenderContext::new(&bytecodes, &precompiles))
        .with_context(|| "Rendering registry template")?;
    let text = if format {
        toolchain::format(tool, &rendered).with_context(|| "Formatting registry")?
    } else {
        rendered
    };

    // 4. ── Write ──────────────────────────────────────────────────────
    sink.emit(&text).with_context(|| "Writing registry")?;

    Ok(())
}
