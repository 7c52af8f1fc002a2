use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Write the generated registry to src/forge/Registry.sol instead of stdout
    #[arg(long)]
    pub apply: bool,
    /// Root of the suave-std checkout
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// forge executable, either a name looked up on PATH or a path
    #[arg(long, env = "FORGE_BIN", default_value = "forge")]
    pub forge: String,
    /// Skip `forge fmt` and emit the raw rendering
    #[arg(long)]
    pub no_fmt: bool,
}
