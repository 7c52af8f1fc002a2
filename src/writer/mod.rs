pub mod registry;

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Mode for every file we write.
pub const FILE_MODE: u32 = 0o644;
/// Mode for directories we create.
pub const DIR_MODE: u32 = 0o755;

/// Where the generated registry ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn emit(&self, text: &str) -> Result<()> {
        match self {
            Sink::Stdout => {
                write_out(&mut io::stdout().lock(), text).with_context(|| "Writing to stdout")
            }
            Sink::File(path) => {
                write_file(path, text.as_bytes())?;
                info!("Wrote {}", path.display());
                Ok(())
            }
        }
    }
}

/// A closed stdout (`forge-gen | head`) comes back as an error.
fn write_out(out: &mut impl io::Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Write `content` to `path`, creating parent directories first.
/// An existing file is overwritten.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dirs(dir).with_context(|| format!("Creating {}", dir.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Writing {}", path.display()))?;
    set_mode(path, FILE_MODE).with_context(|| format!("Setting mode on {}", path.display()))?;
    Ok(())
}

#[cfg(unix)]
fn create_dirs(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dirs(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
