//! Thin wrapper around the external `forge` executable.
//!
//! The pipeline only ever needs one operation from the toolchain: run it with
//! some arguments, optionally feed it stdin, and get stdout back. Keeping that
//! behind [`Toolchain`] lets tests swap in a fake.

use std::env;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{name} command not found in PATH")]
    NotFound { name: String },

    #[error("{path} does not exist or is not executable")]
    NotExecutable { path: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error running {program} {args}: {status}, {stderr}")]
    Failed {
        program: String,
        args: String,
        status: ExitStatus,
        stderr: String,
    },
}

pub trait Toolchain {
    /// Run the tool with `args`. `stdin`, when given, is written to the child
    /// and the pipe closed; otherwise the child gets no stdin at all.
    fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<String, ToolError>;
}

/// `forge build --config-path <config>`. Stdout is not interesting; the
/// artifacts written under `out/` are.
pub fn build(tool: &dyn Toolchain, config: &Path) -> Result<(), ToolError> {
    let config = config.to_string_lossy();
    let stdout = tool.run(&["build", "--config-path", &config], None)?;
    debug!("forge build: {}", stdout.trim_end());
    Ok(())
}

/// `forge fmt --raw -`: format `source` read from stdin.
pub fn format(tool: &dyn Toolchain, source: &str) -> Result<String, ToolError> {
    tool.run(&["fmt", "--raw", "-"], Some(source))
}

/// The real executable, resolved once.
#[derive(Debug, Clone)]
pub struct Forge {
    program: PathBuf,
}

impl Forge {
    /// Resolve `name_or_path`. Anything containing a path separator is taken
    /// as an explicit path; a bare name is searched for on `PATH`.
    pub fn locate(name_or_path: &str) -> Result<Self, ToolError> {
        let candidate = Path::new(name_or_path);
        if candidate.components().count() > 1 {
            return if is_executable(candidate) {
                Ok(Self {
                    program: candidate.to_path_buf(),
                })
            } else {
                Err(ToolError::NotExecutable {
                    path: name_or_path.to_string(),
                })
            };
        }

        env::var_os("PATH")
            .and_then(|path| search_path(name_or_path, &path))
            .map(|program| Self { program })
            .ok_or_else(|| ToolError::NotFound {
                name: name_or_path.to_string(),
            })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

/// First executable `name` in the `PATH`-style list `path`. Empty entries are
/// skipped rather than read as the current directory.
fn search_path(name: &str, path: &OsStr) -> Option<PathBuf> {
    env::split_paths(path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|p| is_executable(p))
}

impl Toolchain for Forge {
    fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<String, ToolError> {
        let program = self.program.display().to_string();
        debug!("running {} {}", program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ToolError::Spawn {
                program: program.clone(),
                source,
            })?;

        // stdin is fed from its own thread while stdout/stderr are drained,
        // so neither side can block on a full pipe
        let pipe = child.stdin.take();
        let (output, written) = thread::scope(|s| {
            let writer = pipe
                .zip(stdin)
                .map(|(mut pipe, input)| s.spawn(move || pipe.write_all(input.as_bytes())));
            let output = child.wait_with_output();
            let written = match writer {
                Some(handle) => handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked"))),
                None => Ok(()),
            };
            (output, written)
        });

        let output = output.map_err(|source| ToolError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                program,
                args: args.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        // a child that exits cleanly without draining stdin closes the pipe early
        match written {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                return Err(ToolError::Spawn { program, source: e });
            }
            _ => {}
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
