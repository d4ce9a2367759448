//! Fetching LVGL sources and compiling the simulator.
//!
//! The build only runs on Linux with `cmake`, `git`, and `pkg-config`
//! available; otherwise it is skipped with a notice. Dependencies are
//! shallow-cloned at a fixed tag into `lvgl/.deps`, then `build.sh` drives
//! CMake. A failed build is reported but does not fail the run; a failed
//! clone does.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use lvweb_codegen::BUILD_SCRIPT_PATH;
use tracing::{info, warn};

use crate::config::{Config, Dependency, DEPENDENCIES, REQUIRED_TOOLS};
use crate::error::BuildError;

/// Why a build was not attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    NotLinux,
    MissingTools(Vec<&'static str>),
}

/// Check the host can build, without side effects.
pub fn preflight() -> Result<(), Skip> {
    if std::env::consts::OS != "linux" {
        return Err(Skip::NotLinux);
    }
    let missing = missing_tools(std::env::var_os("PATH").as_deref());
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Skip::MissingTools(missing))
    }
}

/// Fetch dependencies and run the build script when the host allows it.
pub fn maybe_build(config: &Config) -> Result<(), BuildError> {
    match preflight() {
        Err(Skip::NotLinux) => {
            info!("Build step skipped: not running on Linux.");
            return Ok(());
        }
        Err(Skip::MissingTools(missing)) => {
            info!("Build step skipped: missing tools {missing:?}");
            return Ok(());
        }
        Ok(()) => {}
    }

    for dep in DEPENDENCIES {
        ensure_repo(dep, &config.dependency_dir(dep))?;
    }

    let script = config.project_path(BUILD_SCRIPT_PATH);
    let mut build = Command::new("bash");
    build.arg(&script).current_dir(&config.lvgl_dir);
    match run(&mut build) {
        Ok(()) => info!("Build finished in {}", config.build_dir.display()),
        Err(e) => warn!("Build failed: {e}"),
    }
    Ok(())
}

/// Clone `dep` into `dest` unless it is already there.
///
/// Each URL is tried in turn. A partial checkout left by a failed attempt
/// is removed before the next one.
pub fn ensure_repo(dep: &Dependency, dest: &Path) -> Result<(), BuildError> {
    if dest.exists() {
        info!("[download] {} already present at {}", dep.name, dest.display());
        return Ok(());
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }

    for &url in dep.urls {
        info!("[download] cloning {} ({}) from {url}", dep.name, dep.tag);
        let mut clone = Command::new("git");
        clone
            .args(["clone", "--depth=1", "--branch", dep.tag, "--progress", url])
            .arg(dest);
        match run(&mut clone) {
            Ok(()) => return Ok(()),
            Err(e) => {
                warn!("[download] {e}");
                if dest.exists() {
                    fs::remove_dir_all(dest).map_err(|e| BuildError::io(dest, e))?;
                }
            }
        }
    }

    Err(BuildError::CloneFailed {
        name: dep.name.to_string(),
    })
}

fn run(command: &mut Command) -> Result<(), BuildError> {
    let line = describe(command);
    info!("[run] {line}");
    let status = command.status().map_err(|source| BuildError::Spawn {
        command: line.clone(),
        source,
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(BuildError::Command {
            command: line,
            status,
        })
    }
}

/// Render a command the way it would be typed in a shell.
fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Required tools not found on the given `PATH` value.
fn missing_tools(path_var: Option<&OsStr>) -> Vec<&'static str> {
    REQUIRED_TOOLS
        .iter()
        .copied()
        .filter(|tool| find_tool(tool, path_var).is_none())
        .collect()
}

/// Locate an executable on a `PATH`-style list of directories.
pub fn find_tool(tool: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    let path_var = path_var?;
    std::env::split_paths(path_var)
        .map(|dir| dir.join(tool))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
