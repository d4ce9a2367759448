//! Project layout and build settings.
//!
//! Every path the CLI touches is resolved from one root directory: the
//! `LVWEB_ROOT` environment variable when set, otherwise the current
//! working directory.

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the project root.
pub const ROOT_ENV: &str = "LVWEB_ROOT";

/// Tools that must be on `PATH` before a native build is attempted.
pub const REQUIRED_TOOLS: &[&str] = &["cmake", "git", "pkg-config"];

/// An upstream repository cloned before building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub name: &'static str,
    /// Tried in order; the first successful clone wins.
    pub urls: &'static [&'static str],
    pub tag: &'static str,
}

/// LVGL v8.3.11 matches the lv_drivers master API; lv_drivers has no
/// matching release tag.
pub const DEPENDENCIES: &[Dependency] = &[
    Dependency {
        name: "lvgl",
        urls: &[
            "https://github.com/lvgl/lvgl.git",
            "https://github.com/lvgl/lvgl.git",
        ],
        tag: "v8.3.11",
    },
    Dependency {
        name: "lv_drivers",
        urls: &[
            "https://github.com/lvgl/lv_drivers.git",
            "https://github.com/lvgl/lv_drivers.git",
        ],
        tag: "master",
    },
];

/// Resolved project paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    /// Source page: `index.html` and `js/app.js`.
    pub web_dir: PathBuf,
    /// Generated LVGL project.
    pub lvgl_dir: PathBuf,
    pub deps_dir: PathBuf,
    pub generated_dir: PathBuf,
    pub build_dir: PathBuf,
}

impl Config {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let web_dir = root.join("web");
        let lvgl_dir = root.join("lvgl");
        Self {
            deps_dir: lvgl_dir.join(".deps"),
            generated_dir: lvgl_dir.join("generated"),
            build_dir: lvgl_dir.join("build"),
            root,
            web_dir,
            lvgl_dir,
        }
    }

    /// Resolve the root from `LVWEB_ROOT`, falling back to the working
    /// directory.
    pub fn from_env() -> io::Result<Self> {
        match std::env::var_os(ROOT_ENV) {
            Some(root) if !root.is_empty() => Ok(Self::from_root(root)),
            _ => Ok(Self::from_root(std::env::current_dir()?)),
        }
    }

    pub fn html_path(&self) -> PathBuf {
        self.web_dir.join("index.html")
    }

    pub fn script_path(&self) -> PathBuf {
        self.web_dir.join("js").join("app.js")
    }

    /// Copy of the source page kept next to the generated project.
    pub fn snapshot_dir(&self) -> PathBuf {
        self.lvgl_dir.join("web_snapshot")
    }

    pub fn dependency_dir(&self, dep: &Dependency) -> PathBuf {
        self.deps_dir.join(dep.name)
    }

    /// Resolve a path relative to the LVGL project directory.
    pub fn project_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.lvgl_dir.join(relative)
    }
}
