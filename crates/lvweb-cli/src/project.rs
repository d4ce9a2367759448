//! Writing the LVGL project to disk.

use std::fs;
use std::path::{Path, PathBuf};

use lvweb_codegen::{ScaffoldFile, SCAFFOLD_FILES, UI_SOURCE_PATH};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::BuildError;

/// Generate the complete LVGL project from the web page.
///
/// Creates the project directories, writes the static scaffold files and
/// the translated `generated/ui_app.c`, then mirrors the web directory
/// into `web_snapshot`. Returns the path of the generated UI source.
pub fn generate_project(config: &Config) -> Result<PathBuf, BuildError> {
    ensure_dirs(config)?;

    for file in SCAFFOLD_FILES {
        write_scaffold_file(config, file)?;
    }

    let html = read_input(&config.html_path())?.unwrap_or_else(|| {
        warn!(path = %config.html_path().display(), "page not found, using empty page");
        String::new()
    });
    let script = read_input(&config.script_path())?;
    if script.is_none() {
        debug!(path = %config.script_path().display(), "no script, messages disabled");
    }

    let ui_path = config.project_path(UI_SOURCE_PATH);
    write_file(&ui_path, &lvweb_codegen::ui_source(&html, script.as_deref()))?;
    info!("Generated {}", ui_path.display());

    copy_web_snapshot(config)?;
    Ok(ui_path)
}

fn ensure_dirs(config: &Config) -> Result<(), BuildError> {
    for dir in [
        &config.lvgl_dir,
        &config.deps_dir,
        &config.generated_dir,
        &config.build_dir,
    ] {
        fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))?;
    }
    Ok(())
}

fn write_scaffold_file(config: &Config, file: &ScaffoldFile) -> Result<(), BuildError> {
    let path = config.project_path(file.path);
    write_file(&path, file.contents)?;
    if file.executable {
        make_executable(&path)?;
    }
    debug!(path = %path.display(), "wrote scaffold file");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| BuildError::io(path, e))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), BuildError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| BuildError::io(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), BuildError> {
    Ok(())
}

/// Read an input file as UTF-8, dropping invalid byte sequences.
///
/// A missing file is `Ok(None)`; any other read failure is an error.
pub fn read_input(path: &Path) -> Result<Option<String>, BuildError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(decode_lossy(&bytes))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(BuildError::io(path, e)),
    }
}

fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Replace `web_snapshot` with a fresh copy of the web directory.
fn copy_web_snapshot(config: &Config) -> Result<(), BuildError> {
    let snapshot = config.snapshot_dir();
    if snapshot.exists() {
        fs::remove_dir_all(&snapshot).map_err(|e| BuildError::io(&snapshot, e))?;
    }
    if !config.web_dir.is_dir() {
        warn!(path = %config.web_dir.display(), "web directory missing, no snapshot taken");
        return Ok(());
    }
    copy_dir(&config.web_dir, &snapshot)
}

/// Mirror `from` into `to`. Symlinks are followed, so linked files and
/// directories are copied by content; a link cycle is an error.
fn copy_dir(from: &Path, to: &Path) -> Result<(), BuildError> {
    for entry in WalkDir::new(from).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(from).to_path_buf();
            BuildError::io(path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| BuildError::io(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| BuildError::io(entry.path(), e))?;
        }
    }
    debug!(from = %from.display(), to = %to.display(), "mirrored web directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const PAGE: &str = "<h1>Counter</h1><p>zero</p><button>Next</button>";
    const SCRIPT: &str = "const messages = [\"one\", \"two\"];";

    fn project_with_page(script: Option<&str>) -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let config = Config::from_root(dir.path());
        fs::create_dir_all(config.web_dir.join("js")).unwrap();
        fs::write(config.html_path(), PAGE).unwrap();
        if let Some(script) = script {
            fs::write(config.script_path(), script).unwrap();
        }
        (dir, config)
    }

    // =========================================================================
    // Project layout
    // =========================================================================

    #[test]
    fn test_writes_every_scaffold_file() {
        let (_dir, config) = project_with_page(Some(SCRIPT));
        generate_project(&config).unwrap();
        for file in SCAFFOLD_FILES {
            let written = fs::read_to_string(config.project_path(file.path)).unwrap();
            assert_eq!(written, file.contents, "{}", file.path);
        }
    }

    #[test]
    fn test_creates_project_dirs() {
        let (_dir, config) = project_with_page(None);
        generate_project(&config).unwrap();
        assert!(config.deps_dir.is_dir());
        assert!(config.generated_dir.is_dir());
        assert!(config.build_dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, config) = project_with_page(None);
        generate_project(&config).unwrap();
        let mode = fs::metadata(config.project_path(lvweb_codegen::BUILD_SCRIPT_PATH))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    // =========================================================================
    // Generated UI source
    // =========================================================================

    #[test]
    fn test_ui_source_matches_translation() {
        let (_dir, config) = project_with_page(Some(SCRIPT));
        let path = generate_project(&config).unwrap();
        assert_eq!(path, config.project_path(UI_SOURCE_PATH));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, lvweb_codegen::ui_source(PAGE, Some(SCRIPT)));
        assert!(written.contains("\"one\""));
    }

    #[test]
    fn test_missing_script_disables_messages() {
        let (_dir, config) = project_with_page(None);
        let path = generate_project(&config).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(!written.contains("messages[]"));
    }

    #[test]
    fn test_missing_page_uses_placeholder() {
        let dir = TempDir::new().unwrap();
        let config = Config::from_root(dir.path());
        let path = generate_project(&config).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("\"(empty)\""));
        assert!(!config.snapshot_dir().exists());
    }

    #[test]
    fn test_regeneration_is_identical() {
        let (_dir, config) = project_with_page(Some(SCRIPT));
        let path = generate_project(&config).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        generate_project(&config).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    // =========================================================================
    // Input decoding
    // =========================================================================

    #[test]
    fn test_invalid_utf8_is_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, b"<p>ab\xffcd</p>").unwrap();
        assert_eq!(read_input(&path).unwrap().as_deref(), Some("<p>abcd</p>"));
    }

    #[test]
    fn test_missing_input_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_input(&dir.path().join("absent.js")).unwrap(), None);
    }

    // =========================================================================
    // Web snapshot
    // =========================================================================

    #[test]
    fn test_snapshot_mirrors_web_dir() {
        let (_dir, config) = project_with_page(Some(SCRIPT));
        generate_project(&config).unwrap();
        let snapshot = config.snapshot_dir();
        assert_eq!(fs::read_to_string(snapshot.join("index.html")).unwrap(), PAGE);
        assert_eq!(
            fs::read_to_string(snapshot.join("js").join("app.js")).unwrap(),
            SCRIPT
        );
    }

    #[test]
    fn test_snapshot_copies_nested_dirs() {
        let (_dir, config) = project_with_page(None);
        let assets = config.web_dir.join("assets").join("img");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("logo.svg"), "<svg/>").unwrap();
        fs::create_dir_all(config.web_dir.join("empty")).unwrap();
        generate_project(&config).unwrap();
        let snapshot = config.snapshot_dir();
        assert_eq!(
            fs::read_to_string(snapshot.join("assets").join("img").join("logo.svg")).unwrap(),
            "<svg/>"
        );
        assert!(snapshot.join("empty").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_snapshot_follows_linked_dirs() {
        let (dir, config) = project_with_page(None);
        let shared = dir.path().join("shared");
        fs::create_dir_all(&shared).unwrap();
        fs::write(shared.join("theme.css"), "p {}").unwrap();
        std::os::unix::fs::symlink(&shared, config.web_dir.join("theme")).unwrap();
        generate_project(&config).unwrap();
        let linked = config.snapshot_dir().join("theme");
        assert!(!fs::symlink_metadata(&linked).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(linked.join("theme.css")).unwrap(), "p {}");
    }

    #[test]
    fn test_snapshot_replaces_stale_files() {
        let (_dir, config) = project_with_page(None);
        let snapshot = config.snapshot_dir();
        fs::create_dir_all(&snapshot).unwrap();
        fs::write(snapshot.join("stale.txt"), "old").unwrap();
        generate_project(&config).unwrap();
        assert!(!snapshot.join("stale.txt").exists());
        assert!(snapshot.join("index.html").exists());
    }
}
