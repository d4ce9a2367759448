use std::path::PathBuf;
use std::process::ExitStatus;

/// A failure that aborts the run.
///
/// Translation itself never fails; only writing the project and fetching
/// dependencies can.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("All clone attempts failed for {name}")]
    CloneFailed { name: String },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Command { command: String, status: ExitStatus },
}

impl BuildError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
