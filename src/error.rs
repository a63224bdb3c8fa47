// src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    /// One or both of the required paths are missing.
    #[error("invalid arguments: {}", .diagnostics.join("; "))]
    Validation { diagnostics: Vec<String> },

    /// The registration tool could not be started or its output pipe failed.
    #[error("could not run `{}`", .tool.display())]
    ProcessLaunch {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    pub fn launch(tool: impl Into<PathBuf>, source: io::Error) -> Self {
        InstallError::ProcessLaunch {
            tool: tool.into(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, InstallError::Validation { .. })
    }
}
