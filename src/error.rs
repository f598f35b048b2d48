use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Library-wide error type for wfinit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No Conda-compatible executable on `$PATH` in dev-only mode.
    #[error("No Conda executable available, cannot create dev env")]
    NoCondaExecutable,

    /// The environment-creation subprocess exited with a failure status.
    #[error("Could not create execution environment: `{tool} env create` exited with {status}")]
    EnvCreateFailed { tool: String, status: ExitStatus },
}
