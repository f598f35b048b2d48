//! Checkout layout resolution.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable overriding the executable-derived repository folder.
pub const REPO_DIR_ENV: &str = "WFINIT_REPO_DIR";

/// Resolved checkout layout: the repository folder and the project folder
/// one above it.
#[derive(Debug, Clone)]
pub struct Locations {
    repo_dir: PathBuf,
    project_dir: PathBuf,
}

impl Locations {
    /// Create a layout from already-resolved directories.
    pub fn new(repo_dir: PathBuf, project_dir: PathBuf) -> Self {
        Self { repo_dir, project_dir }
    }

    /// Resolve the layout from the running executable's location, or from
    /// `WFINIT_REPO_DIR` when set.
    ///
    /// Both directories must exist; canonicalization failure is fatal.
    pub fn resolve() -> Result<Self, AppError> {
        let repo_dir = match env::var_os(REPO_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let exe = env::current_exe()?;
                exe.parent()
                    .ok_or_else(|| {
                        io::Error::new(
                            io::ErrorKind::NotFound,
                            "executable has no containing directory",
                        )
                    })?
                    .to_path_buf()
            }
        };
        let repo_dir = repo_dir.canonicalize()?;
        let project_dir = repo_dir
            .parent()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "repository folder has no parent directory",
                )
            })?
            .canonicalize()?;

        Ok(Self { repo_dir, project_dir })
    }

    /// The repository checkout location.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// The project folder, one above the repository.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
}
