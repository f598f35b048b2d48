//! Working-directory scaffold for downstream pipeline runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;

/// Fixed subfolder manifest, relative to `<project_dir>/wd`.
const WD_SUBFOLDERS: [&[&str]; 8] = [
    &["proc"],
    &["results"],
    &["log"],
    &["rsrc"],
    &["log", "cluster_jobs", "err"],
    &["log", "cluster_jobs", "out"],
    &["global_ref"],
    &["local_ref"],
];

/// Create the working-directory hierarchy under `<project_dir>/wd`.
///
/// Idempotent: existing directories are left as-is, intermediates are
/// created as needed. Only OS-level failures propagate.
pub fn create_wd_folders(project_dir: &Path) -> Result<(), AppError> {
    info!("Creating working directory structure");
    let wd_toplevel = project_dir.join("wd");
    fs::create_dir_all(&wd_toplevel)?;

    for components in WD_SUBFOLDERS {
        let full_path: PathBuf =
            components.iter().fold(wd_toplevel.clone(), |path, part| path.join(part));
        info!("Creating path {}", full_path.display());
        fs::create_dir_all(&full_path)?;
    }

    Ok(())
}
