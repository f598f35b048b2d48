//! wfinit: bootstrap a workflow checkout — Conda environment provisioning
//! and working-directory scaffolding for later pipeline runs.

pub mod error;
pub mod locations;
pub mod logging;
pub mod provision;
pub mod workdirs;

use tracing::info;

pub use error::AppError;
pub use locations::Locations;

/// Invocation options parsed from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Verbose console logging.
    pub debug: bool,
    /// Dev environment only: no working-directory tree, no `init.log`.
    pub dev_only: bool,
}

/// Run the full bootstrap sequence.
///
/// Resolves the checkout layout, initializes logging, provisions the Conda
/// environment, and (outside dev-only mode) scaffolds the working
/// directories.
pub fn run(options: Options) -> Result<(), AppError> {
    let locations = Locations::resolve()?;
    let log_file =
        logging::init_logging(locations.project_dir(), options.debug, options.dev_only)?;

    info!("Repository location: {}", locations.repo_dir().display());
    info!("Project directory: {}", locations.project_dir().display());
    info!("Log file location: {}", log_file.display());

    provision::create_execution_environment(&locations, options.dev_only)?;

    if !options.dev_only {
        workdirs::create_wd_folders(locations.project_dir())?;
    }

    Ok(())
}
