//! Conda environment provisioning via an external package manager.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, error, info, warn};

use crate::error::AppError;
use crate::locations::Locations;

/// Candidate executables, probed in preference order.
pub const CANDIDATE_TOOLS: [&str; 2] = ["mamba", "conda"];

/// Outcome of probing one candidate executable.
enum Probe {
    Found,
    NotFound { reason: String },
}

/// Probe a candidate by running `<tool> --version` with output discarded.
///
/// A spawn failure (not on `$PATH`) and a non-zero exit are both reported
/// as `NotFound`; the caller decides whether that matters.
fn probe_tool(tool: &str) -> Probe {
    let result = Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match result {
        Ok(status) if status.success() => Probe::Found,
        Ok(status) => Probe::NotFound { reason: format!("exited with {status}") },
        Err(err) => Probe::NotFound { reason: err.to_string() },
    }
}

/// First candidate on `$PATH` that answers a version query, if any.
fn find_tool() -> Option<&'static str> {
    for tool in CANDIDATE_TOOLS {
        match probe_tool(tool) {
            Probe::Found => return Some(tool),
            Probe::NotFound { reason } => {
                warn!("Executable {tool} not available: {reason}");
            }
        }
    }
    None
}

/// Environment spec file and target prefix for the given mode.
fn env_paths(locations: &Locations, dev_only: bool) -> (PathBuf, PathBuf) {
    if dev_only {
        (
            locations.repo_dir().join("workflow/envs/dev_env.yaml"),
            locations.repo_dir().join("dev_env"),
        )
    } else {
        (
            locations.repo_dir().join("workflow/envs/exec_env.yaml"),
            locations.project_dir().join("exec_env"),
        )
    }
}

/// Create the Conda execution environment, if a usable tool is available.
///
/// A missing tool is fatal only in dev-only mode; in normal mode
/// provisioning is best-effort and skipped with a warning. A missing env
/// spec file and a failing `env create` invocation are always fatal.
pub fn create_execution_environment(
    locations: &Locations,
    dev_only: bool,
) -> Result<(), AppError> {
    let Some(tool) = find_tool() else {
        warn!("No executable available to create execution (conda) environment");
        if dev_only {
            return Err(AppError::NoCondaExecutable);
        }
        return Ok(());
    };
    debug!("Found Conda executable {tool} - creating environment...");

    if dev_only {
        debug!("Development mode set, select \"dev_env.yaml\" file.");
    }
    let (yaml_file, env_prefix) = env_paths(locations, dev_only);
    // Resolve strictly before spawning anything.
    let yaml_file = match yaml_file.canonicalize() {
        Ok(path) => path,
        Err(err) => {
            error!("Environment spec file {} not resolvable: {err}", yaml_file.display());
            return Err(err.into());
        }
    };

    info!("Creating execution environment at location: {}", env_prefix.display());
    debug!("Setting up the execution environment may take a while...");

    let output = Command::new(tool)
        .args(["env", "create", "--quiet", "--force", "-f"])
        .arg(&yaml_file)
        .arg("-p")
        .arg(&env_prefix)
        .output()?;

    if !output.status.success() {
        error!(
            "Could not create execution environment: `{tool} env create` exited with {}",
            output.status
        );
        error!("\n=== STDOUT ===\n{}", String::from_utf8_lossy(&output.stdout));
        error!("\n=== STDERR ===\n{}", String::from_utf8_lossy(&output.stderr));
        return Err(AppError::EnvCreateFailed { tool: tool.to_string(), status: output.status });
    }

    Ok(())
}
