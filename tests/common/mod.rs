//! Shared testing utilities for wfinit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated checkout layout for CLI exercises.
///
/// Layout under a temp root:
///   project/                    project folder
///   project/repo/               repository folder (exported as WFINIT_REPO_DIR)
///   project/repo/workflow/envs/ env spec files
///   bin/                        stub package managers, becomes the whole PATH
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    repo_dir: PathBuf,
    project_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated checkout.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp directory for tests");
        let project_dir = root.path().join("project");
        let repo_dir = project_dir.join("repo");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(repo_dir.join("workflow/envs")).expect("create workflow/envs");
        fs::create_dir_all(&bin_dir).expect("create stub bin directory");

        Self { root, repo_dir, project_dir, bin_dir }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Write an environment spec file (`dev_env.yaml` or `exec_env.yaml`).
    pub fn write_env_spec(&self, name: &str) {
        let path = self.repo_dir.join("workflow/envs").join(name);
        fs::write(&path, "name: test-env\ndependencies: []\n").expect("write env spec");
    }

    /// Install a stub package manager that records its argv and succeeds.
    pub fn install_tool(&self, name: &str) {
        self.install_tool_with_exit(name, 0);
    }

    /// Install a stub package manager that records its argv, answers the
    /// `--version` probe with exit 0, and exits with `code` for anything
    /// else after printing canned stdout/stderr.
    pub fn install_tool_with_exit(&self, name: &str, code: i32) {
        let script = format!(
            "#!/bin/sh\n\
             echo \"$@\" >> \"{log}\"\n\
             if [ \"$1\" = \"--version\" ]; then exit 0; fi\n\
             echo 'stub out'\n\
             echo 'stub err' >&2\n\
             exit {code}\n",
            log = self.calls_path(name).display(),
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("write stub tool");

        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("stat stub tool").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod stub tool");
    }

    fn calls_path(&self, name: &str) -> PathBuf {
        self.root.path().join(format!("{name}.calls"))
    }

    /// Recorded invocations of a stub tool, one argv line each (empty if
    /// the tool was never called).
    pub fn recorded_calls(&self, name: &str) -> Vec<String> {
        match fs::read_to_string(self.calls_path(name)) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Build a command for the compiled `wfinit` binary inside this checkout.
    ///
    /// `PATH` contains only the stub bin directory, so the host's own
    /// conda/mamba can never leak into a test.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wfinit").expect("locate wfinit binary");
        cmd.env("WFINIT_REPO_DIR", &self.repo_dir).env("PATH", &self.bin_dir);
        cmd
    }

    /// Path to the scaffolded working directory.
    pub fn wd_path(&self) -> PathBuf {
        self.project_dir.join("wd")
    }

    /// Path to the persistent log file.
    pub fn log_path(&self) -> PathBuf {
        self.project_dir.join("init.log")
    }

    /// Assert that the complete working-directory scaffold exists.
    pub fn assert_wd_structure(&self) {
        for sub in [
            "proc",
            "results",
            "log",
            "rsrc",
            "log/cluster_jobs/err",
            "log/cluster_jobs/out",
            "global_ref",
            "local_ref",
        ] {
            assert!(self.wd_path().join(sub).is_dir(), "wd/{sub} should exist");
        }
    }

    /// Assert that no working directory was scaffolded.
    pub fn assert_no_wd(&self) {
        assert!(!self.wd_path().exists(), "wd/ should not exist");
    }
}
