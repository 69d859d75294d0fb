use crate::error::{FameError, Result};
use gix::discover;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of blaming a single file. A failed invocation carries the
/// reason and is skipped at the call site; it never aborts the scan.
#[derive(Debug)]
pub enum BlameOutcome {
    Stream(String),
    Failed(String),
}

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List tracked file paths, one per line, in the order git reports them.
    pub fn list_files(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .arg("ls-files")
            .current_dir(&self.path)
            .output()?;

        if !output.status.success() {
            return Err(FameError::GitCommand(format!(
                "git ls-files: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect())
    }

    /// Blame one file in line-porcelain format. Binary files, paths deleted
    /// from the working tree, and permission errors all surface as `Failed`.
    pub fn blame_file(&self, file: &str, ignore_whitespace: bool) -> BlameOutcome {
        let mut cmd = Command::new("git");
        cmd.args(["blame", "--line-porcelain"]).current_dir(&self.path);
        if ignore_whitespace {
            cmd.arg("-w");
        }
        cmd.args(["--", file]);

        match cmd.output() {
            Ok(output) if output.status.success() => {
                BlameOutcome::Stream(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => BlameOutcome::Failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ),
            Err(err) => BlameOutcome::Failed(err.to_string()),
        }
    }

    /// Per-author commit counts. The ref is explicit because shortlog reads
    /// from stdin when no revision is given and stdin is not a tty.
    pub fn shortlog(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["shortlog", "-s", "-e", "HEAD"])
            .current_dir(&self.path)
            .output()?;

        if !output.status.success() {
            return Err(FameError::GitCommand(format!(
                "git shortlog: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
