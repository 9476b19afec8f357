//! Terraform subprocess phases

use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::config::tf;
use crate::error::{AviError, Result};

/// Trait for running external commands, allowing scripted doubles in tests
pub trait CommandRunner {
    /// Run argv in the working directory, blocking, with captured output
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<Output>;
}

/// Real command runner using std::process::Command
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<Output> {
        debug!("Running {} {:?} in {}", program, args, working_dir.display());
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()?;
        Ok(output)
    }
}

/// Outcome of a plan invocation that launched successfully
#[derive(Debug)]
pub struct PlanOutcome {
    /// Whether the plan subprocess exited with status zero
    pub success: bool,
    /// Captured standard error, decoded as UTF-8
    pub stderr: String,
}

/// Driver for the init and plan phases in one working directory
///
/// Terraform reads `main.tf` from the working directory; both phases block
/// until the subprocess exits, with no timeout.
pub struct TerraformCli<'a> {
    runner: &'a dyn CommandRunner,
    working_dir: PathBuf,
}

impl<'a> TerraformCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            working_dir: working_dir.into(),
        }
    }

    /// `terraform init`
    ///
    /// A binary that fails to launch and a non-zero exit are both errors; the
    /// caller aborts the run on either.
    pub fn init(&self) -> Result<()> {
        let output = self.runner.run(tf::BINARY, &["init"], &self.working_dir)?;
        if !output.status.success() {
            return Err(AviError::Subprocess(format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }

    /// `terraform plan -out=<path>`
    ///
    /// Launch failures are errors; the plan's own exit status is returned in
    /// the outcome for the caller to report.
    pub fn plan(&self, out_file: &Path) -> Result<PlanOutcome> {
        let out_arg = format!("-out={}", out_file.display());
        let output = self
            .runner
            .run(tf::BINARY, &["plan", &out_arg], &self.working_dir)?;
        Ok(PlanOutcome {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
