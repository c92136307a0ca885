use crate::domain::command::CommandOutput;
use crate::domain::error::{LiberateError, LiberateResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs the external bridge tool
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the tool with `args` and capture both streams and the exit code.
    /// A non-zero exit is not an error at this level.
    async fn run(&self, args: &[String]) -> LiberateResult<CommandOutput>;

    /// Human-readable command line, used in error messages
    fn describe(&self, args: &[String]) -> String;

    /// Like [`CommandRunner::run`], but a non-zero exit becomes
    /// [`LiberateError::CommandExecutionFailed`]
    async fn run_checked(&self, args: &[String]) -> LiberateResult<CommandOutput> {
        let output = self.run(args).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(LiberateError::CommandExecutionFailed {
                command: self.describe(args),
                output,
            })
        }
    }
}

/// Runs the tool as a child process
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, args: &[String]) -> LiberateResult<CommandOutput> {
        // `output()` owns both pipes and drops them once the child exits,
        // including when reading fails.
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        let output = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        };

        debug!("{} Exit: {}", self.describe(args), output.exit_code);
        Ok(output)
    }

    fn describe(&self, args: &[String]) -> String {
        let program = self
            .program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string());

        std::iter::once(program)
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resolve the bridge executable, either an existing path or a name on PATH
pub fn locate_tool(name: &str) -> LiberateResult<PathBuf> {
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        if candidate.is_file() {
            return Ok(candidate.to_path_buf());
        }
    } else if let Ok(path) = which::which(name) {
        debug!("Resolved '{}' to {}", name, path.display());
        return Ok(path);
    }

    Err(LiberateError::ToolNotFound {
        tool: name.to_string(),
    })
}
