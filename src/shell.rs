use crate::command::PurgeCommand;
use crate::resolve_binary;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs a purge command and reports once it has finished.
///
/// An `Err` means that the command could not be started or that it finished
/// unsuccessfully. Implementations must not return before the command has exited.
pub trait CommandExecutor {
    fn execute(&mut self, command: &PurgeCommand) -> anyhow::Result<()>;
}

/// Executes commands through the host shell (`sh -c`).
#[derive(Debug, Default)]
pub struct ShellExecutor {
    shell: Option<PathBuf>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds `sh` in PATH, once per executor.
    fn shell(&mut self) -> anyhow::Result<PathBuf> {
        if let Some(shell) = &self.shell {
            return Ok(shell.clone());
        }
        let shell = resolve_binary(Path::new("sh"))
            .map_err(|error| anyhow::anyhow!("Cannot find `sh`: {:?}", error))?;
        log::debug!("Using shell {}", shell.display());
        self.shell = Some(shell.clone());
        Ok(shell)
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&mut self, command: &PurgeCommand) -> anyhow::Result<()> {
        let mut cmd = Command::new(self.shell()?);
        // Expansion of the wildcard is left to the shell.
        cmd.arg("-c").arg(command.as_str());
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        log::debug!("Running command {:?}", cmd);

        let status = cmd.status()?;
        if !status.success() {
            return Err(anyhow::anyhow!(
                "Command `{}` finished with an error ({})",
                command,
                status.code().unwrap_or(-1),
            ));
        }
        Ok(())
    }
}
