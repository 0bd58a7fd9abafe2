use crate::cli::cli_format_command;
use crate::command::PurgeCommand;
use crate::shell::CommandExecutor;
use crate::utils::str::pluralize;
use colored::Colorize;
use std::fmt::Write as WriteFmt;
use std::io::Write;

/// What to do with commands that did not finish successfully.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Discard failures, the run always succeeds.
    #[default]
    Ignore,
    /// Run all commands, then fail if any of them failed.
    Report,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueueState {
    Pending,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct StepResult {
    pub command: PurgeCommand,
    pub outcome: StepOutcome,
}

/// Fixed sequence of commands, consumed front to back.
#[derive(Debug)]
pub struct PurgeQueue {
    commands: Vec<PurgeCommand>,
    next: usize,
}

impl PurgeQueue {
    pub fn new(commands: Vec<PurgeCommand>) -> Self {
        Self { commands, next: 0 }
    }

    /// Queue that removes the contents of the app directory and then of the git directory.
    pub fn from_dirs(app_dir: &str, git_dir: &str) -> Self {
        Self::new(vec![
            PurgeCommand::remove_prefix(app_dir),
            PurgeCommand::remove_prefix(git_dir),
        ])
    }

    pub fn state(&self) -> QueueState {
        if self.next < self.commands.len() {
            QueueState::Pending
        } else {
            QueueState::Done
        }
    }

    pub fn remaining(&self) -> &[PurgeCommand] {
        &self.commands[self.next..]
    }

    /// Prints the next command to `out`, executes it and waits for it to finish.
    /// Returns `None` once the queue is done.
    pub fn step<E: CommandExecutor, W: Write>(
        &mut self,
        executor: &mut E,
        out: &mut W,
    ) -> Option<StepResult> {
        let command = self.commands.get(self.next).cloned()?;

        // A closed stdout must not keep the command from running.
        if let Err(error) = writeln!(out, "{}", command).and_then(|_| out.flush()) {
            log::debug!("Cannot print {}: {:?}", cli_format_command(&command), error);
        }

        let outcome = match executor.execute(&command) {
            Ok(()) => StepOutcome::Succeeded,
            Err(error) => {
                log::debug!("{} failed: {:?}", cli_format_command(&command), error);
                StepOutcome::Failed(error.to_string())
            }
        };
        self.next += 1;

        Some(StepResult { command, outcome })
    }
}

#[derive(Debug, Default)]
pub struct PurgeReport {
    pub steps: Vec<StepResult>,
}

impl PurgeReport {
    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, StepOutcome::Failed(_)))
    }
}

/// Executes every command of the queue in order, then applies `policy` to the failures.
///
/// A failed command never stops the queue.
pub fn run_purge<E: CommandExecutor, W: Write>(
    mut queue: PurgeQueue,
    executor: &mut E,
    out: &mut W,
    policy: FailurePolicy,
) -> anyhow::Result<PurgeReport> {
    let mut report = PurgeReport::default();
    while let Some(step) = queue.step(executor, out) {
        report.steps.push(step);
    }

    let failed = report.failures().count();
    log::info!(
        "Purge finished: {} {} executed, {} failed",
        report.steps.len(),
        pluralize("command", report.steps.len()),
        failed
    );

    match policy {
        FailurePolicy::Ignore => Ok(report),
        FailurePolicy::Report if failed == 0 => Ok(report),
        FailurePolicy::Report => {
            let mut message = format!("{} {} failed:", failed, pluralize("command", failed));
            for step in report.failures() {
                if let StepOutcome::Failed(reason) = &step.outcome {
                    write!(
                        &mut message,
                        "\n  {}: {}",
                        cli_format_command(&step.command),
                        reason.red()
                    )?;
                }
            }
            Err(anyhow::anyhow!(message))
        }
    }
}
