use std::fmt::{Display, Formatter};

/// Shell program used to remove files recursively, without prompting.
const REMOVE_PROGRAM: &str = "rm -Rf";

/// A single shell command line that will be handed to the host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeCommand {
    line: String,
}

impl PurgeCommand {
    /// Creates a command that removes everything whose name starts with `prefix`.
    ///
    /// The wildcard is appended directly to `prefix`, so `/srv/app/` removes the contents
    /// of `/srv/app`, while `/srv/app` also removes siblings such as `/srv/app.git`.
    /// The prefix is used verbatim, it is neither quoted nor checked.
    pub fn remove_prefix(prefix: &str) -> Self {
        Self {
            line: format!("{REMOVE_PROGRAM} {prefix}*"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }
}

impl Display for PurgeCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}
