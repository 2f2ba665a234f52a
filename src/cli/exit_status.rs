use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): the command did what was asked
/// - `Failure` (1): the command ran but found problems in the catalog
/// - `Error` (2): the command could not run (bad config, unreadable catalog)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_problem_count(count: usize) -> Self {
        if count == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
