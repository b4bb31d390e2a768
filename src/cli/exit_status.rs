use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and produced its result
/// - `Failure` (1): Command completed but found nothing (unknown key, no key at position)
/// - `Error` (2): Command failed due to internal error (unreadable file, invalid config, etc.)
///
/// A translation file that is missing or broken is not an error: the run
/// continues with an empty table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and produced its result.
    Success,
    /// Command completed but found nothing.
    Failure,
    /// Command failed due to internal error.
    Error,
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
