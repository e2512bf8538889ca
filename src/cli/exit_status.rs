use std::process::ExitCode;

/// Exit status of a sol-env run.
///
/// - `Success` (0): every file is in the requested environment
/// - `Failure` (1): `--dry-run` found lines that would be switched
/// - `Error` (2): the run aborted (malformed annotation, I/O error, bad config, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every target file is in the requested environment.
    Success,
    /// A dry run found lines that would be switched.
    Failure,
    /// The run aborted before or while writing.
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
