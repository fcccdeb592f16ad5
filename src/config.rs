use clap::ValueEnum;

/// What the runner does when a line fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicy {
    /// Stop at the first failing line and return its error.
    #[default]
    Abort,
    /// Record the failure, leave the environment untouched and carry on with
    /// the next line.
    Skip,
}

/// Settings for one program run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Handling of failing lines.
    pub on_error: ErrorPolicy,
}

impl RunConfig {
    /// A configuration that reports failing lines and keeps going.
    #[must_use]
    pub const fn skip() -> Self {
        Self { on_error: ErrorPolicy::Skip }
    }
}
