use tracing::{debug, info, warn};

use crate::{
    config::{ErrorPolicy, RunConfig},
    error::Error,
    interpreter::{environment::Environment, executor::LineReport},
    source::SourceLine,
};

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunReport {
    /// Reports of the lines that executed successfully, in order.
    pub lines:       Vec<LineReport>,
    /// Errors of skipped lines, in order. Always empty under
    /// [`ErrorPolicy::Abort`].
    pub failures:    Vec<Error>,
    /// The variable bindings left after the last line.
    pub environment: Environment,
}

impl RunReport {
    /// Whether every line executed successfully.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The computed values of the successful lines, in order.
    #[must_use]
    pub fn values(&self) -> Vec<i64> {
        self.lines.iter().map(|report| report.value).collect()
    }
}

/// Executes program lines in order against one environment.
///
/// The runner owns the environment for the whole run, so later lines see the
/// bindings made by earlier ones.
#[derive(Debug, Default)]
pub struct Runner {
    config:      RunConfig,
    environment: Environment,
    lines:       Vec<LineReport>,
    failures:    Vec<Error>,
}

impl Runner {
    /// Creates a runner with an empty environment.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self { config,
               ..Self::default() }
    }

    /// The failures recorded so far under [`ErrorPolicy::Skip`].
    #[must_use]
    pub fn failures(&self) -> &[Error] {
        &self.failures
    }

    /// Executes a single line.
    ///
    /// Returns the line's report on success. When the line fails, the error is
    /// returned under [`ErrorPolicy::Abort`]; under [`ErrorPolicy::Skip`] it is
    /// recorded and `Ok(None)` is returned.
    ///
    /// # Errors
    /// The line's error, when the policy is [`ErrorPolicy::Abort`].
    pub fn step(&mut self, line: &SourceLine) -> Result<Option<LineReport>, Error> {
        match self.environment.execute_line(&line.text, line.number) {
            Ok(report) => {
                self.lines.push(report.clone());
                Ok(Some(report))
            },
            Err(e) => match self.config.on_error {
                ErrorPolicy::Abort => Err(e),
                ErrorPolicy::Skip => {
                    warn!(line = line.number, error = %e, "skipping line");
                    self.failures.push(e);
                    Ok(None)
                },
            },
        }
    }

    /// Consumes the runner and returns what it produced.
    #[must_use]
    pub fn finish(self) -> RunReport {
        info!(lines = self.lines.len(),
              failures = self.failures.len(),
              variables = self.environment.len(),
              "run finished");
        RunReport { lines:       self.lines,
                    failures:    self.failures,
                    environment: self.environment, }
    }

    /// Executes every line in order and returns the final report.
    ///
    /// # Errors
    /// The first line error, when the policy is [`ErrorPolicy::Abort`].
    ///
    /// # Example
    /// ```
    /// use catlang::{
    ///     config::RunConfig,
    ///     interpreter::runner::Runner,
    ///     source::program_lines,
    /// };
    ///
    /// let lines = program_lines("x = 5\ny = x + 2\nx + y");
    /// let report = Runner::new(RunConfig::default()).run(&lines).unwrap();
    ///
    /// assert_eq!(report.values(), vec![5, 7, 12]);
    /// assert_eq!(report.environment.sorted(), vec![("x", 5), ("y", 7)]);
    /// ```
    pub fn run(mut self, lines: &[SourceLine]) -> Result<RunReport, Error> {
        debug!(count = lines.len(), policy = ?self.config.on_error, "running program");
        for line in lines {
            self.step(line)?;
        }
        Ok(self.finish())
    }
}
