//! The process-wide destination of statistics.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Determines how statistics are written.
///
/// Every statistic becomes a line `{prefix} {name}={value}`. Once all statistics of a solver have
/// been written, the postfix (if any) is written on a line of its own.
pub struct StatisticOptions {
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .field("writer", &"<Writer>")
            .finish()
    }
}

impl StatisticOptions {
    /// Writes statistics to stdout, with their names unchanged and without a postfix.
    pub fn new(prefix: &'static str) -> Self {
        StatisticOptions {
            prefix,
            postfix: None,
            casing: None,
            writer: Box::new(stdout()),
        }
    }

    pub fn with_postfix(mut self, postfix: &'static str) -> Self {
        self.postfix = Some(postfix);
        self
    }

    /// Converts the names of the statistics, which are snake case, to `casing`.
    pub fn with_casing(mut self, casing: Case) -> Self {
        self.casing = Some(casing);
        self
    }

    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    fn format_statistic(&self, name: &str, value: impl Display) -> String {
        let name = match self.casing {
            Some(casing) => name.to_case(casing),
            None => name.to_owned(),
        };
        format!("{} {name}={value}", self.prefix)
    }

    fn write_statistic(&mut self, name: &str, value: impl Display) {
        let line = self.format_statistic(name, value);
        let _ = writeln!(self.writer, "{line}");
    }

    fn write_postfix(&mut self) {
        if let Some(postfix) = self.postfix {
            let _ = writeln!(self.writer, "{postfix}");
        }
    }
}

/// Enables statistic logging for the rest of the process.
///
/// Only the first call has an effect; returns whether `options` were installed.
pub fn configure_statistic_logging(options: StatisticOptions) -> bool {
    STATISTIC_OPTIONS.set(Mutex::new(options)).is_ok()
}

/// Returns whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

pub(crate) fn log_statistic(name: &str, value: impl Display) {
    with_options(|options| options.write_statistic(name, value));
}

pub(crate) fn log_statistic_postfix() {
    with_options(StatisticOptions::write_postfix);
}

fn with_options(write: impl FnOnce(&mut StatisticOptions)) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if let Ok(mut options) = options.lock() {
            write(&mut options);
        }
    }
}
