use std::fmt::Display;

use itertools::Itertools;

use super::statistic_logging::log_statistic;

/// Writes statistics whose names share a prefix, e.g. `ac3_num_revisions`.
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    prefix: String,
}

impl StatisticLogger {
    /// Creates a logger whose prefix consists of `parts` joined by underscores.
    pub fn new<Part: Display>(parts: impl IntoIterator<Item = Part>) -> Self {
        StatisticLogger {
            prefix: parts.into_iter().join("_"),
        }
    }

    pub fn log_statistic(&self, name: impl Display, value: impl Display) {
        log_statistic(&self.statistic_name(name), value);
    }

    fn statistic_name(&self, name: impl Display) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}_{name}", self.prefix)
        }
    }
}
