//! Statistic logging for the [`ArcConsistencySolver`].
//!
//! Nothing is written until [`configure_statistic_logging`] has been called. Afterwards,
//! [`ArcConsistencySolver::log_statistics`] writes one line per counter of its
//! [`PropagationStatistics`](crate::PropagationStatistics).
mod statistic_logger;
mod statistic_logging;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub(crate) use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

#[cfg(doc)]
use crate::ArcConsistencySolver;

/// Declares a struct of `u64` counters together with a `log` method which writes every counter,
/// named after its field, through a [`StatisticLogger`].
macro_rules! create_statistics_struct {
    ($(#[$struct_doc:meta])* $name:ident { $($(#[$field_doc:meta])* $field:ident),+ $(,)? }) => {
        $(#[$struct_doc])*
        #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name {
            $($(#[$field_doc])* pub $field: u64),+
        }

        impl $name {
            /// Writes every counter with the provided logger.
            pub fn log(&self, logger: &$crate::statistics::StatisticLogger) {
                $(logger.log_statistic(stringify!($field), self.$field);)+
            }
        }
    };
}

pub(crate) use create_statistics_struct;
