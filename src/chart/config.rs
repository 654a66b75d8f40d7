//! Options of reading the chart.
//!
//! Create one by [`default_config`] and adjust it with the builder methods:
//!
//! ```
//! use chart_rs::chart::config::{UnknownNotePolicy, default_config};
//!
//! let config = default_config()
//!     .parallel(false)
//!     .unknown_notes(UnknownNotePolicy::Reject);
//! assert!(!config.is_parallel());
//! ```

use rayon::prelude::*;

/// How to treat a note index which is not defined for the instrument family.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnknownNotePolicy {
    /// Skips the note with a debug log.
    #[default]
    Ignore,
    /// Fails with [`FormatErrorKind::UnknownNoteIndex`](crate::chart::lex::FormatErrorKind::UnknownNoteIndex).
    Reject,
}

/// Options of reading the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadConfig {
    parallel: bool,
    unknown_notes: UnknownNotePolicy,
}

impl Default for ReadConfig {
    fn default() -> Self {
        default_config()
    }
}

impl ReadConfig {
    /// Whether the sections are read on the `rayon` thread pool. Enabled by default.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// How to treat an undefined note index. [`UnknownNotePolicy::Ignore`] by default.
    #[must_use]
    pub const fn unknown_notes(mut self, policy: UnknownNotePolicy) -> Self {
        self.unknown_notes = policy;
        self
    }

    /// Returns true if the sections are read in parallel.
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the policy for undefined note indices.
    #[must_use]
    pub const fn unknown_note_policy(&self) -> UnknownNotePolicy {
        self.unknown_notes
    }

    /// Runs two units of work, on the thread pool if parallel.
    pub(crate) fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        if self.parallel {
            rayon::join(a, b)
        } else {
            (a(), b())
        }
    }

    /// Maps every unit with `f`, on the thread pool if parallel. The results keep the order of `units`.
    pub(crate) fn map_units<T, R, F>(&self, units: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.parallel {
            units.par_iter().map(f).collect()
        } else {
            units.iter().map(f).collect()
        }
    }
}

/// Creates the default options: parallel reading and ignoring undefined note indices.
#[must_use]
pub const fn default_config() -> ReadConfig {
    ReadConfig {
        parallel: true,
        unknown_notes: UnknownNotePolicy::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_keep_order() {
        let units = [1, 2, 3, 4, 5, 6, 7, 8];
        for config in [default_config(), default_config().parallel(false)] {
            assert_eq!(
                config.map_units(&units, |n| n * 10),
                vec![10, 20, 30, 40, 50, 60, 70, 80]
            );
            assert_eq!(config.join(|| 1, || "b"), (1, "b"));
        }
    }
}
