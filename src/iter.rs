//! General purpose lazy iterators over many sources.
//!
//! - [`OrderedAlternatingIter`] merges sequences each sorted by a key into one sorted sequence.
//! - [`UniqueIter`] yields the items of many sequences, skipping ones equivalent to an already yielded item.
//!
//! Both are single-pass and pulled by the consumer. They are used to combine time-ordered objects of
//! different tracks, but they do not depend on the chart model.

pub mod alternating;
pub mod unique;

use thiserror::Error;

pub use self::{alternating::OrderedAlternatingIter, unique::UniqueIter};

/// An error occurred when building or restarting an iterator.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IterError {
    /// No source sequence was supplied.
    #[error("at least one source sequence is required")]
    NoSequences,
    /// The iterator was not built to be restarted.
    #[error("the source sequences do not support restarting")]
    NotRestartable,
}
