//! The ordered k-way merge.

use std::collections::VecDeque;

use super::IterError;

/// Merges sequences each sorted by a key into one sequence sorted by the key.
///
/// When the heads of some sequences share the minimum key, all of them are yielded in order of
/// the sequences before any sequence is advanced past the key. So items with equal keys are yielded
/// in order of their sequences, and stably within a sequence.
///
/// The key function may be called many times on the same item, so it should be cheap and pure.
///
/// # Example
///
/// ```
/// use chart_rs::iter::OrderedAlternatingIter;
///
/// let merged: Vec<_> = OrderedAlternatingIter::new(
///     [vec![1, 4, 9].into_iter(), vec![2, 4, 8].into_iter()],
///     |&n| n,
/// )
/// .expect("some sequences given")
/// .collect();
/// assert_eq!(merged, vec![1, 2, 4, 4, 8, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedAlternatingIter<I: Iterator, F> {
    sources: Vec<I>,
    /// Peeked head of each source, `None` after the source is exhausted.
    heads: Vec<Option<I::Item>>,
    /// Items sharing the current minimum key, waiting to be yielded.
    ready: VecDeque<I::Item>,
    primed: bool,
    key: F,
    origin: Option<Vec<I>>,
}

impl<I, K, F> OrderedAlternatingIter<I, F>
where
    I: Iterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    /// Creates the merge of `sources` ordered by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`IterError::NoSequences`] if `sources` is empty.
    pub fn new(sources: impl IntoIterator<Item = I>, key: F) -> Result<Self, IterError> {
        Self::build(sources.into_iter().collect(), key, None)
    }

    fn build(sources: Vec<I>, key: F, origin: Option<Vec<I>>) -> Result<Self, IterError> {
        if sources.is_empty() {
            return Err(IterError::NoSequences);
        }
        Ok(Self {
            heads: sources.iter().map(|_| None).collect(),
            sources,
            ready: VecDeque::new(),
            primed: false,
            key,
            origin,
        })
    }

    /// Consumes the iterator and returns the sources, already advanced.
    ///
    /// Items peeked or waiting to be yielded are dropped.
    pub fn into_sources(self) -> Vec<I> {
        self.sources
    }
}

impl<I, K, F> OrderedAlternatingIter<I, F>
where
    I: Iterator + Clone,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    /// Creates the merge which can be restarted by [`OrderedAlternatingIter::reset`].
    ///
    /// # Errors
    ///
    /// Returns [`IterError::NoSequences`] if `sources` is empty.
    pub fn restartable(sources: impl IntoIterator<Item = I>, key: F) -> Result<Self, IterError> {
        let sources: Vec<I> = sources.into_iter().collect();
        let origin = sources.clone();
        Self::build(sources, key, Some(origin))
    }

    /// Restarts all the sources from the state at construction.
    ///
    /// # Errors
    ///
    /// Returns [`IterError::NotRestartable`] if the iterator was not created by [`OrderedAlternatingIter::restartable`].
    pub fn reset(&mut self) -> Result<(), IterError> {
        let origin = self.origin.as_ref().ok_or(IterError::NotRestartable)?;
        self.sources.clone_from(origin);
        self.heads.iter_mut().for_each(|head| *head = None);
        self.ready.clear();
        self.primed = false;
        Ok(())
    }
}

impl<J, T, K, F> OrderedAlternatingIter<std::iter::Flatten<J>, F>
where
    J: Iterator<Item = Option<T>>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    /// Creates the merge of sequences which may contain holes. A hole is skipped, and the next
    /// item of its sequence is examined instead.
    ///
    /// # Errors
    ///
    /// Returns [`IterError::NoSequences`] if `sources` is empty.
    pub fn with_holes(sources: impl IntoIterator<Item = J>, key: F) -> Result<Self, IterError> {
        Self::new(sources.into_iter().map(Iterator::flatten), key)
    }
}

impl<I, K, F> Iterator for OrderedAlternatingIter<I, F>
where
    I: Iterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            sources,
            heads,
            ready,
            primed,
            key,
            ..
        } = self;
        if !*primed {
            for (head, source) in heads.iter_mut().zip(sources.iter_mut()) {
                *head = source.next();
            }
            *primed = true;
        }
        if let Some(item) = ready.pop_front() {
            return Some(item);
        }
        let min_key = heads.iter().flatten().map(&mut *key).min()?;
        for (head, source) in heads.iter_mut().zip(sources.iter_mut()) {
            if head.as_ref().is_some_and(|item| key(item) == min_key) {
                // an exhausted source leaves `None` and is never polled again
                ready.extend(std::mem::replace(head, source.next()));
            }
        }
        ready.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.ready.len() + self.heads.iter().flatten().count();
        if !self.primed {
            return self
                .sources
                .iter()
                .map(Iterator::size_hint)
                .fold((0, Some(0)), |(lower, upper), (l, u)| {
                    (lower.saturating_add(l), upper.zip(u).map(|(a, b)| a + b))
                });
        }
        self.sources
            .iter()
            .zip(&self.heads)
            .filter(|(_, head)| head.is_some())
            .map(|(source, _)| source.size_hint())
            .fold((pending, Some(pending)), |(lower, upper), (l, u)| {
                (lower.saturating_add(l), upper.zip(u).map(|(a, b)| a + b))
            })
    }
}

impl<I, K, F> std::iter::FusedIterator for OrderedAlternatingIter<I, F>
where
    I: Iterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
}
