//! The cross-sequence uniqueness filter.

use super::IterError;

/// Yields the items of many sequences, skipping items equivalent to one already yielded.
///
/// Sources are scanned round-robin. Each call continues at the source after the one which
/// yielded last, and pulls items from it until one is found which is not equivalent to any
/// yielded item. A source found exhausted is excluded from the scan.
///
/// The yielded items are kept for comparison, so the memory grows with the output.
#[derive(Debug, Clone)]
pub struct UniqueIter<I: Iterator, F> {
    sources: Vec<I>,
    exhausted: Vec<bool>,
    /// Index of the source to pull next.
    cursor: usize,
    emitted: Vec<I::Item>,
    equivalent: F,
}

impl<I, F> UniqueIter<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    /// Creates the filter over `sources` with the equivalence relation `equivalent`.
    ///
    /// # Errors
    ///
    /// Returns [`IterError::NoSequences`] if `sources` is empty.
    pub fn new(sources: impl IntoIterator<Item = I>, equivalent: F) -> Result<Self, IterError> {
        let sources: Vec<I> = sources.into_iter().collect();
        if sources.is_empty() {
            return Err(IterError::NoSequences);
        }
        Ok(Self {
            exhausted: vec![false; sources.len()],
            sources,
            cursor: 0,
            emitted: Vec::new(),
            equivalent,
        })
    }

    /// Returns the items yielded so far.
    pub fn emitted(&self) -> &[I::Item] {
        &self.emitted
    }
}

impl<I, F> Iterator for UniqueIter<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let count = self.sources.len();
        while self.exhausted.contains(&false) {
            let index = self.cursor;
            let (Some(source), Some(exhausted)) =
                (self.sources.get_mut(index), self.exhausted.get_mut(index))
            else {
                return None;
            };
            if *exhausted {
                self.cursor = (index + 1) % count;
                continue;
            }
            let Some(item) = source.next() else {
                *exhausted = true;
                self.cursor = (index + 1) % count;
                continue;
            };
            if self
                .emitted
                .iter()
                .any(|seen| (self.equivalent)(seen, &item))
            {
                // pull the same source again
                continue;
            }
            self.cursor = (index + 1) % count;
            self.emitted.push(item.clone());
            return Some(item);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self
            .sources
            .iter()
            .zip(&self.exhausted)
            .filter(|&(_, &exhausted)| !exhausted)
            .map(|(source, _)| source.size_hint().1)
            .try_fold(0usize, |acc, upper| acc.checked_add(upper?));
        (0, upper)
    }
}

impl<I, F> std::iter::FusedIterator for UniqueIter<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}
