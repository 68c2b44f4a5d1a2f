use algoviz_core::{Bars, RunError, Step, StepSink};

use crate::algorithm::SortAlgorithm;

/// Runs one sort over a [`Bars`] array, reporting every comparison and
/// exchange to a [`StepSink`].
///
/// The algorithms live in their own modules as methods on this type. Each
/// one only touches the array through the helpers below, so every compare
/// is preceded by a `Compare` step and every exchange followed by a `Swap`.
pub struct Sorter<'a, S> {
    pub(crate) bars: &'a mut Bars,
    pub(crate) sink: &'a mut S,
}

impl<'a, S: StepSink> Sorter<'a, S> {
    pub fn new(bars: &'a mut Bars, sink: &'a mut S) -> Self {
        Self { bars, sink }
    }

    /// Sort with `algorithm`, then emit `AllSorted`.
    pub fn run(&mut self, algorithm: SortAlgorithm) -> Result<(), RunError> {
        log::debug!("starting {} on {} values", algorithm, self.bars.len());
        match algorithm {
            SortAlgorithm::Bubble => self.bubble()?,
            SortAlgorithm::Selection => self.selection()?,
            SortAlgorithm::Insertion => self.insertion()?,
            SortAlgorithm::Merge => self.merge_sort()?,
            SortAlgorithm::Quick => self.quick_sort()?,
            SortAlgorithm::Heap => self.heap_sort()?,
        }
        self.sink.step(Step::AllSorted)?;
        log::debug!("{} finished", algorithm);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tracked access
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bars.len()
    }

    #[inline]
    pub(crate) fn value(&self, i: usize) -> i32 {
        self.bars[i]
    }

    /// Announce a comparison of positions `a` and `b`.
    #[inline]
    pub(crate) fn compare(&mut self, a: usize, b: usize) -> Result<(), RunError> {
        self.sink.step(Step::Compare { a, b })
    }

    /// `bars[a] > bars[b]`, announced.
    pub(crate) fn greater(&mut self, a: usize, b: usize) -> Result<bool, RunError> {
        self.compare(a, b)?;
        Ok(self.bars[a] > self.bars[b])
    }

    /// `bars[a] < bars[b]`, announced.
    pub(crate) fn less(&mut self, a: usize, b: usize) -> Result<bool, RunError> {
        self.compare(a, b)?;
        Ok(self.bars[a] < self.bars[b])
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) -> Result<(), RunError> {
        self.bars.swap(a, b);
        self.sink.step(Step::Swap { a, b })
    }

    pub(crate) fn write(&mut self, index: usize, value: i32) -> Result<(), RunError> {
        self.bars.set(index, value);
        self.sink.step(Step::Write { index, value })
    }

    #[inline]
    pub(crate) fn sorted(&mut self, index: usize) -> Result<(), RunError> {
        self.sink.step(Step::Sorted { index })
    }
}

/// Sort `bars` in place with `algorithm`, emitting every step into `sink`.
pub fn sort<S: StepSink>(
    algorithm: SortAlgorithm,
    bars: &mut Bars,
    sink: &mut S,
) -> Result<(), RunError> {
    Sorter::new(bars, sink).run(algorithm)
}
