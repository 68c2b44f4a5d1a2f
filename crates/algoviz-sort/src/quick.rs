use algoviz_core::{RunError, StepSink};

use crate::Sorter;

impl<S: StepSink> Sorter<'_, S> {
    /// Quick sort with a Lomuto partition around the last element.
    pub fn quick_sort(&mut self) -> Result<(), RunError> {
        let n = self.len();
        if n < 2 {
            return Ok(());
        }
        self.quick_range(0, n - 1)
    }

    fn quick_range(&mut self, lo: usize, hi: usize) -> Result<(), RunError> {
        if lo >= hi {
            return Ok(());
        }
        let p = self.partition(lo, hi)?;
        if p > lo {
            self.quick_range(lo, p - 1)?;
        }
        self.quick_range(p + 1, hi)
    }

    /// Move everything smaller than `bars[hi]` to the front of `lo..=hi`
    /// and return the pivot's final index.
    ///
    /// The closing swap always happens, even when the pivot is already in
    /// place.
    fn partition(&mut self, lo: usize, hi: usize) -> Result<usize, RunError> {
        // Next slot for an element smaller than the pivot.
        let mut store = lo;
        for j in lo..hi {
            if self.less(j, hi)? {
                self.swap(store, j)?;
                store += 1;
            }
        }
        self.swap(store, hi)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use crate::{SortAlgorithm, sort};
    use algoviz_core::{Bars, Recorder, Step};

    #[test]
    fn partitions_around_last_element() {
        let mut bars = Bars::new(vec![3, 5, 1, 4, 2]);
        let mut rec = Recorder::new();
        sort(SortAlgorithm::Quick, &mut bars, &mut rec).unwrap();
        assert_eq!(bars.values(), &[1, 2, 3, 4, 5]);
        // The first pass compares every element with the pivot at index 4.
        let first: Vec<Step> = rec.steps()[..4].to_vec();
        assert_eq!(
            first,
            vec![
                Step::Compare { a: 0, b: 4 },
                Step::Compare { a: 1, b: 4 },
                Step::Compare { a: 2, b: 4 },
                Step::Swap { a: 0, b: 2 },
            ]
        );
    }

    #[test]
    fn pivot_swap_happens_even_in_place() {
        let mut bars = Bars::new(vec![1, 2, 3, 4, 5]);
        let mut rec = Recorder::new();
        sort(SortAlgorithm::Quick, &mut bars, &mut rec).unwrap();
        assert_eq!(bars.values(), &[1, 2, 3, 4, 5]);
        // Every element is smaller than each successive pivot: each of the
        // four partitions swaps every scanned element with itself and then
        // the pivot with itself.
        assert!(rec.swaps() > 0);
        assert!(rec.steps().contains(&Step::Swap { a: 4, b: 4 }));
    }
}
