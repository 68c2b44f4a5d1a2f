use algoviz_core::{RunError, StepSink};

use crate::Sorter;

impl<S: StepSink> Sorter<'_, S> {
    /// Heap sort on a max-heap stored in place.
    pub fn heap_sort(&mut self) -> Result<(), RunError> {
        let n = self.len();
        for i in (0..n / 2).rev() {
            self.sift_down(n, i)?;
        }
        for end in (1..n).rev() {
            self.swap(0, end)?;
            self.sift_down(end, 0)?;
        }
        Ok(())
    }

    /// Restore the heap property below `i` within the first `n` elements.
    fn sift_down(&mut self, n: usize, mut i: usize) -> Result<(), RunError> {
        loop {
            let mut largest = i;
            let left = 2 * i + 1;
            let right = left + 1;
            if left < n && self.greater(left, largest)? {
                largest = left;
            }
            if right < n && self.greater(right, largest)? {
                largest = right;
            }
            if largest == i {
                return Ok(());
            }
            self.swap(i, largest)?;
            i = largest;
        }
    }
}
