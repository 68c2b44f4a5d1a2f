use algoviz_core::{RunError, StepSink};

use crate::Sorter;

impl<S: StepSink> Sorter<'_, S> {
    /// Top-down merge sort.
    ///
    /// Merged runs are assembled in a scratch buffer and written back one
    /// position at a time; each written position is marked sorted.
    pub fn merge_sort(&mut self) -> Result<(), RunError> {
        let n = self.len();
        if n < 2 {
            return Ok(());
        }
        let mut scratch = Vec::with_capacity(n);
        self.merge_range(0, n - 1, &mut scratch)
    }

    fn merge_range(&mut self, lo: usize, hi: usize, scratch: &mut Vec<i32>) -> Result<(), RunError> {
        if lo >= hi {
            return Ok(());
        }
        let mid = (lo + hi) / 2;
        self.merge_range(lo, mid, scratch)?;
        self.merge_range(mid + 1, hi, scratch)?;
        self.merge(lo, mid, hi, scratch)
    }

    /// Merge `lo..=mid` with `mid+1..=hi`. Ties take the left element.
    fn merge(&mut self, lo: usize, mid: usize, hi: usize, scratch: &mut Vec<i32>) -> Result<(), RunError> {
        scratch.clear();
        let (mut i, mut j) = (lo, mid + 1);
        while i <= mid && j <= hi {
            self.compare(i, j)?;
            if self.value(i) <= self.value(j) {
                scratch.push(self.value(i));
                i += 1;
            } else {
                scratch.push(self.value(j));
                j += 1;
            }
        }
        scratch.extend((i..=mid).map(|k| self.value(k)));
        scratch.extend((j..=hi).map(|k| self.value(k)));

        for (k, &v) in (lo..=hi).zip(scratch.iter()) {
            self.write(k, v)?;
            self.sorted(k)?;
        }
        Ok(())
    }
}
