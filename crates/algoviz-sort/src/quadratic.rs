//! The three quadratic sorts: bubble, selection and insertion.

use algoviz_core::{RunError, StepSink};

use crate::Sorter;

impl<S: StepSink> Sorter<'_, S> {
    /// Adjacent-exchange passes with no early exit. After pass `i` the
    /// element at `n - i - 1` is final.
    pub fn bubble(&mut self) -> Result<(), RunError> {
        let n = self.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if self.greater(j, j + 1)? {
                    self.swap(j, j + 1)?;
                }
            }
            self.sorted(n - i - 1)?;
        }
        Ok(())
    }

    /// For each position, find the minimum of the unsorted tail and move it
    /// there. Swaps only when the minimum is elsewhere.
    pub fn selection(&mut self) -> Result<(), RunError> {
        let n = self.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                if self.less(j, min)? {
                    min = j;
                }
            }
            if min != i {
                self.swap(i, min)?;
            }
            self.sorted(i)?;
        }
        Ok(())
    }

    /// Grow a sorted prefix by shifting larger elements right and writing
    /// the key into the gap.
    pub fn insertion(&mut self) -> Result<(), RunError> {
        let n = self.len();
        for i in 1..n {
            let key = self.value(i);
            let mut j = i;
            // `j` is the gap; the element left of it is compared to the key.
            while j > 0 {
                self.compare(j - 1, j)?;
                if self.value(j - 1) <= key {
                    break;
                }
                let shifted = self.value(j - 1);
                self.write(j, shifted)?;
                j -= 1;
            }
            if j != i {
                self.write(j, key)?;
            }
            self.sorted(j)?;
        }
        Ok(())
    }
}
