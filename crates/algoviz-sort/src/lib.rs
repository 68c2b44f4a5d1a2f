//! Step-animated comparison sorts over a [`Bars`](algoviz_core::Bars) array.
//!
//! [`Sorter`] holds the array and a [`StepSink`](algoviz_core::StepSink) and
//! provides one method per algorithm:
//!
//! | Algorithm | Method |
//! |---|---|
//! | Bubble | [`Sorter::bubble`] |
//! | Selection | [`Sorter::selection`] |
//! | Insertion | [`Sorter::insertion`] |
//! | Merge | [`Sorter::merge_sort`] |
//! | Quick | [`Sorter::quick_sort`] |
//! | Heap | [`Sorter::heap_sort`] |
//!
//! [`sort`] dispatches on a [`SortAlgorithm`] and emits the closing
//! `AllSorted` step.

mod algorithm;
mod heap;
mod merge;
mod quadratic;
mod quick;
mod sorter;

pub use algorithm::SortAlgorithm;
pub use sorter::{Sorter, sort};
