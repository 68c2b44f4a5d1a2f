use std::fmt;
use std::str::FromStr;

use algoviz_core::RunError;

/// The comparison sort a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [SortAlgorithm; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
        }
    }

    /// One-line explanation shown next to the selector.
    pub fn description(self) -> &'static str {
        match self {
            Self::Bubble => {
                "Bubble Sort repeatedly swaps adjacent elements if they are in the wrong order."
            }
            Self::Selection => {
                "Selection Sort selects the smallest element and swaps it with the first unsorted element."
            }
            Self::Insertion => "Insertion Sort builds the final sorted array one element at a time.",
            Self::Merge => "Merge Sort divides the array into halves, sorts them, and merges them.",
            Self::Quick => "Quick Sort picks a pivot and partitions the array around the pivot.",
            Self::Heap => "Heap Sort builds a heap and repeatedly extracts the maximum element.",
        }
    }

    /// The next algorithm in selector order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortAlgorithm {
    type Err = RunError;

    /// Accepts the short name, with or without a `sort` suffix
    /// (`"quick"`, `"quicksort"`, `"quickSort"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let key = lower
            .strip_suffix("sort")
            .map(|k| k.trim_end_matches(['-', '_', ' ']))
            .unwrap_or(lower.as_str());
        Self::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| RunError::InvalidAlgorithmSelection(s.trim().to_string()))
    }
}
