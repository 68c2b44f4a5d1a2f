//! Snapshot of a session's run status.

use std::time::Duration;

/// What a front end shows next to the visualization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunState {
    pub is_running: bool,
    pub is_paused: bool,
    pub comparisons: u64,
    pub swaps: u64,
    /// Wall-clock time of the current or last run.
    pub elapsed: Duration,
}

impl RunState {
    /// Elapsed time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn run_state_round_trip() {
        let state = RunState {
            is_running: true,
            is_paused: false,
            comparisons: 10,
            swaps: 4,
            elapsed: Duration::from_millis(1234),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: RunState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
