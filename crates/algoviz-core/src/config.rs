//! Configuration and slider-to-delay mapping.
//!
//! Both sliders read "higher is faster": the delay is the slider value
//! subtracted from a fixed ceiling.

use std::time::Duration;

use crate::bars;
use crate::grid;

/// Upper bound of the pathfinding speed slider.
pub const PATH_SPEED_MAX: u32 = 200;
/// Upper bound of the sorting speed slider.
pub const SORT_SPEED_MAX: u32 = 100;

/// Pathfinding delay before any slider input (ms).
pub const DEFAULT_PATH_DELAY_MS: u64 = 50;
/// Sorting slider position before any input.
pub const DEFAULT_SORT_SPEED: u32 = 50;
/// Array size before any input.
pub const DEFAULT_ARRAY_SIZE: usize = 50;

/// Delay for pathfinding slider `v` in `0..=200`: `210 - v` ms.
pub fn path_delay(v: u32) -> Duration {
    Duration::from_millis(u64::from(210 - v.min(PATH_SPEED_MAX)))
}

/// Delay for sorting slider `v` in `0..=100`: `100 - v` ms.
pub fn sort_delay(v: u32) -> Duration {
    Duration::from_millis(u64::from(SORT_SPEED_MAX - v.min(SORT_SPEED_MAX)))
}

/// Slider position that yields the default pathfinding delay.
pub const fn default_path_speed() -> u32 {
    210 - DEFAULT_PATH_DELAY_MS as u32
}

/// Settings shared by front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VizConfig {
    pub rows: i32,
    pub cols: i32,
    /// Pathfinding slider position, `0..=200`.
    pub path_speed: u32,
    /// Sorting slider position, `0..=100`.
    pub sort_speed: u32,
    pub array_size: usize,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            rows: grid::ROWS,
            cols: grid::COLS,
            path_speed: default_path_speed(),
            sort_speed: DEFAULT_SORT_SPEED,
            array_size: DEFAULT_ARRAY_SIZE,
        }
    }
}

impl VizConfig {
    /// Clamp every field into its accepted range.
    pub fn normalized(self) -> Self {
        Self {
            rows: self.rows.max(1),
            cols: self.cols.max(1),
            path_speed: self.path_speed.min(PATH_SPEED_MAX),
            sort_speed: self.sort_speed.min(SORT_SPEED_MAX),
            array_size: self.array_size.clamp(bars::MIN_LEN, bars::MAX_LEN),
        }
    }

    /// Delay implied by [`path_speed`](Self::path_speed).
    pub fn path_delay(&self) -> Duration {
        path_delay(self.path_speed)
    }

    /// Delay implied by [`sort_speed`](Self::sort_speed).
    pub fn sort_delay(&self) -> Duration {
        sort_delay(self.sort_speed)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: VizConfig = serde_json::from_str(r#"{"rows": 10}"#).unwrap();
        assert_eq!(cfg.rows, 10);
        assert_eq!(cfg.cols, grid::COLS);
        assert_eq!(cfg.sort_speed, DEFAULT_SORT_SPEED);
    }
}
