use std::fmt;
use std::str::FromStr;

use algoviz_core::RunError;

/// The search algorithm a path run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PathAlgorithm {
    #[default]
    AStar,
    Dijkstra,
    Bfs,
}

impl PathAlgorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [PathAlgorithm; 3] = [Self::AStar, Self::Dijkstra, Self::Bfs];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::Bfs => "bfs",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AStar => "A* Search",
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::Bfs => "Breadth-First Search",
        }
    }

    /// The next algorithm in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::AStar => Self::Dijkstra,
            Self::Dijkstra => Self::Bfs,
            Self::Bfs => Self::AStar,
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PathAlgorithm {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            other => Err(RunError::InvalidAlgorithmSelection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for a in PathAlgorithm::ALL {
            assert_eq!(a.name().parse::<PathAlgorithm>(), Ok(a));
        }
        assert_eq!("A*".parse::<PathAlgorithm>(), Ok(PathAlgorithm::AStar));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            "dfs".parse::<PathAlgorithm>(),
            Err(RunError::InvalidAlgorithmSelection(_))
        ));
    }

    #[test]
    fn next_cycles_through_all() {
        let mut a = PathAlgorithm::default();
        for _ in 0..PathAlgorithm::ALL.len() {
            a = a.next();
        }
        assert_eq!(a, PathAlgorithm::AStar);
    }
}
