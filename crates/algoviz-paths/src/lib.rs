//! Step-animated pathfinding on a [`Grid`](algoviz_core::Grid).
//!
//! Three searches are provided, all reached through [`Pathfinder`]:
//!
//! - **A\*** with the Manhattan heuristic ([`Pathfinder::astar`])
//! - **Dijkstra** with unit costs ([`Pathfinder::dijkstra`])
//! - **Breadth-first search** ([`Pathfinder::bfs`])
//!
//! Neighbours are always considered in the order up, down, left, right.
//! Every search clears the marks of the previous run, emits a
//! [`Step::Visit`](algoviz_core::Step::Visit) for each expanded cell other
//! than start and end, and on success clears the visit marks and emits a
//! [`Step::PathMark`](algoviz_core::Step::PathMark) for each intermediate
//! cell of the route.

mod algorithm;
mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod neighbors;
mod pathfinder;

pub use algorithm::PathAlgorithm;
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use pathfinder::{Pathfinder, Route, SearchNode, UNREACHABLE};
