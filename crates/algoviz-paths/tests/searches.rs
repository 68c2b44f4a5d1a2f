//! End-to-end checks that hold for every search algorithm.

use algoviz_core::{Grid, Point, Recorder, RunError, Step};
use algoviz_paths::{PathAlgorithm, Pathfinder};
use proptest::prelude::*;

fn corners() -> Grid {
    let mut g = Grid::default();
    g.set_start(Point::new(0, 0)).unwrap();
    g.set_end(Point::new(19, 19)).unwrap();
    g
}

#[test]
fn empty_board_corner_to_corner() {
    for alg in PathAlgorithm::ALL {
        let mut g = corners();
        let mut rec = Recorder::new();
        let route = Pathfinder::new().run(alg, &mut g, &mut rec).unwrap();
        assert_eq!(route.span(), 39, "{alg}");
        assert_eq!(route.len(), 38, "{alg}");
        assert_eq!(route.cells.last(), Some(&Point::new(19, 19)));
        assert_eq!(rec.count("path-mark"), 37, "{alg}");
        assert_eq!(g.path_cells().len(), 37);
        assert_eq!(g.visited_count(), 0);
    }
}

#[test]
fn path_marks_follow_clear() {
    for alg in PathAlgorithm::ALL {
        let mut g = corners();
        let mut rec = Recorder::new();
        Pathfinder::new().run(alg, &mut g, &mut rec).unwrap();
        let steps = rec.steps();
        let clear = steps
            .iter()
            .position(|s| *s == Step::ClearVisited)
            .expect("clear step");
        assert!(steps[..clear].iter().all(|s| matches!(s, Step::Visit(_))));
        assert!(steps[clear + 1..].iter().all(|s| matches!(s, Step::PathMark(_))));
    }
}

#[test]
fn missing_endpoints_for_every_algorithm() {
    for alg in PathAlgorithm::ALL {
        let mut g = Grid::default();
        g.set_end(Point::new(5, 5)).unwrap();
        let mut rec = Recorder::new();
        assert_eq!(
            Pathfinder::new().run(alg, &mut g, &mut rec),
            Err(RunError::MissingEndpoints)
        );
        assert!(rec.steps().is_empty());
    }
}

#[test]
fn walled_off_end_visits_start_component() {
    // Start's component: the 3x3 block in the top-left corner.
    let text = "S..#....\n\
                ...#....\n\
                ...#....\n\
                ####....\n\
                .......E\n";
    for alg in PathAlgorithm::ALL {
        let mut g = Grid::from_text(text).unwrap();
        let mut rec = Recorder::new();
        let err = Pathfinder::new().run(alg, &mut g, &mut rec).unwrap_err();
        assert_eq!(err, RunError::NoPathFound);
        assert_eq!(rec.count("visit"), 8, "{alg}");
        assert_eq!(g.visited_count(), 8);
    }
}

#[test]
fn pathfinder_is_reusable() {
    let mut pf = Pathfinder::new();
    let mut g = corners();
    for alg in PathAlgorithm::ALL {
        let first = pf.run(alg, &mut g, &mut Recorder::new()).unwrap();
        let second = pf.run(alg, &mut g, &mut Recorder::new()).unwrap();
        assert_eq!(first, second);
    }
}

fn obstacle_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::bool::weighted(0.3), 100).prop_map(|walls| {
        let mut g = Grid::new(10, 10);
        for (i, wall) in walls.into_iter().enumerate() {
            if wall {
                g.paint_obstacle(g.point(i)).unwrap();
            }
        }
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_end(Point::new(9, 9)).unwrap();
        g
    })
}

fn is_walk(grid: &Grid, from: Point, cells: &[Point]) -> bool {
    let mut prev = from;
    for &p in cells {
        if grid.is_obstacle(p) {
            return false;
        }
        if prev.row.abs_diff(p.row) + prev.col.abs_diff(p.col) != 1 {
            return false;
        }
        prev = p;
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn algorithms_agree_on_route_length(grid in obstacle_grid()) {
        let mut results = Vec::new();
        for alg in PathAlgorithm::ALL {
            let mut g = grid.clone();
            let res = Pathfinder::new().run(alg, &mut g, &mut Recorder::new());
            if let Ok(route) = &res {
                prop_assert!(is_walk(&g, Point::new(0, 0), &route.cells), "{alg} route is not a walk");
                prop_assert_eq!(route.cells.last(), Some(&Point::new(9, 9)));
            }
            results.push(res.map(|r| r.len()));
        }
        prop_assert_eq!(&results[0], &results[1]);
        prop_assert_eq!(&results[1], &results[2]);
    }

    #[test]
    fn visits_are_unique_and_never_endpoints(grid in obstacle_grid()) {
        for alg in PathAlgorithm::ALL {
            let mut g = grid.clone();
            let mut rec = Recorder::new();
            let _ = Pathfinder::new().run(alg, &mut g, &mut rec);
            let mut seen = std::collections::HashSet::new();
            for s in rec.steps() {
                if let Step::Visit(p) = s {
                    prop_assert!(!g.is_endpoint(*p));
                    prop_assert!(!g.is_obstacle(*p));
                    prop_assert!(seen.insert(*p), "{alg} visited {p} twice");
                }
            }
        }
    }
}
