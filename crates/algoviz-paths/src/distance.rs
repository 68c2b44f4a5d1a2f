use algoviz_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
