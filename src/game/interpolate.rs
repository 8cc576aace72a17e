use super::board::Cell;
use std::time::Duration;

/// A position on the board in continuous cell units.  The center of the cell
/// at `(x, y)` is `(x + 0.5, y + 0.5)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    pub(crate) fn center_of(cell: Cell) -> Point {
        Point {
            x: f64::from(cell.x) + 0.5,
            y: f64::from(cell.y) + 0.5,
        }
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
        }
    }
}

/// The snake's body before and after the most recent tick together with how
/// far the current tick period has progressed
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RenderSnapshot {
    pub(crate) previous: Vec<Cell>,
    pub(crate) current: Vec<Cell>,
    pub(crate) progress: f64,
}

impl RenderSnapshot {
    pub(crate) fn positions(&self) -> Vec<Point> {
        positions_for(&self.previous, &self.current, self.progress)
    }
}

/// Compute where to draw each segment of `current`, moving each one a
/// fraction `t` of the way from its position in `previous`.  Segments with
/// no counterpart in `previous` (a segment gained by eating) are drawn where
/// they currently are.
pub(crate) fn positions_for(previous: &[Cell], current: &[Cell], t: f64) -> Vec<Point> {
    let t = t.clamp(0.0, 1.0);
    current
        .iter()
        .enumerate()
        .map(|(i, &cell)| {
            let to = Point::center_of(cell);
            match previous.get(i) {
                Some(&from) => Point::center_of(from).lerp(to, t),
                None => to,
            }
        })
        .collect()
}

/// Return the interpolation fraction for `elapsed` time into a tick of
/// length `period`, clamped to `[0, 1]`
pub(crate) fn progress(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / period.as_secs_f64()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_points(actual: &[Point], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (p, &(x, y)) in actual.iter().zip(expected) {
            assert!(
                (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
                "{actual:?} vs {expected:?}"
            );
        }
    }

    #[test]
    fn midpoint_between_centers() {
        let pos = positions_for(&[Cell::new(10, 10)], &[Cell::new(11, 10)], 0.5);
        assert_points(&pos, &[(11.0, 10.5)]);
    }

    #[test]
    fn endpoints() {
        let prev = [Cell::new(3, 4), Cell::new(3, 5)];
        let curr = [Cell::new(3, 3), Cell::new(3, 4)];
        assert_points(&positions_for(&prev, &curr, 0.0), &[(3.5, 4.5), (3.5, 5.5)]);
        assert_points(&positions_for(&prev, &curr, 1.0), &[(3.5, 3.5), (3.5, 4.5)]);
    }

    #[test]
    fn t_is_clamped() {
        let prev = [Cell::new(0, 0)];
        let curr = [Cell::new(1, 0)];
        assert_points(&positions_for(&prev, &curr, -2.0), &[(0.5, 0.5)]);
        assert_points(&positions_for(&prev, &curr, 7.0), &[(1.5, 0.5)]);
    }

    #[test]
    fn grown_segment_uses_current_cell() {
        let prev = [Cell::new(5, 5), Cell::new(4, 5)];
        let curr = [Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)];
        assert_points(
            &positions_for(&prev, &curr, 0.25),
            &[(5.75, 5.5), (4.75, 5.5), (4.5, 5.5)],
        );
    }

    #[test]
    fn snapshot_positions() {
        let snapshot = RenderSnapshot {
            previous: vec![Cell::new(2, 2), Cell::new(2, 3)],
            current: vec![Cell::new(2, 1), Cell::new(2, 2)],
            progress: 0.5,
        };
        assert_points(&snapshot.positions(), &[(2.5, 2.0), (2.5, 3.0)]);
    }

    #[rstest]
    #[case(0, 120, 0.0)]
    #[case(30, 120, 0.25)]
    #[case(120, 120, 1.0)]
    #[case(500, 120, 1.0)]
    #[case(5, 0, 1.0)]
    fn test_progress(#[case] elapsed_ms: u64, #[case] period_ms: u64, #[case] r: f64) {
        let t = progress(
            Duration::from_millis(elapsed_ms),
            Duration::from_millis(period_ms),
        );
        assert!((t - r).abs() < 1e-9, "{t} != {r}");
    }
}
