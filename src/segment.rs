use crate::point::Point;

/// A directed segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Outcome of intersecting two [`Segment`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments cross or touch at the given point.
    Intersects([f64; 2]),
    /// The supporting lines cross outside of at least one of the segments.
    NoIntersection,
    /// The first segment is vertical, or the segments are parallel, collinear or of zero length.
    ///
    /// No further test is attempted in that case.
    Degenerate,
}

impl SegmentIntersection {
    /// Returns the intersection point, if any.
    pub fn point(&self) -> Option<[f64; 2]> {
        match self {
            Self::Intersects(p) => Some(*p),
            Self::NoIntersection | Self::Degenerate => None,
        }
    }
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Intersects `self` with `other`.
    ///
    /// Both segments are parameterized as `start + t * (end - start)` with `t` in `[0, 1]` and
    /// the resulting 2x2 linear system is solved for `(t1, t2)`. The solve divides by the
    /// x-extent of `self`, so a vertical `self` yields [`SegmentIntersection::Degenerate`], as
    /// does a zero determinant. In particular a segment is never reported as intersecting
    /// itself, and `a.intersection(&b)` may differ from `b.intersection(&a)`.
    ///
    /// The intersection point is computed from the parameterization of `self`.
    pub fn intersection(&self, other: &Segment) -> SegmentIntersection {
        let [x0, y0]: [f64; 2] = self.start.into();
        let [x1, y1]: [f64; 2] = self.end.into();
        let [u0, v0]: [f64; 2] = other.start.into();
        let [u1, v1]: [f64; 2] = other.end.into();

        let a11 = x1 - x0;
        let a12 = u0 - u1;
        let a21 = y1 - y0;
        let a22 = v0 - v1;
        let dx = u0 - x0;
        let dy = v0 - y0;

        let det = a11 * a22 - a21 * a12;
        if a11 == 0. || det == 0. {
            return SegmentIntersection::Degenerate;
        }

        let t2 = (dy * a11 - dx * a21) / det;
        let t1 = (dx - a12 * t2) / a11;
        if !(0. ..=1.).contains(&t1) || !(0. ..=1.).contains(&t2) {
            return SegmentIntersection::NoIntersection;
        }

        SegmentIntersection::Intersects([x0 + a11 * t1, y0 + a21 * t1])
    }

    /// Returns `true` if the segments cross or touch.
    pub fn is_intersect(&self, other: &Segment) -> bool {
        matches!(
            self.intersection(other),
            SegmentIntersection::Intersects(_)
        )
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn seg([x0, y0]: [i32; 2], [x1, y1]: [i32; 2]) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn crossing_diagonals() {
        let s1 = seg([0, 0], [2, 2]);
        let s2 = seg([0, 2], [2, 0]);

        assert_eq!(s1.intersection(&s2), SegmentIntersection::Intersects([1., 1.]));
        assert_eq!(s2.intersection(&s1), SegmentIntersection::Intersects([1., 1.]));
        assert!(s1.is_intersect(&s2));
    }

    #[test]
    fn vertical_first_segment_is_degenerate() {
        //
        //          +
        //          |
        //     +----x----+
        //          |
        //          +
        //
        let vertical = seg([2, -2], [2, 2]);
        let horizontal = seg([0, 0], [4, 0]);

        assert_eq!(
            vertical.intersection(&horizontal),
            SegmentIntersection::Degenerate
        );
        assert!(!vertical.is_intersect(&horizontal));
        // Only the x-extent of the receiver matters
        assert_eq!(
            horizontal.intersection(&vertical),
            SegmentIntersection::Intersects([2., 0.])
        );
    }

    #[rstest]
    #[case::shared_endpoint(seg([0, 0], [2, 2]), seg([2, 2], [4, 0]), Some([2., 2.]))]
    #[case::t_junction(seg([0, 0], [4, 0]), seg([2, 0], [2, 3]), Some([2., 0.]))]
    #[case::lines_cross_outside(seg([0, 0], [1, 1]), seg([3, 0], [2, 1]), None)]
    #[case::short_of_other(seg([0, 0], [1, 0]), seg([2, -1], [2, 1]), None)]
    fn endpoint_and_miss_cases(
        #[case] s1: Segment,
        #[case] s2: Segment,
        #[case] expected: Option<[f64; 2]>,
    ) {
        assert_eq!(s1.intersection(&s2).point(), expected);
    }

    #[rstest]
    #[case::parallel(seg([0, 0], [2, 0]), seg([0, 1], [2, 1]))]
    #[case::collinear_overlapping(seg([0, 0], [4, 0]), seg([2, 0], [6, 0]))]
    #[case::zero_length(seg([1, 1], [1, 1]), seg([0, 0], [2, 2]))]
    #[case::both_vertical(seg([0, 0], [0, 3]), seg([1, 0], [1, 3]))]
    #[case::vertical_first(seg([1, -1], [1, 1]), seg([0, 0], [3, 1]))]
    fn degenerate_cases(#[case] s1: Segment, #[case] s2: Segment) {
        assert_eq!(s1.intersection(&s2), SegmentIntersection::Degenerate);
        assert!(!s1.is_intersect(&s2));
    }

    proptest! {
        #[test]
        fn segment_never_intersects_itself(
            x0 in -1000..1000, y0 in -1000..1000, x1 in -1000..1000, y1 in -1000..1000,
        ) {
            let s = seg([x0, y0], [x1, y1]);
            prop_assert_eq!(s.intersection(&s), SegmentIntersection::Degenerate);
        }

        #[test]
        fn intersection_point_lies_in_both_bounding_boxes(
            a in proptest::array::uniform4(-100..100),
            b in proptest::array::uniform4(-100..100),
        ) {
            let s1 = seg([a[0], a[1]], [a[2], a[3]]);
            let s2 = seg([b[0], b[1]], [b[2], b[3]]);
            if let SegmentIntersection::Intersects([x, y]) = s1.intersection(&s2) {
                for s in [s1, s2] {
                    let (xmin, xmax) = (s.start.x.min(s.end.x) as f64, s.start.x.max(s.end.x) as f64);
                    let (ymin, ymax) = (s.start.y.min(s.end.y) as f64, s.start.y.max(s.end.y) as f64);
                    prop_assert!(x >= xmin - 1e-9 && x <= xmax + 1e-9);
                    prop_assert!(y >= ymin - 1e-9 && y <= ymax + 1e-9);
                }
            }
        }
    }
}
