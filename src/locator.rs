use rayon::prelude::*;

use crate::point::Point;

/// A trait to locate one or several query points among a set of shapes.
pub trait PointLocator {
    /// Locates one query point.
    ///
    /// Returns [`None`] if the query point does not lie in any shape.
    fn locate_one(&self, point: &Point) -> Option<usize>;

    /// Locates several query points.
    fn locate_many(&self, points: &[Point]) -> Vec<Option<usize>> {
        points.iter().map(|point| self.locate_one(point)).collect()
    }

    /// Locates several query points in parallel.
    fn par_locate_many(&self, points: &[Point]) -> Vec<Option<usize>>
    where
        Self: std::marker::Sync,
    {
        points
            .par_iter()
            .map(|point| self.locate_one(point))
            .collect()
    }
}
