use std::io::BufRead;

use itertools::Itertools;
use log::{debug, warn};

use crate::locator::PointLocator;
use crate::point::Point;
use crate::polygon::Polygon;

/// An ordered set of polygons, typically loaded from a text file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygons {
    polygons: Vec<Polygon>,
}

impl Polygons {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Reads one polygon per line.
    ///
    /// Blank lines are ignored and lines that do not describe a valid polygon are skipped with a
    /// warning. Only I/O errors are reported.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut polygons = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Polygon>() {
                Ok(polygon) => polygons.push(polygon),
                Err(e) => warn!("Skipping line {}: {}", idx + 1, e),
            }
        }
        debug!("Loaded {} polygons", polygons.len());

        Ok(Self { polygons })
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    pub fn total_area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Returns the polygon with the largest area, the last one on ties.
    pub fn largest(&self) -> Option<&Polygon> {
        self.polygons.iter().max_by(|a, b| a.cmp_area(b))
    }

    /// Returns the polygon with the smallest area, the first one on ties.
    pub fn smallest(&self) -> Option<&Polygon> {
        self.polygons.iter().min_by(|a, b| a.cmp_area(b))
    }

    /// Returns the polygons sorted by increasing area, keeping input order on ties.
    pub fn sorted_by_area(&self) -> Vec<&Polygon> {
        self.polygons
            .iter()
            .sorted_by(|a, b| a.cmp_area(b))
            .collect()
    }

    pub fn count_containing(&self, point: &Point) -> usize {
        self.polygons.iter().filter(|p| p.contains(point)).count()
    }

    /// Counts the polygons intersecting `other`.
    ///
    /// [`Polygon::is_intersect`] is tried both ways so that nesting is found whichever polygon is
    /// the outer one.
    pub fn count_intersecting(&self, other: &Polygon) -> usize {
        self.polygons
            .iter()
            .filter(|p| p.is_intersect(other) || other.is_intersect(p))
            .count()
    }

    /// Counts the polygons with exactly the same vertices as `other`, in the same order.
    pub fn count_equal(&self, other: &Polygon) -> usize {
        self.polygons.iter().filter(|&p| p == other).count()
    }
}

impl FromIterator<Polygon> for Polygons {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygons {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl PointLocator for Polygons {
    /// Returns the index of the first polygon containing `point`.
    fn locate_one(&self, point: &Point) -> Option<usize> {
        self.polygons.iter().position(|p| p.contains(point))
    }
}
