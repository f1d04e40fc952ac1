use std::{cmp::Ordering, fmt::Display, str::FromStr};

use itertools::Itertools;
use log::{debug, trace};
use smallvec::SmallVec;

use crate::error::{GeometryError, Result};
use crate::point::Point;
use crate::segment::{Segment, SegmentIntersection};

/// Horizontal distance the containment ray travels past the rightmost vertex.
const RAY_MARGIN: i32 = 3;

/// A closed polygon given by its vertices in order.
///
/// The last vertex is implicitly joined to the first one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Constructs a new `Polygon`.
    ///
    /// Fails if fewer than three vertices are given.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::InvalidPolygon {
                vertices: points.len(),
            });
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the edges of the polygon, the closing edge from the last vertex back to the first
    /// one included.
    pub fn segments(&self) -> Vec<Segment> {
        self.points
            .iter()
            .copied()
            .circular_tuple_windows::<(Point, Point)>()
            .map(Segment::from)
            .collect()
    }

    /// Returns `true` if `point` is inside the polygon.
    ///
    /// A horizontal ray is cast from `point` to a few units past the rightmost vertex and the
    /// distinct crossings with the edges are counted: the point is inside if that count is odd.
    /// Crossings at a shared vertex are counted once.
    ///
    /// The ray is the receiver of every [`Segment::intersection`] call, so vertical edges are
    /// crossed like any other.
    pub fn contains(&self, point: &Point) -> bool {
        let max_x = self.points.iter().map(|p| p.x).max().unwrap_or(point.x);
        // Saturates near `i32::MAX`, where the ray may stop on the rightmost vertex.
        let ray = Segment::new(*point, Point::new(max_x.saturating_add(RAY_MARGIN), point.y));

        let mut crossings: SmallVec<[[f64; 2]; 8]> = self
            .segments()
            .iter()
            .filter_map(|edge| ray.intersection(edge).point())
            .collect();
        crossings.sort_by(|[xa, ya], [xb, yb]| xa.total_cmp(xb).then(ya.total_cmp(yb)));
        crossings.dedup();

        trace!("{} distinct ray crossings from {}", crossings.len(), point);
        crossings.len() % 2 == 1
    }

    /// Returns `true` if `other` intersects `self`.
    ///
    /// The check first looks for a vertex of `other` inside `self`, then tests every edge of
    /// `self` against every edge of `other`. Note that it is not symmetric: a polygon lying
    /// strictly inside `self` is found, but `self` lying strictly inside `other` is not. Edges of
    /// `self` are the receivers of [`Segment::intersection`], so a crossing where the edge of
    /// `self` is vertical is missed.
    pub fn is_intersect(&self, other: &Polygon) -> bool {
        if other.points.iter().any(|p| self.contains(p)) {
            debug!("A vertex of {} lies inside {}", other, self);
            return true;
        }

        let ours = self.segments();
        let theirs = other.segments();
        let crossing = ours
            .iter()
            .cartesian_product(theirs.iter())
            .find(|(a, b)| matches!(a.intersection(b), SegmentIntersection::Intersects(_)));
        if let Some((a, b)) = crossing {
            debug!("Edges {:?} and {:?} intersect", a, b);
            return true;
        }

        false
    }

    /// Computes the area by fanning triangles out of the first vertex.
    ///
    /// Each triangle contributes its unsigned Heron area, so the result is exact for convex
    /// polygons only.
    pub fn area(&self) -> f64 {
        let p0 = self.points[0];
        self.points[1..]
            .iter()
            .tuple_windows()
            .map(|(prev, cur)| triangle_area(&p0, prev, cur))
            .sum()
    }

    /// Compares two polygons by area only.
    ///
    /// Two different polygons with the same area are `Equal` here even though they are not `==`.
    pub fn cmp_area(&self, other: &Polygon) -> Ordering {
        self.area().total_cmp(&other.area())
    }

    /// Returns `true` if the area of `self` is smaller than the area of `other`.
    ///
    /// This is the `<` of polygons. `PartialOrd` is not implemented since it would disagree with
    /// the vertex-wise `==`.
    pub fn is_smaller(&self, other: &Polygon) -> bool {
        self.cmp_area(other) == Ordering::Less
    }
}

fn distance(p: &Point, q: &Point) -> f64 {
    let dx = f64::from(p.x) - f64::from(q.x);
    let dy = f64::from(p.y) - f64::from(q.y);
    dx.hypot(dy)
}

/// Heron's formula. Flat triangles give `0.` rather than `NaN`.
fn triangle_area(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    let a = distance(p1, p2);
    let b = distance(p1, p3);
    let c = distance(p2, p3);
    let p = (a + b + c) / 2.;

    (p * (p - a) * (p - b) * (p - c)).max(0.).sqrt()
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::new(points)
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.points.len())?;
        for p in &self.points {
            write!(f, " {}", p)?;
        }
        Ok(())
    }
}

impl FromStr for Polygon {
    type Err = GeometryError;

    /// Parses a polygon written as its vertex count followed by its vertices, e.g.
    /// `3 (0;0) (4;0) (0;3)`.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let count: usize = tokens
            .next()
            .ok_or_else(|| GeometryError::parse(s, "empty input"))?
            .parse()
            .map_err(|e| GeometryError::parse(s, format!("bad vertex count ({e})")))?;
        let points = tokens.map(Point::from_str).collect::<Result<Vec<_>>>()?;
        if points.len() != count {
            return Err(GeometryError::parse(
                s,
                format!("declared {count} vertices but found {}", points.len()),
            ));
        }

        Self::new(points)
    }
}
