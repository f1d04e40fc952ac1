//! Polygon and segment primitives on integer points.
//!
//! The crate provides:
//! - [`Segment::intersection`], solving the intersection of two segments,
//! - [`Polygon::contains`], a ray casting point-in-polygon test,
//! - [`Polygon::is_intersect`], a brute force polygon-polygon intersection test,
//! - [`Polygon::area`], a fan triangulation based area,
//!
//! along with a [`Polygons`] collection answering aggregate queries and a [`PointLocator`] trait
//! to locate many points at once, optionally in parallel.
//!
//! ```
//! use polyprim::{Point, Polygon};
//!
//! let square: Polygon = "4 (0;0) (4;0) (4;4) (0;4)".parse().unwrap();
//!
//! assert!(square.contains(&Point::new(2, 2)));
//! assert!(!square.contains(&Point::new(5, 5)));
//! assert!((square.area() - 16.).abs() < 1e-9);
//! ```

mod collection;
mod error;
pub mod fmt_guard;
mod locator;
mod point;
mod polygon;
mod segment;

pub use collection::Polygons;
pub use error::{GeometryError, Result};
pub use locator::PointLocator;
pub use point::Point;
pub use polygon::Polygon;
pub use segment::{Segment, SegmentIntersection};
