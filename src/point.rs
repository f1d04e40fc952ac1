use std::{fmt::Display, str::FromStr};

use crate::error::GeometryError;

/// A point of the 2D plane with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<&Point> for [i32; 2] {
    fn from(val: &Point) -> Self {
        [val.x, val.y]
    }
}

impl From<Point> for [i32; 2] {
    fn from(val: Point) -> Self {
        (&val).into()
    }
}

impl From<&Point> for [f64; 2] {
    fn from(val: &Point) -> Self {
        [val.x as f64, val.y as f64]
    }
}

impl From<Point> for [f64; 2] {
    fn from(val: Point) -> Self {
        (&val).into()
    }
}

impl From<&[i32; 2]> for Point {
    fn from(value: &[i32; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<[i32; 2]> for Point {
    fn from(value: [i32; 2]) -> Self {
        Self::from(&value)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({};{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = GeometryError;

    /// Parses a point written as `(x;y)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| GeometryError::parse(s, "expected a point like (x;y)"))?;
        let (x, y) = inner
            .split_once(';')
            .ok_or_else(|| GeometryError::parse(s, "missing ';' between coordinates"))?;
        let x = x
            .parse()
            .map_err(|e| GeometryError::parse(s, format!("bad x coordinate ({e})")))?;
        let y = y
            .parse()
            .map_err(|e| GeometryError::parse(s, format!("bad y coordinate ({e})")))?;

        Ok(Self { x, y })
    }
}
