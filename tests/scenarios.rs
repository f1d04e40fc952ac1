use anyhow::Result;
use polyprim::{GeometryError, Point, Polygon, Segment, SegmentIntersection};

fn square(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Result<Polygon> {
    Ok(Polygon::new(vec![
        Point::new(xmin, ymin),
        Point::new(xmax, ymin),
        Point::new(xmax, ymax),
        Point::new(xmin, ymax),
    ])?)
}

#[test]
fn square_area() -> Result<()> {
    let square = square(0, 0, 4, 4)?;

    assert!((square.area() - 16.).abs() < 1e-9);
    Ok(())
}

#[test]
fn square_containment() -> Result<()> {
    let square = square(0, 0, 4, 4)?;

    assert!(square.contains(&Point::new(2, 2)));
    assert!(!square.contains(&Point::new(5, 5)));
    Ok(())
}

#[test]
fn crossing_segments() {
    let s1 = Segment::new(Point::new(0, 0), Point::new(2, 2));
    let s2 = Segment::new(Point::new(0, 2), Point::new(2, 0));

    assert_eq!(s1.intersection(&s2), SegmentIntersection::Intersects([1., 1.]));
}

#[test]
fn disjoint_squares() -> Result<()> {
    let a = square(0, 0, 1, 1)?;
    let b = square(5, 5, 6, 6)?;

    assert!(!a.is_intersect(&b));
    Ok(())
}

#[test]
fn nested_squares() -> Result<()> {
    let outer = square(0, 0, 10, 10)?;
    let inner = square(2, 2, 4, 4)?;

    assert!(outer.is_intersect(&inner));
    Ok(())
}

#[test]
fn segment_against_itself_is_degenerate() {
    let s = Segment::new(Point::new(0, 0), Point::new(3, 1));

    assert!(!s.is_intersect(&s));
}

#[test]
fn polygons_need_three_vertices() {
    let err = Polygon::new(vec![Point::new(0, 0), Point::new(1, 1)]).unwrap_err();

    assert_eq!(err, GeometryError::InvalidPolygon { vertices: 2 });
    assert_eq!(err.to_string(), "A polygon needs at least 3 vertices, got 2.");
}
