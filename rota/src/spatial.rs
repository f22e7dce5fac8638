//! Geographic types.

use geo::euclidean_distance::EuclideanDistance;
use geo::{LineString, Point, Rect};

#[doc(hidden)]
pub use geo::Coordinate;

/// Planar coordinate of a node. For geographic maps `x` is the longitude and `y` the latitude.
pub type Position = Coordinate<f64>;

pub type Polyline = LineString<f64>;

pub type BoundingBox = Rect<f64>;

/// Straight-line distance between two positions, in coordinate units.
pub fn euclidean_distance(from: &Position, to: &Position) -> f64 {
  Point::from(*from).euclidean_distance(&Point::from(*to))
}

pub fn bounding_box<P: Iterator<Item = Position>>(points: P) -> Option<BoundingBox> {
  let mut extremes: Option<(Position, Position)> = None;
  for p in points {
    let (bl, tr) = extremes.get_or_insert((p, p));
    bl.x = bl.x.min(p.x);
    bl.y = bl.y.min(p.y);
    tr.x = tr.x.max(p.x);
    tr.y = tr.y.max(p.y);
  }

  extremes.map(|e| BoundingBox::new(e.0, e.1))
}
