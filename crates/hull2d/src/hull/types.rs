//! Value types shared by both hull strategies.

/// A point in the plane with exact integer coordinates.
///
/// Plain value type: equality is exact equality on both coordinates, and
/// duplicate coordinate pairs are indistinguishable.
pub type Point = nalgebra::Point2<i64>;

/// Turn direction of an ordered point triplet (p, q, r).
///
/// Follows the mathematical convention for y-up axes: a positive cross
/// product of (q − p) and (r − p) is a left turn, reported as
/// `CounterClockwise`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}
