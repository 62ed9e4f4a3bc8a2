use std::{
    f64::consts::PI,
    ops::{Add, Mul, Sub},
};

use serde::{Deserialize, Serialize};

///
/// Distance between a cell center and each of its corners.
///
pub const CELL_RADIUS: f64 = 30.0;

///
/// Angle between two corners of a hexagon.
///
pub const ANGLE: f64 = 2.0 * PI / 6.0;

/// Relative tolerance for collinearity. Scaled by the lengths of the two
/// vectors spanning the orientation test, so it holds far from the origin too.
const COLLINEAR_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.squared_magnitude().sqrt()
    }

    pub fn squared_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    ///
    /// z component of the 3D cross product.
    ///
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    ///
    /// Unit vector pointing in the same direction.
    /// The zero vector has no direction and yields `None`.
    ///
    pub fn unit(&self) -> Option<Vector2> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            None
        } else {
            Some(*self * (1.0 / magnitude))
        }
    }

    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.y, -self.x)
    }

    pub fn is_in_range_of_point(&self, center: Vector2, radius: f64) -> bool {
        (*self - center).squared_magnitude() <= radius * radius
    }

    ///
    /// Whether this point lies within `threshold` of the segment `a`-`b`.
    ///
    /// The point has to project between the endpoints, points near the infinite
    /// extension of the line do not count.
    ///
    pub fn is_on_line(&self, a: Vector2, b: Vector2, threshold: f64) -> bool {
        let a_to_b = b - a;
        let a_to_self = *self - a;

        let len = a_to_b.squared_magnitude();
        if len == 0.0 {
            return false;
        }
        let dot = a_to_b.dot(a_to_self);
        let distance = a_to_b.cross(a_to_self).abs() / len.sqrt();

        distance <= threshold && dot >= 0.0 && dot <= len
    }

    ///
    /// Canvas position of the center of cell (`row`, `column`).
    ///
    /// Odd columns are shifted down by half a cell.
    ///
    pub fn grid_to_canvas_position(row: usize, column: usize) -> Vector2 {
        let r = CELL_RADIUS;
        let x = column as f64 * (r + r * ANGLE.cos());
        let mut y = row as f64 * (2.0 * r * ANGLE.sin());
        if column % 2 == 1 {
            y += r * ANGLE.sin();
        }
        Vector2::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

fn orientation(p: Vector2, q: Vector2, r: Vector2) -> Orientation {
    let value = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    let scale = ((q - p).magnitude() * (r - q).magnitude()).max(1.0);
    if value.abs() <= COLLINEAR_EPSILON * scale {
        Orientation::Collinear
    } else if value > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

///
/// Given collinear `p`, `q`, `r`: does `q` lie on segment `p`-`r`?
///
fn on_segment(p: Vector2, q: Vector2, r: Vector2) -> bool {
    q.x <= p.x.max(r.x) + COLLINEAR_EPSILON
        && q.x >= p.x.min(r.x) - COLLINEAR_EPSILON
        && q.y <= p.y.max(r.y) + COLLINEAR_EPSILON
        && q.y >= p.y.min(r.y) - COLLINEAR_EPSILON
}

///
/// Whether segments `p1`-`q1` and `p2`-`q2` cross or touch.
///
/// Collinear segments intersect when they overlap, including a shared endpoint.
///
pub fn intersects(p1: Vector2, q1: Vector2, p2: Vector2, q2: Vector2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}
