use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D plane coordinate pair.
///
/// Coordinates are double precision by default; the whole geometry core is
/// generic over [Real] with `f64` as the default type parameter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vertex<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vertex<T>
where
    T: Real,
{
    /// Create a new vertex with x and y coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vertex { x, y }
    }

    /// Dot product.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector from the origin to this vertex.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector from the origin to this vertex.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Euclidean distance to another vertex.
    pub fn distance_to(&self, other: Self) -> T {
        (other - *self).length()
    }

    /// Midpoint of the segment from this vertex to `other`.
    pub fn midpoint(&self, other: Self) -> Self {
        vertex((self.x + other.x) / T::two(), (self.y + other.y) / T::two())
    }

    /// Uniformly scale both coordinates by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        vertex(scale_factor * self.x, scale_factor * self.y)
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        // translate to origin
        let translated = *self - origin;

        // rotate
        let s = angle.sin();
        let c = angle.cos();
        let rotated = vertex(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        );

        // translate back
        rotated + origin
    }

    /// Fuzzy equal comparison with another vertex using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vertex using `T::fuzzy_epsilon()`.
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Shorthand constructor free function.
#[inline(always)]
pub fn vertex<T>(x: T, y: T) -> Vertex<T>
where
    T: Real,
{
    Vertex::new(x, y)
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vertex<T>> for Vertex<T> {
            type Output = Vertex<T>;
            fn $op_func(self, rhs: Vertex<T>) -> Self::Output {
                Vertex::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);

impl<T: Real> ops::Neg for Vertex<T> {
    type Output = Vertex<T>;
    fn neg(self) -> Self::Output {
        Vertex::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn ops() {
        let v1 = vertex(4.0, 5.0);
        let v2 = vertex(1.0, 2.0);
        assert!((v1 + v2).fuzzy_eq(vertex(5.0, 7.0)));
        assert!((v1 - v2).fuzzy_eq(vertex(3.0, 3.0)));
        assert!((-v1).fuzzy_eq(vertex(-4.0, -5.0)));
    }

    #[test]
    fn midpoint_and_distance() {
        let v1 = vertex(0.0, 0.0);
        let v2 = vertex(3.0, 4.0);
        assert!(v1.midpoint(v2).fuzzy_eq(vertex(1.5, 2.0)));
        assert!(v1.distance_to(v2).fuzzy_eq(5.0));
    }
}
