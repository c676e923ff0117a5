use super::Vertex;
use crate::core::traits::Real;

/// Mean Earth radius in meters used for great-circle lengths (spherical
/// datum).
pub const EARTH_RADIUS_M: f64 = 6_370_997.0;

/// Controls how polyline lengths are measured.
///
/// The mode is always an explicit argument threaded through callers; there
/// is no process-wide toggle. Only [LengthMode::Flat] is defined for polygon
/// *area*.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LengthMode {
    /// Euclidean distance in plane coordinates.
    Flat,
    /// Great-circle distance treating coordinates as (longitude, latitude)
    /// degrees on a sphere of radius [EARTH_RADIUS_M].
    GreatCircle,
}

/// Computes the signed shoelace area of the implicitly closed ring.
///
/// The sign is the hole-orientation signal: negative area marks a hole ring.
/// Invariant under cyclic rotation of the vertex list. Rings with fewer than
/// 3 vertices have zero area.
pub fn signed_area<T>(vertices: &[Vertex<T>]) -> T
where
    T: Real,
{
    let n = vertices.len();
    if n < 3 {
        return T::zero();
    }

    let mut sum = T::zero();
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        sum = sum + p.x * q.y - q.x * p.y;
    }

    sum / T::two()
}

fn great_circle_distance<T>(p: Vertex<T>, q: Vertex<T>) -> T
where
    T: Real,
{
    let d2r = T::deg_to_rad();
    let lat1 = p.y * d2r;
    let lat2 = q.y * d2r;
    let dlon = (q.x - p.x) * d2r;

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    // rounding can push the cosine slightly outside the acos domain
    let clamped = cos_angle.min(T::one()).max(-T::one());
    clamped.acos() * T::from(EARTH_RADIUS_M).unwrap()
}

/// Sums consecutive-vertex distances over an open vertex sequence.
///
/// [LengthMode::GreatCircle] converts coordinates to radians and sums
/// `acos` angular distances scaled by [EARTH_RADIUS_M]; [LengthMode::Flat]
/// is Euclidean. The result is always non-negative.
pub fn polyline_length<T>(vertices: &[Vertex<T>], mode: LengthMode) -> T
where
    T: Real,
{
    let mut total = T::zero();
    for pair in vertices.windows(2) {
        let d = match mode {
            LengthMode::Flat => pair[0].distance_to(pair[1]),
            LengthMode::GreatCircle => great_circle_distance(pair[0], pair[1]),
        };
        total = total + d;
    }

    total.abs()
}
