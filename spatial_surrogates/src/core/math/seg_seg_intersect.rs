use super::Vertex;
use crate::core::traits::Real;

/// Identifies which two segment endpoints bound a collinear overlap.
///
/// Segments are `a->b` and `c->d`. `EdgeAB`/`EdgeCD` mean one segment lies
/// wholly inside the other; the remaining four name the endpoint pair that
/// bounds a partial overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverlapKind {
    /// `a->b` lies wholly inside `c->d`.
    EdgeAB,
    /// `c->d` lies wholly inside `a->b`.
    EdgeCD,
    /// Overlap bounded by endpoints `a` and `d`.
    EdgeAD,
    /// Overlap bounded by endpoints `b` and `c`.
    EdgeBC,
    /// Overlap bounded by endpoints `a` and `c`.
    EdgeAC,
    /// Overlap bounded by endpoints `b` and `d`.
    EdgeBD,
}

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum SegSegIntr<T = f64> {
    /// No intersect between the segments.
    NoIntersect,
    /// Proper intersect at a single interior point.
    TrueIntersect { point: Vertex<T> },
    /// Intersect coincides with an endpoint of one or both segments.
    VertexTouch { point: Vertex<T> },
    /// Segments are collinear and share a nonzero extent.
    Overlapping {
        kind: OverlapKind,
        start: Vertex<T>,
        end: Vertex<T>,
    },
}

#[inline]
fn min_max<T: PartialOrd>(v1: T, v2: T) -> (T, T) {
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Tests whether `r` lies within the extent of collinear segment `p->q`.
///
/// Collinearity of the three points is a precondition; only the dominant
/// axis is range checked.
fn between<T>(p: Vertex<T>, q: Vertex<T>, r: Vertex<T>, eps: T) -> bool
where
    T: Real,
{
    if (p.x - q.x).abs() > (p.y - q.y).abs() {
        let (lo, hi) = min_max(p.x, q.x);
        r.x.fuzzy_in_range_eps(lo, hi, eps)
    } else {
        let (lo, hi) = min_max(p.y, q.y);
        r.y.fuzzy_in_range_eps(lo, hi, eps)
    }
}

/// Finds the intersect between line segments `a->b` and `c->d`.
///
/// Solves the 2x2 parametric system using perpendicular dot products
/// (<http://geomalgorithms.com/a05-_intersect-1.html>); a near-zero
/// denominator delegates to the parallel/collinear case which classifies any
/// shared extent by the endpoint pair bounding it.
///
/// # Result cases
///
/// * [SegSegIntr::NoIntersect]: segments are disjoint, or parallel and not
///   collinear, or collinear without shared extent.
/// * [SegSegIntr::TrueIntersect]: single interior crossing point.
/// * [SegSegIntr::VertexTouch]: the crossing point coincides with a segment
///   endpoint (shared endpoints, end-to-end collinear touches, and degenerate
///   point segments all land here).
/// * [SegSegIntr::Overlapping]: collinear overlap of nonzero extent; `start`
///   and `end` are the two bounding endpoints named by `kind`.
///
/// Swapping the segment pair (`seg_seg_intr(c, d, a, b, eps)`) reports the
/// same point(s) within `eps` and an equivalent classification.
pub fn seg_seg_intr<T>(
    a: Vertex<T>,
    b: Vertex<T>,
    c: Vertex<T>,
    d: Vertex<T>,
    pos_equal_eps: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    let eps = pos_equal_eps;
    let v = b - a;
    let u = d - c;
    let w = a - c;
    let v_pdot_u = v.perp_dot(u);

    // segment lengths scale the parametric t values for fuzzy comparing so
    // the epsilon is applied at position scale
    let seg1_length = v.length();
    let seg2_length = u.length();

    if !v_pdot_u.fuzzy_eq_zero_eps(eps) {
        // segments not parallel or collinear
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps)
            || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps)
        {
            return NoIntersect;
        }

        let point = a + v.scale(seg1_t);
        // snap to an endpoint when the crossing lands on one
        for endpoint in [a, b, c, d] {
            if point.fuzzy_eq_eps(endpoint, eps) {
                return VertexTouch { point: endpoint };
            }
        }
        return TrueIntersect { point };
    }

    // segments are parallel and possibly collinear
    let v_pdot_w = v.perp_dot(w);
    let u_pdot_w = u.perp_dot(w);
    if !v_pdot_w.fuzzy_eq_zero_eps(eps) || !u_pdot_w.fuzzy_eq_zero_eps(eps) {
        // parallel and not collinear so no intersect
        return NoIntersect;
    }

    // either collinear or degenerate (segments are single points)
    let v_is_point = a.fuzzy_eq_eps(b, eps);
    let u_is_point = c.fuzzy_eq_eps(d, eps);

    if v_is_point && u_is_point {
        if a.fuzzy_eq_eps(c, eps) {
            return VertexTouch { point: a };
        }
        return NoIntersect;
    }

    if v_is_point {
        if between(c, d, a, eps) {
            return VertexTouch { point: a };
        }
        return NoIntersect;
    }

    if u_is_point {
        if between(a, b, c, eps) {
            return VertexTouch { point: c };
        }
        return NoIntersect;
    }

    // collinear with nonzero lengths, classify the shared extent
    let c_in = between(a, b, c, eps);
    let d_in = between(a, b, d, eps);
    let a_in = between(c, d, a, eps);
    let b_in = between(c, d, b, eps);

    let overlap = |kind, start: Vertex<T>, end: Vertex<T>| {
        if start.fuzzy_eq_eps(end, eps) {
            // extent degenerates to an end-to-end touch
            VertexTouch { point: start }
        } else {
            Overlapping { kind, start, end }
        }
    };

    if c_in && d_in {
        return overlap(OverlapKind::EdgeCD, c, d);
    }
    if a_in && b_in {
        return overlap(OverlapKind::EdgeAB, a, b);
    }
    if c_in && a_in {
        return overlap(OverlapKind::EdgeAC, a, c);
    }
    if c_in && b_in {
        return overlap(OverlapKind::EdgeBC, b, c);
    }
    if d_in && a_in {
        return overlap(OverlapKind::EdgeAD, a, d);
    }
    if d_in && b_in {
        return overlap(OverlapKind::EdgeBD, b, d);
    }

    NoIntersect
}
