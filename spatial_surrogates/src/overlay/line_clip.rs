use crate::core::math::{point_in_ring, seg_seg_intr, PointInRing, SegSegIntr, Vertex};
use crate::geom::{MultiShape, Ring};

/// Classification of an intersection-table entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum IsectClass {
    /// Segment endpoint lying inside the polygon ring.
    In,
    /// Bounding endpoint of a collinear overlap with a polygon edge.
    Edge,
    /// Intersection coinciding with a vertex of either segment.
    Vtx,
    /// Proper interior crossing.
    Isc,
}

#[derive(Debug, Copy, Clone)]
struct IsectEntry {
    point: Vertex,
    class: IsectClass,
}

/// Sorts the table by position along the segment `v0->v1`: by x then y,
/// directionally, matching the segment's own endpoint order.
fn sort_along_segment(table: &mut [IsectEntry], v0: Vertex, v1: Vertex) {
    if v0.x < v1.x {
        table.sort_by(|a, b| a.point.x.total_cmp(&b.point.x));
    } else if v0.x > v1.x {
        table.sort_by(|a, b| b.point.x.total_cmp(&a.point.x));
    } else if v0.y < v1.y {
        table.sort_by(|a, b| a.point.y.total_cmp(&b.point.y));
    } else {
        table.sort_by(|a, b| b.point.y.total_cmp(&a.point.y));
    }
}

/// Appends the sub-segment `p0->p1` to the run under construction.
///
/// Consecutive sub-segments sharing an endpoint extend the current output
/// ring; a gap flushes it and starts a new one.
fn emit_sub_segment(
    p0: Vertex,
    p1: Vertex,
    current: &mut Option<Ring>,
    is_hole: bool,
    eps: f64,
    out: &mut MultiShape,
) {
    match current {
        Some(run) if run.last().is_some_and(|last| last.fuzzy_eq_eps(p0, eps)) => {
            run.add_vertex(p1);
        }
        _ => {
            if let Some(done) = current.take() {
                out.add_ring(done, is_hole);
            }
            *current = Some(Ring::from_vertices([p0, p1]));
        }
    }
}

fn clip_ring_against_ring(
    line: &Ring,
    poly: &Ring,
    is_hole: bool,
    eps: f64,
    out: &mut MultiShape,
) {
    let verts = &line.vertices;
    let poly_verts = &poly.vertices;
    if verts.len() < 2 || poly_verts.len() < 3 {
        return;
    }

    let mut current: Option<Ring> = None;
    let mut table: Vec<IsectEntry> = Vec::new();

    for k in 0..verts.len() - 1 {
        let v0 = verts[k];
        let v1 = verts[k + 1];
        table.clear();

        if point_in_ring(v0, poly_verts, eps) == PointInRing::Inside {
            table.push(IsectEntry {
                point: v0,
                class: IsectClass::In,
            });
        }

        let pn = poly_verts.len();
        for n in 0..pn {
            let w0 = poly_verts[n];
            let w1 = poly_verts[(n + 1) % pn];
            match seg_seg_intr(v0, v1, w0, w1, eps) {
                SegSegIntr::NoIntersect => {}
                SegSegIntr::TrueIntersect { point } => table.push(IsectEntry {
                    point,
                    class: IsectClass::Isc,
                }),
                SegSegIntr::VertexTouch { point } => table.push(IsectEntry {
                    point,
                    class: IsectClass::Vtx,
                }),
                SegSegIntr::Overlapping { start, end, .. } => {
                    table.push(IsectEntry {
                        point: start,
                        class: IsectClass::Edge,
                    });
                    table.push(IsectEntry {
                        point: end,
                        class: IsectClass::Edge,
                    });
                }
            }
        }

        if point_in_ring(v1, poly_verts, eps) == PointInRing::Inside {
            table.push(IsectEntry {
                point: v1,
                class: IsectClass::In,
            });
        }

        if table.len() < 2 {
            continue;
        }

        sort_along_segment(&mut table, v0, v1);

        // pairwise walk over the sorted table: a sub-segment is emitted when
        // an endpoint is known inside, when both endpoints lie on the
        // boundary of a collinear overlap (emitted once, never
        // double-counted), and otherwise decided by re-testing its midpoint
        let mut prev = 0usize;
        for n in 1..table.len() {
            if table[n].point.fuzzy_eq_eps(table[prev].point, eps) {
                // duplicate position, keep the earlier classification
                continue;
            }

            let emit = match (table[prev].class, table[n].class) {
                (IsectClass::In, _) | (_, IsectClass::In) => true,
                (IsectClass::Edge, IsectClass::Edge) => true,
                _ => {
                    let mid = table[prev].point.midpoint(table[n].point);
                    point_in_ring(mid, poly_verts, eps) != PointInRing::Outside
                }
            };

            if emit {
                emit_sub_segment(
                    table[prev].point,
                    table[n].point,
                    &mut current,
                    is_hole,
                    eps,
                    out,
                );
            }
            prev = n;
        }
    }

    if let Some(done) = current.take() {
        out.add_ring(done, is_hole);
    }
}

/// Clips line geometry against a polygon's rings, returning the portions of
/// the lines that fall within the polygon.
///
/// Works ring-by-ring: each line ring is clipped against each polygon ring
/// independently. Output rings inherit the source line ring's hole flag. An
/// empty result means the line lies entirely outside.
pub fn line_clip(line: &MultiShape, polygon: &MultiShape, pos_equal_eps: f64) -> MultiShape {
    let mut out = MultiShape::new();
    for (line_ring, is_hole) in line.iter() {
        for poly_ring in polygon.rings() {
            clip_ring_against_ring(line_ring, poly_ring, is_hole, pos_equal_eps, &mut out);
        }
    }
    out
}
