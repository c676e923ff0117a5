//! Demonstrates the segment intersection primitive and its result cases.

use spatial_surrogates::core::math::{seg_seg_intr, vertex, SegSegIntr};

fn describe(result: SegSegIntr) -> String {
    match result {
        SegSegIntr::NoIntersect => "no intersect".to_string(),
        SegSegIntr::TrueIntersect { point } => {
            format!("proper intersect at ({}, {})", point.x, point.y)
        }
        SegSegIntr::VertexTouch { point } => {
            format!("vertex touch at ({}, {})", point.x, point.y)
        }
        SegSegIntr::Overlapping { kind, start, end } => format!(
            "collinear overlap {:?} from ({}, {}) to ({}, {})",
            kind, start.x, start.y, end.x, end.y
        ),
    }
}

fn main() {
    let eps = 1e-5;

    // crossing diagonals
    let result = seg_seg_intr(
        vertex(-1.0, -1.0),
        vertex(1.0, 1.0),
        vertex(-1.0, 1.0),
        vertex(1.0, -1.0),
        eps,
    );
    println!("diagonals: {}", describe(result));

    // segments sharing an endpoint
    let result = seg_seg_intr(
        vertex(0.0, 0.0),
        vertex(1.0, 1.0),
        vertex(1.0, 1.0),
        vertex(2.0, 0.0),
        eps,
    );
    println!("shared endpoint: {}", describe(result));

    // collinear partial overlap
    let result = seg_seg_intr(
        vertex(0.0, 0.0),
        vertex(2.0, 0.0),
        vertex(1.0, 0.0),
        vertex(3.0, 0.0),
        eps,
    );
    println!("collinear: {}", describe(result));
}
