//! Segment/segment and segment/rectangle intersection in the XZ plane.
//!
//! All queries are pure. Parallel or collinear segments never intersect, and
//! touching exactly at an endpoint does not count as a hit.

use crate::{Rect, Vec2};

/// Intersection point of segments `p1→p2` and `p3→p4`, if they cross strictly
/// inside both.
pub fn segment_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denom = d1.cross(d2);
    if denom == 0.0 {
        return None;
    }

    let offset = p3 - p1;
    let a = offset.cross(d2) / denom;
    let b = offset.cross(d1) / denom;

    if 0.0 < a && a < 1.0 && 0.0 < b && b < 1.0 {
        Some(p1 + d1 * a)
    } else {
        None
    }
}

/// Picks whichever of `a` and `b` lies closer to `reference`. `None` counts as
/// infinitely far; on a tie `a` wins.
#[inline]
pub fn nearest(a: Option<Vec2>, b: Option<Vec2>, reference: Vec2) -> Option<Vec2> {
    match (a, b) {
        (Some(pa), Some(pb)) => {
            if pa.distance(reference) > pb.distance(reference) {
                Some(pb)
            } else {
                Some(pa)
            }
        }
        (None, b) => b,
        (a, None) => a,
    }
}

/// Nearest crossing of `start→end` with any edge of the rectangle at
/// `rect_pos` with extent `rect_size`.
pub fn segment_intersect_rect(
    start: Vec2,
    end: Vec2,
    rect_pos: Vec2,
    rect_size: Vec2,
) -> Option<Vec2> {
    Rect::new(rect_pos, rect_size)
        .edges()
        .into_iter()
        .fold(None, |best, (a, b)| {
            nearest(best, segment_intersect(start, end, a, b), start)
        })
}
