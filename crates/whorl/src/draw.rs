//! Pattern drawer: renders one segment onto a surface.
//!
//! Each segment is either textured with a registry outline stretched to
//! its box, or falls back to a primitive (a line for zero-width boxes, an
//! ellipse otherwise). Circle shells always take the primitive path.
//! Other shells only fall back for thin boxes in the first 7/8 of the
//! sequence, so the outer lip keeps its full pattern texture even where
//! the boxes get narrow.

use lyon_geom::{point, CubicBezierSegment};

use crate::geometry::{Point, Segment};
use crate::patterns::{scale_to_rect, Pattern};
use crate::surface::Surface;

/// Control-point ratio for approximating a quarter circle with a cubic.
pub const KAPPA: f64 = 0.5522848;

/// Boxes narrower or shorter than this count as thin.
const THIN_PX: f64 = 20.0;

/// Index below which thin boxes fall back to primitives.
#[inline]
pub fn thin_threshold(total: usize) -> usize {
    total * 7 / 8
}

/// Does segment `index` of `total` get a primitive instead of its pattern?
pub fn uses_primitive(pattern: Pattern, segment: &Segment, index: usize, total: usize) -> bool {
    let thin = segment.width() < THIN_PX || segment.height() < THIN_PX;
    pattern == Pattern::Circle || (index < thin_threshold(total) && thin)
}

/// Add the path for segment `index` of `total` to `surface`.
///
/// Only builds the path; stroking is up to the caller.
pub fn draw_segment<S: Surface + ?Sized>(
    surface: &mut S,
    pattern: Pattern,
    segment: &Segment,
    index: usize,
    total: usize,
) {
    if uses_primitive(pattern, segment, index, total) {
        draw_primitive(surface, segment);
        return;
    }

    match pattern.shape() {
        Some(_) => draw_outline(surface, pattern, segment),
        None => draw_primitive(surface, segment),
    }
}

/// Line for a zero-width box, inscribed ellipse otherwise.
pub fn draw_primitive<S: Surface + ?Sized>(surface: &mut S, segment: &Segment) {
    if segment.width() == 0.0 {
        surface.move_to(segment.start());
        surface.line_to(segment.end());
        return;
    }

    let arcs = ellipse_arcs(segment);
    surface.move_to(to_point(arcs[0].from));
    for arc in &arcs {
        surface.bezier_curve_to(to_point(arc.ctrl1), to_point(arc.ctrl2), to_point(arc.to));
    }
}

/// The four quarter arcs of the ellipse inscribed in `segment`'s box,
/// starting at the left middle and going clockwise (in screen space).
pub fn ellipse_arcs(segment: &Segment) -> [CubicBezierSegment<f64>; 4] {
    let w = segment.width();
    let h = segment.height();
    let x = segment.start_x.min(segment.end_x);
    let y = segment.start_y.min(segment.end_y);

    let ox = w / 2.0 * KAPPA;
    let oy = h / 2.0 * KAPPA;
    let xe = x + w;
    let ye = y + h;
    let xm = x + w / 2.0;
    let ym = y + h / 2.0;

    [
        CubicBezierSegment {
            from: point(x, ym),
            ctrl1: point(x, ym - oy),
            ctrl2: point(xm - ox, y),
            to: point(xm, y),
        },
        CubicBezierSegment {
            from: point(xm, y),
            ctrl1: point(xm + ox, y),
            ctrl2: point(xe, ym - oy),
            to: point(xe, ym),
        },
        CubicBezierSegment {
            from: point(xe, ym),
            ctrl1: point(xe, ym + oy),
            ctrl2: point(xm + ox, ye),
            to: point(xm, ye),
        },
        CubicBezierSegment {
            from: point(xm, ye),
            ctrl1: point(xm - ox, ye),
            ctrl2: point(x, ym + oy),
            to: point(x, ym),
        },
    ]
}

/// Stretch the pattern outline onto the box and trace it as a closed
/// polyline. The outline is mirrored when the box runs right to left.
fn draw_outline<S: Surface + ?Sized>(surface: &mut S, pattern: Pattern, segment: &Segment) {
    let Some(shape) = pattern.shape() else {
        return;
    };

    let invert = if segment.end_x < segment.start_x { -1.0 } else { 1.0 };
    let points = scale_to_rect(shape, segment.width(), segment.height(), invert);
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    let anchor = Point::new(segment.start_x + first.x, segment.start_y + first.y);
    surface.move_to(anchor);
    for p in rest {
        surface.line_to(Point::new(anchor.x + p.x, anchor.y + p.y));
    }
    surface.close_path();
}

#[inline]
fn to_point(p: lyon_geom::Point<f64>) -> Point {
    Point::new(p.x, p.y)
}
