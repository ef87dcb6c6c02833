//! Bending glyph outlines onto a curve
//!
//! This is the heart of the engine. A glyph arrives in its own local space:
//! x measured along the baseline from the glyph's advance start, y
//! perpendicular to it. The morph re-reads those coordinates against the
//! guide curve: x becomes an arc-length offset from the run cursor, y
//! becomes a displacement along the curve's normal at that spot.
//!
//! Every point of every command maps independently, control points
//! included. That is deliberately not a rigid transform: a quadratic's
//! control point lands wherever *its own* x says on the curve, which bends
//! the glyph with the path. The trade-off is a slight shape distortion on
//! sharply curved guides; chord-subdivision schemes avoid it at several
//! times the cost and are not implemented here.

use crate::sampler::GuideCurve;
use kurbo::{BezPath, PathEl, Point, Vec2};

/// Map one glyph-local point into world space along the curve
///
/// The sampled distance is `cursor + p.x`, clamped by the curve to
/// `[0, length]`. The normal is the tangent rotated 90° counter-clockwise
/// in y-down coordinates, `(-tangent.y, tangent.x)`; callers on the
/// opposite winding negate y upstream.
pub fn morph_point(p: Point, curve: &GuideCurve, cursor: f64, v_offset: f64) -> Point {
    let sample = curve.sample_at(cursor + p.x);
    let normal = Vec2::new(-sample.tangent.y, sample.tangent.x);
    sample.position + normal * p.y + Vec2::new(0.0, v_offset)
}

/// Re-project a whole outline onto the curve at the given cursor
///
/// The output has exactly the same ordered command kinds as the input;
/// only coordinates change. Deterministic for a given
/// `(outline, cursor, curve, v_offset)`, and NaN-free as long as the
/// sampler's clamp contract holds.
pub fn morph_outline(
    outline: &BezPath,
    curve: &GuideCurve,
    cursor: f64,
    v_offset: f64,
) -> BezPath {
    let mut morphed = BezPath::new();
    for el in outline.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                morphed.move_to(morph_point(p, curve, cursor, v_offset));
            }
            PathEl::LineTo(p) => {
                morphed.line_to(morph_point(p, curve, cursor, v_offset));
            }
            PathEl::QuadTo(c, p) => {
                morphed.quad_to(
                    morph_point(c, curve, cursor, v_offset),
                    morph_point(p, curve, cursor, v_offset),
                );
            }
            PathEl::CurveTo(c1, c2, p) => {
                morphed.curve_to(
                    morph_point(c1, curve, cursor, v_offset),
                    morph_point(c2, curve, cursor, v_offset),
                    morph_point(p, curve, cursor, v_offset),
                );
            }
            PathEl::ClosePath => {
                morphed.close_path();
            }
        }
    }
    morphed
}
