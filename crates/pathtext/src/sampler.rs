//! Arc-length sampling along a guide curve
//!
//! A [`GuideCurve`] wraps caller-supplied path data and answers one
//! question: "where is the curve, and which way does it point, at distance
//! `d` from its start?" The morpher asks it once per glyph point.
//!
//! Only the first contour of the input participates. Text flows along one
//! connected piece of a path; disconnected pieces after it are ignored
//! rather than wrapped onto.

use kurbo::{
    BezPath, CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathEl, PathSeg,
    Point, QuadBez, Vec2,
};

/// Arc-length accuracy for both measurement and inverse lookup.
///
/// A thousandth of a unit is far below visible at text sizes while keeping
/// the Gauss quadrature in kurbo cheap.
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Tangents shorter than this are treated as degenerate.
const TANGENT_EPSILON: f64 = 1e-12;

/// One answer from the curve: where it is and which way it points
///
/// `distance` is the clamped distance that was actually sampled, so a
/// caller asking for `-5.0` on a curve of length 100 gets `distance == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    pub distance: f64,
    pub position: Point,
    /// Unit tangent, or `(1, 0)` where the curve has no usable direction
    pub tangent: Vec2,
}

/// An immutable curve with a precomputed arc-length parameterization
///
/// Built once per text-on-path operation, then queried read-only. Segment
/// lengths and their prefix sums are cached up front so every
/// [`sample_at`](GuideCurve::sample_at) is a cheap lookup plus one inverse
/// arc-length solve inside a single segment.
#[derive(Debug, Clone)]
pub struct GuideCurve {
    segments: Vec<PathSeg>,
    /// Cumulative arc length up to and including each segment
    breaks: Vec<f64>,
    length: f64,
    /// Anchor returned for samples on a zero-length curve
    origin: Point,
}

impl GuideCurve {
    /// Measure the first contour of `path`
    ///
    /// A `ClosePath` contributes its closing line segment and ends the
    /// contour; a second `MoveTo` ends it too. Later contours are ignored.
    pub fn new(path: &BezPath) -> Self {
        let mut segments = Vec::new();
        let mut origin = Point::ZERO;
        let mut start = Point::ZERO;
        let mut cur = Point::ZERO;
        let mut started = false;

        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if started {
                        break;
                    }
                    origin = p;
                    start = p;
                    cur = p;
                    started = true;
                }
                PathEl::LineTo(p) => {
                    segments.push(PathSeg::Line(Line::new(cur, p)));
                    cur = p;
                }
                PathEl::QuadTo(c, p) => {
                    segments.push(PathSeg::Quad(QuadBez::new(cur, c, p)));
                    cur = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    segments.push(PathSeg::Cubic(CubicBez::new(cur, c1, c2, p)));
                    cur = p;
                }
                PathEl::ClosePath => {
                    if cur != start {
                        segments.push(PathSeg::Line(Line::new(cur, start)));
                    }
                    break;
                }
            }
        }

        let mut breaks = Vec::with_capacity(segments.len());
        let mut length = 0.0;
        for seg in &segments {
            length += seg.arclen(ARCLEN_ACCURACY);
            breaks.push(length);
        }

        Self {
            segments,
            breaks,
            length,
            origin,
        }
    }

    /// Total measured arc length of the first contour
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Position and unit tangent at arc-length `distance`
    ///
    /// `distance` is clamped into `[0, length]` first; out-of-range inputs
    /// are expected, since glyph control points can overhang the cursor on
    /// both sides. Pure: no ordering dependency between calls.
    pub fn sample_at(&self, distance: f64) -> ArcSample {
        let distance = distance.clamp(0.0, self.length);
        if self.segments.is_empty() || self.length == 0.0 {
            return ArcSample {
                distance,
                position: self.origin,
                tangent: Vec2::new(1.0, 0.0),
            };
        }

        let idx = self
            .breaks
            .partition_point(|&b| b < distance)
            .min(self.segments.len() - 1);
        let seg = self.segments[idx];
        let seg_start = if idx == 0 { 0.0 } else { self.breaks[idx - 1] };
        let seg_len = self.breaks[idx] - seg_start;
        let local = distance - seg_start;
        // Lines are linear in arc length; the iterative inverse is only
        // needed for genuine curves, and only away from the endpoints.
        let t = if seg_len <= 0.0 || local <= 0.0 {
            0.0
        } else if local >= seg_len {
            1.0
        } else if let PathSeg::Line(_) = seg {
            local / seg_len
        } else {
            seg.inv_arclen(local, ARCLEN_ACCURACY)
        };

        ArcSample {
            distance,
            position: seg.eval(t),
            tangent: unit_tangent(&seg, t),
        }
    }
}

/// Normalized derivative of a segment, with a stable fallback
///
/// Degenerate spots (zero-length lines, cubics with a control point glued
/// to an endpoint) yield a zero derivative; those get the default `(1, 0)`
/// so the morpher never divides by a zero-length tangent.
fn unit_tangent(seg: &PathSeg, t: f64) -> Vec2 {
    let raw = match seg {
        PathSeg::Line(line) => line.p1 - line.p0,
        PathSeg::Quad(quad) => quad.deriv().eval(t).to_vec2(),
        PathSeg::Cubic(cubic) => cubic.deriv().eval(t).to_vec2(),
    };
    let norm = raw.hypot();
    if norm < TANGENT_EPSILON {
        Vec2::new(1.0, 0.0)
    } else {
        raw / norm
    }
}
