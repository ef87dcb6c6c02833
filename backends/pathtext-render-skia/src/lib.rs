//! tiny-skia Outline Sink - morphed outlines to pixels
//!
//! The final stop for a text-on-path run: a [`SkiaSurface`] accepts each
//! morphed outline and fills it into an RGBA pixmap with tiny-skia's
//! winding-rule rasterizer. Hosts take the pixmap from there; encoding or
//! presenting it is their business, not this crate's.

use kurbo::{BezPath, PathEl};
use pathtext::{
    error::{RenderError, Result},
    traits::{OutlineSink, PaintStyle},
};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

/// A fixed-size RGBA surface that fills whatever it is handed
pub struct SkiaSurface {
    pixmap: Pixmap,
}

impl SkiaSurface {
    /// Allocate a transparent surface of the given pixel size
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    /// Flood the surface with one color (e.g. a white page background)
    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixmap.fill(tiny_skia::Color::from_rgba8(
            color[0], color[1], color[2], color[3],
        ));
    }

    /// The rendered pixels, premultiplied RGBA8
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Give up the surface and keep the pixels
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

impl OutlineSink for SkiaSurface {
    fn submit_outline(&mut self, outline: &BezPath, paint: &PaintStyle) {
        let Some(path) = to_skia_path(outline) else {
            log::debug!("skia sink: dropping unbuildable outline");
            return;
        };

        let mut sk_paint = Paint::default();
        let [r, g, b, a] = paint.color;
        sk_paint.set_color_rgba8(r, g, b, a);
        sk_paint.anti_alias = paint.anti_alias;

        self.pixmap
            .fill_path(&path, &sk_paint, FillRule::Winding, Transform::identity(), None);
    }
}

/// Translate kurbo's path format into tiny-skia's native format
///
/// Returns `None` for outlines tiny-skia cannot represent (empty paths,
/// non-finite coordinates).
fn to_skia_path(outline: &BezPath) -> Option<Path> {
    let mut builder = PathBuilder::new();
    for element in outline.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            }
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
