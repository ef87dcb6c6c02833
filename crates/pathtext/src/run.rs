//! The run driver: from a string to outlines on a curve
//!
//! [`TextOnPath`] owns the measured guide curve and walks a text run along
//! it: resolve glyphs, advance an arc-length cursor per glyph, morph each
//! drawable outline at its cursor, and hand the results to a sink in
//! left-to-right order.
//!
//! Edge-case policy, in one place:
//!
//! - an empty resolved run submits nothing
//! - a guide curve with no measurable length draws nothing at all
//! - once the cursor passes the end of the curve the *whole* run stops;
//!   later glyphs are dropped rather than restarted somewhere visible
//! - a glyph with no outline (whitespace, missing glyph data) is skipped
//!   but still consumes its advance width

use crate::{
    morph::morph_outline,
    sampler::GuideCurve,
    traits::{FontSource, OutlineSink, PaintStyle},
    types::{GlyphId, PlacedGlyph, RunOptions, TextAlign},
};
use kurbo::BezPath;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A text run bound to one guide curve
///
/// Construction measures the curve once; [`layout`](TextOnPath::layout)
/// and [`render`](TextOnPath::render) may then be called any number of
/// times with different texts, fonts, or options.
pub struct TextOnPath {
    curve: GuideCurve,
}

impl TextOnPath {
    /// Measure `guide` (first contour only) and bind a run to it
    pub fn new(guide: &BezPath) -> Self {
        Self {
            curve: GuideCurve::new(guide),
        }
    }

    /// Bind a run to an already-measured curve
    pub fn from_curve(curve: GuideCurve) -> Self {
        Self { curve }
    }

    /// The measured guide curve
    pub fn curve(&self) -> &GuideCurve {
        &self.curve
    }

    /// Place and morph every glyph of `text` without drawing anything
    ///
    /// This is the pure half of the driver. Each returned entry carries the
    /// glyph's starting cursor and, for drawable glyphs, its morphed
    /// outline; skipped glyphs keep `outline: None`. Glyphs cut off by the
    /// end of the curve do not appear at all.
    pub fn layout(
        &self,
        text: &str,
        font: &dyn FontSource,
        options: &RunOptions,
    ) -> Vec<PlacedGlyph> {
        let length = self.curve.length();
        if length == 0.0 {
            log::debug!("text-on-path: guide curve has no measurable length, nothing to draw");
            return Vec::new();
        }

        let glyphs = font.text_to_glyphs(text);
        if glyphs.is_empty() {
            return Vec::new();
        }
        let advances = font.glyph_advances(&glyphs);
        debug_assert_eq!(glyphs.len(), advances.len());

        let total_advance: f64 = advances.iter().sum();
        let mut cursor = options.h_offset + alignment_shift(options.align, total_advance, length);

        // Cursor positions are a prefix sum of advances, fixed before any
        // morphing happens. That keeps the morph per glyph independent.
        let mut pending: Vec<(GlyphId, f64)> = Vec::with_capacity(glyphs.len());
        for (&id, &advance) in glyphs.iter().zip(&advances) {
            if cursor > length {
                log::debug!(
                    "text-on-path: run truncated at glyph {} of {} (cursor {:.2} > length {:.2})",
                    pending.len(),
                    glyphs.len(),
                    cursor,
                    length
                );
                break;
            }
            pending.push((id, cursor));
            cursor += advance;
        }

        self.morph_pending(font, options, pending)
    }

    #[cfg(not(feature = "parallel"))]
    fn morph_pending(
        &self,
        font: &dyn FontSource,
        options: &RunOptions,
        pending: Vec<(GlyphId, f64)>,
    ) -> Vec<PlacedGlyph> {
        pending
            .into_iter()
            .map(|(id, cursor)| self.place(font, options, id, cursor))
            .collect()
    }

    /// Morph glyphs concurrently; output order still matches run order.
    #[cfg(feature = "parallel")]
    fn morph_pending(
        &self,
        font: &dyn FontSource,
        options: &RunOptions,
        pending: Vec<(GlyphId, f64)>,
    ) -> Vec<PlacedGlyph> {
        pending
            .into_par_iter()
            .map(|(id, cursor)| self.place(font, options, id, cursor))
            .collect()
    }

    fn place(
        &self,
        font: &dyn FontSource,
        options: &RunOptions,
        id: GlyphId,
        cursor: f64,
    ) -> PlacedGlyph {
        let outline = font
            .glyph_outline(id)
            .map(|outline| morph_outline(&outline, &self.curve, cursor, options.v_offset));
        if outline.is_none() {
            log::trace!("text-on-path: glyph {id} has no outline, advancing only");
        }
        PlacedGlyph { id, cursor, outline }
    }

    /// Lay out `text` and submit every drawable outline to `sink`
    ///
    /// Submission is fire-and-forget and strictly in run order, so sinks
    /// with order-dependent blending behave the same whether or not layout
    /// ran in parallel.
    pub fn render(
        &self,
        text: &str,
        font: &dyn FontSource,
        options: &RunOptions,
        paint: &PaintStyle,
        sink: &mut dyn OutlineSink,
    ) {
        let placed = self.layout(text, font, options);
        let mut drawn = 0usize;
        for glyph in &placed {
            if let Some(outline) = &glyph.outline {
                sink.submit_outline(outline, paint);
                drawn += 1;
            }
        }
        log::debug!(
            "text-on-path: {} glyphs placed, {} drawn",
            placed.len(),
            drawn
        );
    }
}

/// Starting-cursor shift for the requested alignment
///
/// Center and end alignment measure the whole run against the curve; a run
/// longer than the curve shifts negative, which the per-glyph clamp then
/// absorbs at the start.
fn alignment_shift(align: TextAlign, total_advance: f64, length: f64) -> f64 {
    match align {
        TextAlign::Start => 0.0,
        TextAlign::Center => (length - total_advance) / 2.0,
        TextAlign::End => length - total_advance,
    }
}
