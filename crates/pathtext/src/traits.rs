//! The contracts that connect the core to the outside world
//!
//! The morphing engine is pure geometry; fonts and pixels live behind these
//! two traits. Swap in any font stack or any rasterizer without touching
//! the core.
//!
//! ## The Players
//!
//! - [`FontSource`] - Turns text into glyph ids, advances, and outlines
//! - [`OutlineSink`] - Receives finished outlines, ready to fill

use crate::types::GlyphId;
use kurbo::BezPath;

/// Where text becomes geometry
///
/// A font source resolves a string into glyphs and hands out their
/// advances and outlines, all in the same units as the guide curve
/// (typically pixels at a chosen text size).
///
/// ```ignore
/// struct MyFont;
///
/// impl FontSource for MyFont {
///     fn text_to_glyphs(&self, text: &str) -> Vec<GlyphId> {
///         text.chars().map(|c| c as u32).collect()
///     }
///
///     fn glyph_advances(&self, glyphs: &[GlyphId]) -> Vec<f64> {
///         glyphs.iter().map(|_| 10.0).collect()
///     }
///
///     fn glyph_outline(&self, glyph: GlyphId) -> Option<BezPath> {
///         None // a blank font: everything is whitespace
///     }
/// }
/// ```
pub trait FontSource: Send + Sync {
    /// Resolve a string into an ordered glyph sequence
    fn text_to_glyphs(&self, text: &str) -> Vec<GlyphId>;

    /// One advance width per glyph, parallel to the input slice
    ///
    /// Advances determine how far the arc-length cursor moves after each
    /// glyph, whether or not the glyph is drawn.
    fn glyph_advances(&self, glyphs: &[GlyphId]) -> Vec<f64>;

    /// The vector shape of one glyph, origin at its advance start
    ///
    /// Returns `None` when there is nothing to draw (whitespace, glyphs
    /// without outline data). The run driver skips such glyphs but still
    /// consumes their advance.
    fn glyph_outline(&self, glyph: GlyphId) -> Option<BezPath>;
}

/// Where finished outlines go
///
/// Fire-and-forget: the core submits each morphed outline once, in
/// left-to-right run order, and never reads anything back.
pub trait OutlineSink {
    /// Accept one morphed outline with the paint the caller asked for
    fn submit_outline(&mut self, outline: &BezPath, paint: &PaintStyle);
}

/// How an outline should be filled
///
/// Carried through the run driver untouched; only the sink interprets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// RGBA, non-premultiplied
    pub color: [u8; 4],
    pub anti_alias: bool,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            anti_alias: true,
        }
    }
}
