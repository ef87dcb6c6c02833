//! skrifa Font Source - real fonts for the morphing engine
//!
//! Binds the [`pathtext::FontSource`] contract to skrifa's font parsing:
//! charmap lookup for glyph ids, `hmtx` for advances, and skrifa's outline
//! drawing for glyph geometry. Everything leaves this crate already scaled
//! to the requested text size and flipped into y-down canvas coordinates,
//! so the core never sees font units.

use kurbo::BezPath;
use pathtext::{
    error::{FontError, Result},
    traits::FontSource,
    types::GlyphId,
};
use read_fonts::TableProvider;
use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    MetadataProvider,
};

/// A font fixed at one text size
///
/// Owns the raw font bytes and re-parses them per call, the same
/// trade-off skrifa itself encourages: `FontRef` construction is a cheap
/// header read, and holding one would borrow the data for the lifetime of
/// the font.
pub struct ScaledFont {
    data: Vec<u8>,
    size: f64,
    units_per_em: f64,
}

impl ScaledFont {
    /// Wrap raw font bytes, scaled so advances and outlines come out in
    /// units of `size` pixels per em
    pub fn new(data: Vec<u8>, size: f64) -> Result<Self> {
        let font = skrifa::FontRef::new(&data).map_err(|_| FontError::InvalidData)?;
        let units_per_em = font
            .head()
            .map_err(|_| FontError::InvalidData)?
            .units_per_em() as f64;
        font.hmtx().map_err(|_| FontError::MissingMetrics)?;
        Ok(Self {
            data,
            size,
            units_per_em,
        })
    }

    /// Load a font file from disk
    pub fn from_file<P: AsRef<std::path::Path>>(path: P, size: f64) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::new(data, size)
    }

    /// The text size this font was scaled to
    pub fn size(&self) -> f64 {
        self.size
    }

    fn scale(&self) -> f64 {
        self.size / self.units_per_em
    }
}

impl FontSource for ScaledFont {
    fn text_to_glyphs(&self, text: &str) -> Vec<GlyphId> {
        let Ok(font) = skrifa::FontRef::new(&self.data) else {
            return Vec::new();
        };
        let charmap = font.charmap();
        text.chars()
            // .notdef for anything the font does not cover
            .map(|ch| charmap.map(ch).map(|g| g.to_u32()).unwrap_or(0))
            .collect()
    }

    fn glyph_advances(&self, glyphs: &[GlyphId]) -> Vec<f64> {
        let Ok(font) = skrifa::FontRef::new(&self.data) else {
            return vec![0.0; glyphs.len()];
        };
        let Ok(hmtx) = font.hmtx() else {
            return vec![0.0; glyphs.len()];
        };
        let scale = self.scale();
        glyphs
            .iter()
            .map(|&id| {
                let gid = skrifa::GlyphId::new(id);
                hmtx.advance(gid).unwrap_or(0) as f64 * scale
            })
            .collect()
    }

    fn glyph_outline(&self, glyph: GlyphId) -> Option<BezPath> {
        let font = skrifa::FontRef::new(&self.data).ok()?;
        let outlines = font.outline_glyphs();
        let outline = outlines.get(skrifa::GlyphId::new(glyph))?;

        let mut pen = PathPen::default();
        let settings =
            DrawSettings::unhinted(Size::new(self.size as f32), LocationRef::default());
        if let Err(err) = outline.draw(settings, &mut pen) {
            log::warn!("skrifa: outline extraction failed for glyph {glyph}: {err}");
            return None;
        }

        // Whitespace glyphs exist but carry no segments; report them the
        // same way as missing outlines so the driver skips-but-advances.
        if pen.path.elements().is_empty() {
            None
        } else {
            Some(pen.path)
        }
    }
}

/// Collects skrifa's draw callbacks into a kurbo path
///
/// Fonts are y-up, the canvas is y-down, so y negates on the way through.
/// skrifa's `DrawSettings` already scaled to the text size.
#[derive(Default)]
struct PathPen {
    path: BezPath,
}

impl skrifa::outline::OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((f64::from(x), -f64::from(y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((f64::from(x), -f64::from(y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to(
            (f64::from(cx0), -f64::from(cy0)),
            (f64::from(x), -f64::from(y)),
        );
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (f64::from(cx0), -f64::from(cy0)),
            (f64::from(cx1), -f64::from(cy1)),
            (f64::from(x), -f64::from(y)),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
