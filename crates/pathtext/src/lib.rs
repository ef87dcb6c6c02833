//! Pathtext: text that bends with a curve
//!
//! Give it a string, a font, and a guide curve; it re-projects every point
//! of every glyph outline so the text sits on the curve and bends with it
//! at the correct arc-length position.
//!
//! ## The Pipeline
//!
//! Every run follows the same three steps:
//!
//! 1. **Sample** - [`GuideCurve`] measures the guide once and answers
//!    arc-length queries with a position and unit tangent
//! 2. **Morph** - [`morph_outline`] rewrites each glyph outline in the
//!    curve's local tangent/normal frame
//! 3. **Drive** - [`TextOnPath`] walks the glyph run, advances the cursor,
//!    and hands finished outlines to an [`OutlineSink`]
//!
//! The core is pure geometry: fonts and rasterizers stay behind the
//! [`FontSource`] and [`OutlineSink`] traits, so any backend can host it.
//!
//! ## Bend Your First Run
//!
//! ```rust,no_run
//! use pathtext::{PaintStyle, TextOnPath, types::RunOptions};
//! # use pathtext::traits::{FontSource, OutlineSink};
//! # fn load_font() -> Box<dyn FontSource> { unimplemented!() }
//! # fn surface() -> Box<dyn OutlineSink> { unimplemented!() }
//!
//! let mut guide = kurbo::BezPath::new();
//! guide.move_to((20.0, 200.0));
//! guide.quad_to((250.0, 20.0), (480.0, 200.0));
//!
//! let font = load_font();
//! let mut sink = surface();
//! let run = TextOnPath::new(&guide);
//! run.render(
//!     "Follow the curve",
//!     font.as_ref(),
//!     &RunOptions::default(),
//!     &PaintStyle::default(),
//!     sink.as_mut(),
//! );
//! ```
//!
//! With the `parallel` feature, glyph morphing fans out across a rayon
//! pool; cursor positions are a prefix sum computed up front, and
//! submission order is unchanged.

pub mod error;
pub mod morph;
pub mod run;
pub mod sampler;
pub mod traits;

pub use error::{PathTextError, Result};
pub use morph::{morph_outline, morph_point};
pub use run::TextOnPath;
pub use sampler::{ArcSample, GuideCurve};
pub use traits::{FontSource, OutlineSink, PaintStyle};

/// The small value types carried through a run
pub mod types {
    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;

    /// Where the run sits relative to the curve's span
    ///
    /// An input hook, not a layout engine: the shift is computed once from
    /// the run's total advance and added to `h_offset`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TextAlign {
        #[default]
        Start,
        Center,
        End,
    }

    /// Caller-supplied knobs for one run
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct RunOptions {
        /// Arc-length distance at which the first glyph starts
        pub h_offset: f64,
        /// Uniform displacement added to every morphed point's y,
        /// after the normal displacement
        pub v_offset: f64,
        pub align: TextAlign,
    }

    /// One glyph after layout: its starting cursor and, if drawable,
    /// its morphed outline
    #[derive(Debug, Clone)]
    pub struct PlacedGlyph {
        pub id: GlyphId,
        /// Arc-length cursor at which this glyph starts
        pub cursor: f64,
        /// `None` for glyphs that consume advance without drawing
        pub outline: Option<kurbo::BezPath>,
    }
}
