//! End-to-end runs through the driver with a mock font and recording sink.

use kurbo::{BezPath, PathEl, Point};
use pathtext::{
    morph_outline,
    traits::{FontSource, OutlineSink, PaintStyle},
    types::{GlyphId, RunOptions, TextAlign},
    TextOnPath,
};

/// A font where every glyph is a simple box and every space is blank.
///
/// Glyph ids are just code points; advances come from a per-font function
/// so tests can exercise uneven runs.
struct BoxFont {
    advance: fn(GlyphId) -> f64,
}

impl BoxFont {
    fn uniform() -> Self {
        Self { advance: |_| 20.0 }
    }

    fn varied() -> Self {
        // 10, 20, 30, 40 or 50 units depending on the code point.
        Self {
            advance: |id| ((id % 5) + 1) as f64 * 10.0,
        }
    }
}

impl FontSource for BoxFont {
    fn text_to_glyphs(&self, text: &str) -> Vec<GlyphId> {
        text.chars().map(|c| c as u32).collect()
    }

    fn glyph_advances(&self, glyphs: &[GlyphId]) -> Vec<f64> {
        glyphs.iter().map(|&id| (self.advance)(id)).collect()
    }

    fn glyph_outline(&self, glyph: GlyphId) -> Option<BezPath> {
        if glyph == ' ' as u32 {
            return None;
        }
        let w = (self.advance)(glyph);
        let mut path = BezPath::new();
        path.move_to((1.0, 0.0));
        path.line_to((w - 1.0, 0.0));
        path.line_to((w - 1.0, -10.0));
        path.line_to((1.0, -10.0));
        path.close_path();
        Some(path)
    }
}

#[derive(Default)]
struct RecordingSink {
    outlines: Vec<BezPath>,
    paints: Vec<PaintStyle>,
}

impl OutlineSink for RecordingSink {
    fn submit_outline(&mut self, outline: &BezPath, paint: &PaintStyle) {
        self.outlines.push(outline.clone());
        self.paints.push(*paint);
    }
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn horizontal_guide(len: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((len, 0.0));
    path
}

fn points_of(path: &BezPath) -> Vec<Point> {
    let mut points = Vec::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(p),
            PathEl::QuadTo(c, p) => points.extend([c, p]),
            PathEl::CurveTo(c1, c2, p) => points.extend([c1, c2, p]),
            PathEl::ClosePath => {}
        }
    }
    points
}

#[test]
fn empty_text_submits_nothing() {
    init_logs();
    let run = TextOnPath::new(&horizontal_guide(100.0));
    let mut sink = RecordingSink::default();
    run.render(
        "",
        &BoxFont::uniform(),
        &RunOptions::default(),
        &PaintStyle::default(),
        &mut sink,
    );
    assert!(sink.outlines.is_empty());
}

#[test]
fn straight_guide_matches_plain_horizontal_layout() {
    let font = BoxFont::uniform();
    let run = TextOnPath::new(&horizontal_guide(1000.0));
    let options = RunOptions {
        h_offset: 5.0,
        v_offset: 7.0,
        ..Default::default()
    };

    let placed = run.layout("AB", &font, &options);
    assert_eq!(placed.len(), 2);

    for (i, glyph) in placed.iter().enumerate() {
        let expected_cursor = 5.0 + 20.0 * i as f64;
        assert_eq!(glyph.cursor, expected_cursor);

        let source = font.glyph_outline(glyph.id).unwrap();
        let morphed = glyph.outline.as_ref().unwrap();
        for (src, dst) in points_of(&source).iter().zip(points_of(morphed)) {
            assert!((dst.x - (src.x + expected_cursor)).abs() < 1e-9);
            assert!((dst.y - (src.y + 7.0)).abs() < 1e-9);
        }
    }
}

#[test]
fn cursors_are_the_prefix_sum_of_advances() {
    let font = BoxFont::varied();
    let run = TextOnPath::new(&horizontal_guide(10_000.0));
    let options = RunOptions {
        h_offset: 12.0,
        ..Default::default()
    };

    let text = "pathtext";
    let glyphs = font.text_to_glyphs(text);
    let advances = font.glyph_advances(&glyphs);
    let placed = run.layout(text, &font, &options);
    assert_eq!(placed.len(), glyphs.len());

    let mut expected = 12.0;
    let mut prev = f64::NEG_INFINITY;
    for (glyph, advance) in placed.iter().zip(&advances) {
        assert_eq!(glyph.cursor, expected);
        assert!(glyph.cursor >= prev);
        prev = glyph.cursor;
        expected += advance;
    }
}

#[test]
fn run_stops_once_the_cursor_leaves_the_curve() {
    init_logs();
    let font = BoxFont::uniform();
    // Four glyphs at 20 units each against a 50-unit curve: cursors
    // 0, 20, 40 fit, 60 does not.
    let run = TextOnPath::new(&horizontal_guide(50.0));
    let mut sink = RecordingSink::default();
    run.render(
        "AAAA",
        &font,
        &RunOptions::default(),
        &PaintStyle::default(),
        &mut sink,
    );
    assert_eq!(sink.outlines.len(), 3);

    // A start offset past the end draws nothing at all.
    let mut sink = RecordingSink::default();
    run.render(
        "AAAA",
        &font,
        &RunOptions {
            h_offset: 60.0,
            ..Default::default()
        },
        &PaintStyle::default(),
        &mut sink,
    );
    assert!(sink.outlines.is_empty());
}

#[test]
fn whitespace_advances_without_drawing() {
    let font = BoxFont::uniform();
    let run = TextOnPath::new(&horizontal_guide(1000.0));
    let options = RunOptions {
        h_offset: 3.0,
        ..Default::default()
    };

    let placed = run.layout("A B", &font, &options);
    assert_eq!(placed.len(), 3);
    assert!(placed[0].outline.is_some());
    assert!(placed[1].outline.is_none());
    assert!(placed[2].outline.is_some());
    // The space consumed its advance: 3 + 20 + 20.
    assert_eq!(placed[2].cursor, 43.0);

    let mut sink = RecordingSink::default();
    run.render("A B", &font, &options, &PaintStyle::default(), &mut sink);
    assert_eq!(sink.outlines.len(), 2);
}

#[test]
fn glyph_overhang_clamps_to_the_curve_end() {
    let font = BoxFont::uniform();
    // 10-unit curve, glyph starting at 8: every box point past the end
    // must land exactly on the endpoint.
    let run = TextOnPath::new(&horizontal_guide(10.0));
    let placed = run.layout(
        "A",
        &font,
        &RunOptions {
            h_offset: 8.0,
            ..Default::default()
        },
    );
    let morphed = placed[0].outline.as_ref().unwrap();
    for p in points_of(morphed) {
        assert!(p.x <= 10.0 + 1e-9);
        assert!(p.x >= 0.0 - 1e-9);
    }
}

#[test]
fn command_kinds_survive_the_whole_drive() {
    let font = BoxFont::uniform();
    let run = TextOnPath::new(&horizontal_guide(200.0));
    let placed = run.layout("A", &font, &RunOptions::default());

    let source = font.glyph_outline('A' as u32).unwrap();
    let morphed = placed[0].outline.as_ref().unwrap();
    let kinds = |path: &BezPath| {
        path.elements()
            .iter()
            .map(std::mem::discriminant)
            .collect::<Vec<_>>()
    };
    assert_eq!(kinds(morphed), kinds(&source));
}

#[test]
fn zero_length_guide_draws_nothing() {
    // A guide that measures to nothing has nowhere to put text; the run
    // is a silent no-op, same as an empty string.
    let font = BoxFont::uniform();
    let mut guide = BezPath::new();
    guide.move_to((30.0, 40.0));
    let run = TextOnPath::new(&guide);

    assert!(run.layout("AB", &font, &RunOptions::default()).is_empty());

    let mut sink = RecordingSink::default();
    run.render(
        "AB",
        &font,
        &RunOptions::default(),
        &PaintStyle::default(),
        &mut sink,
    );
    assert!(sink.outlines.is_empty());

    // An entirely empty guide behaves the same way.
    let run = TextOnPath::new(&BezPath::new());
    let mut sink = RecordingSink::default();
    run.render(
        "AB",
        &font,
        &RunOptions::default(),
        &PaintStyle::default(),
        &mut sink,
    );
    assert!(sink.outlines.is_empty());
}

#[test]
fn center_and_end_alignment_shift_the_start() {
    let font = BoxFont::uniform();
    let run = TextOnPath::new(&horizontal_guide(100.0));

    // "AB" is 40 units of advance on a 100-unit curve.
    let centered = run.layout(
        "AB",
        &font,
        &RunOptions {
            align: TextAlign::Center,
            ..Default::default()
        },
    );
    assert_eq!(centered[0].cursor, 30.0);

    let ended = run.layout(
        "AB",
        &font,
        &RunOptions {
            align: TextAlign::End,
            ..Default::default()
        },
    );
    assert_eq!(ended[0].cursor, 60.0);
}

#[test]
fn paint_style_passes_through_untouched() {
    let font = BoxFont::uniform();
    let run = TextOnPath::new(&horizontal_guide(100.0));
    let paint = PaintStyle {
        color: [200, 30, 30, 255],
        anti_alias: false,
    };
    let mut sink = RecordingSink::default();
    run.render("A", &font, &RunOptions::default(), &paint, &mut sink);
    assert_eq!(sink.paints, vec![paint]);
}

#[test]
fn curved_guide_bends_the_baseline() {
    let font = BoxFont::uniform();
    // A quarter circle of radius 100 from (100, 0) up-and-over to (0, 100).
    const K: f64 = 0.5519150244935105707435627;
    let mut guide = BezPath::new();
    guide.move_to((100.0, 0.0));
    guide.curve_to((100.0, 100.0 * K), (100.0 * K, 100.0), (0.0, 100.0));
    let run = TextOnPath::new(&guide);

    let placed = run.layout("AAA", &font, &RunOptions::default());
    assert_eq!(placed.len(), 3);

    // Later glyphs sit further around the arc, so their baseline points
    // rotate: x decreases from glyph to glyph, y increases.
    let first = points_of(placed[0].outline.as_ref().unwrap());
    let last = points_of(placed[2].outline.as_ref().unwrap());
    assert!(first[0].x > last[0].x);
    assert!(first[0].y < last[0].y);
    for glyph in &placed {
        for p in points_of(glyph.outline.as_ref().unwrap()) {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}

#[test]
fn layout_agrees_with_a_hand_walked_serial_morph() {
    // The `parallel` feature fans the morphing out over a thread pool but
    // must not reorder or change anything. Walking the run by hand, one
    // glyph at a time through `morph_outline`, has to reproduce `layout`
    // bit for bit under either build.
    let font = BoxFont::varied();
    let mut guide = BezPath::new();
    guide.move_to((0.0, 0.0));
    guide.quad_to((150.0, 120.0), (300.0, 0.0));
    let run = TextOnPath::new(&guide);
    let options = RunOptions {
        h_offset: 4.0,
        v_offset: -2.0,
        ..Default::default()
    };

    let text = "pa th";
    let glyphs = font.text_to_glyphs(text);
    let advances = font.glyph_advances(&glyphs);
    let placed = run.layout(text, &font, &options);

    let mut cursor = options.h_offset;
    let mut expected = Vec::new();
    for (&id, &advance) in glyphs.iter().zip(&advances) {
        if cursor > run.curve().length() {
            break;
        }
        let outline = font
            .glyph_outline(id)
            .map(|o| morph_outline(&o, run.curve(), cursor, options.v_offset));
        expected.push((id, cursor, outline));
        cursor += advance;
    }

    assert_eq!(placed.len(), expected.len());
    for (got, (id, cursor, outline)) in placed.iter().zip(&expected) {
        assert_eq!(got.id, *id);
        assert_eq!(got.cursor, *cursor);
        match (&got.outline, outline) {
            (Some(a), Some(b)) => assert_eq!(a.elements(), b.elements()),
            (None, None) => {}
            other => panic!("outline presence diverged: {other:?}"),
        }
    }
}
