//! Integration tests for canvas rendering and scribe movement

use termscribe::{Canvas, Mark, MemorySink, PlainFormatter, Point, Wall};

use crate::helpers::{memory_easel, quick_scribe};

// ============================================================================
// Canvas
// ============================================================================

#[test]
fn hits_wall_classifies_every_cell_around_the_canvas() {
    let canvas = Canvas::new(4, 3);
    for y in -1..=3 {
        for x in -1..=4 {
            let expected = if !(0..4).contains(&x) {
                Some(Wall::Vertical)
            } else if !(0..3).contains(&y) {
                Some(Wall::Horizontal)
            } else {
                None
            };
            assert_eq!(
                canvas.hits_wall(Point::new(x as f64, y as f64)),
                expected,
                "({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn mark_appears_at_its_row_and_column() {
    let mut canvas = Canvas::new(5, 5);
    canvas.set_pos(Point::new(2.0, 3.0), Mark::plain('X'));

    let rows = canvas.rows(&PlainFormatter);
    let cells: Vec<char> = rows[3].chars().step_by(2).collect();

    assert_eq!(rows.len(), 5);
    assert_eq!(cells, vec![' ', ' ', 'X', ' ', ' ']);
    for (index, row) in rows.iter().enumerate() {
        if index != 3 {
            assert!(row.trim().is_empty());
        }
    }
}

#[test]
fn render_without_changes_is_idempotent() {
    let mut canvas = Canvas::new(3, 3);
    canvas.set_pos(Point::new(1.0, 1.0), Mark::plain('o'));
    let mut sink = MemorySink::new();

    canvas.render(&mut sink).unwrap();
    canvas.render(&mut sink).unwrap();

    assert_eq!(sink.frames()[0], sink.frames()[1]);
}

#[test]
fn snapshot_small_canvas_rows() {
    let mut canvas = Canvas::new(3, 2);
    canvas.set_pos(Point::new(0.0, 0.0), Mark::plain('a'));
    canvas.set_pos(Point::new(1.0, 1.0), Mark::plain('b'));
    canvas.set_pos(Point::new(2.0, 0.0), Mark::plain('c'));

    insta::assert_debug_snapshot!(canvas.rows(&PlainFormatter), @r###"
    [
        "a   c",
        "  b  ",
    ]
    "###);
}

// ============================================================================
// Scribe movement
// ============================================================================

#[test]
fn square_closes_after_four_n_steps() {
    let mut easel = memory_easel(12, 12);
    let mut scribe = quick_scribe(0.0, 0.0);
    scribe.set_degrees(90.0);

    scribe.draw_square(&mut easel, 5).unwrap();

    assert_eq!(scribe.position(), Point::new(0.0, 0.0));
    assert_eq!(easel.sink().frame_count(), 20);
}

#[test]
fn wall_bounce_keeps_scribe_on_canvas() {
    let mut easel = memory_easel(10, 10);
    let mut scribe = quick_scribe(5.0, 0.0);
    scribe.set_degrees(0.0);

    for _ in 0..100 {
        scribe.forward(&mut easel, 1).unwrap();
        let (x, y) = scribe.position().cell().unwrap();
        assert!((0..10).contains(&x) && (0..10).contains(&y), "left canvas at ({}, {})", x, y);
    }
    // The very first step only bounced off the top wall
    assert_eq!(easel.sink().frame_count(), 99 - 9);
}

#[test]
fn bounce_from_bottom_edge_turns_back_up() {
    let mut easel = memory_easel(10, 10);
    let mut scribe = quick_scribe(5.0, 9.0);
    scribe.set_degrees(180.0);

    scribe.forward(&mut easel, 1).unwrap();
    let degrees = scribe.degrees();
    assert!(degrees < 1e-6 || 360.0 - degrees < 1e-6, "got {}", degrees);

    scribe.forward(&mut easel, 5).unwrap();
    assert_eq!(scribe.position().cell(), Some((5, 4)));
}

#[test]
fn every_frame_has_full_dimensions() {
    let mut easel = memory_easel(7, 4);
    let mut scribe = quick_scribe(3.0, 2.0);
    scribe.set_degrees(130.0);

    scribe.forward(&mut easel, 40).unwrap();

    for frame in easel.sink().frames() {
        assert_eq!(frame.len(), 4);
        for row in frame {
            assert_eq!(row.chars().count(), 7 * 2 - 1);
        }
    }
}

#[test]
fn scribes_share_one_canvas() {
    let mut easel = memory_easel(5, 5);
    let mut first = quick_scribe(0.0, 0.0);
    let mut second = quick_scribe(4.0, 4.0);

    first.draw_line_right(&mut easel, 2).unwrap();
    second.draw_line_up(&mut easel, 2).unwrap();

    let canvas = easel.canvas();
    assert_eq!(canvas.mark_at(2, 0).unwrap().glyph, '*');
    assert_eq!(canvas.mark_at(4, 2).unwrap().glyph, '*');
    assert_eq!(canvas.mark_at(4, 4).unwrap().glyph, '.');
    assert_eq!(easel.sink().frame_count(), 4);
}
