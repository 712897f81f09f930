//! Integration tests for loading and running program files

use termscribe::config::{CanvasConfig, ScribeConfig};
use termscribe::{MemorySink, Program, ProgramError};

use crate::helpers::fixture;

fn quick_defaults() -> ScribeConfig {
    ScribeConfig {
        frame_delay_ms: 0,
        ..ScribeConfig::default()
    }
}

#[test]
fn square_fixture_draws_closed_box() {
    let program = Program::load(&fixture("square.toml")).expect("Should load square.toml");
    let (easel, summary) = program
        .run(&CanvasConfig::default(), &quick_defaults(), MemorySink::new())
        .unwrap();

    assert_eq!(summary.scribes, 1);
    assert_eq!(summary.frames, 12);
    assert_eq!(
        easel.sink().last_frame().unwrap().to_vec(),
        vec![
            "           ",
            "  @ # # #  ",
            "  #     #  ",
            "  #     #  ",
            "  # # # #  ",
        ]
    );
}

#[test]
fn two_scribes_fixture_runs_in_order() {
    let program = Program::load(&fixture("two_scribes.toml")).unwrap();
    let (easel, summary) = program
        .run(&CanvasConfig::default(), &quick_defaults(), MemorySink::new())
        .unwrap();

    assert_eq!(summary.scribes, 2);
    assert_eq!(summary.frames, 4 + 5);

    let canvas = easel.canvas();
    // The diagonal scribe ends three cells in, its head still drawn
    assert_eq!(canvas.mark_at(3, 3).unwrap().glyph, '*');
    // The walker went up three, then left two
    assert_eq!(canvas.mark_at(7, 6).unwrap().glyph, 'o');
    assert_eq!(canvas.mark_at(9, 9).unwrap().glyph, '+');
    assert_eq!(canvas.mark_at(8, 6).unwrap().glyph, '+');
}

#[test]
fn bad_color_fixture_is_rejected() {
    let program = Program::load(&fixture("bad_color.toml")).unwrap();
    let err = program
        .run(&CanvasConfig::default(), &quick_defaults(), MemorySink::new())
        .unwrap_err();

    assert!(matches!(err, ProgramError::UnknownColor { .. }));
    assert!(err.to_string().contains("painter"));
    assert!(err.to_string().contains("ultraviolet"));
}

#[test]
fn slow_fixture_keeps_its_delay_unless_forced() {
    let mut program = Program::load(&fixture("slow.toml")).unwrap();
    let canvas = program.build_canvas(&CanvasConfig::default()).unwrap();

    let prepared = program.prepare(&canvas, &quick_defaults()).unwrap();
    assert_eq!(prepared[0].scribe.frame_delay().as_millis(), 1000);

    program.force_frame_delay_ms(0);
    let (easel, summary) = program
        .run(&CanvasConfig::default(), &quick_defaults(), MemorySink::bounded(1))
        .unwrap();
    assert_eq!(summary.frames, 5);
    assert_eq!(easel.sink().frame_count(), 5);
    assert_eq!(easel.sink().frames().len(), 1);
    assert_eq!(easel.canvas().mark_at(0, 5).unwrap().glyph, '*');
}

#[test]
fn demos_all_parse() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let mut count = 0;
    for entry in std::fs::read_dir(&demos).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            let program = Program::load(&path)
                .unwrap_or_else(|e| panic!("{} failed to parse: {}", path.display(), e));
            let canvas = program.build_canvas(&CanvasConfig::default()).unwrap();
            program
                .prepare(&canvas, &quick_defaults())
                .unwrap_or_else(|e| panic!("{} is invalid: {}", path.display(), e));
            count += 1;
        }
    }
    assert!(count > 0, "expected demo programs in {}", demos.display());
}
