// Copyright 2022-2023 Martin Pool.

//! API tests for Paprika.

use paprika::{ColorBox, Console, Destination, Options, Segment, Style, Text};
use pretty_assertions::assert_eq;

mod early_abandonment;
mod idempotence;

// You can construct options as a static using const fns.
static _SOME_OPTIONS: Options = Options::new()
    .destination(Destination::Stderr)
    .width(Some(72))
    .height(Some(10))
    .color(Some(false));

// Just the default options are also OK.
static _DEFAULT_OPTIONS: Options = Options::new();

fn capture(width: usize) -> Console {
    Console::new(
        Options::new()
            .destination(Destination::Capture)
            .width(Some(width)),
    )
}

#[test]
fn print_color_box_to_capture() {
    let console = capture(6);
    console.print(&ColorBox).unwrap();
    assert_eq!(console.take_captured_output(), "██████\n".repeat(5));
}

#[test]
fn every_width_measures_and_renders_fully() {
    for width in 1..=200 {
        let options = paprika::RenderOptions::new(width);
        assert_eq!(
            paprika::Renderable::measure(&ColorBox, &options),
            paprika::Measurement::new(1, width)
        );
        let segments: Vec<Segment> = paprika::Renderable::render(&ColorBox, &options)
            .collect::<paprika::Result<_>>()
            .unwrap();
        assert_eq!(
            segments.iter().filter(|s| s.is_line_break()).count(),
            ColorBox::ROWS
        );
        assert_eq!(
            segments.iter().filter(|s| !s.is_line_break()).count(),
            ColorBox::ROWS * width
        );
    }
}

#[test]
fn styled_text_is_plain_without_color() {
    let console = capture(80);
    let text = Text::new("bold red").styled(Style::parse("bold red").unwrap());
    console.print(&text).unwrap();
    assert_eq!(console.take_captured_output(), "bold red\n");
}

#[test]
fn malformed_style_fails_before_rendering() {
    assert!(Style::parse("bold #12345z").is_err());
    assert!(paprika::Rgb::from_f64(300.0, 0.0, 0.0).is_err());
}
