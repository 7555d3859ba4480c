//! Render a card of features twice, and report how long the second pass took.
//!
//! The first pass warms any caches; the second is rendered into a fresh
//! capture buffer while measuring process CPU time, then the captured lines
//! are printed.
//!
//! Run this with `--release` to get a fair estimate.

use cpu_time::ProcessTime;
use paprika::{
    ColorBox, Console, Constrain, Destination, Group, Options, Pad, Padding, Style, Text,
};
use tracing::Level;
use tracing_subscriber::prelude::*;

fn main() {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(tracing_subscriber::filter::LevelFilter::from_level(
            Level::WARN,
        ));
    tracing_subscriber::registry().with(layer).init();

    let mut console = Console::new(
        Options::new()
            .destination(Destination::Capture)
            .color(Some(true)),
    );
    let card = make_test_card();

    // Print once to warm caches.
    if let Err(err) = console.print(&card) {
        tracing::warn!(%err, "warm-up render failed");
    }
    console.set_destination(Destination::Capture);

    let start = ProcessTime::now();
    if let Err(err) = console.print(&card) {
        tracing::warn!(%err, "render failed");
    }
    let taken = start.elapsed();

    for line in console.take_captured_output().lines() {
        println!("{line}");
    }
    println!("rendered in {:.1}ms", taken.as_secs_f64() * 1000.0);
}

fn make_test_card() -> Group {
    let style = |s: &str| Style::parse(s).expect("valid style");
    let heading = |s: &'static str| Text::new(s).styled(style("bold red"));
    Group::new()
        .with(Text::new("Paprika features").styled(Style::new().italic()))
        .with(heading("Colors"))
        .with(Padding::new(
            Group::new()
                .with(Text::new(
                    "✓ 4-bit color\n✓ 8-bit color\n✓ Truecolor (16.7 million)\n✓ Dumb terminals",
                ))
                .with(ColorBox),
            Pad::symmetric(1, 2),
        ))
        .with(heading("Styles"))
        .with(Padding::new(
            Group::new()
                .with(Text::new("bold").styled(Style::new().bold()))
                .with(Text::new("dim").styled(Style::new().dim()))
                .with(Text::new("italic").styled(Style::new().italic()))
                .with(Text::new("underline").styled(Style::new().underline()))
                .with(Text::new("strikethrough").styled(style("strike")))
                .with(Text::new("reverse").styled(style("reverse"))),
            Pad::symmetric(0, 2),
        ))
        .with(heading("Constrained"))
        .with(Constrain::new(ColorBox, Some(20)))
        .with(Text::new("And more...").styled(Style::new().dim()))
}
