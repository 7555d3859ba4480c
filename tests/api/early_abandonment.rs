//! The console can stop pulling output part way through.

use std::cell::Cell;

use paprika::{
    ColorBox, Console, Destination, Measurement, Options, RenderOptions, Renderable, Segment,
    Segments,
};
use pretty_assertions::assert_eq;

/// Numbered lines, forever, counting how many segments were pulled.
struct Endless {
    pulled: Cell<usize>,
}

impl Renderable for Endless {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        Measurement::new(1, options.max_width())
    }

    fn render<'a>(&'a self, _options: &RenderOptions) -> Segments<'a> {
        Box::new((0..).flat_map(move |i| {
            self.pulled.set(self.pulled.get() + 1);
            [Ok(Segment::new(format!("line {i}"))), Ok(Segment::line())]
        }))
    }
}

#[test]
fn height_limit_stops_an_endless_renderable() {
    let console = Console::new(
        Options::new()
            .destination(Destination::Capture)
            .height(Some(3)),
    );
    let endless = Endless {
        pulled: Cell::new(0),
    };
    console.print(&endless).unwrap();
    assert_eq!(console.take_captured_output(), "line 0\nline 1\nline 2\n");
    assert_eq!(endless.pulled.get(), 3);
}

#[test]
fn truncated_gradient_is_a_prefix_of_the_full_one() {
    let options = Options::new()
        .destination(Destination::Capture)
        .width(Some(8));
    let full = Console::new(options.clone());
    full.print(&ColorBox).unwrap();
    let full = full.take_captured_output();

    for n in 0..=ColorBox::ROWS {
        let truncated = Console::new(options.clone().height(Some(n)));
        truncated.print(&ColorBox).unwrap();
        let expected: String = full.lines().take(n).map(|l| format!("{l}\n")).collect();
        assert_eq!(truncated.take_captured_output(), expected);
    }
}

#[test]
fn abandoned_render_leaves_nothing_behind() {
    let options = RenderOptions::new(4);
    {
        let mut partial = ColorBox.render(&options);
        partial.next();
        partial.next();
    }
    let console = Console::new(
        Options::new()
            .destination(Destination::Capture)
            .width(Some(4)),
    );
    console.print(&ColorBox).unwrap();
    assert_eq!(console.take_captured_output(), "████\n".repeat(ColorBox::ROWS));
}
