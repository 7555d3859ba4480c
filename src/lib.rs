// Copyright 2022-2023 Martin Pool.

/*!

Paprika draws styled output on the terminal from small, composable
renderables.

# Concept

Anything that can be drawn implements [Renderable], which has two methods:

1. [Renderable::measure] says how narrow and how wide the renderable can
   usefully be drawn, given the [RenderOptions] on offer.
2. [Renderable::render] produces a lazy stream of [Segment]s: pieces of
   text each with an optional [Style], and line breaks ending each line.

Renderables are pure: they don't write anywhere themselves, and rendering
the same value twice gives the same segments.

A [Console] is responsible for:

* Choosing the width to offer, from the terminal or from [Options].
* Measuring and then rendering the top-level renderable.
* Joining segments into lines, styling them with ANSI escapes if the
  destination supports it, and writing each finished line.
* Stopping early if only a limited number of lines are wanted.

Composite renderables such as [Group], [Padding] and [Constrain] hold other
renderables and pass narrower options down to them. Applications can write
their own renderables, leaf or composite, by implementing the trait.

[ColorBox] is a small renderable that fills any width with a color gradient.

# Example

```
use paprika::{ColorBox, Console, Destination, Group, Options, Style, Text};

let console = Console::new(
    Options::new()
        .destination(Destination::Capture)
        .width(Some(20)),
);
let card = Group::new()
    .with(Text::new("Colors").styled(Style::parse("bold red").unwrap()))
    .with(ColorBox);
console.print(&card).unwrap();

let output = console.take_captured_output();
assert_eq!(output.lines().count(), 1 + ColorBox::ROWS);
assert!(output.starts_with("Colors\n"));
```

# Errors

Building a [Style] or [Rgb] from out-of-range or unparseable values fails
immediately with an [Error].

Each item of a render stream is a [Result]. If a renderable yields an error
the console stops and returns it; lines already written are left in place.

*/

#![warn(missing_docs)]

use std::borrow::Cow;

mod color;
mod color_box;
mod console;
mod context;
mod destination;
mod error;
mod layout;
mod measure;
mod options;
pub mod segment;
mod style;
mod text;
mod width;

pub use crate::color::hls_to_rgb;
pub use crate::color_box::{ColorBox, ColorBoxSegments};
pub use crate::console::Console;
pub use crate::context::RenderOptions;
pub use crate::destination::Destination;
pub use crate::error::{Error, Result};
pub use crate::layout::{Constrain, Group, Pad, Padding};
pub use crate::measure::Measurement;
pub use crate::options::Options;
pub use crate::segment::Segment;
pub use crate::style::{Attributes, Rgb, Style};
pub use crate::text::Text;

/// A lazy stream of segments, produced by [Renderable::render].
pub type Segments<'a> = Box<dyn Iterator<Item = Result<Segment>> + 'a>;

/// A value that can measure itself and render into segments.
///
/// Implementations must not do any I/O, and must not depend on state shared
/// with other renderables: the result should depend only on the value itself
/// and the options passed in.
///
/// ```
/// use paprika::{Measurement, RenderOptions, Renderable, Segment, Segments};
///
/// /// A row of dashes across the full width.
/// struct Rule;
///
/// impl Renderable for Rule {
///     fn measure(&self, options: &RenderOptions) -> Measurement {
///         Measurement::new(1, options.max_width())
///     }
///
///     fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
///         let dashes = "-".repeat(options.max_width());
///         Box::new([Ok(Segment::new(dashes)), Ok(Segment::line())].into_iter())
///     }
/// }
/// ```
pub trait Renderable {
    /// Return the range of widths this can be drawn at, given the options.
    ///
    /// The minimum should be no more than the maximum. The [Console] clamps
    /// both to the offered width before use.
    fn measure(&self, options: &RenderOptions) -> Measurement;

    /// Render into a stream of segments.
    ///
    /// Each line should be no more than `options.max_width()` columns as
    /// displayed, and should be terminated by one [Segment::line].
    ///
    /// The stream is computed as it is pulled, and may be dropped before it
    /// is finished. Each call starts a new, independent stream.
    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a>;
}

impl<R: Renderable + ?Sized> Renderable for &R {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        (**self).measure(options)
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        (**self).render(options)
    }
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        (**self).measure(options)
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        (**self).render(options)
    }
}

/// Strings render as unstyled [Text].
impl Renderable for str {
    fn measure(&self, _options: &RenderOptions) -> Measurement {
        text::measure_str(self)
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        text::render_str(self, None, options.max_width())
    }
}

impl Renderable for String {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        self.as_str().measure(options)
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        self.as_str().render(options)
    }
}

impl Renderable for Cow<'_, str> {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        (**self).measure(options)
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        (**self).render(options)
    }
}
