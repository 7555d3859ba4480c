// Copyright 2022-2023 Martin Pool.

//! Drive renderables and write their output.

use std::fmt::Write as _;
use std::io::Write;
use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::destination::WriteTo;
use crate::segment::split_lines;
use crate::{Destination, Measurement, Options, RenderOptions, Renderable, Result, Segment};

/// Width used when the destination's width can't be measured.
const DEFAULT_WIDTH: usize = 80;

/// Prints renderables to a destination.
///
/// A console is typically constructed once and passed by reference to
/// whatever needs to print. Each call to [Console::print] measures the
/// renderable, renders it, and writes each finished line.
///
/// Printing the same renderable twice, without changing the console's
/// options, produces identical output.
///
/// ```
/// use paprika::{Console, Destination, Options, Text};
///
/// let console = Console::new(Options::new().destination(Destination::Capture));
/// console.print(&Text::new("hello\nworld")).unwrap();
/// assert_eq!(console.take_captured_output(), "hello\nworld\n");
/// ```
pub struct Console {
    options: Options,
    /// Resolved width, never zero.
    width: usize,
    color: bool,
    out: Mutex<WriteTo>,
}

impl Console {
    /// Construct a console writing to the destination in `options`.
    pub fn new(options: Options) -> Console {
        let out = options.destination.open();
        Console::with_writer(options, out)
    }

    /// Construct a console writing to an arbitrary [std::io::Write] stream.
    ///
    /// This is probably mostly useful for testing. The destination in
    /// `options` is used only to choose the width and color defaults.
    pub fn write_to<W: Write + Send + 'static>(options: Options, out: W) -> Console {
        Console::with_writer(options, WriteTo::Write(Box::new(out)))
    }

    fn with_writer(options: Options, out: WriteTo) -> Console {
        let width = options
            .width
            .or_else(|| options.destination.width())
            .unwrap_or(DEFAULT_WIDTH)
            .max(1);
        let color = options
            .color
            .unwrap_or_else(|| options.destination.is_styled_terminal());
        debug!(destination = ?options.destination, width, color, "configured console");
        Console {
            options,
            width,
            color,
            out: Mutex::new(out),
        }
    }

    /// Send future output to a different destination.
    ///
    /// A new [Destination::Capture] starts with an empty buffer. Width and
    /// color are not re-detected, so output is identical whichever
    /// destination is used.
    pub fn set_destination(&mut self, destination: Destination) {
        self.options.destination = destination;
        *self.out.get_mut() = destination.open();
    }

    /// The width that renderables are offered.
    pub fn width(&self) -> usize {
        self.width
    }

    /// True if output is styled with ANSI escapes.
    pub fn is_color(&self) -> bool {
        self.color
    }

    /// The options that [Console::print] passes to the renderable.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.width)
            .update_height(self.options.height)
            .terminal(self.options.destination != Destination::Capture && self.color)
    }

    /// Print a renderable at the console's width.
    pub fn print<R: Renderable + ?Sized>(&self, renderable: &R) -> Result<()> {
        self.print_with(renderable, &self.render_options())
    }

    /// Print a renderable with explicit options.
    ///
    /// Lines are written as they are completed. If the renderable fails,
    /// the error is returned and lines already written remain.
    pub fn print_with<R: Renderable + ?Sized>(
        &self,
        renderable: &R,
        options: &RenderOptions,
    ) -> Result<()> {
        let mut out = self.out.lock();
        let mut n_lines = 0;
        let result = self.for_each_line(renderable, options, |line| {
            out.write_line(line)?;
            n_lines += 1;
            Ok(())
        });
        let flushed = out.flush();
        trace!(n_lines, "printed");
        result?;
        Ok(flushed?)
    }

    /// Render to formatted lines, without writing them anywhere.
    pub fn render_lines<R: Renderable + ?Sized>(
        &self,
        renderable: &R,
        options: &RenderOptions,
    ) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.for_each_line(renderable, options, |line| {
            lines.push(line.to_owned());
            Ok(())
        })?;
        Ok(lines)
    }

    /// Measure, render, and pass each formatted line to `f`.
    fn for_each_line<R, F>(&self, renderable: &R, options: &RenderOptions, mut f: F) -> Result<()>
    where
        R: Renderable + ?Sized,
        F: FnMut(&str) -> Result<()>,
    {
        let measurement = Measurement::get(renderable, options);
        let options = options.update_width(measurement.maximum.max(1));
        debug!(
            minimum = measurement.minimum,
            maximum = measurement.maximum,
            width = options.max_width(),
            "measured renderable"
        );
        let limit = options.max_height().unwrap_or(usize::MAX);
        let mut buf = String::new();
        for line in split_lines(renderable.render(&options)).take(limit) {
            let line = line.map_err(|err| {
                warn!(%err, "render failed");
                err
            })?;
            buf.clear();
            for segment in &line {
                self.push_segment(&mut buf, segment);
            }
            f(&buf)?;
        }
        Ok(())
    }

    fn push_segment(&self, buf: &mut String, segment: &Segment) {
        match segment.style() {
            Some(style) if self.color && !style.is_plain() => {
                // Writing to a String can't fail.
                let _ = write!(buf, "{}", style.paint(segment.text()));
            }
            _ => buf.push_str(segment.text()),
        }
    }

    /// Return the buffer holding captured output.
    ///
    /// # Panics
    ///
    /// If the destination is not [Destination::Capture].
    pub fn captured_output(&self) -> Arc<Mutex<String>> {
        match &*self.out.lock() {
            WriteTo::Capture(buf) => Arc::clone(buf),
            _ => panic!("output is not being captured"),
        }
    }

    /// Return and clear the captured output.
    ///
    /// # Panics
    ///
    /// If the destination is not [Destination::Capture].
    pub fn take_captured_output(&self) -> String {
        mem::take(&mut *self.captured_output().lock())
    }
}

impl Default for Console {
    fn default() -> Console {
        Console::new(Options::default())
    }
}
