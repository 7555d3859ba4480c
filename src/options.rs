// Copyright 2022-2023 Martin Pool.

use crate::Destination;

/// Options controlling a [crate::Console].
///
/// These are supplied to a constructor like [crate::Console::new].
///
/// The default options created by [Options::default] should be reasonable
/// for most applications: draw to stdout, as wide as the terminal, with
/// color if stdout is a terminal.
///
/// # Example
///
/// ```
/// let options = paprika::Options::default()
///     .width(Some(60))
///     .color(Some(false));
/// ```
///
/// Options can be constructed as a static or constant value, using [Options::new].
///
/// ```
/// use paprika::{Destination, Options};
///
/// static PAPRIKA_OPTIONS: Options = Options::new()
///     .destination(Destination::Stderr)
///     .height(Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Write to stdout, stderr, or a capture buffer for tests?
    pub(crate) destination: Destination,

    /// Fixed width, rather than measuring the terminal.
    pub(crate) width: Option<usize>,

    /// Stop after this many lines.
    pub(crate) height: Option<usize>,

    /// Force color on or off, rather than detecting it.
    pub(crate) color: Option<bool>,
}

impl Options {
    /// Return some reasonable default options.
    ///
    /// Output goes to stdout, and width and color are detected from the terminal.
    pub const fn new() -> Options {
        Options {
            destination: Destination::Stdout,
            width: None,
            height: None,
            color: None,
        }
    }

    /// Set whether output goes to stdout, stderr, or an internal capture buffer.
    ///
    /// [Destination::Stdout] is the default.
    pub const fn destination(self, destination: Destination) -> Options {
        Options {
            destination,
            ..self
        }
    }

    /// Render at a fixed width, rather than the width of the terminal.
    ///
    /// A width of zero is raised to one column.
    pub const fn width(self, width: Option<usize>) -> Options {
        Options { width, ..self }
    }

    /// Stop pulling output from the renderable after this many lines.
    ///
    /// By default there is no limit.
    pub const fn height(self, height: Option<usize>) -> Options {
        Options { height, ..self }
    }

    /// Force color and styling on or off.
    ///
    /// By default styling is drawn if the destination is a terminal that
    /// is not `TERM=dumb`, and never for [Destination::Capture].
    pub const fn color(self, color: Option<bool>) -> Options {
        Options { color, ..self }
    }
}

impl Default for Options {
    /// Create default reasonable options.
    ///
    /// This is the same as [Options::new].
    fn default() -> Options {
        Options::new()
    }
}
