// Copyright 2023 Martin Pool.

//! Constraints passed down from the console to each renderable.

/// Display constraints for one render pass.
///
/// These are created by the [crate::Console] for each print and passed down
/// to the renderable. A composite renderable may derive a narrower copy for
/// each child, but never changes the value it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub(crate) max_width: usize,
    pub(crate) max_height: Option<usize>,
    pub(crate) is_terminal: bool,
}

impl RenderOptions {
    /// Options offering `max_width` columns.
    pub const fn new(max_width: usize) -> RenderOptions {
        RenderOptions {
            max_width,
            max_height: None,
            is_terminal: false,
        }
    }

    /// Return the maximum number of columns the renderable may use.
    ///
    /// Each line of output should be no wider than this. A renderable that
    /// draws a wider line is at fault, but nothing will fail.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Return the number of lines the console will show, if limited.
    ///
    /// The console stops pulling segments after this many lines, so a
    /// renderable need not respect it.
    pub fn max_height(&self) -> Option<usize> {
        self.max_height
    }

    /// True if output is going to a live terminal.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Return a copy offering no more than `width` columns.
    ///
    /// The result is never wider than `self`.
    ///
    /// ```
    /// let outer = paprika::RenderOptions::new(40);
    /// assert_eq!(outer.update_width(10).max_width(), 10);
    /// assert_eq!(outer.update_width(100).max_width(), 40);
    /// ```
    #[must_use]
    pub fn update_width(&self, width: usize) -> RenderOptions {
        RenderOptions {
            max_width: width.min(self.max_width),
            ..*self
        }
    }

    /// Return a copy with a different height limit.
    #[must_use]
    pub fn update_height(&self, max_height: Option<usize>) -> RenderOptions {
        RenderOptions {
            max_height,
            ..*self
        }
    }

    /// Return a copy marked as going, or not, to a terminal.
    #[must_use]
    pub const fn terminal(self, is_terminal: bool) -> RenderOptions {
        RenderOptions {
            is_terminal,
            ..self
        }
    }
}
