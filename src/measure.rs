// Copyright 2022-2023 Martin Pool.

//! The range of widths a renderable can be drawn at.

use crate::{RenderOptions, Renderable};

/// The narrowest and widest a renderable can usefully be drawn, in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Fewest columns the renderable can be squeezed into.
    pub minimum: usize,
    /// Most columns the renderable can make use of.
    pub maximum: usize,
}

impl Measurement {
    /// Construct a measurement, lowering `minimum` to `maximum` if need be.
    pub fn new(minimum: usize, maximum: usize) -> Measurement {
        Measurement {
            minimum: minimum.min(maximum),
            maximum,
        }
    }

    /// Measure a renderable against the offered options, clamped so
    /// neither bound exceeds `options.max_width()`.
    pub fn get<R: Renderable + ?Sized>(renderable: &R, options: &RenderOptions) -> Measurement {
        let Measurement { minimum, maximum } = renderable.measure(options);
        Measurement::new(minimum, maximum).with_maximum(options.max_width())
    }

    /// Difference between the maximum and minimum, or zero if the fields
    /// were set out of order.
    pub fn span(&self) -> usize {
        self.maximum.saturating_sub(self.minimum)
    }

    /// Clamp both bounds to at most `width`.
    #[must_use]
    pub fn with_maximum(self, width: usize) -> Measurement {
        Measurement {
            minimum: self.minimum.min(width),
            maximum: self.maximum.min(width),
        }
    }

    /// Raise both bounds to at least `width`.
    #[must_use]
    pub fn with_minimum(self, width: usize) -> Measurement {
        Measurement {
            minimum: self.minimum.max(width),
            maximum: self.maximum.max(width),
        }
    }

    /// Add a fixed number of columns to both bounds.
    #[must_use]
    pub fn grow(self, columns: usize) -> Measurement {
        Measurement {
            minimum: self.minimum.saturating_add(columns),
            maximum: self.maximum.saturating_add(columns),
        }
    }

    /// Combine measurements of renderables stacked vertically: the widest
    /// minimum and widest maximum.
    ///
    /// Returns `None` if there are no measurements.
    pub fn stacked<I: IntoIterator<Item = Measurement>>(measurements: I) -> Option<Measurement> {
        measurements.into_iter().reduce(|a, b| Measurement {
            minimum: a.minimum.max(b.minimum),
            maximum: a.maximum.max(b.maximum),
        })
    }
}
