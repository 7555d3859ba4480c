// Copyright 2022-2023 Martin Pool.

//! A rainbow gradient that fills whatever width it is offered.

use crate::{
    hls_to_rgb, Measurement, RenderOptions, Renderable, Result, Rgb, Segment, Segments, Style,
};

/// A block of colored cells: hue sweeps left to right across the full
/// width, and lightness increases from top to bottom.
///
/// ```
/// use paprika::{ColorBox, RenderOptions, Renderable};
///
/// let segments: Vec<_> = ColorBox.render(&RenderOptions::new(4)).collect();
/// assert_eq!(segments.len(), ColorBox::ROWS * (4 + 1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorBox;

impl ColorBox {
    /// Number of rows drawn.
    pub const ROWS: usize = 5;

    /// The glyph drawn in every cell.
    pub const GLYPH: &'static str = "█";

    /// The color of the cell at column `x` and row `y` when drawn `width`
    /// columns wide.
    pub fn color_at(x: usize, y: usize, width: usize) -> Result<Rgb> {
        let hue = x as f64 / width as f64;
        let lightness = 0.1 + (y as f64 / ColorBox::ROWS as f64) * 0.7;
        let (r, g, b) = hls_to_rgb(hue, lightness, 1.0);
        Rgb::from_unit(r, g, b)
    }
}

impl Renderable for ColorBox {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        Measurement::new(1, options.max_width())
    }

    /// At zero width this draws only the line breaks.
    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        Box::new(ColorBoxSegments {
            width: options.max_width(),
            x: 0,
            y: 0,
        })
    }
}

/// Segments of a [ColorBox], computed one at a time.
#[derive(Debug)]
pub struct ColorBoxSegments {
    width: usize,
    /// Next column; equal to `width` when the line break is due.
    x: usize,
    y: usize,
}

impl Iterator for ColorBoxSegments {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= ColorBox::ROWS {
            return None;
        }
        if self.x == self.width {
            self.x = 0;
            self.y += 1;
            return Some(Ok(Segment::line()));
        }
        let color = ColorBox::color_at(self.x, self.y, self.width);
        self.x += 1;
        Some(color.map(|color| Segment::styled(ColorBox::GLYPH, Style::new().color(color))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.y >= ColorBox::ROWS {
            0
        } else {
            let per_row = self.width + 1;
            (ColorBox::ROWS - self.y) * per_row - self.x
        };
        (remaining, Some(remaining))
    }
}
