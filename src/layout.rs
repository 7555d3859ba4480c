// Copyright 2022-2023 Martin Pool.

//! Renderables built out of other renderables.
//!
//! Each composite measures and renders its children with options derived
//! from the ones it was given, and adds whatever decoration it draws itself.

use std::iter;

use crate::segment::{adjust_line_length, split_lines};
use crate::{Measurement, RenderOptions, Renderable, Result, Segment, Segments, Style};

/// Children drawn one after another, top to bottom.
///
/// ```
/// use paprika::{ColorBox, Group, Text};
///
/// let group = Group::new()
///     .with(Text::new("Colors"))
///     .with(ColorBox);
/// assert_eq!(group.len(), 2);
/// ```
#[derive(Default)]
pub struct Group {
    children: Vec<Box<dyn Renderable>>,
}

impl Group {
    /// An empty group.
    pub fn new() -> Group {
        Group::default()
    }

    /// Add a child below the existing ones.
    pub fn with<R: Renderable + 'static>(mut self, child: R) -> Group {
        self.push(child);
        self
    }

    /// Add a child below the existing ones.
    pub fn push<R: Renderable + 'static>(&mut self, child: R) {
        self.children.push(Box::new(child));
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Renderable for Group {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        Measurement::stacked(self.children.iter().map(|c| Measurement::get(c, options)))
            .unwrap_or(Measurement::new(0, 0))
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        let options = *options;
        Box::new(self.children.iter().flat_map(move |c| c.render(&options)))
    }
}

/// Space around each side of a [Padding].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pad {
    /// Blank lines above.
    pub top: usize,
    /// Columns to the right.
    pub right: usize,
    /// Blank lines below.
    pub bottom: usize,
    /// Columns to the left.
    pub left: usize,
}

impl Pad {
    /// The same padding on every side.
    pub const fn all(n: usize) -> Pad {
        Pad {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Padding of `vertical` lines above and below, and `horizontal`
    /// columns left and right.
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Pad {
        Pad {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

/// Blank space drawn around a child.
///
/// Every line of the child is padded out to the same width, so the result is
/// a solid rectangle.
pub struct Padding {
    child: Box<dyn Renderable>,
    pad: Pad,
    style: Option<Style>,
    expand: bool,
}

impl Padding {
    /// Pad `child` by `pad`, filling the full offered width.
    pub fn new<R: Renderable + 'static>(child: R, pad: Pad) -> Padding {
        Padding {
            child: Box::new(child),
            pad,
            style: None,
            expand: true,
        }
    }

    /// Set the style of the padding cells.
    pub fn style(self, style: Style) -> Padding {
        Padding {
            style: Some(style),
            ..self
        }
    }

    /// If false, shrink to the child's widest line rather than filling the
    /// offered width.
    pub fn expand(self, expand: bool) -> Padding {
        Padding { expand, ..self }
    }
}

impl Renderable for Padding {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        let max_width = options.max_width();
        let extra = self.pad.horizontal();
        if max_width.saturating_sub(extra) < 1 {
            return Measurement::new(max_width, max_width);
        }
        Measurement::get(&self.child, &options.update_width(max_width - extra))
            .grow(extra)
            .with_maximum(max_width)
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        let extra = self.pad.horizontal();
        let width = if self.expand {
            options.max_width()
        } else {
            let inner = Measurement::get(
                &self.child,
                &options.update_width(options.max_width().saturating_sub(extra)),
            );
            (inner.maximum + extra).min(options.max_width())
        };
        let child_width = width.saturating_sub(extra);
        let style = self.style;
        let Pad {
            top, left, right, bottom, ..
        } = self.pad;
        let blank_line = move || [Ok(Segment::blank(width, style)), Ok(Segment::line())];
        let body = split_lines(self.child.render(&options.update_width(child_width))).flat_map(
            move |line| -> Box<dyn Iterator<Item = Result<Segment>>> {
                match line {
                    Err(err) => Box::new(iter::once(Err(err))),
                    Ok(line) => {
                        let mut padded = Vec::with_capacity(line.len() + 3);
                        if left > 0 {
                            padded.push(Segment::blank(left, style));
                        }
                        padded.extend(adjust_line_length(line, child_width, style));
                        if right > 0 {
                            padded.push(Segment::blank(right, style));
                        }
                        padded.push(Segment::line());
                        Box::new(padded.into_iter().map(Ok))
                    }
                }
            },
        );
        Box::new(
            iter::repeat_with(blank_line)
                .take(top)
                .flatten()
                .chain(body)
                .chain(iter::repeat_with(blank_line).take(bottom).flatten()),
        )
    }
}

/// Limit a child to at most a given width.
pub struct Constrain {
    child: Box<dyn Renderable>,
    width: Option<usize>,
}

impl Constrain {
    /// Offer `child` no more than `width` columns, or pass the offered width
    /// through unchanged if `width` is None.
    pub fn new<R: Renderable + 'static>(child: R, width: Option<usize>) -> Constrain {
        Constrain {
            child: Box::new(child),
            width,
        }
    }

    fn options(&self, options: &RenderOptions) -> RenderOptions {
        match self.width {
            Some(width) => options.update_width(width),
            None => *options,
        }
    }
}

impl Renderable for Constrain {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        Measurement::get(&self.child, &self.options(options))
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        self.child.render(&self.options(options))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ColorBox, Error, Text};

    /// Render to plain lines, ignoring style.
    fn plain_lines(renderable: &dyn Renderable, width: usize) -> Vec<String> {
        split_lines(renderable.render(&RenderOptions::new(width)))
            .map(|line| {
                line.unwrap()
                    .iter()
                    .map(Segment::text)
                    .collect::<String>()
            })
            .collect()
    }

    fn glyphs_per_line(renderable: &dyn Renderable, width: usize) -> Vec<usize> {
        split_lines(renderable.render(&RenderOptions::new(width)))
            .map(|line| {
                line.unwrap()
                    .iter()
                    .filter(|s| s.text() == ColorBox::GLYPH)
                    .count()
            })
            .collect()
    }

    #[test]
    fn group_renders_children_in_order() {
        let group = Group::new().with("one").with(Text::new("two\nthree"));
        assert_eq!(plain_lines(&group, 80), ["one", "two", "three"]);
    }

    #[test]
    fn group_measures_widest_child() {
        let group = Group::new().with("a bb").with("ccc dddd eeeee");
        let options = RenderOptions::new(80);
        assert_eq!(group.measure(&options), Measurement::new(14, 14));
        assert_eq!(Group::new().measure(&options), Measurement::new(0, 0));
        assert!(Group::new().is_empty());
    }

    #[test]
    fn group_passes_width_to_children() {
        let group = Group::new().with(ColorBox).with(ColorBox);
        assert_eq!(glyphs_per_line(&group, 10), [10; 10]);
    }

    #[test]
    fn padding_draws_a_rectangle() {
        let padding = Padding::new("ab\nc", Pad::symmetric(1, 2));
        assert_eq!(
            plain_lines(&padding, 8),
            ["        ", "  ab    ", "  c     ", "        "]
        );
    }

    #[test]
    fn padding_without_expand_fits_child() {
        let padding = Padding::new("abc", Pad::symmetric(0, 1)).expand(false);
        assert_eq!(plain_lines(&padding, 80), [" abc "]);
        assert_eq!(
            padding.measure(&RenderOptions::new(80)),
            Measurement::new(5, 5)
        );
    }

    #[test]
    fn padding_measure_when_no_room() {
        let padding = Padding::new("abc", Pad::symmetric(0, 3));
        assert_eq!(
            padding.measure(&RenderOptions::new(6)),
            Measurement::new(6, 6)
        );
        assert_eq!(
            padding.measure(&RenderOptions::new(2)),
            Measurement::new(2, 2)
        );
    }

    #[test]
    fn padding_styles_its_own_cells() {
        let style = Style::new().dim();
        let padding = Padding::new(ColorBox, Pad::symmetric(0, 1)).style(style);
        let first_line: Vec<Segment> = split_lines(padding.render(&RenderOptions::new(6)))
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(first_line.first().unwrap(), &Segment::blank(1, Some(style)));
        assert_eq!(first_line.last().unwrap(), &Segment::blank(1, Some(style)));
        assert_eq!(first_line.len(), 6);
    }

    #[test]
    fn gradient_inside_composites_fills_ten_columns() {
        assert_eq!(
            glyphs_per_line(&Padding::new(ColorBox, Pad::default()), 10),
            [10; ColorBox::ROWS]
        );
        assert_eq!(
            glyphs_per_line(&Constrain::new(ColorBox, Some(10)), 80),
            [10; ColorBox::ROWS]
        );
        assert_eq!(
            glyphs_per_line(&Group::new().with(ColorBox), 10),
            [10; ColorBox::ROWS]
        );
    }

    #[test]
    fn constrain_never_widens() {
        let constrain = Constrain::new(ColorBox, Some(100));
        assert_eq!(glyphs_per_line(&constrain, 7), [7; ColorBox::ROWS]);
        assert_eq!(
            constrain.measure(&RenderOptions::new(7)),
            Measurement::new(1, 7)
        );
        let unconstrained = Constrain::new(ColorBox, None);
        assert_eq!(glyphs_per_line(&unconstrained, 3), [3; ColorBox::ROWS]);
    }

    struct Failing;

    impl Renderable for Failing {
        fn measure(&self, _options: &RenderOptions) -> Measurement {
            Measurement::new(1, 1)
        }

        fn render<'a>(&'a self, _options: &RenderOptions) -> Segments<'a> {
            Box::new(
                [
                    Ok(Segment::new("x")),
                    Ok(Segment::line()),
                    Err(Error::Render("broken".into())),
                ]
                .into_iter(),
            )
        }
    }

    #[test]
    fn child_errors_pass_through_composites() {
        let padding = Padding::new(Failing, Pad::all(1));
        let results: Vec<Result<Segment>> = padding.render(&RenderOptions::new(5)).collect();
        let err = results.iter().find_map(|r| r.as_ref().err()).unwrap();
        assert!(matches!(err, Error::Render(_)));
        let group = Group::new().with(Failing).with("after");
        assert!(group
            .render(&RenderOptions::new(5))
            .any(|r| matches!(r, Err(Error::Render(_)))));
    }
}
