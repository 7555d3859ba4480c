// Copyright 2022-2023 Martin Pool.

//! Plain lines of text.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::segment::adjust_line_length;
use crate::{Error, Measurement, RenderOptions, Renderable, Segment, Segments, Style};

/// Lines of text, optionally in one style.
///
/// Lines are separated by `\n`; a single trailing newline is ignored.
/// Lines wider than the offered width are cropped, not wrapped.
///
/// Plain `&str` and `String` values render the same way, without a style.
///
/// ```
/// use paprika::{Style, Text};
///
/// let title = Text::new("Paprika features").styled(Style::new().bold());
/// ```
#[derive(Debug, Clone)]
pub struct Text {
    content: Cow<'static, str>,
    style: Option<Style>,
}

impl Text {
    /// Construct unstyled text.
    pub fn new<S>(content: S) -> Text
    where
        S: Into<Cow<'static, str>>,
    {
        Text {
            content: content.into(),
            style: None,
        }
    }

    /// Set the style of the whole text.
    pub fn styled(self, style: Style) -> Text {
        Text {
            style: Some(style),
            ..self
        }
    }

    /// The text itself.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Renderable for Text {
    fn measure(&self, _options: &RenderOptions) -> Measurement {
        measure_str(&self.content)
    }

    fn render<'a>(&'a self, options: &RenderOptions) -> Segments<'a> {
        render_str(&self.content, self.style, options.max_width())
    }
}

/// Text is never wrapped, so it needs its widest line at both bounds.
pub(crate) fn measure_str(content: &str) -> Measurement {
    let widest = lines(content).map(UnicodeWidthStr::width).max().unwrap_or(0);
    Measurement::new(widest, widest)
}

pub(crate) fn render_str(content: &str, style: Option<Style>, width: usize) -> Segments<'_> {
    Box::new(lines(content).flat_map(move |line| {
        let segment = match style {
            Some(style) => Segment::styled(line.to_owned(), style),
            None => Segment::new(line.to_owned()),
        };
        let line = if segment.cell_length() > width {
            adjust_line_length(vec![segment], width, None)
        } else {
            vec![segment]
        };
        line.into_iter().chain([Segment::line()]).map(Ok::<_, Error>)
    }))
}

fn lines(content: &str) -> std::str::Split<'_, char> {
    content.strip_suffix('\n').unwrap_or(content).split('\n')
}
