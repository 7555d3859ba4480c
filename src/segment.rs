// Copyright 2022-2023 Martin Pool.

//! Segments: the atomic unit of rendered output.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{Result, Style};

/// A piece of styled text, or a marker ending the current line.
///
/// A line break never carries visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: Cow<'static, str>,
    style: Option<Style>,
    line_break: bool,
}

impl Segment {
    /// A segment of unstyled text.
    ///
    /// The text should not contain newlines: use [Segment::line] to end a line.
    pub fn new<S: Into<Cow<'static, str>>>(text: S) -> Segment {
        Segment {
            text: text.into(),
            style: None,
            line_break: false,
        }
    }

    /// A segment of text with a style.
    pub fn styled<S: Into<Cow<'static, str>>>(text: S, style: Style) -> Segment {
        Segment {
            text: text.into(),
            style: Some(style),
            line_break: false,
        }
    }

    /// A line break.
    pub const fn line() -> Segment {
        Segment {
            text: Cow::Borrowed(""),
            style: None,
            line_break: true,
        }
    }

    /// A run of `width` spaces, optionally styled.
    pub fn blank(width: usize, style: Option<Style>) -> Segment {
        Segment {
            text: " ".repeat(width).into(),
            style,
            line_break: false,
        }
    }

    /// The text of this segment, which is empty for a line break.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style, if any.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// True if this segment ends a line.
    pub fn is_line_break(&self) -> bool {
        self.line_break
    }

    /// The number of terminal columns this segment occupies.
    pub fn cell_length(&self) -> usize {
        self.text.width()
    }

    /// Split this segment in two at a column offset.
    ///
    /// A double-width character straddling the cut is replaced by a space on
    /// each side, so that both halves keep their exact widths.
    pub fn split_cells(self, cut: usize) -> (Segment, Segment) {
        let mut left = String::new();
        let mut right = String::new();
        let mut pos = 0;
        for c in self.text.chars() {
            let w = c.width().unwrap_or(0);
            if pos >= cut {
                right.push(c);
            } else if pos + w <= cut {
                left.push(c);
            } else {
                left.push(' ');
                right.push(' ');
            }
            pos += w;
        }
        (
            Segment {
                text: left.into(),
                style: self.style,
                line_break: false,
            },
            Segment {
                text: right.into(),
                style: self.style,
                line_break: false,
            },
        )
    }
}

/// Total width in columns of a sequence of segments.
pub fn line_length(line: &[Segment]) -> usize {
    line.iter().map(Segment::cell_length).sum()
}

/// Crop or pad a line of segments so it is exactly `width` columns.
///
/// Padding is appended as spaces with the given style.
pub fn adjust_line_length(
    line: Vec<Segment>,
    width: usize,
    pad_style: Option<Style>,
) -> Vec<Segment> {
    let length = line_length(&line);
    if length < width {
        let mut line = line;
        line.push(Segment::blank(width - length, pad_style));
        line
    } else if length > width {
        let mut cropped = Vec::with_capacity(line.len());
        let mut pos = 0;
        for segment in line {
            let w = segment.cell_length();
            if pos + w < width {
                cropped.push(segment);
                pos += w;
            } else {
                let (left, _) = segment.split_cells(width - pos);
                cropped.push(left);
                break;
            }
        }
        cropped
    } else {
        line
    }
}

/// Group a stream of segments into lines, lazily.
///
/// Each line is returned without its terminating line break. Text after the
/// last line break is returned as a final line. After an error the stream
/// ends.
pub struct Lines<I> {
    segments: I,
    done: bool,
}

/// Group a stream of segments into lines.
pub fn split_lines<I>(segments: I) -> Lines<I::IntoIter>
where
    I: IntoIterator<Item = Result<Segment>>,
{
    Lines {
        segments: segments.into_iter(),
        done: false,
    }
}

impl<I> Iterator for Lines<I>
where
    I: Iterator<Item = Result<Segment>>,
{
    type Item = Result<Vec<Segment>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = Vec::new();
        loop {
            match self.segments.next() {
                None => {
                    self.done = true;
                    return if line.is_empty() { None } else { Some(Ok(line)) };
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                Some(Ok(segment)) if segment.is_line_break() => return Some(Ok(line)),
                Some(Ok(segment)) => line.push(segment),
            }
        }
    }
}
