// Copyright 2022-2023 Martin Pool.

//! Colors and text attributes attached to segments.

use std::fmt;
use std::ops::Add;

use bitflags::bitflags;

use crate::{Error, Result};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Construct a color from integer channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }

    /// Construct a color from channels in `[0, 255]`, truncating any fraction.
    ///
    /// Values outside that range, or NaN, are an error.
    pub fn from_f64(red: f64, green: f64, blue: f64) -> Result<Rgb> {
        Ok(Rgb {
            red: checked_channel("red", red)?,
            green: checked_channel("green", green)?,
            blue: checked_channel("blue", blue)?,
        })
    }

    /// Construct a color from channels in `[0, 1]`, scaled to `[0, 255]`.
    ///
    /// ```
    /// let c = paprika::Rgb::from_unit(0.2, 0.0, 1.0).unwrap();
    /// assert_eq!(c, paprika::Rgb::new(51, 0, 255));
    /// ```
    pub fn from_unit(red: f64, green: f64, blue: f64) -> Result<Rgb> {
        for (channel, value) in [("red", red), ("green", green), ("blue", blue)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::ColorOutOfRange { channel, value });
            }
        }
        Rgb::from_f64(red * 255.0, green * 255.0, blue * 255.0)
    }

    /// Parse a color name, `#rrggbb`, or `rgb(r,g,b)`.
    pub fn parse(s: &str) -> Result<Rgb> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(Error::InvalidColor(s.clone()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.clone()))
            };
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }
        if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(Error::InvalidColor(s.clone()));
            }
            let mut channels = [0.0; 3];
            for (c, part) in channels.iter_mut().zip(&parts) {
                *c = part
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidColor(s.clone()))?;
            }
            return Rgb::from_f64(channels[0], channels[1], channels[2]);
        }
        named_color(&s).ok_or(Error::InvalidColor(s))
    }

    fn to_yansi(self) -> yansi::Color {
        yansi::Color::RGB(self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

fn checked_channel(channel: &'static str, value: f64) -> Result<u8> {
    if (0.0..=255.0).contains(&value) {
        Ok(value as u8)
    } else {
        Err(Error::ColorOutOfRange { channel, value })
    }
}

fn named_color(name: &str) -> Option<Rgb> {
    // The xterm palette for the sixteen standard colors.
    let rgb = match name {
        "black" => Rgb::new(0, 0, 0),
        "red" => Rgb::new(205, 0, 0),
        "green" => Rgb::new(0, 205, 0),
        "yellow" => Rgb::new(205, 205, 0),
        "blue" => Rgb::new(0, 0, 238),
        "magenta" => Rgb::new(205, 0, 205),
        "cyan" => Rgb::new(0, 205, 205),
        "white" => Rgb::new(229, 229, 229),
        "bright_black" => Rgb::new(127, 127, 127),
        "bright_red" => Rgb::new(255, 0, 0),
        "bright_green" => Rgb::new(0, 255, 0),
        "bright_yellow" => Rgb::new(255, 255, 0),
        "bright_blue" => Rgb::new(92, 92, 255),
        "bright_magenta" => Rgb::new(255, 0, 255),
        "bright_cyan" => Rgb::new(0, 255, 255),
        "bright_white" => Rgb::new(255, 255, 255),
        _ => return None,
    };
    Some(rgb)
}

bitflags! {
    /// Boolean text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attributes: u8 {
        /// Bold or increased intensity.
        const BOLD = 1 << 0;
        /// Dim or decreased intensity.
        const DIM = 1 << 1;
        /// Italic.
        const ITALIC = 1 << 2;
        /// Underlined.
        const UNDERLINE = 1 << 3;
        /// Blinking.
        const BLINK = 1 << 4;
        /// Foreground and background swapped.
        const REVERSE = 1 << 5;
        /// Struck through.
        const STRIKE = 1 << 6;
    }
}

impl Attributes {
    fn from_word(word: &str) -> Option<Attributes> {
        Some(match word {
            "bold" | "b" => Attributes::BOLD,
            "dim" | "d" => Attributes::DIM,
            "italic" | "i" => Attributes::ITALIC,
            "underline" | "u" => Attributes::UNDERLINE,
            "blink" => Attributes::BLINK,
            "reverse" | "r" => Attributes::REVERSE,
            "strike" | "s" => Attributes::STRIKE,
            _ => return None,
        })
    }
}

/// An immutable bundle of colors and text attributes.
///
/// Each attribute is either set on, set off, or unset. Combining two styles
/// with `+` takes every field that is set in the right-hand style, and
/// falls back to the left-hand style for the rest.
///
/// ```
/// use paprika::{Rgb, Style};
///
/// let base = Style::new().bold().color(Rgb::new(255, 0, 0));
/// let over = Style::parse("not bold italic").unwrap();
/// let merged = base + over;
/// assert!(!merged.is_bold());
/// assert!(merged.is_italic());
/// assert_eq!(merged.foreground(), Some(Rgb::new(255, 0, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    color: Option<Rgb>,
    bgcolor: Option<Rgb>,
    /// Values of attributes, meaningful only where `set` has the bit.
    attributes: Attributes,
    /// Which attributes this style decides.
    set: Attributes,
}

impl Default for Attributes {
    fn default() -> Attributes {
        Attributes::empty()
    }
}

impl Style {
    /// A style with nothing set.
    pub const fn new() -> Style {
        Style {
            color: None,
            bgcolor: None,
            attributes: Attributes::empty(),
            set: Attributes::empty(),
        }
    }

    /// Parse a style definition such as `"bold red on #102030"`.
    ///
    /// Words are attribute names (`bold`, `dim`, `italic`, `underline`,
    /// `blink`, `reverse`, `strike`), optionally preceded by `not`, or
    /// colors as accepted by [Rgb::parse]. A color after `on` is the
    /// background.
    pub fn parse(definition: &str) -> Result<Style> {
        let mut style = Style::new();
        let mut words = definition.split_whitespace();
        while let Some(word) = words.next() {
            let word = word.to_ascii_lowercase();
            match word.as_str() {
                "none" => (),
                "on" => {
                    let color = words
                        .next()
                        .ok_or_else(|| Error::UnknownStyle(definition.to_owned()))?;
                    style.bgcolor = Some(Rgb::parse(color)?);
                }
                "not" => {
                    let attr = words
                        .next()
                        .and_then(|w| Attributes::from_word(&w.to_ascii_lowercase()))
                        .ok_or_else(|| Error::UnknownStyle(definition.to_owned()))?;
                    style = style.with_attribute(attr, false);
                }
                other => {
                    if let Some(attr) = Attributes::from_word(other) {
                        style = style.with_attribute(attr, true);
                    } else {
                        style.color = Some(
                            Rgb::parse(other).map_err(|_| Error::UnknownStyle(other.to_owned()))?,
                        );
                    }
                }
            }
        }
        Ok(style)
    }

    /// Set the foreground color.
    pub const fn color(self, color: Rgb) -> Style {
        Style {
            color: Some(color),
            ..self
        }
    }

    /// Set the background color.
    pub const fn on(self, bgcolor: Rgb) -> Style {
        Style {
            bgcolor: Some(bgcolor),
            ..self
        }
    }

    /// Explicitly turn an attribute on or off.
    pub fn with_attribute(self, attribute: Attributes, on: bool) -> Style {
        let mut attributes = self.attributes;
        attributes.set(attribute, on);
        Style {
            attributes,
            set: self.set | attribute,
            ..self
        }
    }

    /// Turn on bold.
    pub fn bold(self) -> Style {
        self.with_attribute(Attributes::BOLD, true)
    }

    /// Turn on dim.
    pub fn dim(self) -> Style {
        self.with_attribute(Attributes::DIM, true)
    }

    /// Turn on italic.
    pub fn italic(self) -> Style {
        self.with_attribute(Attributes::ITALIC, true)
    }

    /// Turn on underline.
    pub fn underline(self) -> Style {
        self.with_attribute(Attributes::UNDERLINE, true)
    }

    /// The foreground color, if set.
    pub fn foreground(&self) -> Option<Rgb> {
        self.color
    }

    /// The background color, if set.
    pub fn background(&self) -> Option<Rgb> {
        self.bgcolor
    }

    /// True if this attribute is explicitly set on.
    pub fn has(&self, attribute: Attributes) -> bool {
        self.set.contains(attribute) && self.attributes.contains(attribute)
    }

    /// True if this attribute is set either on or off.
    pub fn decides(&self, attribute: Attributes) -> bool {
        self.set.contains(attribute)
    }

    /// True if bold is set on.
    pub fn is_bold(&self) -> bool {
        self.has(Attributes::BOLD)
    }

    /// True if italic is set on.
    pub fn is_italic(&self) -> bool {
        self.has(Attributes::ITALIC)
    }

    /// True if this style would not change how text looks.
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.bgcolor.is_none() && (self.attributes & self.set).is_empty()
    }

    /// Wrap `text` in the ANSI escapes for this style.
    pub(crate) fn paint<T: fmt::Display>(&self, text: T) -> yansi::Paint<T> {
        let mut style = yansi::Style::default();
        if let Some(color) = self.color {
            style = style.fg(color.to_yansi());
        }
        if let Some(bgcolor) = self.bgcolor {
            style = style.bg(bgcolor.to_yansi());
        }
        let on = self.attributes & self.set;
        if on.contains(Attributes::BOLD) {
            style = style.bold();
        }
        if on.contains(Attributes::DIM) {
            style = style.dimmed();
        }
        if on.contains(Attributes::ITALIC) {
            style = style.italic();
        }
        if on.contains(Attributes::UNDERLINE) {
            style = style.underline();
        }
        if on.contains(Attributes::BLINK) {
            style = style.blink();
        }
        if on.contains(Attributes::REVERSE) {
            style = style.invert();
        }
        if on.contains(Attributes::STRIKE) {
            style = style.strikethrough();
        }
        style.paint(text)
    }
}

impl Add for Style {
    type Output = Style;

    fn add(self, rhs: Style) -> Style {
        Style {
            color: rhs.color.or(self.color),
            bgcolor: rhs.bgcolor.or(self.bgcolor),
            attributes: (self.attributes & !rhs.set) | (rhs.attributes & rhs.set),
            set: self.set | rhs.set,
        }
    }
}

impl Add<Option<Style>> for Style {
    type Output = Style;

    fn add(self, rhs: Option<Style>) -> Style {
        match rhs {
            Some(rhs) => self + rhs,
            None => self,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn out_of_range_channel_fails_at_construction() {
        let err = Rgb::from_f64(256.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::ColorOutOfRange { channel: "red", .. }));
        assert!(Rgb::from_f64(0.0, -1.0, 0.0).is_err());
        assert!(Rgb::from_f64(0.0, 0.0, f64::NAN).is_err());
        assert!(Rgb::from_unit(0.0, 0.0, 1.5).is_err());
    }

    #[test]
    fn fractions_truncate() {
        assert_eq!(Rgb::from_f64(51.9, 0.2, 254.99).unwrap(), Rgb::new(51, 0, 254));
        assert_eq!(Rgb::from_unit(1.0, 1.0, 1.0).unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn parse_colors() {
        assert_eq!(Rgb::parse("#ff8800").unwrap(), Rgb::new(255, 136, 0));
        assert_eq!(Rgb::parse("rgb(1, 2, 3)").unwrap(), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::parse("Red").unwrap(), Rgb::new(205, 0, 0));
        assert!(Rgb::parse("#ff88").is_err());
        assert!(Rgb::parse("rgb(1,2)").is_err());
        assert!(Rgb::parse("rgb(1,2,300)").is_err());
        assert!(Rgb::parse("chartreuse-ish").is_err());
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Rgb::new(1, 171, 255).to_string(), "#01abff");
    }

    #[test]
    fn parse_style() {
        let style = Style::parse("bold red on #000080").unwrap();
        assert!(style.is_bold());
        assert_eq!(style.foreground(), Some(Rgb::new(205, 0, 0)));
        assert_eq!(style.background(), Some(Rgb::new(0, 0, 128)));
        assert!(!style.decides(Attributes::ITALIC));
    }

    #[test]
    fn parse_style_rejects_unknown_words() {
        assert!(matches!(
            Style::parse("bold sparkly"),
            Err(Error::UnknownStyle(w)) if w == "sparkly"
        ));
        assert!(Style::parse("not").is_err());
        assert!(Style::parse("on").is_err());
    }

    #[test]
    fn merge_is_right_biased() {
        let a = Style::new()
            .bold()
            .italic()
            .color(Rgb::new(1, 2, 3))
            .on(Rgb::new(9, 9, 9));
        let b = Style::new()
            .with_attribute(Attributes::BOLD, false)
            .color(Rgb::new(4, 5, 6));
        let merged = a + b;
        assert!(!merged.is_bold());
        assert!(merged.decides(Attributes::BOLD));
        assert!(merged.is_italic());
        assert_eq!(merged.foreground(), Some(Rgb::new(4, 5, 6)));
        assert_eq!(merged.background(), Some(Rgb::new(9, 9, 9)));
    }

    #[test]
    fn unset_fields_fall_through() {
        let a = Style::new().underline();
        assert_eq!(a + Style::new(), a);
        assert_eq!(Style::new() + a, a);
        assert_eq!(a + None, a);
    }

    #[test]
    fn plain_styles() {
        assert!(Style::new().is_plain());
        assert!(Style::parse("not bold").unwrap().is_plain());
        assert!(!Style::new().dim().is_plain());
        assert!(!Style::new().color(Rgb::new(0, 0, 0)).is_plain());
    }

    #[test]
    fn painted_text_carries_truecolor_escape() {
        let painted = Style::new().color(Rgb::new(51, 0, 0)).paint("x").to_string();
        assert!(painted.contains("38;2;51;0;0"), "{painted:?}");
        assert!(painted.contains('x'));
    }
}
