use colored::{ColoredString, Colorize};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitively.
    pub fn from_hex(value: &str) -> Result<Rgb, Error> {
        let invalid = || {
            Error::new(ErrorImpl::InvalidHexColor {
                value: value.to_string(),
            })
        };

        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        let linear = |channel: u8| {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };

        0.2126 * linear(self.0) + 0.7152 * linear(self.1) + 0.0722 * linear(self.2)
    }

    pub fn paint(&self, s: &str) -> ColoredString {
        s.truecolor(self.0, self.1, self.2)
    }
}

/// Decides whether a theme is dark from its background and text colors.
///
/// Hex backgrounds are judged by luminance (an unparsable hex counts as
/// black). Named backgrounds fall back to looking for "dark" in the name
/// or a white foreground.
pub fn is_dark_background(background: &str, foreground: &str) -> bool {
    if background.starts_with('#') {
        return Rgb::from_hex(background).map_or(true, |rgb| rgb.luminance() < 0.5);
    }

    let foreground = foreground.to_ascii_lowercase();
    background.to_ascii_lowercase().contains("dark") || foreground == "#fff" || foreground == "#ffffff"
}

/// Display color for every token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub keyword: Rgb,
    pub string: Rgb,
    pub comment: Rgb,
    pub number: Rgb,
    pub operator: Rgb,
    pub punctuation: Rgb,
    pub function: Rgb,
    pub variable: Rgb,
    pub property: Rgb,
    pub tag: Rgb,
    pub attribute: Rgb,
    pub text: Rgb,
}

impl Palette {
    pub fn dark(text: Rgb) -> Palette {
        Palette {
            keyword: Rgb(0xC7, 0x92, 0xEA),     // Purple
            string: Rgb(0xC3, 0xE8, 0x8D),      // Green
            comment: Rgb(0x54, 0x6E, 0x7A),     // Muted grey
            number: Rgb(0xF7, 0x8C, 0x6C),      // Orange
            operator: Rgb(0x89, 0xDD, 0xFF),    // Cyan
            punctuation: Rgb(0x89, 0xDD, 0xFF), // Cyan
            function: Rgb(0x82, 0xAA, 0xFF),    // Blue
            variable: Rgb(0xEE, 0xFF, 0xFF),
            property: Rgb(0xF0, 0x71, 0x78), // Pink
            tag: Rgb(0xF0, 0x71, 0x78),
            attribute: Rgb(0xFF, 0xCB, 0x6B), // Yellow
            text,
        }
    }

    pub fn light(text: Rgb) -> Palette {
        Palette {
            keyword: Rgb(0x6B, 0x46, 0xC1),
            string: Rgb(0x16, 0xA3, 0x4A),
            comment: Rgb(0x64, 0x74, 0x8B),
            number: Rgb(0xDC, 0x26, 0x26),
            operator: Rgb(0x0E, 0xA5, 0xE9),
            punctuation: Rgb(0x47, 0x55, 0x69),
            function: Rgb(0x25, 0x63, 0xEB),
            variable: Rgb(0x1F, 0x29, 0x37),
            property: Rgb(0xBE, 0x18, 0x5D),
            tag: Rgb(0xDC, 0x26, 0x26),
            attribute: Rgb(0xCA, 0x8A, 0x04),
            text,
        }
    }

    /// Picks the dark or light variant for a theme given as hex/named
    /// colors. The foreground doubles as the plain `text` color when it
    /// parses.
    pub fn for_background(background: &str, foreground: &str) -> Palette {
        let dark = is_dark_background(background, foreground);
        let fallback = if dark {
            Rgb(0xFF, 0xFF, 0xFF)
        } else {
            Rgb(0x00, 0x00, 0x00)
        };
        let text = Rgb::from_hex(foreground).unwrap_or(fallback);

        if dark {
            Palette::dark(text)
        } else {
            Palette::light(text)
        }
    }

    /// Strict form of [`Palette::for_background`]: a malformed foreground,
    /// or a background written as `#...` that is not valid hex, is an
    /// `InvalidHexColor` error instead of a silent default.
    pub fn from_theme(background: &str, foreground: &str) -> Result<Palette, Error> {
        if background.starts_with('#') {
            Rgb::from_hex(background)?;
        }
        let text = Rgb::from_hex(foreground)?;

        if is_dark_background(background, foreground) {
            Ok(Palette::dark(text))
        } else {
            Ok(Palette::light(text))
        }
    }

    pub fn color(&self, kind: TokenKind) -> Rgb {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::String => self.string,
            TokenKind::Comment => self.comment,
            TokenKind::Number => self.number,
            TokenKind::Operator => self.operator,
            TokenKind::Punctuation => self.punctuation,
            TokenKind::Function => self.function,
            TokenKind::Variable => self.variable,
            TokenKind::Property => self.property,
            TokenKind::Tag => self.tag,
            TokenKind::Attribute => self.attribute,
            TokenKind::Text => self.text,
        }
    }
}
