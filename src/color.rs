// MIT/Apache2 License

use crate::intensity::Intensity;
use std::{fmt, ops::Deref};

/// A four-element color.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: Intensity,
    g: Intensity,
    b: Intensity,
    a: Intensity,
}

impl Color {
    /// Creates a new color from eight-bit channels.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: Intensity::from_u8(r),
            g: Intensity::from_u8(g),
            b: Intensity::from_u8(b),
            a: Intensity::from_u8(a),
        }
    }

    /// Parses a hex color in one of the `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` forms. The leading `#` is
    /// optional. Returns `None` if the string is in none of these forms.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let nibbles: Vec<u8> = digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        match nibbles.as_slice() {
            [r, g, b] => Some(Self::from_nibbles(*r, *g, *b, 0xF)),
            [r, g, b, a] => Some(Self::from_nibbles(*r, *g, *b, *a)),
            [r1, r2, g1, g2, b1, b2] => Some(Self::from_rgba8(
                (r1 << 4) | r2,
                (g1 << 4) | g2,
                (b1 << 4) | b2,
                0xFF,
            )),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Some(Self::from_rgba8(
                (r1 << 4) | r2,
                (g1 << 4) | g2,
                (b1 << 4) | b2,
                (a1 << 4) | a2,
            )),
            _ => None,
        }
    }

    #[inline]
    fn from_nibbles(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: Intensity::from_nibble(r),
            g: Intensity::from_nibble(g),
            b: Intensity::from_nibble(b),
            a: Intensity::from_nibble(a),
        }
    }
}

/// A color value as handed to a surface's paint properties.
///
/// The string always begins with `#`; one is prepended on construction if it is missing. No other checking
/// takes place, so `HexColor` can hold strings that are not colors at all. Use [`HexColor::to_color`] to find
/// out whether it parses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct HexColor(String);

impl HexColor {
    /// Normalize a color string by prepending `#` if it does not already start with one.
    #[inline]
    pub fn new(color: impl Into<String>) -> Self {
        let mut color = color.into();
        if !color.starts_with('#') {
            color.insert(0, '#');
        }
        Self(color)
    }

    /// The normalized string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse this value into a [`Color`].
    #[inline]
    pub fn to_color(&self) -> Option<Color> {
        Color::from_hex(&self.0)
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for HexColor {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HexColor {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for HexColor {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&HexColor> for HexColor {
    #[inline]
    fn from(c: &HexColor) -> Self {
        c.clone()
    }
}

impl From<HexColor> for String {
    #[inline]
    fn from(c: HexColor) -> String {
        c.0
    }
}

impl PartialEq<str> for HexColor {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_prepends_hash_once() {
        assert_eq!(HexColor::new("f00"), "#f00");
        assert_eq!(HexColor::new("#f00"), "#f00");
        assert_eq!(HexColor::new(""), "#");

        for raw in &["abc", "#abc", "##", "not a color", "ff00ff80"] {
            let once = HexColor::new(*raw);
            let twice = HexColor::new(once.as_str());
            assert!(once.starts_with('#'));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Color::from_hex("#000"), Some(Color::from_rgba8(0, 0, 0, 255)));
        assert_eq!(
            Color::from_hex("#fff"),
            Some(Color::from_rgba8(255, 255, 255, 255))
        );
        assert_eq!(
            Color::from_hex("#12345678"),
            Some(Color::from_rgba8(0x12, 0x34, 0x56, 0x78))
        );
        assert_eq!(
            Color::from_hex("a0b1c2"),
            Some(Color::from_rgba8(0xa0, 0xb1, 0xc2, 0xff))
        );
        assert_eq!(
            Color::from_hex("#f008"),
            Some(Color::from_rgba8(0xff, 0, 0, 0x88))
        );
        assert_eq!(HexColor::new("abc").to_color(), Color::from_hex("#aabbcc"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::from_hex("#").is_none());
        assert!(Color::from_hex("#12").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#ggg").is_none());
        assert!(Color::from_hex("#+12").is_none());
        assert!(HexColor::new("red").to_color().is_none());
    }
}
