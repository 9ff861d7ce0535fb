// MIT/Apache2 License

use std::borrow::Cow;

/// A coordinate or length that may arrive either as a number or as a numeric string.
///
/// Shapes that accept `Coord`s do their arithmetic on [`Coord::to_integer`], so that `"100"` and `100.0` describe
/// the same position. Where a coordinate is handed to the surface as is, it goes through [`Coord::to_number`].
#[derive(Debug, Clone, PartialEq)]
pub enum Coord<'a> {
    Number(f64),
    Text(Cow<'a, str>),
}

impl<'a> Coord<'a> {
    /// Coerce this coordinate to an integer-valued `f64`.
    ///
    /// * Numbers are truncated toward zero. `NaN` and the infinities become `NaN`.
    /// * Strings have leading whitespace skipped, then an optional sign, then either a `0x`/`0X` prefix followed
    ///   by hex digits or plain decimal digits. Parsing stops at the first character that does not fit. If no
    ///   digits were read, the result is `NaN`.
    #[inline]
    pub fn to_integer(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => n.trunc(),
            Self::Number(_) => f64::NAN,
            Self::Text(s) => parse_leading_integer(s),
        }
    }

    /// Convert this coordinate to a number without rounding it.
    ///
    /// Numbers pass through unchanged. Strings must hold a number and nothing else apart from surrounding
    /// whitespace: a decimal with an optional sign, fraction and exponent, `Infinity`, or a `0x`/`0X` hex
    /// integer. A blank string is zero. Anything else is `NaN`, so `"100px"` is `NaN` here even though
    /// [`to_integer`](Self::to_integer) reads it as `100`.
    #[inline]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_number(s),
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return match u64::from_str_radix(hex, 16) {
            Ok(n) => n as f64,
            Err(_) => f64::NAN,
        };
    }

    let unsigned = s.trim_start_matches(|c| c == '+' || c == '-');
    if unsigned == "Infinity" {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // keep `str::parse` from accepting "inf" and "nan"
    if unsigned.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

fn parse_leading_integer(s: &str) -> f64 {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let magnitude = digits
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(None, |acc: Option<f64>, d| {
            Some(acc.unwrap_or(0.0) * f64::from(radix) + f64::from(d))
        });

    match magnitude {
        Some(m) if negative => -m,
        Some(m) => m,
        None => f64::NAN,
    }
}

macro_rules! coord_from_number {
    ($($ty: ty),*) => {
        $(
            impl<'a> From<$ty> for Coord<'a> {
                #[inline]
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

coord_from_number!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl<'a> From<&'a str> for Coord<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Coord<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Self::Text(Cow::Borrowed(s.as_str()))
    }
}

impl<'a> From<String> for Coord<'a> {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(c: impl Into<Coord<'static>>) -> f64 {
        c.into().to_integer()
    }

    #[test]
    fn numbers_truncate() {
        assert_eq!(int(10), 10.0);
        assert_eq!(int(10.9), 10.0);
        assert_eq!(int(-10.9), -10.0);
        assert_eq!(int(7u8), 7.0);
        assert!(int(f64::NAN).is_nan());
        assert!(int(f64::INFINITY).is_nan());
    }

    #[test]
    fn strings_parse_leading_integer() {
        assert_eq!(int("100"), 100.0);
        assert_eq!(int("  42px"), 42.0);
        assert_eq!(int("-5"), -5.0);
        assert_eq!(int("+5"), 5.0);
        assert_eq!(int("12.75"), 12.0);
        assert_eq!(int("0x1A"), 26.0);
        assert_eq!(int(String::from("0009")), 9.0);
    }

    fn num(c: impl Into<Coord<'static>>) -> f64 {
        c.into().to_number()
    }

    #[test]
    fn numbers_keep_their_value() {
        assert_eq!(num(100.3), 100.3);
        assert_eq!(num(-7), -7.0);
        assert!(num(f64::NAN).is_nan());
        assert_eq!(num(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn strings_parse_whole_number() {
        assert_eq!(num("100"), 100.0);
        assert_eq!(num(" 12.75\n"), 12.75);
        assert_eq!(num("-1e2"), -100.0);
        assert_eq!(num(".5"), 0.5);
        assert_eq!(num("0x1A"), 26.0);
        assert_eq!(num(""), 0.0);
        assert_eq!(num("-Infinity"), f64::NEG_INFINITY);
        assert!(num("100px").is_nan());
        assert!(num("inf").is_nan());
        assert!(num("NaN").is_nan());
        assert!(num("--1").is_nan());
        assert!(num("0x").is_nan());
    }

    #[test]
    fn strings_without_digits_are_nan() {
        assert!(int("").is_nan());
        assert!(int("abc").is_nan());
        assert!(int("-").is_nan());
        assert!(int("0x").is_nan());
        assert!(int(".5").is_nan());
    }
}
