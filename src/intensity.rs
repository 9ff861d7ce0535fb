// MIT/Apache2 License

use ordered_float::NotNan;

/// A value going from zero to one, defining the intensity of a single color channel. This type is essentially
/// a wrapper around an `f32`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    pub const MAX_U8: f32 = 255.0;

    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if !(0.0..=1.0).contains(&inner) {
            return None;
        }

        NotNan::new(inner).ok().map(|inner| Self { inner })
    }

    /// Create an `Intensity` from an eight-bit channel value.
    #[inline]
    pub fn from_u8(channel: u8) -> Self {
        Self::new(f32::from(channel) / Self::MAX_U8).unwrap_or_default()
    }

    /// Create an `Intensity` from a four-bit channel value, as found in the short `#rgb` color form.
    #[inline]
    pub fn from_nibble(nibble: u8) -> Self {
        // 0xA -> 0xAA
        Self::from_u8((nibble & 0x0F) * 0x11)
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }
}

impl From<Intensity> for f32 {
    #[inline]
    fn from(i: Intensity) -> f32 {
        i.into_inner()
    }
}
