use crate::color_8888::Color8888;
use derive_enum_all_values::AllValues;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As used for the endpoints of BC1 and BC3 colour blocks.
///
/// Ordering compares the raw packed value, which is what decoders use to pick
/// between the 4-colour and 3-colour palettes of a BC1 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

/// Which interpolated palette entry to compute in [`Color565::blend`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, AllValues)]
pub enum BlendWeight {
    /// `(2 * color0 + color1) / 3`, palette index 2 of a 4-colour block
    OneThird,
    /// `(color0 + 2 * color1) / 3`, palette index 3 of a 4-colour block
    TwoThirds,
    /// `(color0 + color1) / 2`, palette index 2 of a 3-colour BC1 block
    Half,
}

impl Color565 {
    /// Packed value of black, also the cleared endpoint written by the optimizer.
    pub const BLACK: Self = Self::from_raw(0);

    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate RGB components
    ///
    /// Each channel is truncated (not rounded) to its bit width.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    // The expansion below is `(x * 527 + 15) >> 6` for 5-bit and `(x * 259 + 35) >> 6` for 6-bit
    // fields rather than top-bit replication. Both endpoints of every encoded block are
    // re-quantized through these, so they must stay bit-exact.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = ((self.value >> 11) & 0x1F) as u32;
        ((r * 527 + 15) >> 6) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = ((self.value >> 5) & 0x3F) as u32;
        ((g * 259 + 35) >> 6) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = (self.value & 0x1F) as u32;
        ((b * 527 + 15) >> 6) as u8
    }

    /// Returns the expanded `[r, g, b]` components.
    #[inline]
    pub const fn to_rgb(&self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Compares two [`Color565`] values
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_rgb(255, 0, 0);
    /// let rgba8888 = rgb565.to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    pub fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }

    /// Computes an interpolated palette entry between `self` (color0) and `other` (color1),
    /// then truncates it back to RGB565.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress::color_565::{BlendWeight, Color565};
    ///
    /// let white = Color565::from_raw(0xFFFF);
    /// let black = Color565::from_raw(0x0000);
    /// let grey = white.blend(black, BlendWeight::Half);
    /// assert_eq!(grey, Color565::from_rgb(127, 127, 127));
    /// ```
    #[inline]
    pub fn blend(self, other: Self, weight: BlendWeight) -> Self {
        let c0 = self.to_rgb();
        let c1 = other.to_rgb();
        let mut mixed = [0u8; 3];
        for ((out, &a), &b) in mixed.iter_mut().zip(c0.iter()).zip(c1.iter()) {
            let (a, b) = (a as u16, b as u16);
            *out = match weight {
                BlendWeight::OneThird => (2 * a + b) / 3,
                BlendWeight::TwoThirds => (a + 2 * b) / 3,
                BlendWeight::Half => (a + b) / 2,
            } as u8;
        }

        Self::from_rgb(mixed[0], mixed[1], mixed[2])
    }
}
