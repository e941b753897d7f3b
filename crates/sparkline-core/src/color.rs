#![forbid(unsafe_code)]

//! Packed RGB colors for line primitives.

/// A compact RGB color.
///
/// - **Size:** 4 bytes.
/// - **Layout:** `0x00RRGGBB` (R in bits 23..16, B in bits 7..0), the
///   layout small-display drivers take their line colors in.
///
/// There is no alpha channel: target panels are RGB565/RGB888 and any
/// compositing is the host collaborator's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgb(pub u32);

impl PackedRgb {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White — the default line color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a color from individual channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for PackedRgb {
    fn from(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }
}

impl From<PackedRgb> for u32 {
    fn from(color: PackedRgb) -> Self {
        color.0
    }
}
