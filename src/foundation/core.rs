use std::fmt;

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color channels of an RGBA pixel. Alpha is dropped.
    pub fn from_rgba(px: &image::Rgba<u8>) -> Self {
        let [r, g, b, _a] = px.0;
        Self { r, g, b }
    }

    pub fn key(self) -> ColorKey {
        ColorKey(self)
    }
}

/// Canonical `#rrggbb` identity of a layer.
///
/// Wraps the color rather than an owned string; the lowercase hex form is produced by
/// [`fmt::Display`] and is what ends up in the `fill` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorKey(pub Rgb8);

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb8 { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Maximal horizontal run of same-colored, non-transparent pixels in one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Run {
    /// First pixel column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Pixel count, always >= 1.
    pub width: u32,
}

impl Run {
    /// Runs never span rows.
    pub const HEIGHT: u32 = 1;

    /// Exclusive end column.
    pub fn end_x(self) -> u32 {
        self.x + self.width
    }

    /// Return `true` when pixel `(x, y)` lies inside the run.
    pub fn contains(self, x: u32, y: u32) -> bool {
        y == self.y && self.x <= x && x < self.end_x()
    }
}
