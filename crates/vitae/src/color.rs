//! Colors used by templates.

use std::fmt;

/// An RGB color.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct Rgb(u8, u8, u8);

impl Default for Rgb {
    fn default() -> Self {
        Rgb::black()
    }
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb(red, green, blue)
    }

    /// Create a color from a `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Create a black RGB color.
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Create a white RGB color.
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// The `red` component of the color.
    pub fn red(&self) -> u8 {
        self.0
    }

    /// The `green` component of the color.
    pub fn green(&self) -> u8 {
        self.1
    }

    /// The `blue` component of the color.
    pub fn blue(&self) -> u8 {
        self.2
    }

    /// Mix the color with white. `amount` of 0 keeps the color, 1 yields white.
    pub fn tint(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
        Rgb(mix(self.0), mix(self.1), mix(self.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
