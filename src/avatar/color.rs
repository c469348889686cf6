//! HSL Colour Module

use std::fmt;

// == Hsl ==
/// Hue/saturation/lightness colour, rendered as `hsl(h, s%, l%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, always within `[0, 360)`
    pub hue: u32,
    /// Saturation percentage
    pub saturation: u32,
    /// Lightness percentage
    pub lightness: u32,
}

impl Hsl {
    /// Creates a colour, folding the hue into `[0, 360)`.
    pub fn new(hue: u32, saturation: u32, lightness: u32) -> Self {
        Self {
            hue: hue % 360,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(Hsl::new(355, 45, 65).to_string(), "hsl(355, 45%, 65%)");
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Hsl::new(725, 30, 30).hue, 5);
    }
}
