//! Table top color palette
//!
//! The palette is closed: the control panel offers exactly these fifteen
//! swatches. Leg color is not part of it (see [`crate::constants::LEG_COLOR`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color name is not in the palette
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table color: {0:?}")]
pub struct ParseColorError(pub String);

/// Selectable table top color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableColor {
    #[default]
    Brown,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Pink,
    Skin,
    Cyan,
    White,
    BlueViolet,
    DarkCyan,
    RoyalBlue,
    DarkRed,
}

impl TableColor {
    /// All palette entries in display order
    pub const ALL: [TableColor; 15] = [
        TableColor::Brown,
        TableColor::Red,
        TableColor::Green,
        TableColor::Blue,
        TableColor::Yellow,
        TableColor::Orange,
        TableColor::Purple,
        TableColor::Pink,
        TableColor::Skin,
        TableColor::Cyan,
        TableColor::White,
        TableColor::BlueViolet,
        TableColor::DarkCyan,
        TableColor::RoyalBlue,
        TableColor::DarkRed,
    ];

    /// Lowercase palette name
    pub fn name(self) -> &'static str {
        match self {
            TableColor::Brown => "brown",
            TableColor::Red => "red",
            TableColor::Green => "green",
            TableColor::Blue => "blue",
            TableColor::Yellow => "yellow",
            TableColor::Orange => "orange",
            TableColor::Purple => "purple",
            TableColor::Pink => "pink",
            TableColor::Skin => "skin",
            TableColor::Cyan => "cyan",
            TableColor::White => "white",
            TableColor::BlueViolet => "blueviolet",
            TableColor::DarkCyan => "darkcyan",
            TableColor::RoyalBlue => "royalblue",
            TableColor::DarkRed => "darkred",
        }
    }

    /// 8-bit sRGB value
    pub fn rgb(self) -> [u8; 3] {
        match self {
            TableColor::Brown => [0xA5, 0x2A, 0x2A],
            TableColor::Red => [0xFF, 0x00, 0x00],
            TableColor::Green => [0x00, 0x80, 0x00],
            TableColor::Blue => [0x00, 0x00, 0xFF],
            TableColor::Yellow => [0xFF, 0xFF, 0x00],
            TableColor::Orange => [0xFF, 0xA5, 0x00],
            TableColor::Purple => [0x80, 0x00, 0x80],
            TableColor::Pink => [0xFF, 0xC0, 0xCB],
            // Not a CSS keyword; a light skin tone.
            TableColor::Skin => [0xF1, 0xC2, 0x7D],
            TableColor::Cyan => [0x00, 0xFF, 0xFF],
            TableColor::White => [0xFF, 0xFF, 0xFF],
            TableColor::BlueViolet => [0x8A, 0x2B, 0xE2],
            TableColor::DarkCyan => [0x00, 0x8B, 0x8B],
            TableColor::RoyalBlue => [0x41, 0x69, 0xE1],
            TableColor::DarkRed => [0x8B, 0x00, 0x00],
        }
    }

    /// Linear-light color as opaque RGBA floats, for shading
    pub fn to_linear_rgba(self) -> [f32; 4] {
        srgb_to_linear_rgba(self.rgb())
    }
}

/// Convert an 8-bit sRGB triple to opaque linear RGBA floats
pub fn srgb_to_linear_rgba(rgb: [u8; 3]) -> [f32; 4] {
    let decode = |c: u8| {
        let c = c as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2]), 1.0]
}

impl fmt::Display for TableColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TableColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn test_palette_has_fifteen_distinct_entries() {
        let names: HashSet<_> = TableColor::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), 15);
        let values: HashSet<_> = TableColor::ALL.iter().map(|c| c.rgb()).collect();
        assert_eq!(values.len(), 15);
    }

    #[test]
    fn test_every_name_parses_back() {
        for color in TableColor::ALL {
            assert_eq!(color.name().parse::<TableColor>(), Ok(color));
        }
        assert_eq!("RoyalBlue".parse::<TableColor>(), Ok(TableColor::RoyalBlue));
        assert_eq!(" darkred ".parse::<TableColor>(), Ok(TableColor::DarkRed));
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "darkbrown".parse::<TableColor>().unwrap_err();
        assert_eq!(err, ParseColorError("darkbrown".to_string()));
        assert_eq!(err.to_string(), "unknown table color: \"darkbrown\"");
    }

    #[test]
    fn test_default_is_brown() {
        assert_eq!(TableColor::default(), TableColor::Brown);
        assert_eq!(TableColor::Brown.to_string(), "brown");
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(srgb_to_linear_rgba([0, 0, 0]), [0.0, 0.0, 0.0, 1.0]);
        for channel in srgb_to_linear_rgba([255, 255, 255]) {
            assert_abs_diff_eq!(channel, 1.0, epsilon = 1e-5);
        }
        let [r, g, b, _] = TableColor::RoyalBlue.to_linear_rgba();
        assert!(r < g && g < b);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let text = ron::to_string(&TableColor::BlueViolet).unwrap();
        assert_eq!(text, "blueviolet");
    }
}
