use serde::{Serialize, Serializer};
use std::fmt;

/// The six-step depth palette, from shallow to deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DepthColor {
    Lime,
    Chartreuse,
    Yellow,
    Amber,
    Orange,
    Red,
}

impl DepthColor {
    /// Palette in ascending depth order
    pub const ASCENDING: [DepthColor; 6] = [
        DepthColor::Lime,
        DepthColor::Chartreuse,
        DepthColor::Yellow,
        DepthColor::Amber,
        DepthColor::Orange,
        DepthColor::Red,
    ];

    /// CSS hex form, as handed to the map widget
    pub fn hex(self) -> &'static str {
        match self {
            DepthColor::Lime => "#a3f600",
            DepthColor::Chartreuse => "#dcf400",
            DepthColor::Yellow => "#f7db11",
            DepthColor::Amber => "#fdb72a",
            DepthColor::Orange => "#fca35d",
            DepthColor::Red => "#ff5f65",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            DepthColor::Lime => [0xa3, 0xf6, 0x00],
            DepthColor::Chartreuse => [0xdc, 0xf4, 0x00],
            DepthColor::Yellow => [0xf7, 0xdb, 0x11],
            DepthColor::Amber => [0xfd, 0xb7, 0x2a],
            DepthColor::Orange => [0xfc, 0xa3, 0x5d],
            DepthColor::Red => [0xff, 0x5f, 0x65],
        }
    }

    /// Position in the palette, 0 for the shallowest tier
    pub fn tier(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DepthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for DepthColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_matches_rgb() {
        for color in DepthColor::ASCENDING {
            let [r, g, b] = color.rgb();
            assert_eq!(color.hex(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }

    #[test]
    fn test_tiers_follow_palette_order() {
        for (index, color) in DepthColor::ASCENDING.iter().enumerate() {
            assert_eq!(color.tier(), index);
        }
    }

    #[test]
    fn test_serializes_as_hex() {
        assert_eq!(serde_json::to_string(&DepthColor::Red).unwrap(), "\"#ff5f65\"");
    }
}
