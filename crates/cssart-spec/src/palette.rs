//! The fixed gradient palette.

use serde::{Deserialize, Serialize};

/// Palette entries in draw order.
///
/// `#85C1E9` appears twice (indices 9 and 13); both slots are kept so each
/// entry is drawn with probability 1/15.
pub const PALETTE: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9", "#F8C471", "#82E0AA", "#F1948A", "#85C1E9", "#D7BDE2",
];

/// A reference to one palette entry.
///
/// Serialized as its hex string; deserialization maps a hex string back to
/// the first matching slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaletteColor(usize);

impl PaletteColor {
    /// Create a palette reference. Indices wrap modulo the palette length.
    pub const fn new(index: usize) -> Self {
        Self(index % PALETTE.len())
    }

    /// Look up a palette entry by hex string (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        PALETTE
            .iter()
            .position(|entry| entry.eq_ignore_ascii_case(hex))
            .map(Self)
    }

    /// Palette slot index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// The `#RRGGBB` string for this entry.
    pub fn hex(&self) -> &'static str {
        PALETTE[self.0]
    }

    /// The entry as 8-bit RGB.
    pub fn rgb8(&self) -> [u8; 3] {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        [channel(0), channel(2), channel(4)]
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

impl TryFrom<String> for PaletteColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("color {} is not in the palette", value))
    }
}

impl From<PaletteColor> for String {
    fn from(color: PaletteColor) -> Self {
        color.hex().to_string()
    }
}
