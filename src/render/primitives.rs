use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ShowcaseError, ShowcaseResult};

/// 8-bit RGBA color, exchanged with widgets as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const PRIMARY: Color = Color::rgb(0x19, 0x76, 0xd2);
    pub const LIGHT: Color = Color::rgb(0x90, 0xca, 0xf9);
    pub const SUCCESS: Color = Color::rgb(0x66, 0xbb, 0x6a);
    pub const ERROR: Color = Color::rgb(0xef, 0x53, 0x50);
    pub const WARNING: Color = Color::rgb(0xff, 0xb7, 0x4d);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ShowcaseResult<Self> {
        let digits = input.strip_prefix('#').ok_or_else(|| invalid_hex(input))?;
        // `from_str_radix` alone would accept a leading `+`.
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid_hex(input));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid_hex(input))
        };
        match digits.len() {
            3 => {
                let short = |index: usize| channel(index..index + 1).map(|value| value * 0x11);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid_hex(input)),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        if self.alpha == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

fn invalid_hex(input: &str) -> ShowcaseError {
    ShowcaseError::InvalidConfig(format!(
        "color `{input}` must be `#rgb`, `#rrggbb` or `#rrggbbaa`"
    ))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ShowcaseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_hex(input)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
