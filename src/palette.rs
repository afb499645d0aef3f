//! Color themes
//!
//! A [`Palette`] holds the six colors a theme assigns to screen elements.
//! Four built-in themes exist; selecting one copies its palette into the
//! user settings (see [`crate::config::Settings`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// 24-bit RGB color, written as `#rrggbb` in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` integer; higher bits are ignored
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self {
            r: ((rgb & 0xFF0000) >> 16) as u8,
            g: ((rgb & 0x00FF00) >> 8) as u8,
            b: (rgb & 0x0000FF) as u8,
        }
    }

    pub const fn to_rgb_int(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_rgb_int())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(Error::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Color::from_rgb_int)
            .map_err(|_| Error::InvalidColor(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Background of the settings button, shared by every theme
pub const SETTINGS_BUTTON_BACKGROUND: Color = Color::from_rgb_int(0xcccccc);

/// Colors a theme assigns to screen elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub menu_text: Color,
    pub navigation_bar_background: Color,
    pub navigation_bar_text: Color,
    pub speaker_button_background: Color,
    pub speaker_button_text: Color,
}

impl Palette {
    const fn from_ints(colors: [u32; 6]) -> Self {
        Self {
            background: Color::from_rgb_int(colors[0]),
            menu_text: Color::from_rgb_int(colors[1]),
            navigation_bar_background: Color::from_rgb_int(colors[2]),
            navigation_bar_text: Color::from_rgb_int(colors[3]),
            speaker_button_background: Color::from_rgb_int(colors[4]),
            speaker_button_text: Color::from_rgb_int(colors[5]),
        }
    }

    /// Named colors in a fixed order, for display
    pub fn entries(&self) -> [(&'static str, Color); 6] {
        [
            ("background", self.background),
            ("menu text", self.menu_text),
            ("navigation bar", self.navigation_bar_background),
            ("navigation bar text", self.navigation_bar_text),
            ("speaker button", self.speaker_button_background),
            ("speaker button text", self.speaker_button_text),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Theme::BUILT_IN[0].palette
    }
}

/// A selectable built-in theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: u32,
    pub name: &'static str,
    pub palette: Palette,
}

impl Theme {
    pub const BUILT_IN: [Theme; 4] = [
        Theme {
            id: 0,
            name: "blue",
            palette: Palette::from_ints([0x5cc4dc, 0xffffff, 0x024e68, 0xffffff, 0xffff00, 0x000000]),
        },
        Theme {
            id: 1,
            name: "pink",
            palette: Palette::from_ints([0xfa8ead, 0xffffff, 0xff0094, 0xffffff, 0xffff00, 0x000000]),
        },
        Theme {
            id: 2,
            name: "red/yellow",
            palette: Palette::from_ints([0xe2eb8d, 0x000000, 0xc50000, 0xffffff, 0x00a5cb, 0x000000]),
        },
        Theme {
            id: 3,
            name: "purple",
            palette: Palette::from_ints([0x990fd1, 0xffffff, 0x550fd2, 0xffffff, 0xe5e5e5, 0x000000]),
        },
    ];

    pub fn all() -> &'static [Theme] {
        &Self::BUILT_IN
    }

    pub fn by_id(id: u32) -> Result<Theme> {
        Self::BUILT_IN
            .iter()
            .find(|t| t.id == id)
            .copied()
            .ok_or(Error::UnknownTheme(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_conversion() {
        let c = Color::from_rgb_int(0x024e68);
        assert_eq!(c, Color::new(0x02, 0x4e, 0x68));
        assert_eq!(c.to_rgb_int(), 0x024e68);
        assert_eq!(Color::from_rgb_int(0xff5cc4dc), Color::from_rgb_int(0x5cc4dc));
    }

    #[test]
    fn test_hex_strings() {
        assert_eq!("#ffff00".parse::<Color>().unwrap(), Color::new(255, 255, 0));
        assert_eq!("5CC4DC".parse::<Color>().unwrap().to_string(), "#5cc4dc");
        assert!(matches!("#fff".parse::<Color>(), Err(Error::InvalidColor(_))));
        assert!("#gggggg".parse::<Color>().is_err());
    }

    #[test]
    fn test_default_palette_is_blue_theme() {
        let palette = Palette::default();
        assert_eq!(palette.background.to_rgb_int(), 0x5cc4dc);
        assert_eq!(palette.navigation_bar_background.to_rgb_int(), 0x024e68);
    }

    #[test]
    fn test_theme_lookup() {
        assert_eq!(Theme::by_id(3).unwrap().name, "purple");
        assert!(matches!(Theme::by_id(4), Err(Error::UnknownTheme(4))));
        assert_eq!(Theme::all().len(), 4);
    }
}
