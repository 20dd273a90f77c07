use crate::config::COLORS;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pixel: u32,
}

impl Color {
    pub fn parse(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ConfigError::InvalidColor(hex.to_string()))?;
        let pixel = u32::from_str_radix(digits, 16)
            .map_err(|_| ConfigError::InvalidColor(hex.to_string()))?;
        Ok(Color { pixel })
    }

    /// 24-bit TrueColor pixel value, usable as a border pixel.
    pub const fn pixel(&self) -> u32 {
        self.pixel
    }

    pub fn hex(&self) -> String {
        format!("#{:06x}", self.pixel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Black,
    White,
    LightGray,
    DarkGray,
    Blue,
    Cyan,
    Purple,
    Pink,
    Green,
    Red,
    Yellow,
    Orange,
}

impl ColorName {
    pub const fn index(self) -> usize {
        self as usize
    }
}

pub const PALETTE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [ColorPair; PALETTE_SIZE],
}

impl Palette {
    pub fn from_hex(table: &[[&str; 2]; PALETTE_SIZE]) -> Result<Self> {
        let mut entries = [ColorPair {
            foreground: Color { pixel: 0 },
            background: Color { pixel: 0 },
        }; PALETTE_SIZE];
        for (entry, [fg, bg]) in entries.iter_mut().zip(table.iter()) {
            *entry = ColorPair {
                foreground: Color::parse(fg)?,
                background: Color::parse(bg)?,
            };
        }
        Ok(Palette { entries })
    }

    pub fn dracula() -> Result<Self> {
        Self::from_hex(&COLORS)
    }

    pub fn get(&self, name: ColorName) -> ColorPair {
        self.entries[name.index()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorPair> {
        self.entries.iter()
    }
}
