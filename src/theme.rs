//! Day/night display modes
//!
//! A mode selects one of two fixed color pairs. The pair is a pure function
//! of the mode; the only state is which mode is currently active.
//!
//! The startup mode comes from a [`ThemePreference`]: `auto` follows the
//! terminal's ambient color scheme, `day` and `night` pin it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable set by many terminals as `"<fg>;<bg>"` ANSI color indices
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// The two colors that make up a display palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Foreground / text color
    pub dark: Rgb,
    /// Background color
    pub light: Rgb,
}

const NEAR_BLACK: Rgb = Rgb(10, 10, 20);
const WHITE: Rgb = Rgb(255, 255, 255);

/// Active display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark text on a light background
    #[default]
    Day,
    /// Light text on a dark background
    Night,
}

impl ThemeMode {
    /// Color pair for this mode
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Day => Palette {
                dark: NEAR_BLACK,
                light: WHITE,
            },
            Self::Night => Palette {
                dark: WHITE,
                light: NEAR_BLACK,
            },
        }
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }

    /// All modes in selector order
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Day, Self::Night]
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configured theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the terminal's ambient color scheme
    #[default]
    Auto,
    Day,
    Night,
}

impl ThemePreference {
    /// Pick the startup mode, consulting `ambient` only for [`ThemePreference::Auto`]
    ///
    /// With no ambient hint, `auto` falls back to day.
    #[must_use]
    pub fn resolve(self, ambient: Option<ThemeMode>) -> ThemeMode {
        match self {
            Self::Auto => ambient.unwrap_or_default(),
            Self::Day => ThemeMode::Day,
            Self::Night => ThemeMode::Night,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Day => "day",
            Self::Night => "night",
        };
        f.write_str(name)
    }
}

/// Interpret a `COLORFGBG` value
///
/// The background is the last `;`-separated field. ANSI indices 0-6 and 8
/// are dark backgrounds (night); 7 and 9-15 are light (day). Anything else
/// gives no hint.
#[must_use]
pub fn mode_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(ThemeMode::Night),
        7 | 9..=15 => Some(ThemeMode::Day),
        _ => None,
    }
}

/// Ambient color-scheme preference of the hosting terminal, if it advertises one
#[must_use]
pub fn detect_ambient() -> Option<ThemeMode> {
    std::env::var(COLORFGBG_VAR)
        .ok()
        .and_then(|value| mode_from_colorfgbg(&value))
}
