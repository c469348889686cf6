//! Avatar Appearance Module
//!
//! Derives initials and colours from a display name.

use crate::avatar::color::Hsl;
use crate::avatar::hash::hash_code;
use crate::error::{AvatarError, Result};

// == Palette ==
const BACKGROUND_SATURATION: u32 = 45;
const BACKGROUND_LIGHTNESS: u32 = 65;
const ACCENT_SATURATION: u32 = 30;
const ACCENT_LIGHTNESS: u32 = 30;

// == Avatar Appearance ==
/// Deterministic look of an avatar, computed from the name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarAppearance {
    /// One or two upper-case letters
    pub initials: String,
    pub background_color: Hsl,
    pub accent_color: Hsl,
    /// Raw hash of the untrimmed name
    pub hash_code: i32,
}

impl AvatarAppearance {
    /// Base hue shared by the background and accent colours.
    pub fn hue(&self) -> u32 {
        self.background_color.hue
    }
}

// == Generate ==
/// Computes initials and colours for `name`.
///
/// Fails with [`AvatarError::InvalidInput`] when the name has no
/// non-whitespace characters.
pub fn generate_avatar_data(name: &str) -> Result<AvatarAppearance> {
    let initials = initials_of(name)
        .ok_or_else(|| AvatarError::InvalidInput("name must not be empty".to_string()))?;

    let hash = hash_code(name);
    let hue = hash.unsigned_abs() % 360;

    Ok(AvatarAppearance {
        initials,
        background_color: Hsl::new(hue, BACKGROUND_SATURATION, BACKGROUND_LIGHTNESS),
        accent_color: Hsl::new(hue, ACCENT_SATURATION, ACCENT_LIGHTNESS),
        hash_code: hash,
    })
}

/// First letter of the first two whitespace-separated words, upper-cased.
fn initials_of(name: &str) -> Option<String> {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    (!initials.is_empty()).then_some(initials)
}
