//! Avatar Synthesizer Module
//!
//! Pure, deterministic SVG avatars derived from a hash of the display name.
//! Nothing in here does I/O or holds mutable state, so every function is
//! safe to call from any number of tasks at once.

mod appearance;
mod color;
mod content;
mod hash;
mod output;
mod request;
mod svg;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use appearance::{generate_avatar_data, AvatarAppearance};
pub use color::Hsl;
pub use content::{emoji_index, pattern_cell_color, EMOJIS, PERSON_ICON_PATH};
pub use hash::hash_code;
pub use output::{
    html_string, svg_data_url, svg_string, ElementHost, MarkupElementHost, RenderMode,
};
pub use request::{AvatarRequest, AvatarType, Shape, DEFAULT_SIZE};
pub use svg::{build_svg, SvgSynthesizer, Synthesizer};
