//! SVG Assembly Module
//!
//! Wraps the shape envelope and inner content into a standalone SVG document.

use crate::avatar::appearance::generate_avatar_data;
use crate::avatar::content::{
    emoji_content, gradient_defs, gradient_id, icon_content, initials_content, num,
    pattern_content,
};
use crate::avatar::request::{AvatarRequest, AvatarType, Shape};
use crate::error::Result;

/// Corner radius of the rounded envelope relative to the size
pub const ROUNDED_CORNER_RATIO: f64 = 0.125;

// == Envelope ==
/// Opening of the outer shape element, without its fill or closing.
fn envelope_open(shape: Shape, size: u32) -> String {
    let s = f64::from(size);
    match shape {
        Shape::Circle => {
            let half = num(s / 2.0);
            format!(r#"<circle cx="{half}" cy="{half}" r="{half}""#)
        }
        Shape::Square => format!(r#"<rect width="{}" height="{}""#, size, size),
        Shape::Rounded => {
            let radius = num(s * ROUNDED_CORNER_RATIO);
            format!(
                r#"<rect width="{}" height="{}" rx="{radius}" ry="{radius}""#,
                size, size
            )
        }
    }
}

// == Build ==
/// Renders the avatar described by `request` as SVG markup.
///
/// Output is byte-identical for identical requests. Fails only when the
/// name is blank.
pub fn build_svg(request: &AvatarRequest) -> Result<String> {
    let look = generate_avatar_data(&request.name)?;
    let size = request.size;

    let mut defs = String::new();
    let mut fill = look.background_color.to_string();
    let inner = match request.avatar_type {
        AvatarType::Initials => initials_content(&look.initials, look.accent_color, size),
        AvatarType::Pattern => pattern_content(look.hash_code, look.background_color, size),
        AvatarType::Emoji => emoji_content(look.hash_code, size),
        AvatarType::Gradient => {
            defs = gradient_defs(look.hash_code, look.background_color);
            fill = format!("url(#{})", gradient_id(look.hash_code));
            String::new()
        }
        AvatarType::Icon => icon_content(look.accent_color, size),
        AvatarType::Blank => String::new(),
    };

    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">{defs}{} fill="{fill}"/>{inner}</svg>"#,
        envelope_open(request.shape, size)
    ))
}

// == Synthesizer Seam ==
/// Anything able to turn an avatar request into SVG markup.
pub trait Synthesizer: Send + Sync {
    fn render(&self, request: &AvatarRequest) -> Result<String>;
}

/// The deterministic hash-driven SVG synthesizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgSynthesizer;

impl Synthesizer for SvgSynthesizer {
    fn render(&self, request: &AvatarRequest) -> Result<String> {
        build_svg(request)
    }
}
