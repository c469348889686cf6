//! Inner Content Module
//!
//! Generators for what is drawn inside the avatar envelope, plus the
//! constant emoji and icon tables they read from.

use crate::avatar::color::Hsl;

// == Constant Tables ==
/// Emoji pool for the `emoji` type, indexed by `|hash| % 48`.
pub const EMOJIS: [&str; 48] = [
    "😀", "😎", "🤩", "🚀", "🌈", "💡", "🌟", "🎉", "🐱", "🦊", "🐻", "🐼", "🦁", "🐯", "🦄", "🌸",
    "🌼", "☀️", "🌙", "🌊", "⚡", "🔥", "💧", "🍎", "🍕", "☕", "🎮", "🎵", "🎨", "📚", "⚽", "🏀",
    "🏈", "🎾", "🎳", "🎯", "🏆", "🥇", "🥈", "🥉", "🎁", "🎈", "💖", "💯", "✅", "✨", "💎", "👑",
];

/// Generic person silhouette in a 24x24 view box.
pub const PERSON_ICON_PATH: &str = "M7.5 6a4.5 4.5 0 1 1 9 0 4.5 4.5 0 0 1-9 0ZM3.751 20.105a8.25 8.25 0 0 1 16.498 0 .75.75 0 0 1-.437.695A18.623 18.623 0 0 1 12 22.5a18.623 18.623 0 0 1-7.812-1.7.75.75 0 0 1-.438-.695Z";

// == Layout Constants ==
const PATTERN_GRID: u32 = 4;
const INITIALS_FONT_RATIO: f64 = 0.38;
const EMOJI_FONT_RATIO: f64 = 0.56;
const ICON_PADDING_RATIO: f64 = 0.15;

// == Initials ==
/// Centred bold text of the initials in the accent colour.
pub fn initials_content(initials: &str, accent: Hsl, size: u32) -> String {
    format!(
        r#"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="Inter, sans-serif" font-size="{}" font-weight="bold" fill="{}">{}</text>"#,
        num(f64::from(size) * INITIALS_FONT_RATIO),
        accent,
        escape_xml(initials)
    )
}

// == Pattern ==
/// Colour of grid cell (`row`, `col`) for the given hash and base colour.
///
/// Remainders keep the sign of the dividend (as `%` on `i32` does), so a
/// negative hash shifts lightness and hue downwards. Lightness is clamped
/// to `[30, 90]` and the hue folded into `[0, 360)`.
pub fn pattern_cell_color(hash: i32, base: Hsl, row: u32, col: u32) -> Hsl {
    let (row, col) = (row as i32, col as i32);
    let base_hue = base.hue as i32;
    let base_light = base.lightness as i32;

    let light_var = ((hash % 10) + row * 5 + col * 5) % 40;
    let light = (base_light + light_var - 20).clamp(30, 90);
    let hue = (base_hue + ((hash % 7) * (row + col)) % 20).rem_euclid(360);

    Hsl {
        hue: hue as u32,
        saturation: base.saturation,
        lightness: light as u32,
    }
}

/// 4x4 grid of tinted squares covering the whole box.
pub fn pattern_content(hash: i32, base: Hsl, size: u32) -> String {
    let cell = f64::from(size) / f64::from(PATTERN_GRID);
    let mut svg = String::new();

    for row in 0..PATTERN_GRID {
        for col in 0..PATTERN_GRID {
            let fill = pattern_cell_color(hash, base, row, col);
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                num(f64::from(col) * cell),
                num(f64::from(row) * cell),
                num(cell),
                num(cell),
                fill
            ));
        }
    }

    svg
}

// == Emoji ==
/// Index into [`EMOJIS`] for a hash. Safe for `i32::MIN`.
pub fn emoji_index(hash: i32) -> usize {
    (hash.unsigned_abs() % EMOJIS.len() as u32) as usize
}

/// Centred emoji glyph picked from the hash.
pub fn emoji_content(hash: i32, size: u32) -> String {
    format!(
        r#"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-size="{}">{}</text>"#,
        num(f64::from(size) * EMOJI_FONT_RATIO),
        EMOJIS[emoji_index(hash)]
    )
}

// == Gradient ==
/// Id of the gradient definition for a hash.
pub fn gradient_id(hash: i32) -> String {
    format!("grad{}", hash)
}

/// End colour of the diagonal gradient.
pub fn gradient_end_color(hash: i32) -> Hsl {
    let hue = (u64::from(hash.unsigned_abs()) * 7) % 360;
    Hsl::new(hue as u32, 40, 70)
}

/// `<defs>` block holding the diagonal two-stop gradient.
pub fn gradient_defs(hash: i32, background: Hsl) -> String {
    format!(
        r#"<defs><linearGradient id="{}" x1="0" y1="0" x2="1" y2="1"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient></defs>"#,
        gradient_id(hash),
        background,
        gradient_end_color(hash)
    )
}

// == Icon ==
/// Person glyph inset by 15% of the size on every side.
pub fn icon_content(accent: Hsl, size: u32) -> String {
    let size = f64::from(size);
    let pad = size * ICON_PADDING_RATIO;
    let icon = size - pad * 2.0;

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="{}" width="{}" height="{}" x="{}" y="{}"><path fill-rule="evenodd" d="{}" clip-rule="evenodd"/></svg>"#,
        accent,
        num(icon),
        num(icon),
        num(pad),
        num(pad),
        PERSON_ICON_PATH
    )
}

// == Markup Helpers ==
/// Shortest round-trip rendering of a number: `32`, `24.32`.
pub(crate) fn num(value: f64) -> String {
    format!("{}", value)
}

/// Escapes text for use in element content or double-quoted attributes.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Hsl {
        Hsl::new(355, 45, 65)
    }

    #[test]
    fn test_emoji_table_size() {
        assert_eq!(EMOJIS.len(), 48);
    }

    #[test]
    fn test_emoji_index_extremes() {
        assert_eq!(emoji_index(0), 0);
        assert_eq!(emoji_index(-1), 1);
        assert_eq!(emoji_index(i32::MAX), (i32::MAX as u32 % 48) as usize);
        // |i32::MIN| = 2^31, and 2^31 % 48 = 32
        assert_eq!(emoji_index(i32::MIN), 32);
    }

    #[test]
    fn test_initials_font_size() {
        let text = initials_content("U", base(), 64);
        assert!(text.contains(r#"font-size="24.32""#));
        assert!(text.contains(r#"font-weight="bold""#));
        assert!(text.ends_with(">U</text>"));
    }

    #[test]
    fn test_initials_are_escaped() {
        let text = initials_content("<&", base(), 64);
        assert!(text.contains(">&lt;&amp;</text>"));
    }

    #[test]
    fn test_pattern_has_sixteen_cells() {
        let svg = pattern_content(2_645_995, base(), 64);
        assert_eq!(svg.matches("<rect").count(), 16);
        assert!(svg.contains(r#"<rect x="48" y="48" width="16" height="16""#));
    }

    #[test]
    fn test_pattern_cell_values_positive_hash() {
        // hash % 10 = 5
        let hash = 2_645_995;
        let first = pattern_cell_color(hash, base(), 0, 0);
        // light_var = 5, light = 65 + 5 - 20 = 50, hue unchanged
        assert_eq!(first.lightness, 50);
        assert_eq!(first.hue, 355);
        assert_eq!(first.saturation, 45);

        // r = 3, c = 3: light_var = (5 + 30) % 40 = 35, light = 80
        let last = pattern_cell_color(hash, base(), 3, 3);
        assert_eq!(last.lightness, 80);
        let shift = ((hash % 7) * 6) % 20;
        assert_eq!(last.hue, (355 + shift as u32) % 360);
    }

    #[test]
    fn test_pattern_negative_hash_clamps_and_wraps() {
        // hash % 10 = -9
        let hash = -9 - 70 * 1000;
        assert_eq!(hash % 10, -9);
        let cell = pattern_cell_color(hash, Hsl::new(0, 45, 30), 0, 0);
        // 30 - 9 - 20 = 1, clamped up to 30
        assert_eq!(cell.lightness, 30);

        let cell = pattern_cell_color(hash, Hsl::new(0, 45, 65), 1, 1);
        assert!(cell.hue < 360);
    }

    #[test]
    fn test_gradient_definition() {
        let defs = gradient_defs(-5, base());
        assert!(defs.contains(r#"id="grad-5""#));
        assert!(defs.contains(r#"x1="0" y1="0" x2="1" y2="1""#));
        assert!(defs.contains(r#"<stop offset="0%" stop-color="hsl(355, 45%, 65%)"/>"#));
        assert!(defs.contains(r#"<stop offset="100%" stop-color="hsl(35, 40%, 70%)"/>"#));
    }

    #[test]
    fn test_gradient_end_color_does_not_overflow() {
        let end = gradient_end_color(i32::MIN);
        // 2^31 * 7 % 360 = 176
        assert_eq!(end.hue, 176);
    }

    #[test]
    fn test_icon_geometry() {
        let icon = icon_content(Hsl::new(10, 30, 30), 100);
        assert!(icon.contains(r#"width="70" height="70" x="15" y="15""#));
        assert!(icon.contains(PERSON_ICON_PATH));
        assert!(icon.contains(r#"fill="hsl(10, 30%, 30%)""#));
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(32.0), "32");
        assert_eq!(num(32.5), "32.5");
        assert_eq!(num(64.0 * 0.125), "8");
    }
}
