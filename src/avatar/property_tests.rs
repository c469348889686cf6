//! Property-Based Tests for the Avatar Synthesizer
//!
//! Uses proptest to check determinism and the numeric bounds of every
//! hash-derived value.

use proptest::prelude::*;

use crate::avatar::{
    build_svg, emoji_index, generate_avatar_data, hash_code, pattern_cell_color, AvatarRequest,
    AvatarType, Shape, EMOJIS,
};

// == Strategies ==
/// Names with at least one non-whitespace character
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-Ö]{1,12}( [A-Za-z]{1,12}){0,3}".prop_map(|s| s)
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![Just(Shape::Circle), Just(Shape::Square), Just(Shape::Rounded)]
}

fn type_strategy() -> impl Strategy<Value = AvatarType> {
    prop_oneof![
        Just(AvatarType::Initials),
        Just(AvatarType::Pattern),
        Just(AvatarType::Emoji),
        Just(AvatarType::Gradient),
        Just(AvatarType::Icon),
        Just(AvatarType::Blank),
    ]
}

fn request_strategy() -> impl Strategy<Value = AvatarRequest> {
    (name_strategy(), shape_strategy(), type_strategy(), 1u32..1024)
        .prop_map(|(name, shape, kind, size)| AvatarRequest::new(name, shape, kind, size))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Same request, same bytes.
    #[test]
    fn prop_rendering_is_deterministic(req in request_strategy()) {
        let first = build_svg(&req).unwrap();
        let second = build_svg(&req.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    // Hashing is a pure function of its input.
    #[test]
    fn prop_hash_is_stable(a in ".{0,40}", b in ".{0,40}") {
        let before = hash_code(&a);
        let _ = hash_code(&b);
        prop_assert_eq!(hash_code(&a), before);
    }

    // Hue stays in range and the lightness levels never move.
    #[test]
    fn prop_colour_ranges(name in name_strategy()) {
        let data = generate_avatar_data(&name).unwrap();
        prop_assert!(data.background_color.hue < 360);
        prop_assert_eq!(data.background_color.hue, data.accent_color.hue);
        prop_assert_eq!(data.background_color.lightness, 65);
        prop_assert_eq!(data.accent_color.lightness, 30);
        prop_assert!(!data.initials.is_empty());
        prop_assert!(data.initials.chars().count() <= 2);
    }

    // Every pattern cell stays within the clamp bounds for any hash.
    #[test]
    fn prop_pattern_cells_in_bounds(hash in any::<i32>()) {
        let base = crate::avatar::Hsl::new(hash.unsigned_abs() % 360, 45, 65);
        for row in 0..4 {
            for col in 0..4 {
                let cell = pattern_cell_color(hash, base, row, col);
                prop_assert!((30..=90).contains(&cell.lightness));
                prop_assert!(cell.hue < 360);
            }
        }
    }

    // Emoji lookups never go out of the table.
    #[test]
    fn prop_emoji_index_in_bounds(hash in any::<i32>()) {
        prop_assert!(emoji_index(hash) < EMOJIS.len());
    }

    // The root element always advertises the requested size.
    #[test]
    fn prop_envelope_matches_size(req in request_strategy()) {
        let svg = build_svg(&req).unwrap();
        let size = req.size;
        let root = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        prop_assert!(svg.starts_with(&root));
        prop_assert!(svg.ends_with("</svg>"));

        let expected_shape = match req.shape {
            Shape::Circle => format!(r#" r="{}""#, f64::from(size) / 2.0),
            Shape::Square => format!(r#"<rect width="{size}" height="{size}" fill="#),
            Shape::Rounded => format!(r#" rx="{}""#, f64::from(size) * 0.125),
        };
        prop_assert!(svg.contains(&expected_shape));
    }

    // Initials render exactly one text element and nothing else.
    #[test]
    fn prop_initials_dispatch(name in name_strategy(), size in 1u32..512) {
        let req = AvatarRequest::new(name.clone(), Shape::Circle, AvatarType::Initials, size);
        let svg = build_svg(&req).unwrap();
        let initials = generate_avatar_data(&name).unwrap().initials;
        prop_assert_eq!(svg.matches("<text").count(), 1);
        let expected_text = format!(">{}</text>", initials);
        prop_assert!(svg.contains(&expected_text));
        prop_assert!(!svg.contains("<path"));
        prop_assert!(!svg.contains("<defs>"));
    }

    // Gradients define exactly one gradient and the envelope points at it.
    #[test]
    fn prop_gradient_dispatch(name in name_strategy(), shape in shape_strategy()) {
        let req = AvatarRequest::new(name.clone(), shape, AvatarType::Gradient, 64);
        let svg = build_svg(&req).unwrap();
        let id = format!("grad{}", hash_code(&name));
        prop_assert_eq!(svg.matches("<linearGradient").count(), 1);
        let expected_fill = format!(r#"fill="url(#{})""#, id);
        prop_assert!(svg.contains(&expected_fill));
    }
}
