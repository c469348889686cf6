//! Cache Key Module

/// Separator between request fields in a cache key
pub const KEY_SEPARATOR: char = '|';

const ESCAPE: char = '\\';

/// Joins the four request parameters into the key an avatar is cached under.
///
/// Separators and escapes inside a field are backslash-escaped, so distinct
/// parameter combinations never share a key.
pub fn cache_key(name: &str, shape: &str, avatar_type: &str, size: u32) -> String {
    let mut key = String::with_capacity(name.len() + shape.len() + avatar_type.len() + 8);
    for field in [name, shape, avatar_type] {
        push_escaped(&mut key, field);
        key.push(KEY_SEPARATOR);
    }
    key.push_str(&size.to_string());
    key
}

fn push_escaped(key: &mut String, field: &str) {
    for ch in field.chars() {
        if ch == KEY_SEPARATOR || ch == ESCAPE {
            key.push(ESCAPE);
        }
        key.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        assert_eq!(cache_key("User", "circle", "initials", 64), "User|circle|initials|64");
    }

    #[test]
    fn test_each_field_changes_the_key() {
        let base = cache_key("User", "circle", "initials", 64);
        assert_ne!(base, cache_key("Users", "circle", "initials", 64));
        assert_ne!(base, cache_key("User", "square", "initials", 64));
        assert_ne!(base, cache_key("User", "circle", "emoji", 64));
        assert_ne!(base, cache_key("User", "circle", "initials", 65));
    }

    #[test]
    fn test_separator_inside_field_does_not_collide() {
        let a = cache_key("a|circle", "x", "initials", 64);
        let b = cache_key("a", "circle|x", "initials", 64);
        assert_ne!(a, b);
        assert_eq!(a, r"a\|circle|x|initials|64");
        assert_eq!(b, r"a|circle\|x|initials|64");
    }

    #[test]
    fn test_escape_inside_field_does_not_collide() {
        // Without escaping the backslash these would both read `a\|b|...`
        let a = cache_key(r"a\", "b", "initials", 64);
        let b = cache_key("a|b", "", "initials", 64);
        assert_ne!(a, b);
        assert_ne!(
            cache_key(r"a\", "|", "t", 1),
            cache_key(r"a\|", "", "t", 1)
        );
    }
}
