//! Name Hash Module
//!
//! 32-bit string hash that seeds every colour and table lookup.

// == Hash Code ==
/// Hashes a string to a signed 32-bit integer.
///
/// For each code point: `hash = cp + ((hash << 5) - hash)`, wrapping on
/// overflow exactly like native two's-complement `i32` arithmetic. The
/// result only depends on the input, never on call order or platform.
pub fn hash_code(input: &str) -> i32 {
    input.chars().fold(0i32, |hash, ch| {
        (ch as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}
