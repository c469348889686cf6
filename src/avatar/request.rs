//! Avatar Request Module
//!
//! Input parameters of the synthesizer and their lenient parsing rules.

// == Defaults ==
/// Edge length used when no size is given
pub const DEFAULT_SIZE: u32 = 64;

// == Shape ==
/// Outer envelope of the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    /// Rounded rectangle, also the fallback for unknown values
    Rounded,
}

impl Shape {
    /// Parses a shape name. Anything unrecognised becomes `Rounded`.
    pub fn parse(value: &str) -> Self {
        match value {
            "circle" => Shape::Circle,
            "square" => Shape::Square,
            _ => Shape::Rounded,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Rounded => "rounded",
        }
    }
}

// == Avatar Type ==
/// What gets drawn inside the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarType {
    Initials,
    Pattern,
    Emoji,
    Gradient,
    Icon,
    /// Unrecognised type: the envelope is drawn with nothing inside
    Blank,
}

impl AvatarType {
    /// Parses a type name. Anything unrecognised becomes `Blank`.
    pub fn parse(value: &str) -> Self {
        match value {
            "initials" => AvatarType::Initials,
            "pattern" => AvatarType::Pattern,
            "emoji" => AvatarType::Emoji,
            "gradient" => AvatarType::Gradient,
            "icon" => AvatarType::Icon,
            _ => AvatarType::Blank,
        }
    }
}

// == Avatar Request ==
/// Everything the synthesizer needs to render one avatar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvatarRequest {
    pub name: String,
    pub shape: Shape,
    pub avatar_type: AvatarType,
    /// Edge length in pixels, expected to be positive
    pub size: u32,
}

impl AvatarRequest {
    pub fn new(name: impl Into<String>, shape: Shape, avatar_type: AvatarType, size: u32) -> Self {
        Self {
            name: name.into(),
            shape,
            avatar_type,
            size,
        }
    }

    /// Builds a request from raw string parameters.
    pub fn from_params(name: &str, shape: &str, avatar_type: &str, size: u32) -> Self {
        Self::new(name, Shape::parse(shape), AvatarType::parse(avatar_type), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_parse() {
        assert_eq!(Shape::parse("circle"), Shape::Circle);
        assert_eq!(Shape::parse("square"), Shape::Square);
        assert_eq!(Shape::parse("rounded"), Shape::Rounded);
        assert_eq!(Shape::parse("hexagon"), Shape::Rounded);
        assert_eq!(Shape::parse("Circle"), Shape::Rounded);
    }

    #[test]
    fn test_type_parse() {
        assert_eq!(AvatarType::parse("initials"), AvatarType::Initials);
        assert_eq!(AvatarType::parse("pattern"), AvatarType::Pattern);
        assert_eq!(AvatarType::parse("emoji"), AvatarType::Emoji);
        assert_eq!(AvatarType::parse("gradient"), AvatarType::Gradient);
        assert_eq!(AvatarType::parse("icon"), AvatarType::Icon);
        assert_eq!(AvatarType::parse("sparkles"), AvatarType::Blank);
        assert_eq!(AvatarType::parse(""), AvatarType::Blank);
    }

    #[test]
    fn test_from_params() {
        let req = AvatarRequest::from_params("Zoe", "square", "emoji", 128);
        assert_eq!(req.name, "Zoe");
        assert_eq!(req.shape, Shape::Square);
        assert_eq!(req.avatar_type, AvatarType::Emoji);
        assert_eq!(req.size, 128);
    }
}
