// 🏢 Icon registry - symbolic name → terminal glyph
// Contract: unknown names degrade to the default glyph, never an error

/// Glyph used for unrecognized icon names
pub const DEFAULT_GLYPH: &str = "🏢";

/// Resolve a symbolic icon name to a terminal glyph
///
/// The name set mirrors the marker icons of the illustrated map.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "Building2" => "🏢",
        "Cpu" => "🖥",
        "TreePine" => "🌲",
        "Coffee" => "☕",
        "GraduationCap" => "🎓",
        "Factory" => "🏭",
        "Theater" => "🎭",
        "Zap" => "⚡",
        "ChefHat" => "🍳",
        "Telescope" => "🔭",
        "Gauge" => "🎛",
        "Flame" => "🔥",
        "Wrench" => "🔧",
        "Mountain" => "⛰",
        "UtensilsCrossed" => "🍴",
        "Shirt" => "👕",
        "Award" => "🏅",
        _ => DEFAULT_GLYPH,
    }
}

/// Whether the name is part of the registered icon set
pub fn is_known(name: &str) -> bool {
    name == "Building2" || glyph(name) != DEFAULT_GLYPH
}
