// Career Path Map - Core Library
// Static catalog, icon registry and dialog state behind the terminal UI

pub mod catalog;
pub mod dialog;
pub mod icons;

// Re-export commonly used types
pub use catalog::{
    Business, Catalog, Category, Excursion, HistoryItem, Technology, Testimonial,
    ValidationError, ValidationResult, MAP_HEIGHT, MAP_WIDTH,
};
pub use dialog::{DialogState, Tab};
pub use icons::{glyph, DEFAULT_GLYPH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
