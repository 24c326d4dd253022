// 🗺️ Business Catalog - static dataset behind the interactive map
// Locally authored data: validated once at startup, read-only afterwards

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Width of the map coordinate space (matches the illustrated scene)
pub const MAP_WIDTH: f64 = 160.0;

/// Height of the map coordinate space; y grows downward
pub const MAP_HEIGHT: f64 = 100.0;

/// Default dataset compiled into the binary
const EMBEDDED_DATASET: &str = include_str!("../data/businesses.json");

// ============================================================================
// CATEGORY
// ============================================================================

/// Fixed category enumeration
///
/// Each category carries a display color and label; the legend renders
/// this enumeration directly. Per-business accent colors are independent
/// of the category color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Museum,
    Factory,
    Tech,
    Food,
    Nature,
    Education,
}

impl Category {
    /// All categories in legend order
    pub const ALL: [Category; 6] = [
        Category::Museum,
        Category::Factory,
        Category::Tech,
        Category::Food,
        Category::Nature,
        Category::Education,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Museum => "Культура",
            Category::Factory => "Промышленность",
            Category::Tech => "Технологии",
            Category::Food => "Сервис и гостеприимство",
            Category::Nature => "Природа",
            Category::Education => "Образование и развитие",
        }
    }

    /// Legend color as a hex string (e.g. "#7c3aed")
    pub fn color(&self) -> &'static str {
        match self {
            Category::Museum => "#7c3aed",
            Category::Factory => "#1e40af",
            Category::Tech => "#10B981",
            Category::Food => "#ea580c",
            Category::Nature => "#14B8A6",
            Category::Education => "#7c3aed",
        }
    }
}

// ============================================================================
// CONTENT SECTIONS
// ============================================================================

/// One excursion entry: either plain text or text with a photo reference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Excursion {
    Text(String),
    Detailed {
        text: String,
        #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
}

impl Excursion {
    pub fn text(&self) -> &str {
        match self {
            Excursion::Text(text) => text,
            Excursion::Detailed { text, .. } => text,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            Excursion::Text(_) => None,
            Excursion::Detailed { image_url, .. } => image_url.as_deref(),
        }
    }

    /// Only entries carrying a photo can be expanded in the detail view
    pub fn has_image(&self) -> bool {
        self.image_url().is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

// ============================================================================
// BUSINESS
// ============================================================================

/// One partner business on the map
///
/// Immutable for the process lifetime; the only mutable state in the
/// whole system is the current selection, owned by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Unique identifier across the catalog
    pub id: String,

    pub name: String,
    pub category: Category,
    pub subcategory: String,

    /// Marker position in the 0..=160 x 0..=100 map space (y grows downward)
    pub x: f64,
    pub y: f64,

    pub description: String,

    /// Always rendered; must be non-empty
    pub excursions: Vec<Excursion>,

    /// Role names shown on the Careers tab
    pub professions: Vec<String>,

    /// Symbolic glyph name; unknown names fall back to the default glyph
    pub icon: String,

    /// Accent color for every visual tied to this entry (hex, e.g. "#10B981")
    pub color: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<Technology>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Years the excursion program ran at this business
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excursion_years: Vec<u16>,
}

// ============================================================================
// VALIDATION
// ============================================================================

/// One catalog malformation, reported to the operator at startup
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub business: String,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.business, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered, read-only collection of businesses
///
/// "Next" navigation cycles through this order, wrapping at the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    businesses: Vec<Business>,
}

impl Catalog {
    pub fn new(businesses: Vec<Business>) -> Self {
        Catalog { businesses }
    }

    /// Parse a catalog from JSON text
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse catalog JSON")
    }

    /// The dataset compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET).context("Embedded dataset is malformed")
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Business> {
        self.businesses.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Business> {
        self.businesses.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.businesses.iter().position(|b| b.id == id)
    }

    /// Entry following `id` in catalog order, wrapping at the end
    ///
    /// Returns None when `id` is not in the catalog (no drift outside
    /// the known set) or the catalog is empty.
    pub fn next_after(&self, id: &str) -> Option<&Business> {
        let index = self.index_of(id)?;
        self.businesses.get((index + 1) % self.businesses.len())
    }

    /// Startup-time catalog validation
    ///
    /// Flags duplicate ids, empty required fields, and out-of-bounds
    /// coordinates. Unknown icon names are NOT flagged: they degrade to
    /// the default glyph at render time.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for business in &self.businesses {
            let label = if business.id.is_empty() {
                business.name.as_str()
            } else {
                business.id.as_str()
            };

            if business.id.is_empty() {
                errors.push(ValidationError {
                    business: label.to_string(),
                    field: "id".to_string(),
                    message: "Required field is empty".to_string(),
                });
            } else if !seen_ids.insert(business.id.as_str()) {
                errors.push(ValidationError {
                    business: label.to_string(),
                    field: "id".to_string(),
                    message: "Duplicate id".to_string(),
                });
            }

            if business.name.is_empty() {
                errors.push(ValidationError {
                    business: label.to_string(),
                    field: "name".to_string(),
                    message: "Required field is empty".to_string(),
                });
            }

            if !(0.0..=MAP_WIDTH).contains(&business.x) {
                errors.push(ValidationError {
                    business: label.to_string(),
                    field: "x".to_string(),
                    message: format!("Must be within 0..={}, got {}", MAP_WIDTH, business.x),
                });
            }

            if !(0.0..=MAP_HEIGHT).contains(&business.y) {
                errors.push(ValidationError {
                    business: label.to_string(),
                    field: "y".to_string(),
                    message: format!("Must be within 0..={}, got {}", MAP_HEIGHT, business.y),
                });
            }

            if business.excursions.is_empty() {
                errors.push(ValidationError {
                    business: label.to_string(),
                    field: "excursions".to_string(),
                    message: "At least one excursion is required".to_string(),
                });
            }

            if business.color.is_empty() {
                errors.push(ValidationError {
                    business: label.to_string(),
                    field: "color".to_string(),
                    message: "Required field is empty".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn business(id: &str, x: f64, y: f64) -> Business {
        Business {
            id: id.to_string(),
            name: format!("Business {}", id),
            category: Category::Factory,
            subcategory: "Test".to_string(),
            x,
            y,
            description: "A test business".to_string(),
            excursions: vec![Excursion::Text("Visit the floor".to_string())],
            professions: vec!["Operator".to_string()],
            icon: "Factory".to_string(),
            color: "#1e40af".to_string(),
            technologies: Vec::new(),
            history: Vec::new(),
            testimonials: Vec::new(),
            image_url: None,
            excursion_years: Vec::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            business("a1", 20.0, 20.0),
            business("a2", 80.0, 50.0),
            business("a3", 140.0, 80.0),
        ])
    }

    #[test]
    fn test_embedded_dataset_parses_and_validates() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_unique_ids_pass_validation() {
        assert!(sample_catalog().validate().is_ok());
    }

    #[test]
    fn test_duplicate_id_is_flagged() {
        let catalog = Catalog::new(vec![
            business("a1", 20.0, 20.0),
            business("a1", 40.0, 40.0),
        ]);
        let errors = catalog.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "id");
        assert!(errors[0].message.contains("Duplicate"));
    }

    #[test]
    fn test_out_of_bounds_coordinates_are_flagged() {
        let catalog = Catalog::new(vec![business("a1", 200.0, -5.0)]);
        let errors = catalog.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"x"));
        assert!(fields.contains(&"y"));
    }

    #[test]
    fn test_empty_excursions_are_flagged() {
        let mut b = business("a1", 20.0, 20.0);
        b.excursions.clear();
        let errors = Catalog::new(vec![b]).validate().unwrap_err();
        assert_eq!(errors[0].field, "excursions");
    }

    #[test]
    fn test_next_after_cycles_back_to_start() {
        let catalog = sample_catalog();
        let mut id = "a1".to_string();
        for _ in 0..catalog.len() {
            id = catalog.next_after(&id).unwrap().id.clone();
        }
        assert_eq!(id, "a1");
    }

    #[test]
    fn test_next_after_wraps_around() {
        let catalog = sample_catalog();
        assert_eq!(catalog.next_after("a1").unwrap().id, "a2");
        assert_eq!(catalog.next_after("a2").unwrap().id, "a3");
        assert_eq!(catalog.next_after("a3").unwrap().id, "a1");
    }

    #[test]
    fn test_next_after_unknown_id_is_none() {
        assert!(sample_catalog().next_after("missing").is_none());
    }

    #[test]
    fn test_excursion_plain_and_detailed_both_parse() {
        let raw = r#"["Visit the floor", {"text": "Visit the lab", "imageUrl": "x.png"}]"#;
        let excursions: Vec<Excursion> = serde_json::from_str(raw).unwrap();

        assert_eq!(excursions[0].text(), "Visit the floor");
        assert!(!excursions[0].has_image());

        assert_eq!(excursions[1].text(), "Visit the lab");
        assert_eq!(excursions[1].image_url(), Some("x.png"));
        assert!(excursions[1].has_image());
    }

    #[test]
    fn test_detailed_excursion_without_image_is_not_expandable() {
        let raw = r#"{"text": "Visit the lab"}"#;
        let excursion: Excursion = serde_json::from_str(raw).unwrap();
        assert_eq!(excursion.text(), "Visit the lab");
        assert!(!excursion.has_image());
    }

    #[test]
    fn test_category_parses_from_lowercase_key() {
        let category: Category = serde_json::from_str("\"museum\"").unwrap();
        assert_eq!(category, Category::Museum);
        assert_eq!(category.label(), "Культура");
    }
}
