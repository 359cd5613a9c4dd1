//! The option catalog: nine fixed categories of prompt fragments.
//!
//! The catalog is compiled in and never mutated. Declaration order matters:
//! it is the order selectors are shown in and the order selected values are
//! joined in by [`assemble`](crate::assembler::assemble).

use serde::Serialize;

/// A named list of candidate prompt fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable identifier used by selection state and the CLI.
    pub key: &'static str,
    /// Human-readable label shown next to the selector.
    pub label: &'static str,
    /// Candidate values in display order.
    pub values: &'static [&'static str],
    /// Gated categories are only selectable once the access gate is unlocked.
    pub gated: bool,
}

const fn category(
    key: &'static str,
    label: &'static str,
    values: &'static [&'static str],
    gated: bool,
) -> Category {
    Category {
        key,
        label,
        values,
        gated,
    }
}

/// Builtin categories in declaration order.
pub const BUILTIN_CATEGORIES: &[Category] = &[
    category(
        "visualType",
        "Visual Type",
        &["film still", "RAW photo", "concept art", "stylized illustration"],
        false,
    ),
    category(
        "cameraStyle",
        "Camera Style",
        &[
            "IMG_4856.CR2",
            "shot on RED Komodo 6K",
            "Leica M10 35mm",
            "Hasselblad H6D-100c 100mm f/2.2",
        ],
        false,
    ),
    category(
        "cinematicRef",
        "Cinematic/Artistic Reference",
        &[
            "cinematic lighting by Roger Deakins",
            "production still from Blade Runner",
            "directed by Wes Anderson",
            "from the costume department of Game of Thrones",
        ],
        false,
    ),
    category(
        "texture",
        "Texture/Fashion Modifier",
        &[
            "liquid crystal mesh",
            "iridescent mylar overlay",
            "carbon fiber fabric",
            "obsidian silk pattern",
        ],
        false,
    ),
    category(
        "hallucination",
        "AI Hallucination/Glitch Tag",
        &[
            "latent diffusion hallucination",
            "training data artifact",
            "neural glitch texture",
            "GPU overflow render",
        ],
        false,
    ),
    category(
        "composition",
        "Composition & Lighting Add-on",
        &[
            "golden ratio composition",
            "volumetric light bloom",
            "rule of thirds",
            "macro lens depth",
        ],
        false,
    ),
    category(
        "mood",
        "Mood & Emotion",
        &[
            "melancholic and dreamlike",
            "dark and mysterious",
            "vibrant and energetic",
            "serene and peaceful",
        ],
        true,
    ),
    category(
        "background",
        "Background Style",
        &[
            "foggy Tokyo alley",
            "ancient temple ruins",
            "desert at sunset",
            "neon-lit cyberpunk street",
        ],
        true,
    ),
    category(
        "genre",
        "Genre Tag",
        &[
            "sci-fi noir",
            "retro-futurism",
            "high fantasy",
            "post-apocalyptic thriller",
        ],
        true,
    ),
];

/// Read-only, ordered view over a set of categories.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_CATEGORIES,
        }
    }

    /// All categories in declaration order.
    pub fn list_categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn get(&self, key: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Declaration index of `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.key == key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_nine_categories_three_gated() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        let gated: Vec<&str> = catalog
            .list_categories()
            .iter()
            .filter(|c| c.gated)
            .map(|c| c.key)
            .collect();
        assert_eq!(gated, vec!["mood", "background", "genre"]);
    }

    #[test]
    fn declaration_order_is_stable() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.position("visualType"), Some(0));
        assert_eq!(catalog.position("mood"), Some(6));
        assert_eq!(catalog.position("genre"), Some(8));
        assert_eq!(catalog.position("lens"), None);
    }

    #[test]
    fn every_category_has_four_distinct_values() {
        for category in Catalog::builtin().list_categories() {
            assert_eq!(category.values.len(), 4, "{}", category.key);
            let mut values = category.values.to_vec();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), 4, "{}", category.key);
            assert!(values.iter().all(|v| !v.is_empty()));
        }
    }

    #[test]
    fn lookup_by_key() {
        let catalog = Catalog::builtin();
        let camera = catalog.get("cameraStyle").unwrap();
        assert_eq!(camera.label, "Camera Style");
        assert!(!camera.gated);
        assert!(catalog.contains("texture"));
        assert!(!catalog.contains("Texture"));
    }
}
