//! Built-in furniture catalog.

/// Sentinel kind for user-uploaded meshes
pub const CUSTOM_MODEL_KIND: &str = "Custom Model";

/// A furniture template: nominal footprint in metres plus presentation
/// defaults. The footprint `height` is the 2D depth, not the vertical
/// height.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub kind: String,
    pub width: f64,
    pub height: f64,
    pub default_color: String,
    pub model_url: Option<String>,
}

const BUILT_IN: &[(&str, f64, f64, &str)] = &[
    ("Chair", 0.6, 0.6, "#8B7355"),
    ("Dining Table", 1.6, 0.9, "#6B4C2A"),
    ("Sofa", 2.0, 0.9, "#708090"),
    ("Bed", 2.0, 1.6, "#DEB887"),
    ("Side Table", 0.5, 0.5, "#A0785A"),
    ("Wardrobe", 1.8, 0.6, "#5C4033"),
    ("Desk", 1.2, 0.6, "#8B8B6B"),
    ("Bookshelf", 1.0, 0.3, "#7B6B3A"),
];

/// All built-in templates, in display order.
pub fn entries() -> Vec<CatalogEntry> {
    BUILT_IN
        .iter()
        .map(|&(kind, width, height, color)| CatalogEntry {
            kind: kind.to_string(),
            width,
            height,
            default_color: color.to_string(),
            model_url: None,
        })
        .collect()
}

/// Look up a built-in template by kind.
pub fn find(kind: &str) -> Option<CatalogEntry> {
    entries().into_iter().find(|e| e.kind == kind)
}

/// Template for a user-uploaded model. Footprint defaults to 1×1 m until the
/// mesh's real extents are known; geometry treats it like any other item.
pub fn custom_model(url: impl Into<String>) -> CatalogEntry {
    CatalogEntry {
        kind: CUSTOM_MODEL_KIND.to_string(),
        width: 1.0,
        height: 1.0,
        default_color: "#9E9E9E".to_string(),
        model_url: Some(url.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let chair = find("Chair").unwrap();
        assert_eq!((chair.width, chair.height), (0.6, 0.6));
        assert_eq!(chair.default_color, "#8B7355");
        assert!(find("Spaceship").is_none());
    }

    #[test]
    fn test_catalog_footprints_positive() {
        let all = entries();
        assert_eq!(all.len(), 8);
        assert!(all.iter().all(|e| e.width > 0.0 && e.height > 0.0));
    }

    #[test]
    fn test_custom_model_template() {
        let entry = custom_model("https://example.com/lamp.glb");
        assert_eq!(entry.kind, CUSTOM_MODEL_KIND);
        assert_eq!(entry.model_url.as_deref(), Some("https://example.com/lamp.glb"));
    }
}
