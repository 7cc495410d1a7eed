use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier of a placed furniture item
pub type ObjectId = String;

/// Room floor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomShape {
    Rectangle,
    Square,
    #[serde(rename = "L-Shape")]
    LShape,
    Custom,
}

/// 2D point in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Room configuration
///
/// Dimensions are metres; `custom_polygon` points are canvas units. The room
/// is replaced wholesale when the user edits configuration or finishes
/// drawing a custom outline — it is never mutated field-by-field during
/// furniture editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub width: f64,
    pub length: f64,
    pub shape: RoomShape,
    /// Presentation-only, passed through untouched
    pub wall_color: String,
    /// Presentation-only, passed through untouched
    pub floor_color: String,
    /// Authoritative outline when `shape` is `Custom`; needs at least three
    /// points to be usable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_polygon: Option<Vec<Point2D>>,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: 4.0,
            length: 3.0,
            shape: RoomShape::Rectangle,
            wall_color: "#F5F5DC".to_string(),
            floor_color: "#D2B48C".to_string(),
            custom_polygon: None,
        }
    }
}

/// Validation error for room dimensions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoomConfigError {
    #[error("room width must be between 1 and 20 metres, got {0}")]
    Width(f64),
    #[error("room length must be between 1 and 20 metres, got {0}")]
    Length(f64),
}

impl Room {
    /// Check dimensions at the setup boundary. Rooms inside the engine are
    /// trusted as already validated.
    pub fn validate(&self) -> Result<(), RoomConfigError> {
        if !self.width.is_finite() || !(1.0..=20.0).contains(&self.width) {
            return Err(RoomConfigError::Width(self.width));
        }
        if !self.length.is_finite() || !(1.0..=20.0).contains(&self.length) {
            return Err(RoomConfigError::Length(self.length));
        }
        Ok(())
    }

    /// The custom outline, if it is defined well enough to act as a floor
    /// (shape is `Custom` and at least three points have been placed).
    pub fn usable_polygon(&self) -> Option<&[Point2D]> {
        if self.shape != RoomShape::Custom {
            return None;
        }
        match self.custom_polygon.as_deref() {
            Some(points) if points.len() >= 3 => Some(points),
            _ => None,
        }
    }
}

/// A placed furniture item
///
/// `(x, y)` is the CENTER of the item's footprint in canvas units. `width`
/// and `height` are the nominal footprint in metres — `height` is the 2D
/// depth, not the vertical height. `color`, `material` and `model_url` are
/// presentation-only pass-through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: ObjectId,
    /// Catalog category, or "Custom Model" for user-uploaded meshes
    #[serde(rename = "type")]
    pub kind: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    /// Degrees, normalized to [0, 360) by convention
    pub rotation: f64,
    /// Uniform multiplier on width and height
    pub scale: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
}

/// Partial update merged into a furniture item field-by-field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub scale: Option<f64>,
    pub color: Option<String>,
    pub material: Option<String>,
}

impl FurnitureUpdate {
    /// Update that only moves the item
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Update that only rotates the item
    pub fn rotation(deg: f64) -> Self {
        Self {
            rotation: Some(deg),
            ..Self::default()
        }
    }

    /// Update that only rescales the item
    pub fn scale(factor: f64) -> Self {
        Self {
            scale: Some(factor),
            ..Self::default()
        }
    }

    /// Merge the set fields into an item, leaving the rest untouched
    pub fn apply_to(&self, item: &mut FurnitureItem) {
        if let Some(x) = self.x {
            item.x = x;
        }
        if let Some(y) = self.y {
            item.y = y;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            item.scale = scale;
        }
        if let Some(color) = &self.color {
            item.color = color.clone();
        }
        if let Some(material) = &self.material {
            item.material = Some(material.clone());
        }
    }
}

/// The wire contract at the session boundary: everything persistence and
/// undo/redo need to restore a design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    pub room: Room,
    pub furniture: Vec<FurnitureItem>,
}
