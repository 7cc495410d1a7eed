//! Furniture CRUD operations

use shared::{FurnitureItem, FurnitureUpdate, ObjectId};

use crate::catalog::CatalogEntry;
use crate::geometry::{clamp_to_room, snap_point, CANVAS_PAD, CANVAS_SCALE};

use super::LayoutState;

impl LayoutState {
    /// Add a catalog item at the room's rectangle centroid and return its id.
    ///
    /// The centroid comes from width and length alone, even for L-shape and
    /// custom rooms. New items start unrotated at scale 1.
    pub fn add_from_catalog(&mut self, entry: &CatalogEntry) -> ObjectId {
        let id = uuid::Uuid::new_v4().to_string();
        let cx = CANVAS_PAD + self.room.width * CANVAS_SCALE / 2.0;
        let cy = CANVAS_PAD + self.room.length * CANVAS_SCALE / 2.0;

        self.furniture.push(FurnitureItem {
            id: id.clone(),
            kind: entry.kind.clone(),
            width: entry.width,
            height: entry.height,
            x: cx,
            y: cy,
            rotation: 0.0,
            scale: 1.0,
            color: entry.default_color.clone(),
            material: None,
            model_url: entry.model_url.clone(),
        });

        self.version += 1;
        tracing::debug!(%id, kind = %entry.kind, "furniture added");
        id
    }

    /// Merge an update into the matching item. Unknown ids are a silent
    /// no-op: optimistic UI updates may outlive the item they started on.
    pub fn update_item(&mut self, id: &ObjectId, update: &FurnitureUpdate) {
        if let Some(item) = self.get_item_mut(id) {
            update.apply_to(item);
            self.version += 1;
        }
    }

    /// Remove the matching item. No-op if absent.
    pub fn remove_item(&mut self, id: &ObjectId) {
        let before = self.furniture.len();
        self.furniture.retain(|f| f.id != *id);
        if self.furniture.len() != before {
            self.version += 1;
            tracing::debug!(%id, "furniture removed");
        }
    }

    /// Snap (optional) then clamp a candidate center, write it through and
    /// return the final position so the caller can reconcile its own
    /// transient visual position. `None` when the id is unknown.
    pub fn apply_placement(
        &mut self,
        id: &ObjectId,
        cx: f64,
        cy: f64,
        snap_resolution: Option<f64>,
    ) -> Option<(f64, f64)> {
        let item = self.get_item(id)?.clone();
        let (sx, sy) = match snap_resolution {
            Some(res) => snap_point(cx, cy, res),
            None => (cx, cy),
        };
        let (fx, fy) = clamp_to_room(sx, sy, &item, &self.room);
        self.update_item(id, &FurnitureUpdate::position(fx, fy));
        Some((fx, fy))
    }
}
