//! Render-ready projection of the layout for a display front end.
//!
//! The core never draws anything. This module flattens each module into the
//! values a renderer needs: primitive shape, colour, transform and edge size.

use serde::Serialize;

use crate::models::{Module, ModuleId, ModuleType, RgbColor, Shape, Vec3};
use crate::services::collision::MODULE_EDGE_LENGTH;
use crate::services::LayoutStore;

/// How much the selected module is lightened, in percent.
pub const SELECTION_HIGHLIGHT_PERCENT: u8 = 35;

/// One drawable module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    /// Module id, echoed back on click
    pub id: ModuleId,
    /// Module type
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Primitive to draw
    pub shape: Shape,
    /// Fill colour, lightened when selected
    pub color: RgbColor,
    /// Centre
    pub position: Vec3,
    /// Rotation in radians
    pub rotation: Vec3,
    /// Edge length of the bounding cube
    pub size: f64,
    /// Whether this is the selected module
    pub selected: bool,
}

impl SceneNode {
    fn from_module(module: &Module, selected: bool) -> Self {
        let spec = module.module_type.spec();
        let color = if selected {
            spec.color.lighten(SELECTION_HIGHLIGHT_PERCENT)
        } else {
            spec.color
        };
        Self {
            id: module.id,
            module_type: module.module_type,
            shape: spec.shape,
            color,
            position: module.position,
            rotation: module.rotation,
            size: MODULE_EDGE_LENGTH * module.scale,
            selected,
        }
    }
}

/// Projects the store's layout and selection into scene nodes, in layout
/// order.
#[must_use]
pub fn scene_nodes(store: &LayoutStore) -> Vec<SceneNode> {
    let selection = store.selection();
    store
        .layout()
        .modules()
        .iter()
        .map(|module| SceneNode::from_module(module, selection == Some(module.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Axis;

    #[test]
    fn test_scene_reflects_layout_and_selection() {
        let mut store = LayoutStore::new();
        let airlock = store.add_module(ModuleType::Airlock).unwrap();
        store.rescale_module(airlock, 0.5).unwrap();
        store.reposition_module(airlock, Axis::X, 12.0).unwrap();
        let lab = store.add_module(ModuleType::Laboratory).unwrap();

        let nodes = scene_nodes(&store);
        assert_eq!(nodes.len(), 2);

        let first = &nodes[0];
        assert_eq!(first.id, airlock);
        assert_eq!(first.shape, Shape::Cylinder);
        assert_eq!(first.size, 2.0);
        assert_eq!(first.position, Vec3::new(12.0, 0.0, 0.0));
        assert!(!first.selected);
        assert_eq!(first.color, ModuleType::Airlock.spec().color);

        let second = &nodes[1];
        assert_eq!(second.id, lab);
        assert!(second.selected);
        assert_eq!(
            second.color,
            ModuleType::Laboratory
                .spec()
                .color
                .lighten(SELECTION_HIGHLIGHT_PERCENT)
        );
    }

    #[test]
    fn test_scene_serializes_hex_colour() {
        let mut store = LayoutStore::new();
        store.add_module(ModuleType::Storage).unwrap();
        store.select(None);

        let json = serde_json::to_value(scene_nodes(&store)).unwrap();
        assert_eq!(json[0]["color"], "#9B9B9B");
        assert_eq!(json[0]["shape"], "box");
        assert_eq!(json[0]["type"], "storage");
    }
}
