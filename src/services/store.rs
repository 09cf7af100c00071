//! Layout store: the single owner of the layout and the selection.
//!
//! Every mutation either applies completely or leaves the layout untouched.
//! Placement edits (add, reposition, rescale) are tested against all other
//! modules with the bounding-box predicate before anything is written.

use crate::models::{Axis, Layout, Module, ModuleId, ModuleType};
use crate::services::collision::Footprint;
use thiserror::Error;
use tracing::debug;

/// Errors reported by [`LayoutStore`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The candidate geometry overlaps an existing module.
    ///
    /// Carries no detail; use [`Layout::colliding_with`] to find the
    /// conflicting modules.
    #[error("Cannot place module here: it would overlap another module")]
    Collision,
    /// No module with this id is placed.
    #[error("Module {0} not found")]
    ModuleNotFound(ModuleId),
    /// A coordinate, angle or scale outside its domain.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Owns the [`Layout`] and the ephemeral selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutStore {
    layout: Layout,
    selection: Option<ModuleId>,
}

impl LayoutStore {
    /// Creates a store with an empty layout and no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store over an existing layout, with no selection.
    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            layout,
            selection: None,
        }
    }

    /// Current layout snapshot.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Consumes the store, returning its layout.
    #[must_use]
    pub fn into_layout(self) -> Layout {
        self.layout
    }

    /// Currently selected module id, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<ModuleId> {
        self.selection
    }

    /// Currently selected module, if any.
    #[must_use]
    pub fn selected_module(&self) -> Option<&Module> {
        self.selection.and_then(|id| self.layout.get(id))
    }

    /// Changes the selection (click events from the display layer).
    ///
    /// `None` clears it. Returns `false` and leaves the selection unchanged
    /// when `id` is not placed.
    pub fn select(&mut self, id: Option<ModuleId>) -> bool {
        match id {
            Some(id) if !self.layout.contains(id) => false,
            _ => {
                self.selection = id;
                true
            }
        }
    }

    /// Adds a module of `module_type` at the origin with scale 1.
    ///
    /// On success the module is appended and selected.
    ///
    /// # Errors
    ///
    /// [`StoreError::Collision`] if the origin cube overlaps an existing module.
    pub fn add_module(&mut self, module_type: ModuleType) -> StoreResult<ModuleId> {
        let module = Module::new(module_type);
        if self
            .layout
            .collides_with_any(&Footprint::from(&module), None)
        {
            debug!(%module_type, "add rejected: origin is occupied");
            return Err(StoreError::Collision);
        }

        let id = module.id;
        self.layout.push(module);
        self.selection = Some(id);
        debug!(%id, %module_type, "module added");
        Ok(id)
    }

    /// Removes a module unconditionally.
    ///
    /// Unknown ids are a no-op returning `None`. Clears the selection when
    /// the removed module was selected.
    pub fn delete_module(&mut self, id: ModuleId) -> Option<Module> {
        let removed = self.layout.remove(id)?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        debug!(%id, "module deleted");
        Some(removed)
    }

    /// Moves a module along one axis to `value`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ModuleNotFound`] for unknown ids
    /// - [`StoreError::InvalidValue`] for a non-finite coordinate
    /// - [`StoreError::Collision`] if the moved cube overlaps another module
    pub fn reposition_module(&mut self, id: ModuleId, axis: Axis, value: f64) -> StoreResult<()> {
        let current = self.layout.get(id).ok_or(StoreError::ModuleNotFound(id))?;
        if !value.is_finite() {
            return Err(StoreError::InvalidValue(format!(
                "position {axis} must be a finite number, got {value}"
            )));
        }

        let candidate = Footprint::new(current.position.with(axis, value), current.scale);
        if self.layout.collides_with_any(&candidate, Some(id)) {
            debug!(%id, %axis, value, "reposition rejected: collision");
            return Err(StoreError::Collision);
        }

        if let Some(module) = self.layout.get_mut(id) {
            module.position = candidate.position;
        }
        debug!(%id, %axis, value, "module repositioned");
        Ok(())
    }

    /// Sets one rotation component, given in degrees.
    ///
    /// Rotation never takes part in collision detection.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ModuleNotFound`] for unknown ids
    /// - [`StoreError::InvalidValue`] for a non-finite angle
    pub fn rotate_module(&mut self, id: ModuleId, axis: Axis, degrees: f64) -> StoreResult<()> {
        let module = self
            .layout
            .get_mut(id)
            .ok_or(StoreError::ModuleNotFound(id))?;
        if !degrees.is_finite() {
            return Err(StoreError::InvalidValue(format!(
                "rotation {axis} must be a finite number of degrees, got {degrees}"
            )));
        }
        module.set_rotation_degrees(axis, degrees);
        debug!(%id, %axis, degrees, "module rotated");
        Ok(())
    }

    /// Rescales a module, recomputing its cost, mass and volume.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ModuleNotFound`] for unknown ids
    /// - [`StoreError::InvalidValue`] unless `scale` is finite and positive
    /// - [`StoreError::Collision`] if the rescaled cube overlaps another module
    pub fn rescale_module(&mut self, id: ModuleId, scale: f64) -> StoreResult<()> {
        let current = self.layout.get(id).ok_or(StoreError::ModuleNotFound(id))?;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(StoreError::InvalidValue(format!(
                "scale must be a positive number, got {scale}"
            )));
        }

        let candidate = Footprint::new(current.position, scale);
        if self.layout.collides_with_any(&candidate, Some(id)) {
            debug!(%id, scale, "rescale rejected: collision");
            return Err(StoreError::Collision);
        }

        if let Some(module) = self.layout.get_mut(id) {
            module.set_scale(scale);
        }
        debug!(%id, scale, "module rescaled");
        Ok(())
    }

    /// Replaces the whole layout (used by load) and clears the selection.
    pub fn replace_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vec3;

    /// Adds a module and moves it to `x` along the x axis.
    fn place(store: &mut LayoutStore, module_type: ModuleType, x: f64) -> ModuleId {
        let id = store.add_module(module_type).unwrap();
        store.reposition_module(id, Axis::X, x).unwrap();
        id
    }

    #[test]
    fn test_add_module_selects_new_module() {
        let mut store = LayoutStore::new();
        let id = store.add_module(ModuleType::Dormitory).unwrap();

        assert_eq!(store.layout().len(), 1);
        assert_eq!(store.selection(), Some(id));
        let module = store.selected_module().unwrap();
        assert_eq!(module.position, Vec3::ZERO);
        assert_eq!(module.scale, 1.0);
        assert_eq!(module.cost, 45.0);
    }

    #[test]
    fn test_add_module_rejected_when_origin_occupied() {
        let mut store = LayoutStore::new();
        let first = store.add_module(ModuleType::Dormitory).unwrap();
        let before = store.clone();

        let result = store.add_module(ModuleType::Storage);
        assert_eq!(result, Err(StoreError::Collision));
        assert_eq!(store, before);
        assert_eq!(store.selection(), Some(first));
    }

    #[test]
    fn test_add_module_after_moving_first_away() {
        let mut store = LayoutStore::new();
        let first = place(&mut store, ModuleType::Dormitory, 10.0);
        let second = store.add_module(ModuleType::LifeSupport).unwrap();

        assert_eq!(store.layout().len(), 2);
        assert!(store.layout().contains(first));
        assert_eq!(store.selection(), Some(second));
    }

    #[test]
    fn test_reposition_collision_leaves_layout_unchanged() {
        let mut store = LayoutStore::new();
        place(&mut store, ModuleType::Dormitory, 10.0);
        let moving = store.add_module(ModuleType::Storage).unwrap();
        let before = store.clone();

        let result = store.reposition_module(moving, Axis::X, 8.0);
        assert_eq!(result, Err(StoreError::Collision));
        assert_eq!(store, before);
    }

    #[test]
    fn test_reposition_only_changes_given_axis() {
        let mut store = LayoutStore::new();
        let id = store.add_module(ModuleType::Laboratory).unwrap();
        store.reposition_module(id, Axis::Y, 3.5).unwrap();
        store.reposition_module(id, Axis::Z, -2.0).unwrap();

        let module = store.layout().get(id).unwrap();
        assert_eq!(module.position, Vec3::new(0.0, 3.5, -2.0));
    }

    #[test]
    fn test_reposition_rejects_non_finite() {
        let mut store = LayoutStore::new();
        let id = store.add_module(ModuleType::Laboratory).unwrap();
        assert!(matches!(
            store.reposition_module(id, Axis::X, f64::NAN),
            Err(StoreError::InvalidValue(_))
        ));
        assert_eq!(store.layout().get(id).unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn test_rotate_never_collides() {
        let mut store = LayoutStore::new();
        let a = place(&mut store, ModuleType::Dormitory, 4.0);
        let b = store.add_module(ModuleType::Dormitory).unwrap();

        store.rotate_module(a, Axis::Y, 45.0).unwrap();
        store.rotate_module(b, Axis::X, 90.0).unwrap();

        let rotated = store.layout().get(b).unwrap();
        assert!((rotated.rotation.x - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_unknown_module() {
        let mut store = LayoutStore::new();
        let missing = ModuleId::new();
        assert_eq!(
            store.rotate_module(missing, Axis::Z, 10.0),
            Err(StoreError::ModuleNotFound(missing))
        );
    }

    #[test]
    fn test_rescale_recomputes_from_spec() {
        let mut store = LayoutStore::new();
        let id = store.add_module(ModuleType::LifeSupport).unwrap();

        store.rescale_module(id, 2.0).unwrap();
        let module = store.layout().get(id).unwrap();
        assert_eq!(module.cost, 1200.0);
        assert_eq!(module.mass, 96000.0);
        assert_eq!(module.volume, 640.0);

        store.rescale_module(id, 0.5).unwrap();
        let module = store.layout().get(id).unwrap();
        assert_eq!(module.cost, 18.75);
        assert_eq!(module.mass, 1500.0);
        assert_eq!(module.volume, 10.0);
    }

    #[test]
    fn test_rescale_collision_keeps_scale() {
        let mut store = LayoutStore::new();
        place(&mut store, ModuleType::Dormitory, 5.0);
        let id = store.add_module(ModuleType::Storage).unwrap();
        let before = store.clone();

        // (4*1.6 + 4)/2 = 5.2 > 5
        assert_eq!(store.rescale_module(id, 1.6), Err(StoreError::Collision));
        assert_eq!(store, before);

        // (4*1.4 + 4)/2 = 4.8 < 5
        store.rescale_module(id, 1.4).unwrap();
        assert_eq!(store.layout().get(id).unwrap().scale, 1.4);
    }

    #[test]
    fn test_rescale_rejects_non_positive() {
        let mut store = LayoutStore::new();
        let id = store.add_module(ModuleType::Storage).unwrap();
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                store.rescale_module(id, bad),
                Err(StoreError::InvalidValue(_))
            ));
        }
        assert_eq!(store.layout().get(id).unwrap().scale, 1.0);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut store = LayoutStore::new();
        let id = store.add_module(ModuleType::Airlock).unwrap();
        assert!(store.delete_module(id).is_some());
        assert_eq!(store.selection(), None);
        assert!(store.layout().is_empty());
    }

    #[test]
    fn test_delete_other_preserves_selection() {
        let mut store = LayoutStore::new();
        let other = place(&mut store, ModuleType::Airlock, 10.0);
        let selected = store.add_module(ModuleType::Greenhouse).unwrap();

        store.delete_module(other);
        assert_eq!(store.selection(), Some(selected));
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = LayoutStore::new();
        store.add_module(ModuleType::Airlock).unwrap();
        let before = store.clone();

        assert!(store.delete_module(ModuleId::new()).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut store = LayoutStore::new();
        let id = store.add_module(ModuleType::Airlock).unwrap();
        assert!(!store.select(Some(ModuleId::new())));
        assert_eq!(store.selection(), Some(id));
        assert!(store.select(None));
        assert_eq!(store.selection(), None);
        assert!(store.select(Some(id)));
        assert_eq!(store.selection(), Some(id));
    }

    #[test]
    fn test_replace_layout_clears_selection() {
        let mut store = LayoutStore::new();
        store.add_module(ModuleType::Airlock).unwrap();
        store.replace_layout(Layout::new());
        assert_eq!(store.selection(), None);
        assert!(store.layout().is_empty());
    }
}
