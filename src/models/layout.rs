//! The ordered collection of placed modules.

use crate::models::{Module, ModuleId};
use crate::services::collision::{collides, Footprint};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Why an id or id prefix did not resolve to exactly one module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Blank input.
    #[error("Module id cannot be empty")]
    Empty,
    /// No placed module's id starts with the input.
    #[error("No module matches id '{0}'")]
    NotFound(String),
    /// More than one placed module's id starts with the input.
    #[error("Module id '{id}' is ambiguous ({matches} matches)")]
    Ambiguous {
        /// The input as given
        id: String,
        /// Number of modules it matched
        matches: usize,
    },
}

/// All placed modules in insertion order.
///
/// # Invariant
///
/// No two modules' bounding boxes overlap (see [`crate::services::collision`]).
/// The `Layout` itself does not enforce this on raw `push`; the
/// [`LayoutStore`](crate::services::LayoutStore) is the only mutator that
/// callers should use and it rejects any edit that would break it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    modules: Vec<Module>,
}

impl Layout {
    /// Creates an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Builds a layout verbatim from a list of modules (no validation).
    #[must_use]
    pub fn from_modules(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// Modules in insertion order.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Consumes the layout, returning its modules.
    #[must_use]
    pub fn into_modules(self) -> Vec<Module> {
        self.modules
    }

    /// Number of placed modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Looks up a module by id.
    #[must_use]
    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// True when a module with this id is placed.
    #[must_use]
    pub fn contains(&self, id: ModuleId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn get_mut(&mut self, id: ModuleId) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.id == id)
    }

    pub(crate) fn push(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub(crate) fn remove(&mut self, id: ModuleId) -> Option<Module> {
        let index = self.modules.iter().position(|m| m.id == id)?;
        Some(self.modules.remove(index))
    }

    /// True when `candidate` overlaps any module other than `exclude`.
    #[must_use]
    pub fn collides_with_any(&self, candidate: &Footprint, exclude: Option<ModuleId>) -> bool {
        self.others(exclude)
            .any(|m| collides(candidate, &Footprint::from(m)))
    }

    /// Every module (other than `exclude`) that `candidate` overlaps.
    ///
    /// Mutations only report that a collision happened; this re-runs the
    /// predicate for callers that want to name the conflicting modules.
    #[must_use]
    pub fn colliding_with(&self, candidate: &Footprint, exclude: Option<ModuleId>) -> Vec<&Module> {
        self.others(exclude)
            .filter(|m| collides(candidate, &Footprint::from(*m)))
            .collect()
    }

    /// All overlapping pairs, by id, in insertion order.
    ///
    /// Always empty for a layout built only through the store; used to audit
    /// layouts loaded from disk.
    #[must_use]
    pub fn overlapping_pairs(&self) -> Vec<(ModuleId, ModuleId)> {
        let mut pairs = Vec::new();
        for (i, a) in self.modules.iter().enumerate() {
            for b in &self.modules[i + 1..] {
                if collides(&Footprint::from(a), &Footprint::from(b)) {
                    pairs.push((a.id, b.id));
                }
            }
        }
        pairs
    }

    /// Ids that appear more than once, each reported once in first-seen order.
    ///
    /// Always empty for a layout built through the store.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<ModuleId> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for module in &self.modules {
            if !seen.insert(module.id) && !duplicates.contains(&module.id) {
                duplicates.push(module.id);
            }
        }
        duplicates
    }

    /// Resolves a full id or a unique id prefix to a placed module's id.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the input is blank, nothing matches or the
    /// prefix is ambiguous.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<ModuleId, ResolveError> {
        let needle = id_or_prefix.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(ResolveError::Empty);
        }

        let matches: Vec<ModuleId> = self
            .modules
            .iter()
            .map(|m| m.id)
            .filter(|id| id.to_string().starts_with(&needle))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(ResolveError::NotFound(id_or_prefix.to_string())),
            _ => Err(ResolveError::Ambiguous {
                id: id_or_prefix.to_string(),
                matches: matches.len(),
            }),
        }
    }

    fn others(&self, exclude: Option<ModuleId>) -> impl Iterator<Item = &Module> {
        self.modules
            .iter()
            .filter(move |m| Some(m.id) != exclude)
    }
}
