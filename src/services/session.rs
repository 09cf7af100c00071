//! Editing session: store, notice board and save slot wired together.
//!
//! A [`Session`] is what a front end drives. Store errors are returned to the
//! caller and also posted to the notice board, so a UI only has to poll
//! [`Session::notice`] to show the transient message.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::models::{Axis, Layout, ModuleId, ModuleType};
use crate::services::metrics::MissionReport;
use crate::services::notice::NoticeBoard;
use crate::services::save_slot::{LoadError, LoadOutcome, SaveError, SaveRecord, SaveSlot};
use crate::services::scene::{scene_nodes, SceneNode};
use crate::services::store::{LayoutStore, StoreError, StoreResult};

/// Default notice display time.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// One editing session over one save slot.
#[derive(Debug)]
pub struct Session {
    store: LayoutStore,
    notices: NoticeBoard,
    slot: SaveSlot,
    notice_duration: Duration,
}

impl Session {
    /// Starts with an empty layout.
    #[must_use]
    pub fn new(slot: SaveSlot, notice_duration: Duration) -> Self {
        Self {
            store: LayoutStore::new(),
            notices: NoticeBoard::new(),
            slot,
            notice_duration,
        }
    }

    /// Starts from whatever the slot holds, or an empty layout if nothing
    /// was saved.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the slot exists but cannot be loaded.
    pub fn open(slot: SaveSlot, notice_duration: Duration) -> Result<Self, LoadError> {
        let mut session = Self::new(slot, notice_duration);
        session.load()?;
        Ok(session)
    }

    /// The layout store.
    #[must_use]
    pub const fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// Current layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        self.store.layout()
    }

    /// The save slot this session reads and writes.
    #[must_use]
    pub const fn slot(&self) -> &SaveSlot {
        &self.slot
    }

    /// Derived figures for the current layout.
    #[must_use]
    pub fn report(&self) -> MissionReport {
        MissionReport::from_layout(self.store.layout())
    }

    /// Render nodes for the current layout and selection.
    #[must_use]
    pub fn scene(&self) -> Vec<SceneNode> {
        scene_nodes(&self.store)
    }

    /// Notice visible right now.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice_at(Instant::now())
    }

    /// Notice visible at `now`.
    #[must_use]
    pub fn notice_at(&self, now: Instant) -> Option<&str> {
        self.notices.current(now)
    }

    /// Drops an expired notice; call from the UI tick.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        self.notices.expire(now)
    }

    /// See [`LayoutStore::select`].
    pub fn select(&mut self, id: Option<ModuleId>) -> bool {
        self.store.select(id)
    }

    /// See [`LayoutStore::add_module`].
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`], after posting it as a notice.
    pub fn add_module(&mut self, module_type: ModuleType) -> StoreResult<ModuleId> {
        let result = self.store.add_module(module_type);
        self.surface(result)
    }

    /// See [`LayoutStore::delete_module`]. Returns whether a module was removed.
    pub fn delete_module(&mut self, id: ModuleId) -> bool {
        self.store.delete_module(id).is_some()
    }

    /// See [`LayoutStore::reposition_module`].
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`], after posting it as a notice.
    pub fn reposition_module(&mut self, id: ModuleId, axis: Axis, value: f64) -> StoreResult<()> {
        let result = self.store.reposition_module(id, axis, value);
        self.surface(result)
    }

    /// See [`LayoutStore::rotate_module`].
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`], after posting it as a notice.
    pub fn rotate_module(&mut self, id: ModuleId, axis: Axis, degrees: f64) -> StoreResult<()> {
        let result = self.store.rotate_module(id, axis, degrees);
        self.surface(result)
    }

    /// See [`LayoutStore::rescale_module`].
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`], after posting it as a notice.
    pub fn rescale_module(&mut self, id: ModuleId, scale: f64) -> StoreResult<()> {
        let result = self.store.rescale_module(id, scale);
        self.surface(result)
    }

    /// Writes the layout to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the slot cannot be written.
    pub fn save(&mut self) -> Result<SaveRecord, SaveError> {
        self.slot.save(self.store.layout()).inspect_err(|err| {
            self.notices
                .post(err.to_string(), Instant::now(), self.notice_duration);
        })
    }

    /// Replaces the layout with the slot's record and clears the selection.
    ///
    /// Returns the record's timestamp, or `None` when the slot is empty (the
    /// layout is then left as it was). Records with overlapping modules or
    /// repeated ids are accepted verbatim and logged.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] without touching the layout.
    pub fn load(&mut self) -> Result<Option<DateTime<Utc>>, LoadError> {
        let record = match self.slot.load() {
            Ok(LoadOutcome::Loaded(record)) => record,
            Ok(LoadOutcome::Empty) => return Ok(None),
            Err(err) => {
                self.notices
                    .post(err.to_string(), Instant::now(), self.notice_duration);
                return Err(err);
            }
        };

        let timestamp = record.timestamp;
        let layout = record.into_layout();
        for id in layout.duplicate_ids() {
            warn!(%id, "loaded layout repeats a module id");
        }
        for (a, b) in layout.overlapping_pairs() {
            warn!(%a, %b, "loaded layout contains overlapping modules");
        }
        info!(modules = layout.len(), %timestamp, "layout loaded");
        self.store.replace_layout(layout);
        Ok(Some(timestamp))
    }

    fn surface<T>(&mut self, result: StoreResult<T>) -> StoreResult<T> {
        if let Err(err) = &result {
            self.post_error(err, Instant::now());
        }
        result
    }

    fn post_error(&mut self, err: &StoreError, now: Instant) {
        self.notices.post(err.to_string(), now, self.notice_duration);
    }
}
