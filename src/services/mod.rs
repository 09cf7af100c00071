//! Service layer for business logic.
//!
//! The [`store`] owns the layout and enforces placement rules; the metric
//! modules derive figures from it; [`session`] wires both to persistence and
//! user-facing notices.

pub mod collision;
pub mod compliance;
pub mod logistics;
pub mod metrics;
pub mod notice;
pub mod save_slot;
pub mod scene;
pub mod session;
pub mod store;

// Re-export commonly used types and functions
pub use collision::{collides, Footprint, MODULE_EDGE_LENGTH};
pub use compliance::ComplianceReport;
pub use logistics::{LaunchVehicle, LogisticsEstimate};
pub use metrics::{MissionMetrics, MissionReport};
pub use notice::{NoticeBoard, NoticeTicket};
pub use save_slot::{LoadError, LoadOutcome, SaveError, SaveRecord, SaveSlot};
pub use scene::{scene_nodes, SceneNode};
pub use session::{Session, DEFAULT_NOTICE_DURATION};
pub use store::{LayoutStore, StoreError, StoreResult};
