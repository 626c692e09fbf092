pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod particles;
pub mod state;
pub mod switch;
pub mod viewport;

pub use action::BentoAction;
pub use catalog::{GridCell, GridPlacement, GridVariant, ImageKey, ALL_IMAGES};
pub use config::{BentoConfig, ConfigLayer};
pub use error::BentoError;
pub use frame::{CellFrame, FrameLayout, GridFrame, FOCUSED_SCALE, FOCUSED_Z_INDEX};
pub use grid::{compute_weights, track_weight, GridRect, LayoutWeights};
pub use particles::{ParticleBurst, ParticleFrame};
pub use state::{BentoState, FocusState};
pub use switch::{SwitchDrag, SwitchRelease};
pub use viewport::{is_mobile_width, ViewportMode, MOBILE_BREAKPOINT_PX};
