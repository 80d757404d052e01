//! Vizij Skin Core (engine-agnostic)
//!
//! Slot-keyed attachment registry for skeletal rigs. A [`Skin`] binds
//! `(slot, name)` pairs to shared attachment handles; [`Skin::attach_all`]
//! swaps a rig's visible attachments when its active skin changes.
//! Attachment content, asset loading, and rendering live in the adapters.
#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod ids;
pub mod key;
pub mod rig;
pub mod skin;
pub mod transition;

// Re-exports for consumers (adapters)
pub use config::SkinConfig;
pub use error::SkinError;
pub use ids::SlotIndex;
pub use key::AttachmentKey;
pub use rig::{Rig, Slot, SlotState};
pub use skin::Skin;
pub use transition::attach_all;
