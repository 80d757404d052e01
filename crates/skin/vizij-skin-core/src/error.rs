//! Error types for skin registry operations.
//!
//! Lookup misses are not errors; they surface as `None`. Only caller contract
//! violations that are cheap to detect end up here.

use serde::{Deserialize, Serialize};

use crate::ids::SlotIndex;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkinError {
    /// Attachment names are lookup keys and must not be empty.
    #[error("Empty attachment name for slot {slot} in skin '{skin}'")]
    EmptyName { skin: String, slot: SlotIndex },

    /// Slot index beyond the rig the skin was configured for.
    #[error("Slot {slot} is out of range for skin '{skin}' (slot count: {slot_count})")]
    SlotOutOfRange {
        skin: String,
        slot: SlotIndex,
        slot_count: usize,
    },
}

impl SkinError {
    /// Slot the rejected operation targeted.
    #[inline]
    pub fn slot(&self) -> SlotIndex {
        match self {
            Self::EmptyName { slot, .. } | Self::SlotOutOfRange { slot, .. } => *slot,
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "key",
            Self::SlotOutOfRange { .. } => "range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_skin_and_slot() {
        let err = SkinError::SlotOutOfRange {
            skin: "goblin".into(),
            slot: SlotIndex(9),
            slot_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "Slot 9 is out of range for skin 'goblin' (slot count: 4)"
        );
        assert_eq!(err.slot(), SlotIndex(9));
        assert_eq!(err.category(), "range");
    }

    #[test]
    fn serde_roundtrip_keeps_fields() {
        let err = SkinError::EmptyName {
            skin: "goblin".into(),
            slot: SlotIndex(2),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: SkinError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn empty_name_category() {
        let err = SkinError::EmptyName {
            skin: "goblin".into(),
            slot: SlotIndex(0),
        };
        assert_eq!(err.category(), "key");
    }
}
