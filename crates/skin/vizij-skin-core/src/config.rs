//! Skin configuration.

use serde::{Deserialize, Serialize};

/// Construction-time options for a [`crate::Skin`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinConfig {
    /// Number of slots in the rig this skin targets. When set, inserts with a
    /// slot index at or beyond it are rejected.
    pub slot_count: Option<usize>,

    /// Initial capacity hint for the attachment table.
    pub capacity: usize,

    /// Append per-slot query results in ascending name order instead of table order.
    pub sort_slot_queries: bool,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            slot_count: None,
            capacity: 0,
            sort_slot_queries: true,
        }
    }
}

impl SkinConfig {
    /// Config that validates slot indices against a rig with `slot_count` slots.
    pub fn for_rig(slot_count: usize) -> Self {
        Self {
            slot_count: Some(slot_count),
            capacity: slot_count,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SkinConfig = serde_json::from_str(r#"{ "slot_count": 12 }"#).unwrap();
        assert_eq!(cfg.slot_count, Some(12));
        assert_eq!(cfg.capacity, 0);
        assert!(cfg.sort_slot_queries);
    }

    #[test]
    fn for_rig_sizes_table() {
        let cfg = SkinConfig::for_rig(8);
        assert_eq!(cfg.slot_count, Some(8));
        assert_eq!(cfg.capacity, 8);
    }
}
