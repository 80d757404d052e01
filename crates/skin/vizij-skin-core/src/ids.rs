//! Identifiers for rig entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a slot in a rig's slot list.
/// Dense and zero-based; validity against a particular rig is the caller's contract.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct SlotIndex(pub u32);

impl SlotIndex {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for SlotIndex {
    #[inline]
    fn from(value: u32) -> Self {
        SlotIndex(value)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
