//! Composite (slot, name) key for the attachment table.
//!
//! The owned [`AttachmentKey`] lives in the table. Lookups go through
//! `AttachmentKeyRef`, which hashes identically and is [`Equivalent`] to the
//! owned key, so `get` on a hot path never allocates a `String`.

use std::fmt;

use hashbrown::Equivalent;
use serde::{Deserialize, Serialize};

use crate::ids::SlotIndex;

/// Key of one skin entry. Both fields feed the table's hasher in order.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AttachmentKey {
    slot: SlotIndex,
    name: String,
}

impl AttachmentKey {
    pub fn new(slot: SlotIndex, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
        }
    }

    #[inline]
    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AttachmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slot, self.name)
    }
}

/// Borrowed lookup form of [`AttachmentKey`].
/// Field order and types must stay in step with the owned key so the derived hashes agree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct AttachmentKeyRef<'a> {
    pub slot: SlotIndex,
    pub name: &'a str,
}

impl<'a> AttachmentKeyRef<'a> {
    #[inline]
    pub fn new(slot: SlotIndex, name: &'a str) -> Self {
        Self { slot, name }
    }
}

impl Equivalent<AttachmentKey> for AttachmentKeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &AttachmentKey) -> bool {
        self.slot == key.slot && self.name == key.name
    }
}
