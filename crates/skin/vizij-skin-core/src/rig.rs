//! Rig slot-state contract and a reference slot list.
//!
//! The skin transition reads and writes per-slot state through
//! [`SlotState`]. Hosts (Bevy/WASM adapters, custom skeletons) implement it
//! over their own slot storage; [`Rig`] is the engine-agnostic default.

use std::sync::Arc;

use log::debug;

use crate::ids::SlotIndex;
use crate::skin::Skin;

/// Per-slot attachment state of one skeleton instance.
pub trait SlotState<A> {
    fn slot_count(&self) -> usize;

    /// Attachment currently shown in `slot`.
    fn attachment(&self, slot: SlotIndex) -> Option<&Arc<A>>;

    /// Show `attachment` in `slot`, recording that it was registered under `name`.
    fn set_attachment(&mut self, slot: SlotIndex, name: &str, attachment: Arc<A>);

    /// Names the current attachment of `slot` is registered under in `skin`,
    /// in ascending order. Empty when the slot shows nothing from `skin`.
    ///
    /// The default recovers them from the skin by handle identity.
    fn attachment_names<'a>(&'a self, slot: SlotIndex, skin: &'a Skin<A>) -> Vec<&'a str> {
        match self.attachment(slot) {
            Some(current) => skin.names_of(slot, current),
            None => Vec::new(),
        }
    }
}

/// One attachment point on a rig.
#[derive(Debug)]
pub struct Slot<A> {
    name: String,
    attachment: Option<Arc<A>>,
    attachment_name: Option<String>,
}

impl<A> Slot<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attachment: None,
            attachment_name: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attachment(&self) -> Option<&Arc<A>> {
        self.attachment.as_ref()
    }

    /// Name the current attachment was applied under.
    #[inline]
    pub fn attachment_name(&self) -> Option<&str> {
        self.attachment_name.as_deref()
    }

    fn set(&mut self, name: &str, attachment: Arc<A>) {
        self.attachment = Some(attachment);
        if self.attachment_name.as_deref() != Some(name) {
            self.attachment_name = Some(name.to_owned());
        }
    }

    fn clear(&mut self) {
        self.attachment = None;
        self.attachment_name = None;
    }
}

/// Ordered slot list of a skeleton instance.
#[derive(Debug)]
pub struct Rig<A> {
    slots: Vec<Slot<A>>,
}

impl<A> Default for Rig<A> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<A> Rig<A> {
    /// Builds a rig with one empty slot per name, in order.
    pub fn new<I, S>(slot_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slot_names.into_iter().map(Slot::new).collect(),
        }
    }

    #[inline]
    pub fn slots(&self) -> &[Slot<A>] {
        &self.slots
    }

    #[inline]
    pub fn slot(&self, slot: SlotIndex) -> Option<&Slot<A>> {
        self.slots.get(slot.index())
    }

    pub fn find_slot_index(&self, name: &str) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|s| s.name == name)
            .and_then(|i| u32::try_from(i).ok())
            .map(SlotIndex)
    }

    /// Looks up `(slot, name)` in `skin` and shows it. Returns `false`, leaving
    /// the slot untouched, when the skin has no such entry or the slot does not exist.
    pub fn attach_from_skin(&mut self, slot: SlotIndex, name: &str, skin: &Skin<A>) -> bool {
        let Some(target) = self.slots.get_mut(slot.index()) else {
            return false;
        };
        match skin.get_attachment(slot, name) {
            Some(attachment) => {
                target.set(name, Arc::clone(attachment));
                true
            }
            None => false,
        }
    }

    pub fn clear_attachment(&mut self, slot: SlotIndex) {
        if let Some(target) = self.slots.get_mut(slot.index()) {
            target.clear();
        }
    }
}

impl<A> SlotState<A> for Rig<A> {
    #[inline]
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn attachment(&self, slot: SlotIndex) -> Option<&Arc<A>> {
        self.slots.get(slot.index())?.attachment()
    }

    fn set_attachment(&mut self, slot: SlotIndex, name: &str, attachment: Arc<A>) {
        match self.slots.get_mut(slot.index()) {
            Some(target) => target.set(name, attachment),
            None => debug!("rig: ignoring attachment '{name}' for missing slot {slot}"),
        }
    }
}
