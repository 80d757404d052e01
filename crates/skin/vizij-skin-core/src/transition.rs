//! Skin transitions.
//!
//! When a rig's active skin changes, every slot showing an attachment from
//! the old skin is switched to the same-named attachment of the new skin.
//! Slots without a same-named counterpart keep what they show; clearing them
//! is the caller's decision.

use std::sync::Arc;

use log::{debug, trace};

use crate::ids::SlotIndex;
use crate::rig::SlotState;
use crate::skin::Skin;

impl<A> Skin<A> {
    /// Attaches every attachment from this skin whose name matches the
    /// attachment `old_skin` currently has shown in the same slot.
    ///
    /// When the shown handle is registered under several names in
    /// `old_skin`, the smallest name with a counterpart in this skin wins.
    ///
    /// Returns the number of slots written.
    pub fn attach_all<R>(&self, old_skin: &Skin<A>, rig: &mut R) -> usize
    where
        R: SlotState<A> + ?Sized,
    {
        let mut swapped = 0;
        for index in 0..rig.slot_count() {
            let Ok(raw) = u32::try_from(index) else {
                break;
            };
            let slot = SlotIndex(raw);
            let Some((name, replacement)) = rig
                .attachment_names(slot, old_skin)
                .into_iter()
                .find_map(|name| self.get_attachment(slot, name).map(|found| (name, found)))
            else {
                continue;
            };
            let replacement = Arc::clone(replacement);
            let name = name.to_owned();
            trace!("skin '{}': slot {slot} -> '{name}'", self.name());
            rig.set_attachment(slot, &name, replacement);
            swapped += 1;
        }
        debug!(
            "skin transition '{}' -> '{}': {swapped} of {} slots swapped",
            old_skin.name(),
            self.name(),
            rig.slot_count()
        );
        swapped
    }
}

/// Free-function form of [`Skin::attach_all`].
#[inline]
pub fn attach_all<A, R>(new_skin: &Skin<A>, old_skin: &Skin<A>, rig: &mut R) -> usize
where
    R: SlotState<A> + ?Sized,
{
    new_skin.attach_all(old_skin, rig)
}
