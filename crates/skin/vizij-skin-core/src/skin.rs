//! Slot-keyed attachment registry.
//!
//! A [`Skin`] maps `(slot index, attachment name)` to a shared attachment
//! handle. Skins are populated once when an asset pack loads and are then
//! read by every skeleton instance using the pack, typically behind an
//! `Arc<Skin<A>>`. Mutation needs `&mut Skin`, so the "no writes while
//! readers are active" rule is enforced by the borrow checker; hot reload
//! must wrap the skin in a lock on the caller's side.
//!
//! Handles are `Arc<A>`. The registry stores and returns them but never
//! constructs, clones, or drops the attachment content itself.

use std::fmt;
use std::sync::Arc;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use log::{debug, warn};

use crate::config::SkinConfig;
use crate::error::SkinError;
use crate::ids::SlotIndex;
use crate::key::{AttachmentKey, AttachmentKeyRef};

/// Named bundle of attachments keyed by slot and attachment name.
#[derive(Debug)]
pub struct Skin<A> {
    name: String,
    config: SkinConfig,
    attachments: HashMap<AttachmentKey, Arc<A>>,
}

impl<A> Skin<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, SkinConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: SkinConfig) -> Self {
        Self {
            name: name.into(),
            attachments: HashMap::with_capacity(config.capacity),
            config,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn config(&self) -> &SkinConfig {
        &self.config
    }

    /// Adds an attachment for the slot and name. An existing entry for the
    /// same key is replaced.
    ///
    /// Rejects empty names, and slot indices beyond `SkinConfig::slot_count`
    /// when one is configured. The table is unchanged on error.
    pub fn add_attachment(
        &mut self,
        slot: SlotIndex,
        name: impl Into<String>,
        attachment: Arc<A>,
    ) -> Result<(), SkinError> {
        let name = name.into();
        self.validate(slot, &name)?;
        match self.attachments.entry(AttachmentKey::new(slot, name)) {
            Entry::Occupied(mut entry) => {
                debug!("skin '{}': replacing attachment {}", self.name, entry.key());
                entry.insert(attachment);
            }
            Entry::Vacant(entry) => {
                entry.insert(attachment);
            }
        }
        Ok(())
    }

    /// Copies every entry of `other` into this skin, replacing entries with
    /// the same key. Nothing is copied if any entry is rejected.
    pub fn add_skin(&mut self, other: &Skin<A>) -> Result<(), SkinError> {
        for key in other.attachments.keys() {
            self.validate(key.slot(), key.name())?;
        }
        for (key, attachment) in &other.attachments {
            self.attachments.insert(key.clone(), Arc::clone(attachment));
        }
        debug!(
            "skin '{}': merged {} attachments from '{}'",
            self.name,
            other.attachments.len(),
            other.name
        );
        Ok(())
    }

    /// Returns the attachment for the slot and name, or `None`.
    #[inline]
    pub fn get_attachment(&self, slot: SlotIndex, name: &str) -> Option<&Arc<A>> {
        self.attachments.get(&AttachmentKeyRef::new(slot, name))
    }

    #[inline]
    pub fn contains(&self, slot: SlotIndex, name: &str) -> bool {
        self.attachments
            .contains_key(&AttachmentKeyRef::new(slot, name))
    }

    /// Every name under which `attachment` (by identity, not value) is
    /// registered for `slot`, in ascending order.
    pub fn names_of(&self, slot: SlotIndex, attachment: &Arc<A>) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .attachments
            .iter()
            .filter(|(key, value)| key.slot() == slot && Arc::ptr_eq(value, attachment))
            .map(|(key, _)| key.name())
            .collect();
        names.sort_unstable();
        names
    }

    /// Smallest name under which `attachment` is registered for `slot`.
    pub fn name_of(&self, slot: SlotIndex, attachment: &Arc<A>) -> Option<&str> {
        self.names_of(slot, attachment).into_iter().next()
    }

    /// Appends the names registered for `slot` to `names`. Existing contents are kept.
    pub fn find_names_for_slot(&self, slot: SlotIndex, names: &mut Vec<String>) {
        names.extend(
            self.slot_entries(slot)
                .into_iter()
                .map(|(key, _)| key.name().to_owned()),
        );
    }

    /// Appends the attachments registered for `slot` to `attachments`. Existing contents are kept.
    pub fn find_attachments_for_slot(&self, slot: SlotIndex, attachments: &mut Vec<Arc<A>>) {
        attachments.extend(
            self.slot_entries(slot)
                .into_iter()
                .map(|(_, attachment)| Arc::clone(attachment)),
        );
    }

    /// Lazily yields the entries for `slot` in table order.
    pub fn attachments_for_slot(&self, slot: SlotIndex) -> impl Iterator<Item = (&str, &Arc<A>)> {
        self.attachments
            .iter()
            .filter(move |(key, _)| key.slot() == slot)
            .map(|(key, attachment)| (key.name(), attachment))
    }

    /// Read view of the whole table.
    #[inline]
    pub fn attachments(&self) -> &HashMap<AttachmentKey, Arc<A>> {
        &self.attachments
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttachmentKey, &Arc<A>)> {
        self.attachments.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    fn slot_entries(&self, slot: SlotIndex) -> Vec<(&AttachmentKey, &Arc<A>)> {
        let mut entries: Vec<_> = self
            .attachments
            .iter()
            .filter(|(key, _)| key.slot() == slot)
            .collect();
        if self.config.sort_slot_queries {
            entries.sort_unstable_by(|a, b| a.0.name().cmp(b.0.name()));
        }
        entries
    }

    fn validate(&self, slot: SlotIndex, name: &str) -> Result<(), SkinError> {
        let result = if name.is_empty() {
            Err(SkinError::EmptyName {
                skin: self.name.clone(),
                slot,
            })
        } else {
            match self.config.slot_count {
                Some(slot_count) if slot.index() >= slot_count => Err(SkinError::SlotOutOfRange {
                    skin: self.name.clone(),
                    slot,
                    slot_count,
                }),
                _ => Ok(()),
            }
        };
        if let Err(err) = &result {
            warn!("rejected attachment: {err}");
        }
        result
    }
}

impl<'a, A> IntoIterator for &'a Skin<A> {
    type Item = (&'a AttachmentKey, &'a Arc<A>);
    type IntoIter = hashbrown::hash_map::Iter<'a, AttachmentKey, Arc<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.attachments.iter()
    }
}

impl<A> fmt::Display for Skin<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
