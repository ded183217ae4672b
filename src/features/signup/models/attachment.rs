use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::modules::storage::PreviewHandle;

/// The three fixed attachment positions requested by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentSlot {
    /// Front of the national identity document.
    IdFront,
    /// Back of the national identity document.
    IdBack,
    /// Facade photo of the dwelling to be connected.
    DwellingPhoto,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 3] = [
        AttachmentSlot::IdFront,
        AttachmentSlot::IdBack,
        AttachmentSlot::DwellingPhoto,
    ];

    /// Stable key used in the error map, next to the slot's picker.
    pub fn field_name(&self) -> &'static str {
        match self {
            AttachmentSlot::IdFront => "id_front",
            AttachmentSlot::IdBack => "id_back",
            AttachmentSlot::DwellingPhoto => "dwelling_photo",
        }
    }

    pub fn missing_message(&self) -> &'static str {
        match self {
            AttachmentSlot::IdFront => "Falta la foto del frente del DNI",
            AttachmentSlot::IdBack => "Falta la foto del reverso del DNI",
            AttachmentSlot::DwellingPhoto => "Falta la foto de la vivienda",
        }
    }
}

impl std::fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A user-selected file, kept in memory until the submission is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Canonical extension for the file's content type, falling back to the
    /// extension in the original filename.
    pub fn extension(&self) -> &str {
        match self.content_type.as_str() {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            _ => self.file_name.rsplit('.').next().unwrap_or("bin"),
        }
    }
}

/// A filled slot: the selected file plus the preview handle minted for it.
/// Owning the attachment is what authorizes revoking its preview.
#[derive(Debug)]
pub struct Attachment {
    pub file: UploadedFile,
    pub preview: PreviewHandle,
}

/// The three fixed slots of a form instance.
#[derive(Debug, Default)]
pub struct AttachmentSet {
    slots: BTreeMap<AttachmentSlot, Attachment>,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill `slot`, returning the displaced attachment (if any) so the
    /// caller can revoke its preview before dropping it.
    pub fn insert(&mut self, slot: AttachmentSlot, attachment: Attachment) -> Option<Attachment> {
        self.slots.insert(slot, attachment)
    }

    /// Take the attachment out of `slot`, transferring ownership of its
    /// preview handle to the caller.
    pub fn take(&mut self, slot: AttachmentSlot) -> Option<Attachment> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        self.slots.get(&slot)
    }

    pub fn is_filled(&self, slot: AttachmentSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Slots still waiting for a file, in form order.
    pub fn missing_slots(&self) -> Vec<AttachmentSlot> {
        AttachmentSlot::ALL
            .into_iter()
            .filter(|slot| !self.is_filled(*slot))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttachmentSlot, &Attachment)> + '_ {
        self.slots.iter().map(|(slot, attachment)| (*slot, attachment))
    }
}
