#[cfg(test)]
use fake::faker::address::en::{CityName, StreetName};
#[cfg(test)]
use fake::faker::internet::en::SafeEmail;
#[cfg(test)]
use fake::faker::phone_number::en::PhoneNumber;
#[cfg(test)]
use fake::Fake;

#[cfg(test)]
use crate::features::signup::models::{
    Attachment, AttachmentSet, AttachmentSlot, PaymentMethod, Plan, SignupSubmission, UploadedFile,
};
#[cfg(test)]
use crate::features::signup::services::{FormEvent, SignupForm};
#[cfg(test)]
use crate::modules::storage::PreviewStore;

#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A submission that passes every field rule.
#[cfg(test)]
pub fn filled_submission() -> SignupSubmission {
    SignupSubmission {
        plan: Some(Plan::Mega50),
        address: format!("{} {}", StreetName().fake::<String>(), (100u16..2000).fake::<u16>()),
        neighborhood: "Centro".to_string(),
        locality: CityName().fake::<String>(),
        map_link: "https://maps.google.com/?q=-34.60372,-58.38159".to_string(),
        email: SafeEmail().fake::<String>(),
        phone: PhoneNumber().fake::<String>(),
        wifi_password: "MiClave2025ABC".to_string(),
        additional_tv_count: 1,
        payment_method: PaymentMethod::Manual,
        ..Default::default()
    }
}

/// A small in-memory photo; content type follows the file extension.
#[cfg(test)]
pub fn sample_photo(file_name: &str) -> UploadedFile {
    if file_name.ends_with(".png") {
        UploadedFile::new(file_name, "image/png", vec![0x89, 0x50, 0x4e, 0x47])
    } else {
        UploadedFile::new(file_name, "image/jpeg", vec![0xff, 0xd8, 0xff, 0xe0])
    }
}

/// All three slots filled, with previews minted from `previews`.
#[cfg(test)]
pub fn filled_attachments(previews: &mut PreviewStore) -> AttachmentSet {
    let mut attachments = AttachmentSet::new();
    for (slot, file_name) in [
        (AttachmentSlot::IdFront, "dni-frente.jpg"),
        (AttachmentSlot::IdBack, "dni-reverso.jpg"),
        (AttachmentSlot::DwellingPhoto, "fachada.png"),
    ] {
        let file = sample_photo(file_name);
        let preview = previews.create(&file);
        attachments.insert(slot, Attachment { file, preview });
    }
    attachments
}

/// Drive a form to a submittable state through its public event surface.
#[cfg(test)]
pub fn fill_valid_form(form: &mut SignupForm) {
    let submission = filled_submission();
    form.apply(FormEvent::PlanSelected(Plan::Mega50));
    form.apply(FormEvent::AddressChanged(submission.address));
    form.apply(FormEvent::NeighborhoodChanged(submission.neighborhood));
    form.apply(FormEvent::LocalityChanged(submission.locality));
    form.apply(FormEvent::MapLinkChanged(submission.map_link));
    form.apply(FormEvent::EmailChanged(submission.email));
    form.apply(FormEvent::PhoneChanged(submission.phone));
    form.apply(FormEvent::WifiPasswordChanged(submission.wifi_password));
    form.apply(FormEvent::AdditionalTvCountChanged(1));

    for (slot, file_name) in [
        (AttachmentSlot::IdFront, "dni-frente.jpg"),
        (AttachmentSlot::IdBack, "dni-reverso.jpg"),
        (AttachmentSlot::DwellingPhoto, "fachada.png"),
    ] {
        form.attach(slot, sample_photo(file_name))
            .expect("sample photo is within the allowed type and size");
    }
}
